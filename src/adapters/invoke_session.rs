//! State of one "invoke function" view: the editable argument buffer, the last
//! result and the last error.

use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use super::invocation::{describe_failure, invocation_target, result_text, PreparedInvocation};
use super::reporter::{Notice, Reporter};
use crate::codec::{editor_buffer, encode_editor_value, safe_format_json, sanitize_input, CodecError};
use crate::config::EditorSettings;
use crate::domain::FunctionDescriptor;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SessionError {
    #[error("Invalid JSON data: {0}")]
    InvalidJson(String),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("Function '{0}' is not attached to an export")]
    MissingExport(String),

    #[error("{0}")]
    Rejected(String),
}

pub struct InvokeSession {
    function: FunctionDescriptor,
    settings: EditorSettings,
    reporter: Arc<dyn Reporter>,
    buffer: String,
    result: Option<String>,
    error: Option<SessionError>,
}

impl InvokeSession {
    pub fn new(
        function: FunctionDescriptor,
        settings: EditorSettings,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        let buffer = editor_buffer(&function);
        Self {
            function,
            settings,
            reporter,
            buffer,
            result: None,
            error: None,
        }
    }

    pub fn function(&self) -> &FunctionDescriptor {
        &self.function
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn error(&self) -> Option<&SessionError> {
        self.error.as_ref()
    }

    /// Replace the buffer with the user's text, reformatted when it parses.
    pub fn edit(&mut self, text: &str) {
        self.buffer = safe_format_json(text);
        self.result = None;
        self.error = None;
    }

    /// Turn the current buffer into an invocation request.
    pub fn prepare(&mut self) -> Result<PreparedInvocation, SessionError> {
        self.error = None;
        match self.build() {
            Ok(prepared) => Ok(prepared),
            Err(e) => {
                self.reporter
                    .report(&Notice::failure("Invalid invocation arguments.", e.to_string()));
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    fn build(&self) -> Result<PreparedInvocation, SessionError> {
        let export_name = self
            .function
            .export_name
            .as_deref()
            .ok_or_else(|| SessionError::MissingExport(self.function.name.clone()))?;

        let text = if self.settings.sanitize_quotes {
            sanitize_input(&self.buffer)
        } else {
            self.buffer.clone()
        };
        let document: Value =
            serde_json::from_str(&text).map_err(|e| SessionError::InvalidJson(e.to_string()))?;

        let payload = encode_editor_value(&document, &self.function)?;
        let function = invocation_target(export_name, &self.function.name);
        debug!(function = %function, params = payload.params.len(), "prepared invocation");

        Ok(PreparedInvocation { function, payload })
    }

    /// Record a successful platform response.
    pub fn accept_response(&mut self, response: &Value) {
        self.result = Some(result_text(response));
        self.error = None;
    }

    /// Record a failed platform response and notify the reporter.
    pub fn reject_response(&mut self, body: &Value) {
        let description = describe_failure(body);
        self.reporter
            .report(&Notice::failure("API request failed.", description.clone()));
        self.result = None;
        self.error = Some(SessionError::Rejected(description));
    }
}
