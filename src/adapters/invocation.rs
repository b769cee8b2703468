//! Pieces of an invocation request and response that live outside the codec:
//! the function reference, the result text and failure descriptions.

use serde::Serialize;
use serde_json::Value;

use crate::domain::EncodedPayload;

/// Function reference used by the invocation endpoint: `export.{function}`,
/// each segment percent-encoded. Only ASCII alphanumerics and `-_.~` are
/// left as is, so `!'()*` are escaped too.
pub fn invocation_target(export_name: &str, function_name: &str) -> String {
    format!(
        "{}.{}",
        urlencoding::encode(export_name),
        urlencoding::encode(&format!("{{{}}}", function_name))
    )
}

/// Everything needed to submit an invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparedInvocation {
    pub function: String,
    pub payload: EncodedPayload,
}

/// Pretty-printed `result.value` of a successful invocation response.
pub fn result_text(response: &Value) -> String {
    match response.get("result").and_then(|result| result.get("value")) {
        Some(value) => serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()),
        None => Value::Null.to_string(),
    }
}

/// One-line description of a failed platform request.
///
/// Prefers the `error` message, then the `errors` list joined with `", "`.
pub fn describe_failure(body: &Value) -> String {
    if let Some(error) = body.get("error").and_then(|e| e.as_str()) {
        return error.to_string();
    }
    if let Some(errors) = body.get("errors").and_then(|e| e.as_array()) {
        return errors
            .iter()
            .map(|e| match e {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", ");
    }
    match body {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
