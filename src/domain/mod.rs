use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub mod types;

pub use types::{DescriptorError, TypeDescriptor, TypeKind};

/// Named slot in a record, tuple, variant or function signature.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub typ: TypeDescriptor,
}

impl Field {
    pub fn new(name: impl Into<String>, typ: impl Into<TypeDescriptor>) -> Self {
        Self {
            name: name.into(),
            typ: typ.into(),
        }
    }
}

/// Function arguments and results share the field shape; order is significant.
pub type Parameter = Field;

/// A function signature from a component's exported interface.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDescriptor {
    pub name: String,
    /// Name of the export this function belongs to; filled in when the
    /// function is looked up or flattened out of its export.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_name: Option<String>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub results: Vec<Parameter>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ComponentExport {
    pub name: String,
    #[serde(default)]
    pub functions: Vec<FunctionDescriptor>,
}

/// Component metadata as returned by the platform's component endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMetadata {
    pub component_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
    #[serde(default)]
    pub exports: Vec<ComponentExport>,
}

impl ComponentMetadata {
    /// Find a function by export and function name.
    pub fn find_function(
        &self,
        export_name: &str,
        function_name: &str,
    ) -> Result<FunctionDescriptor, LookupError> {
        let export = self
            .exports
            .iter()
            .find(|e| e.name == export_name)
            .ok_or_else(|| LookupError::ExportNotFound {
                component_id: self.component_id.clone(),
                export_name: export_name.to_string(),
            })?;

        let function = export
            .functions
            .iter()
            .find(|f| f.name == function_name)
            .ok_or_else(|| LookupError::FunctionNotFound {
                export_name: export_name.to_string(),
                function_name: function_name.to_string(),
            })?;

        let mut function = function.clone();
        function.export_name = Some(export.name.clone());
        Ok(function)
    }

    /// All exported functions in declaration order, each tagged with its export name.
    pub fn exported_functions(&self) -> Vec<FunctionDescriptor> {
        self.exports
            .iter()
            .flat_map(|export| {
                export.functions.iter().map(move |function| FunctionDescriptor {
                    export_name: Some(export.name.clone()),
                    ..function.clone()
                })
            })
            .collect()
    }

    /// Case-insensitive substring search over function and export names.
    pub fn search(&self, query: &str) -> Vec<FunctionDescriptor> {
        let needle = query.trim().to_lowercase();
        self.exported_functions()
            .into_iter()
            .filter(|function| {
                needle.is_empty()
                    || function.name.to_lowercase().contains(&needle)
                    || function
                        .export_name
                        .as_deref()
                        .map(|e| e.to_lowercase().contains(&needle))
                        .unwrap_or(false)
            })
            .collect()
    }
}

/// One encoded argument: the user's value together with its full descriptor.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TypedValue {
    pub value: Value,
    pub typ: TypeDescriptor,
}

/// Body of a function invocation request.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct EncodedPayload {
    pub params: Vec<TypedValue>,
}

/// Errors raised when resolving a function from component metadata.
#[derive(Debug, Error, PartialEq)]
pub enum LookupError {
    #[error("Component not found: '{0}'")]
    ComponentNotFound(String),

    #[error("Export not found: '{export_name}' in component '{component_id}'")]
    ExportNotFound {
        component_id: String,
        export_name: String,
    },

    #[error("Function not found: '{function_name}' in export '{export_name}'")]
    FunctionNotFound {
        export_name: String,
        function_name: String,
    },
}
