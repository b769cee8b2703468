//! Editor values to invocation payload.
//!
//! Encoding is shallow: only each parameter's top-level tag is inspected.
//! Nested record/tuple/list contents are passed through as given.

use serde_json::Value;
use tracing::debug;

use super::error::CodecError;
use crate::domain::{EncodedPayload, FunctionDescriptor, TypeDescriptor, TypeKind, TypedValue};

/// Encode positional `values` against the function's parameters.
///
/// Values beyond the parameter count are ignored.
pub fn encode_payload(
    values: &[Value],
    function: &FunctionDescriptor,
) -> Result<EncodedPayload, CodecError> {
    let mut params = Vec::with_capacity(function.parameters.len());

    for (index, param) in function.parameters.iter().enumerate() {
        let value = values.get(index).ok_or_else(|| CodecError::MissingArgument {
            index,
            name: param.name.clone(),
        })?;

        debug!(
            function = %function.name,
            parameter = %param.name,
            tag = param.typ.tag(),
            "encoding argument"
        );

        params.push(TypedValue {
            value: encode_value(value, &param.typ)?,
            typ: param.typ.clone(),
        });
    }

    Ok(EncodedPayload { params })
}

/// Encode a whole editor document.
///
/// An array is the positional argument list. Any other document is taken as
/// the sole argument of a single-parameter function.
pub fn encode_editor_value(
    input: &Value,
    function: &FunctionDescriptor,
) -> Result<EncodedPayload, CodecError> {
    match input {
        Value::Array(values) => encode_payload(values, function),
        other if function.parameters.len() == 1 => {
            encode_payload(std::slice::from_ref(other), function)
        }
        _ => Err(CodecError::NotAnArgumentList {
            expected: function.parameters.len(),
        }),
    }
}

fn encode_value(value: &Value, typ: &TypeDescriptor) -> Result<Value, CodecError> {
    match &typ.kind {
        TypeKind::Str
        | TypeKind::U32
        | TypeKind::F32
        | TypeKind::I32
        | TypeKind::Tuple(_)
        | TypeKind::Record(_) => Ok(value.clone()),
        TypeKind::List => match value {
            Value::Array(_) => Ok(value.clone()),
            other => Ok(Value::Array(vec![other.clone()])),
        },
        TypeKind::Chr
        | TypeKind::Bool
        | TypeKind::F64
        | TypeKind::U64
        | TypeKind::S64
        | TypeKind::S32
        | TypeKind::U16
        | TypeKind::S16
        | TypeKind::U8
        | TypeKind::S8
        | TypeKind::Option
        | TypeKind::Enum
        | TypeKind::Variant(_)
        | TypeKind::Other(_) => Err(CodecError::UnsupportedType(typ.tag().to_string())),
    }
}
