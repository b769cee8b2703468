//! Default editor values derived from type descriptors.

use serde_json::{json, Map, Value};

use crate::domain::{FunctionDescriptor, TypeDescriptor, TypeKind};

/// Build a placeholder value with the shape of `typ`.
///
/// Never fails: variants and unknown tags become `null` so a newer platform
/// type does not break the editor.
pub fn generate_skeleton(typ: &TypeDescriptor) -> Value {
    match &typ.kind {
        TypeKind::Str | TypeKind::Chr | TypeKind::Enum => Value::String(String::new()),
        TypeKind::Bool => Value::Bool(false),
        TypeKind::F64
        | TypeKind::F32
        | TypeKind::U64
        | TypeKind::S64
        | TypeKind::U32
        | TypeKind::S32
        | TypeKind::I32
        | TypeKind::U16
        | TypeKind::S16
        | TypeKind::U8
        | TypeKind::S8 => json!(0),
        TypeKind::Record(fields) => {
            let mut obj = Map::new();
            for field in fields {
                obj.insert(field.name.clone(), generate_skeleton(&field.typ));
            }
            Value::Object(obj)
        }
        TypeKind::Tuple(fields) => {
            Value::Array(fields.iter().map(|f| generate_skeleton(&f.typ)).collect())
        }
        TypeKind::List => Value::Array(vec![]),
        TypeKind::Option => Value::Null,
        TypeKind::Variant(_) | TypeKind::Other(_) => Value::Null,
    }
}

/// One skeleton per parameter, in argument order.
pub fn function_skeleton(function: &FunctionDescriptor) -> Vec<Value> {
    function
        .parameters
        .iter()
        .map(|param| generate_skeleton(&param.typ))
        .collect()
}

/// Initial editor text for a function: its argument skeletons, pretty-printed.
pub fn editor_buffer(function: &FunctionDescriptor) -> String {
    let args = Value::Array(function_skeleton(function));
    // Serializing a `Value` cannot fail.
    serde_json::to_string_pretty(&args).unwrap_or_else(|_| "[]".to_string())
}
