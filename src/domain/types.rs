//! Structural type descriptors as delivered by the platform's component metadata.
//!
//! A descriptor arrives as a JSON object with a `"type"` tag plus tag-specific
//! members (`fields` for records and tuples, `cases` for variants). The tag is
//! decoded into [`TypeKind`] so every consumer matches on one closed set instead
//! of comparing strings. Members the tag does not interpret are kept in
//! [`TypeDescriptor::extra`] and written back unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

use super::Field;

/// Shape of a single value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDescriptor", into = "RawDescriptor")]
pub struct TypeDescriptor {
    pub kind: TypeKind,
    /// Uninterpreted members (e.g. `inner` of a list, enum case names).
    pub extra: Map<String, Value>,
}

/// Decoded `"type"` tag together with the members that tag owns.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    Str,
    Chr,
    Bool,
    F64,
    F32,
    U64,
    S64,
    U32,
    S32,
    I32,
    U16,
    S16,
    U8,
    S8,
    Record(Vec<Field>),
    Tuple(Vec<Field>),
    List,
    Option,
    Enum,
    Variant(Vec<Field>),
    /// A tag this crate does not know about yet.
    Other(String),
}

impl TypeKind {
    /// The wire tag, as it appears in the `"type"` member.
    pub fn tag(&self) -> &str {
        match self {
            TypeKind::Str => "Str",
            TypeKind::Chr => "Chr",
            TypeKind::Bool => "Bool",
            TypeKind::F64 => "F64",
            TypeKind::F32 => "F32",
            TypeKind::U64 => "U64",
            TypeKind::S64 => "S64",
            TypeKind::U32 => "U32",
            TypeKind::S32 => "S32",
            TypeKind::I32 => "I32",
            TypeKind::U16 => "U16",
            TypeKind::S16 => "S16",
            TypeKind::U8 => "U8",
            TypeKind::S8 => "S8",
            TypeKind::Record(_) => "Record",
            TypeKind::Tuple(_) => "Tuple",
            TypeKind::List => "List",
            TypeKind::Option => "Option",
            TypeKind::Enum => "Enum",
            TypeKind::Variant(_) => "Variant",
            TypeKind::Other(tag) => tag.as_str(),
        }
    }

    /// Scalars carry neither `fields` nor `cases`.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            TypeKind::Str
                | TypeKind::Chr
                | TypeKind::Bool
                | TypeKind::F64
                | TypeKind::F32
                | TypeKind::U64
                | TypeKind::S64
                | TypeKind::U32
                | TypeKind::S32
                | TypeKind::I32
                | TypeKind::U16
                | TypeKind::S16
                | TypeKind::U8
                | TypeKind::S8
        )
    }

    fn from_tag(tag: &str) -> Option<Self> {
        let kind = match tag {
            "Str" => TypeKind::Str,
            "Chr" => TypeKind::Chr,
            "Bool" => TypeKind::Bool,
            "F64" => TypeKind::F64,
            "F32" => TypeKind::F32,
            "U64" => TypeKind::U64,
            "S64" => TypeKind::S64,
            "U32" => TypeKind::U32,
            "S32" => TypeKind::S32,
            "I32" => TypeKind::I32,
            "U16" => TypeKind::U16,
            "S16" => TypeKind::S16,
            "U8" => TypeKind::U8,
            "S8" => TypeKind::S8,
            "Record" => TypeKind::Record(Vec::new()),
            "Tuple" => TypeKind::Tuple(Vec::new()),
            "List" => TypeKind::List,
            "Option" => TypeKind::Option,
            "Enum" => TypeKind::Enum,
            "Variant" => TypeKind::Variant(Vec::new()),
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl TypeDescriptor {
    pub fn new(kind: TypeKind) -> Self {
        Self {
            kind,
            extra: Map::new(),
        }
    }

    pub fn record(fields: Vec<Field>) -> Self {
        Self::new(TypeKind::Record(fields))
    }

    pub fn tuple(fields: Vec<Field>) -> Self {
        Self::new(TypeKind::Tuple(fields))
    }

    pub fn variant(cases: Vec<Field>) -> Self {
        Self::new(TypeKind::Variant(cases))
    }

    /// Attach an uninterpreted member.
    pub fn with_extra(mut self, key: &str, value: Value) -> Self {
        self.extra.insert(key.to_string(), value);
        self
    }

    pub fn tag(&self) -> &str {
        self.kind.tag()
    }
}

impl From<TypeKind> for TypeDescriptor {
    fn from(kind: TypeKind) -> Self {
        Self::new(kind)
    }
}

/// Errors raised while decoding a descriptor whose members contradict its tag.
#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("'fields' is not allowed on a {0} descriptor")]
    UnexpectedFields(String),

    #[error("'cases' is not allowed on a {0} descriptor")]
    UnexpectedCases(String),

    #[error("invalid 'fields' on a {tag} descriptor: {reason}")]
    InvalidFields { tag: String, reason: String },
}

/// Wire form of a descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawDescriptor {
    #[serde(rename = "type")]
    tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fields: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cases: Option<Value>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl TryFrom<RawDescriptor> for TypeDescriptor {
    type Error = DescriptorError;

    fn try_from(raw: RawDescriptor) -> Result<Self, Self::Error> {
        let RawDescriptor {
            tag,
            fields,
            cases,
            mut extra,
        } = raw;

        let parse_fields = |fields: Option<Value>| -> Result<Vec<Field>, DescriptorError> {
            match fields {
                Some(value) => {
                    serde_json::from_value(value).map_err(|e| DescriptorError::InvalidFields {
                        tag: tag.clone(),
                        reason: e.to_string(),
                    })
                }
                None => Ok(Vec::new()),
            }
        };

        let kind = match TypeKind::from_tag(&tag) {
            Some(TypeKind::Record(_)) | Some(TypeKind::Tuple(_)) if cases.is_some() => {
                return Err(DescriptorError::UnexpectedCases(tag));
            }
            Some(TypeKind::Record(_)) => TypeKind::Record(parse_fields(fields)?),
            Some(TypeKind::Tuple(_)) => TypeKind::Tuple(parse_fields(fields)?),
            Some(TypeKind::Variant(_)) => {
                if fields.is_some() {
                    return Err(DescriptorError::UnexpectedFields(tag));
                }
                // Cases that are not all name/type pairs (payload-less cases)
                // are kept verbatim.
                let cases = match cases {
                    Some(value) => match serde_json::from_value(value.clone()) {
                        Ok(cases) => cases,
                        Err(_) => {
                            extra.insert("cases".to_string(), value);
                            Vec::new()
                        }
                    },
                    None => Vec::new(),
                };
                TypeKind::Variant(cases)
            }
            Some(kind) => {
                if fields.is_some() {
                    return Err(DescriptorError::UnexpectedFields(tag));
                }
                if kind.is_scalar() && cases.is_some() {
                    return Err(DescriptorError::UnexpectedCases(tag));
                }
                // Enum, List and Option may carry case names or an inner type.
                if let Some(cases) = cases {
                    extra.insert("cases".to_string(), cases);
                }
                kind
            }
            None => {
                if let Some(fields) = fields {
                    extra.insert("fields".to_string(), fields);
                }
                if let Some(cases) = cases {
                    extra.insert("cases".to_string(), cases);
                }
                TypeKind::Other(tag)
            }
        };

        Ok(TypeDescriptor { kind, extra })
    }
}

impl From<TypeDescriptor> for RawDescriptor {
    fn from(descriptor: TypeDescriptor) -> Self {
        let TypeDescriptor { kind, extra } = descriptor;
        let tag = kind.tag().to_string();
        let (fields, cases) = match kind {
            // Field lists are plain data and always serialize.
            TypeKind::Record(fields) | TypeKind::Tuple(fields) => {
                (serde_json::to_value(fields).ok(), None)
            }
            TypeKind::Variant(cases) if cases.is_empty() && extra.contains_key("cases") => {
                (None, None)
            }
            TypeKind::Variant(cases) => (None, serde_json::to_value(cases).ok()),
            _ => (None, None),
        };
        RawDescriptor {
            tag,
            fields,
            cases,
            extra,
        }
    }
}
