//! # Invoker - typed payloads for component function invocation
//!
//! Invoker turns the structural type descriptors a component platform publishes
//! for its exported functions into editable JSON, and turns edited JSON back
//! into the `{params: [{value, typ}]}` body the invocation endpoint expects.
//!
//! ## Features
//!
//! - **Skeletons**: a default argument value for every descriptor shape
//! - **Encoding**: positional `{value, typ}` payloads with list wrapping
//! - **Editor helpers**: tolerant JSON pretty-printing and quote sanitizing
//! - **Signatures**: readable `(name: type)` rendering of exports
//! - **Catalog**: component metadata loaded from JSON or YAML files
//!
//! ## Quick Start
//!
//! ```rust
//! use invoker::codec::{encode_payload, function_skeleton};
//! use invoker::domain::{Field, FunctionDescriptor, TypeKind};
//!
//! let function = FunctionDescriptor {
//!     name: "add-item".to_string(),
//!     export_name: Some("cart/api".to_string()),
//!     parameters: vec![Field::new("sku", TypeKind::Str), Field::new("tags", TypeKind::List)],
//!     results: vec![],
//! };
//!
//! let args = function_skeleton(&function);
//! let payload = encode_payload(&args, &function).unwrap();
//! assert_eq!(payload.params.len(), 2);
//! ```
//!
//! ## Architecture
//!
//! - **Domain**: descriptor and component metadata types
//! - **Codec**: pure skeleton/encoding/formatting functions
//! - **Adapters**: catalog, invoke session, reporters
//! - **Config**: configuration management

pub mod adapters;
pub mod cli;
pub mod codec;
pub mod config;
pub mod domain;
