//! Type-directed codec for function invocation arguments.
//!
//! Everything here is pure: no I/O and no shared state.

pub mod encoder;
pub mod error;
pub mod signature;
pub mod skeleton;
pub mod text;

pub use encoder::{encode_editor_value, encode_payload};
pub use error::CodecError;
pub use signature::{render_function, render_signature, render_type};
pub use skeleton::{editor_buffer, function_skeleton, generate_skeleton};
pub use text::{safe_format_json, sanitize_input};
