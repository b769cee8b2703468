//! Human-readable rendering of function signatures.

use crate::domain::{FunctionDescriptor, Parameter, TypeDescriptor, TypeKind};

/// Render a descriptor the way the exports listing shows it.
///
/// Records list their fields, variants list their cases joined by ` | `; every
/// other descriptor renders as its tag.
pub fn render_type(typ: &TypeDescriptor) -> String {
    match &typ.kind {
        TypeKind::Record(fields) => {
            let fields: Vec<String> = fields
                .iter()
                .map(|f| format!("{}: {}", f.name, render_type(&f.typ)))
                .collect();
            format!("{{{}}}", fields.join(", "))
        }
        TypeKind::Variant(cases) => cases
            .iter()
            .map(|case| format!("{}: {}", case.name, render_type(&case.typ)))
            .collect::<Vec<_>>()
            .join(" | "),
        other => other.tag().to_string(),
    }
}

/// `(name: type)` for each parameter.
pub fn render_signature(params: &[Parameter]) -> Vec<String> {
    params
        .iter()
        .map(|p| format!("({}: {})", p.name, render_type(&p.typ)))
        .collect()
}

/// One line per function: `export.function(a: T)(b: U) -> (r: V)`.
pub fn render_function(function: &FunctionDescriptor) -> String {
    let mut line = match &function.export_name {
        Some(export) => format!("{}.{}", export, function.name),
        None => function.name.clone(),
    };
    if function.parameters.is_empty() {
        line.push_str("()");
    } else {
        line.push_str(&render_signature(&function.parameters).concat());
    }
    if !function.results.is_empty() {
        line.push_str(" -> ");
        line.push_str(&render_signature(&function.results).concat());
    }
    line
}
