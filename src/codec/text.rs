//! Editor text helpers

/// Pretty-print `input` with 2-space indentation, or return it unchanged when
/// it is not valid JSON yet.
pub fn safe_format_json(input: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(input) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| input.to_string()),
        Err(_) => input.to_string(),
    }
}

/// Replace curly double quotes and single quotes with straight double quotes.
pub fn sanitize_input(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '\u{201C}' | '\u{201D}' | '\'' => '"',
            other => other,
        })
        .collect()
}
