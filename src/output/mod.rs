// Output formatting: terminal display of records, errors and skill results.

pub mod terminal;

use serde_json::Value;

/// Render a JSON value on one line, truncated to at most `max_chars`
/// characters with "..." appended when cut.
///
/// Strings are shown without quotes. Truncation counts characters, not
/// bytes, so multi-byte text never splits.
pub fn preview_value(value: &Value, max_chars: usize) -> String {
    let text = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    if text.chars().count() <= max_chars {
        text
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
