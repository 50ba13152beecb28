//! Diff generation for audit logging
//!
//! Generates human-readable diffs between before and after values
//! for audit log entries.

use serde_json::Value;

/// Generate a human-readable diff between two serialized records
///
/// Only top-level fields present on both sides are compared. Keys listed in
/// `ignored` (bookkeeping such as `updated_at`) are left out of the summary.
/// Returns `None` when nothing changed or either side is not an object.
pub fn generate_diff(before: &Value, after: &Value, ignored: &[&str]) -> Option<String> {
    let (Value::Object(before_obj), Value::Object(after_obj)) = (before, after) else {
        return None;
    };

    let changes: Vec<String> = before_obj
        .iter()
        .filter(|(key, _)| !ignored.contains(&key.as_str()))
        .filter_map(|(key, old)| {
            let new = after_obj.get(key)?;
            (old != new).then(|| format!("{}: {} -> {}", key, format_value(old), format_value(new)))
        })
        .collect();

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

/// Quote a field value, shortening long text
fn format_value(value: &Value) -> String {
    match value.as_str() {
        Some(s) if s.chars().count() > 50 => {
            let head: String = s.chars().take(47).collect();
            format!("\"{}...\"", head)
        }
        _ => value.to_string(),
    }
}
