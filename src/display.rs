use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

/// Returns the current UTC time as `YYYY-MM-DDTHH:MM:SS.fffZ`.
///
/// Millisecond precision with a literal `Z` suffix, the format the demos use
/// to timestamp API traffic.
pub fn iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Print a labeled separator line, followed by `data` pretty-printed as JSON
/// when present.
pub fn show<T: Serialize>(label: &str, data: Option<&T>) {
    println!("--- {label}");
    if let Some(data) = data {
        match serde_json::to_string_pretty(data) {
            Ok(text) => println!("{text}"),
            Err(e) => tracing::warn!("Failed to render {label}: {e}"),
        }
    }
}

/// Recursively print a JSON object's keys and values, one per line, indented
/// by nesting depth. Nested objects recurse; scalars print on the line below
/// their key. Non-object values print nothing.
pub fn pretty_dict(d: &Value, indent: usize) {
    let Value::Object(entries) = d else {
        return;
    };

    for (key, value) in entries {
        println!("{}{}", "\t".repeat(indent), key);
        match value {
            Value::Object(_) => pretty_dict(value, indent + 1),
            Value::String(s) => println!("{}{}", "\t".repeat(indent + 1), s),
            other => println!("{}{}", "\t".repeat(indent + 1), other),
        }
    }
}
