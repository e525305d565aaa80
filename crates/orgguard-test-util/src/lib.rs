//! Shared test utilities for the orgguard workspace.
//!
//! `xtask` needs `normalize_nondeterministic` at runtime (not behind `#[cfg(test)]`), so it
//! lives in its own crate rather than a test module of `orgguard-types`.

use serde_json::Value;

pub const TIMESTAMP_PLACEHOLDER: &str = "__TIMESTAMP__";
pub const VERSION_PLACEHOLDER: &str = "__VERSION__";

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// - `tool.version` is replaced only on a root report envelope (`schema`, `tool`,
///   `verdict`, `findings`, `data` all present), so finding payloads that happen to carry
///   a `tool` key are left alone.
/// - `started_at` / `finished_at` are replaced at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = ["schema", "tool", "verdict", "findings", "data"]
            .iter()
            .all(|key| obj.contains_key(*key));
        if is_envelope
            && let Some(tool) = obj.get_mut("tool")
            && let Some(tool_obj) = tool.as_object_mut()
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String(VERSION_PLACEHOLDER.to_string()),
            );
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if let Some(slot) = map.get_mut(key) {
                    *slot = Value::String(TIMESTAMP_PLACEHOLDER.to_string());
                }
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}
