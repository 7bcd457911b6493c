//! Path lookups into loosely shaped JSON that never fail.
//!
//! The host state tree is only partially populated (a user who never logged in has no
//! `persistent.nexus.userInfo`, a fresh install has no `app.extensions`). Every lookup
//! walks the path and hands back the caller's default on the first missing segment.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Walk `path` through nested objects (and arrays, for numeric segments).
pub fn get_safe<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(*segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|idx| items.get(idx)),
        _ => None,
    })
}

/// Like [`get_safe`] but deserializes the target, falling back to `default` when the
/// path is missing, `null`, or of the wrong shape.
pub fn get_safe_or<T: DeserializeOwned>(value: &Value, path: &[&str], default: T) -> T {
    match get_safe(value, path) {
        Some(Value::Null) | None => default,
        Some(found) => T::deserialize(found).unwrap_or(default),
    }
}
