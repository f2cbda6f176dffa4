//! Source-path lookup and error-path formatting
//!
//! Copyright (c) 2026 Remap Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;

/// Walk a dotted source path with tolerant null-propagation.
///
/// Missing intermediate objects (or a non-object anywhere along the walk,
/// including an absent source) yield `Value::Null` rather than failing, so
/// an absent source plus an all-optional schema maps to absent instead of
/// erroring.
pub(crate) fn lookup(source: &Value, path: &str) -> Value {
    let mut current = source;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment).unwrap_or(&Value::Null),
            _ => &Value::Null,
        };
    }
    current.clone()
}

/// Prepend a path fragment to an unwinding validation message.
///
/// No separator when the message already begins with an array-index marker
/// (`[`) or is still a leaf message (`:`); otherwise the enclosing object
/// level is joined with `.`. This composes `a.b[2]: must be a number`
/// correctly regardless of whether the immediately enclosing context was an
/// object key or an array index.
pub(crate) fn decorate(prefix: &str, message: &str) -> String {
    let separator = if message.starts_with('[') || message.starts_with(':') {
        ""
    } else {
        "."
    };
    format!("{}{}{}", prefix, separator, message)
}
