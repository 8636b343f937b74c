//! JSON serialization with a configurable indent

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::VersyncError;

/// Pretty-print a JSON value using the given indent string, with a trailing
/// newline. Property order is emitted exactly as stored.
pub fn to_json_string(value: &Value, indent: &str) -> Result<String, VersyncError> {
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;

    let mut text = String::from_utf8_lossy(&out).into_owned();
    text.push('\n');
    Ok(text)
}
