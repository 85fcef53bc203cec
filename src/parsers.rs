//! Ready-made file parsers.
//!
//! A parser turns the raw bytes of one file into a document. Any
//! `Fn(&[u8]) -> Result<Value, BoxError>` works; these cover the common
//! cases.

use serde_json::{json, Value};

use crate::error::BoxError;

/// Signature shared by every parser.
pub type ParseResult = Result<Value, BoxError>;

/// The default parser: `{"contents": <text>}`.
///
/// Never fails. Invalid UTF-8 is replaced rather than rejected.
pub fn raw(bytes: &[u8]) -> ParseResult {
    Ok(json!({ "contents": String::from_utf8_lossy(bytes) }))
}

/// Decode the file as JSON.
pub fn json(bytes: &[u8]) -> ParseResult {
    Ok(serde_json::from_slice(bytes)?)
}

/// The file's text as a bare string. Fails on invalid UTF-8.
pub fn text(bytes: &[u8]) -> ParseResult {
    Ok(Value::String(std::str::from_utf8(bytes)?.to_string()))
}

/// The file's text as an array of lines, without line terminators.
pub fn lines(bytes: &[u8]) -> ParseResult {
    let text = std::str::from_utf8(bytes)?;
    Ok(Value::Array(
        text.lines().map(|l| Value::String(l.to_string())).collect(),
    ))
}
