//! YAML document encoding and decoding.
//!
//! Decoding reads a stream to exhaustion and parses the buffered bytes.
//! Encoding writes [`DOCUMENT_MARKER`] followed by the serialized value, so
//! calling [`encode`] repeatedly on one writer produces a multi-document
//! stream. The codec keeps no state between calls.
//!
//! ```rust
//! use std::collections::BTreeMap;
//!
//! let mut out = Vec::new();
//! yamlio::format::encode(&mut out, &BTreeMap::from([("a", 1)])).unwrap();
//! yamlio::format::encode(&mut out, &BTreeMap::from([("b", 2)])).unwrap();
//! assert_eq!(out, b"---\na: 1\n---\nb: 2\n");
//!
//! let docs: Vec<BTreeMap<String, i32>> = yamlio::format::decode_all(&out[..]).unwrap();
//! assert_eq!(docs.len(), 2);
//! ```

use std::io::{Read, Write};

use serde::{Serialize, de::DeserializeOwned};

use crate::error::{EmptyDocument, Stage, StreamError};

/// Written before every encoded document.
pub const DOCUMENT_MARKER: &[u8] = b"---\n";

const BOM: &[u8] = b"\xEF\xBB\xBF";

/// True when the input holds no YAML node: only blank lines, comments and
/// bare `---` / `...` markers, optionally behind a byte order mark.
fn is_blank(bytes: &[u8]) -> bool {
    let bytes = bytes.strip_prefix(BOM).unwrap_or(bytes);
    bytes.split(|&b| b == b'\n').all(|line| {
        let line = line.trim_ascii();
        line.is_empty() || line.starts_with(b"#") || line == b"---" || line == b"..."
    })
}

fn read_to_end(mut reader: impl Read) -> Result<Vec<u8>, StreamError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| StreamError::new(Stage::Read, e))?;
    Ok(bytes)
}

/// Read `reader` to exhaustion and parse it as a single YAML document.
///
/// A stream with no content (nothing but whitespace, comments or document
/// markers) is a [`Stage::Parse`] error carrying [`EmptyDocument`], whatever
/// the target type.
pub fn decode<T: DeserializeOwned>(reader: impl Read) -> Result<T, StreamError> {
    let bytes = read_to_end(reader)?;
    decode_slice(&bytes)
}

/// Parse an in-memory buffer as a single YAML document.
pub fn decode_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, StreamError> {
    if is_blank(bytes) {
        return Err(StreamError::new(Stage::Parse, EmptyDocument));
    }
    serde_yaml::from_slice(bytes).map_err(|e| StreamError::new(Stage::Parse, e))
}

/// Read `reader` to exhaustion and parse every document in it.
///
/// A stream with no content holds no documents and yields an empty vector.
pub fn decode_all<T: DeserializeOwned>(reader: impl Read) -> Result<Vec<T>, StreamError> {
    let bytes = read_to_end(reader)?;
    decode_all_slice(&bytes)
}

/// Parse every document in an in-memory buffer.
pub fn decode_all_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>, StreamError> {
    if is_blank(bytes) {
        return Ok(Vec::new());
    }
    serde_yaml::Deserializer::from_slice(bytes)
        .map(|doc| T::deserialize(doc).map_err(|e| StreamError::new(Stage::Parse, e)))
        .collect()
}

/// Serialize `value` into a complete document: marker followed by the body.
pub fn to_document<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, StreamError> {
    let body = serde_yaml::to_string(value).map_err(|e| StreamError::new(Stage::Serialize, e))?;
    let mut doc = Vec::with_capacity(DOCUMENT_MARKER.len() + body.len());
    doc.extend_from_slice(DOCUMENT_MARKER);
    doc.extend_from_slice(body.as_bytes());
    Ok(doc)
}

/// Append `value` to `writer` as one marker-prefixed YAML document.
///
/// The value is serialized before anything is written, so a
/// [`Stage::Serialize`] failure leaves the writer untouched.
pub fn encode<T: Serialize + ?Sized>(mut writer: impl Write, value: &T) -> Result<(), StreamError> {
    let body = serde_yaml::to_string(value).map_err(|e| StreamError::new(Stage::Serialize, e))?;

    writer
        .write_all(DOCUMENT_MARKER)
        .map_err(|e| StreamError::new(Stage::Write, e))?;
    writer
        .write_all(body.as_bytes())
        .map_err(|e| StreamError::new(Stage::Write, e))?;

    Ok(())
}

/// Append each value as its own document, stopping at the first error.
pub fn encode_all<T: Serialize>(mut writer: impl Write, values: &[T]) -> Result<(), StreamError> {
    for value in values {
        encode(&mut writer, value)?;
    }
    Ok(())
}

// Async format support
#[cfg(feature = "async")]
mod async_format;

#[cfg(feature = "async")]
pub use async_format::*;
