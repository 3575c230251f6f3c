//! Reversible text encoding for literal-table entries.
//!
//! Standard base64 over the UTF-8 bytes. The prelude decodes the same way
//! at runtime (`atob` followed by a UTF-8 `TextDecoder`), so non-ASCII
//! payloads survive the trip.

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::error::{ObfuscateError, Result};

pub fn encode_text(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

pub fn decode_text(encoded: &str) -> Result<String> {
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|_| ObfuscateError::Decode(encoded.to_string()))?;
    String::from_utf8(bytes).map_err(|_| ObfuscateError::Decode(encoded.to_string()))
}
