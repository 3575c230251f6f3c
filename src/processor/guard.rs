//! Content-policy deny-list, checked against the raw input before any work.
//!
//! A policy, not a sandbox: alternate spellings are not caught.

use crate::config::Config;
use crate::error::{ObfuscateError, Result};
use crate::writer::codec::decode_text;

pub fn check(source: &str, config: &Config) -> Result<()> {
    for encoded in &config.denied_markers {
        let marker = decode_text(encoded)?;
        if !marker.is_empty() && source.contains(&marker) {
            tracing::warn!(%marker, "input rejected by content policy");
            return Err(ObfuscateError::PolicyViolation { marker });
        }
    }
    Ok(())
}
