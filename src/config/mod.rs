//! Run configuration and its JSON loader.
pub mod vocabulary;

use std::collections::HashSet;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::processor::lexer::{is_ident_char, is_ident_start};
use crate::writer::codec::decode_text;

/// Everything a run needs besides the source text.
///
/// Every field has a default, so a JSON document only has to name what it
/// overrides:
///
/// ```json
/// { "ambient_scope": "globalThis", "keywords": ["let", "const"] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Exact-match words that stay as-is.
    pub keywords: HashSet<String>,
    /// Exact-match names rewritten as `<ambient_scope>[table[i]]`.
    pub ambient_names: HashSet<String>,
    pub ambient_scope: String,
    /// Variable that holds the decoded literal table.
    pub table_name: String,
    /// Deny-list, each entry in `encode_text` form.
    pub denied_markers: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keywords: vocabulary::KEYWORDS.iter().map(|s| s.to_string()).collect(),
            ambient_names: vocabulary::AMBIENT_NAMES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            ambient_scope: "window".to_string(),
            table_name: "b".to_string(),
            denied_markers: vec!["ZXZhbA==".to_string()],
        }
    }
}

impl Config {
    /// Check the fields that end up spliced into generated code.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("ambient_scope", &self.ambient_scope),
            ("table_name", &self.table_name),
        ] {
            if !is_js_name(value) {
                return Err(anyhow!("`{field}` is not a valid identifier: {value:?}"));
            }
            if is_short_name(value) {
                return Err(anyhow!(
                    "`{field}` collides with generated short names: {value:?}"
                ));
            }
        }

        for (i, marker) in self.denied_markers.iter().enumerate() {
            decode_text(marker).with_context(|| format!("denied marker {i} does not decode"))?;
        }
        Ok(())
    }
}

/// Parse and validate a JSON configuration document.
pub fn load_from_json(json: &str) -> Result<Config> {
    let config: Config = serde_json::from_str(json).context("Parsing configuration JSON")?;
    config.validate().context("Validating configuration")?;
    tracing::debug!(
        keywords = config.keywords.len(),
        ambient_names = config.ambient_names.len(),
        "configuration loaded"
    );
    Ok(config)
}

/// `A`, `BB`, `CCC`…: the shapes the rename cursor hands out.
fn is_short_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => chars.all(|c| c == first),
        _ => false,
    }
}

fn is_js_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => is_ident_start(first) && chars.all(is_ident_char),
        None => false,
    }
}
