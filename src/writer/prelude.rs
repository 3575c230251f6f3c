//! Emit the JavaScript prelude that declares and decodes the literal table.

use crate::config::Config;
use crate::processor::tables::LiteralTable;

use super::codec::encode_text;

/// Runtime inverse of [`encode_text`]: base64 to bytes, bytes to UTF-8.
const DECODE_FN: &str = "v=>new TextDecoder().decode(Uint8Array.from(atob(v),c=>c.charCodeAt(0)))";

/// Build `let b=['…',…];b=b.map(<decode>)\n` for every table entry in
/// index order. An empty table needs no prelude.
pub fn emit(table: &LiteralTable, config: &Config) -> String {
    if table.is_empty() {
        return String::new();
    }

    let entries: Vec<String> = table
        .iter()
        .map(|payload| format!("'{}'", encode_text(payload)))
        .collect();

    let name = &config.table_name;
    format!(
        "let {name}=[{}];{name}={name}.map({DECODE_FN})\n",
        entries.join(",")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_has_no_prelude() {
        assert_eq!(emit(&LiteralTable::default(), &Config::default()), "");
    }

    #[test]
    fn test_entries_in_index_order() {
        let mut table = LiteralTable::default();
        table.intern("hello");
        table.intern("name");
        table.intern("hello");

        let prelude = emit(&table, &Config::default());
        assert_eq!(
            prelude,
            format!("let b=['aGVsbG8=','bmFtZQ=='];b=b.map({DECODE_FN})\n")
        );
    }

    #[test]
    fn test_custom_table_name() {
        let mut table = LiteralTable::default();
        table.intern("x");
        let config = Config {
            table_name: "_t".into(),
            ..Config::default()
        };
        assert!(emit(&table, &config).starts_with("let _t=['eA=='];_t=_t.map("));
    }
}
