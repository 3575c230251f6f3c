//! Identity tables shared by every rewriter of one run.

use std::collections::HashMap;

use indexmap::IndexSet;

const FIRST_LETTER: u8 = b'A';
const LAST_LETTER: u8 = b'Z';

/// Drives short-name generation: `A`‥`Z`, then `AA`‥`ZZ`, then `AAA`…
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenameCursor {
    pub char_code: u8,
    pub repeat_count: usize,
}

impl Default for RenameCursor {
    fn default() -> Self {
        Self {
            char_code: FIRST_LETTER,
            repeat_count: 1,
        }
    }
}

impl RenameCursor {
    pub fn current(&self) -> String {
        (self.char_code as char).to_string().repeat(self.repeat_count)
    }

    pub fn advance(&mut self) {
        self.char_code += 1;
        if self.char_code > LAST_LETTER {
            self.char_code = FIRST_LETTER;
            self.repeat_count += 1;
        }
    }

    /// Hand out the current name and move one notch on.
    pub fn next_name(&mut self) -> String {
        let name = self.current();
        self.advance();
        name
    }
}

/// Original identifier → assigned short name. Entries are permanent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierMap {
    names: HashMap<String, String>,
}

impl IdentifierMap {
    pub fn get(&self, original: &str) -> Option<&str> {
        self.names.get(original).map(String::as_str)
    }

    /// Return the short name for `original`, assigning one from `cursor`
    /// on first sight.
    pub fn rename(&mut self, original: &str, cursor: &mut RenameCursor) -> String {
        if let Some(short) = self.names.get(original) {
            return short.clone();
        }
        let short = cursor.next_name();
        self.names.insert(original.to_string(), short.clone());
        short
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Distinct literal payloads in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiteralTable {
    entries: IndexSet<String>,
}

impl LiteralTable {
    /// Index of `payload`, appending it if this is its first occurrence.
    pub fn intern(&mut self, payload: &str) -> usize {
        if let Some(idx) = self.entries.get_index_of(payload) {
            return idx;
        }
        self.entries.insert_full(payload.to_string()).0
    }

    pub fn get(&self, idx: usize) -> Option<&str> {
        self.entries.get_index(idx).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The three tables of one top-level run. Nested rewriters borrow the
/// same instance, so names and slots stay consistent across interpolations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunState {
    pub identifiers: IdentifierMap,
    pub cursor: RenameCursor,
    pub literals: LiteralTable,
}

impl RunState {
    pub fn rename(&mut self, original: &str) -> String {
        self.identifiers.rename(original, &mut self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_26_names_are_single_letters() {
        let mut cursor = RenameCursor::default();
        let names: Vec<String> = (0..26).map(|_| cursor.next_name()).collect();
        let expected: Vec<String> = ('A'..='Z').map(|c| c.to_string()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_27th_name_doubles() {
        let mut cursor = RenameCursor::default();
        for _ in 0..26 {
            cursor.next_name();
        }
        assert_eq!(cursor.next_name(), "AA");
        assert_eq!(cursor.next_name(), "BB");

        for _ in 0..24 {
            cursor.next_name();
        }
        assert_eq!(cursor.next_name(), "AAA");
    }

    #[test]
    fn test_rename_is_stable() {
        let mut state = RunState::default();
        assert_eq!(state.rename("count"), "A");
        assert_eq!(state.rename("total"), "B");
        assert_eq!(state.rename("count"), "A");
        assert_eq!(state.identifiers.len(), 2);
        assert_eq!(state.cursor.current(), "C");
    }

    #[test]
    fn test_intern_dedups_by_exact_text() {
        let mut table = LiteralTable::default();
        assert_eq!(table.intern("hello"), 0);
        assert_eq!(table.intern("Hello"), 1);
        assert_eq!(table.intern("hello"), 0);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(1), Some("Hello"));
        assert_eq!(table.iter().collect::<Vec<_>>(), vec!["hello", "Hello"]);
    }
}
