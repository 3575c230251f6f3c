/// Lexical role of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Punctuation, whitespace, numbers and keywords; copied through.
    Plain,
    /// A name eligible for renaming.
    Identifier,
    /// `'…'` or `"…"`, delimiters included.
    StringLiteral,
    /// The name after a `.`, without the dot.
    PropertyName,
    /// A name that lives on the ambient (global) scope.
    GlobalName,
    /// `/…/`, copied through.
    RegexLiteral,
    /// `` `…` ``, backticks included.
    TemplateLiteral,
}

/// One classified slice of the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Output of one rewrite: the table prelude and the rewritten code.
///
/// The prelude must run before the body; it declares and decodes the
/// literal table the body indexes into.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rewritten {
    pub prelude: String,
    pub body: String,
}

impl Rewritten {
    pub fn into_program(self) -> String {
        let mut out = self.prelude;
        out.push_str(&self.body);
        out
    }
}
