//! Token stream → obfuscated code.
//!
//! Identifiers are renamed through the shared [`RunState`], literal
//! payloads are moved into the literal table and replaced with indexed
//! lookups, and the surrounding plain text is squeezed. Template
//! interpolations are fed back through a nested lexer + rewriter that
//! borrows the same `RunState`.

use crate::config::Config;
use crate::model::{Rewritten, Token, TokenKind};
use crate::writer::prelude;

use super::comments::strip_comments;
use super::escape::cook;
use super::lexer::Lexer;
use super::tables::RunState;

/// Applied in order over the finished body.
const COMPACTIONS: &[(&str, &str)] = &[
    ("\r\n", "\n"),
    ("\t", ""),
    ("\n\n", "\n"),
    ("{\n", "{"),
    ("\n}", "}"),
    (";\n", ";"),
    (")\n}", ")}"),
];

pub struct Rewriter<'a> {
    config: &'a Config,
    state: &'a mut RunState,
    code: String,
}

impl<'a> Rewriter<'a> {
    pub fn new(config: &'a Config, state: &'a mut RunState) -> Self {
        Self {
            config,
            state,
            code: String::new(),
        }
    }

    /// Rewrite `tokens` and build the prelude for everything the literal
    /// table holds afterwards.
    pub fn rewrite(mut self, tokens: &[Token]) -> Rewritten {
        for token in tokens {
            self.emit(token);
        }

        let mut body = self.code;
        for (search, replace) in COMPACTIONS {
            body = body.replace(search, replace);
        }

        Rewritten {
            prelude: prelude::emit(&self.state.literals, self.config),
            body: body.trim().to_string(),
        }
    }

    fn emit(&mut self, token: &Token) {
        match token.kind {
            TokenKind::Plain if token.text == " " => self.code.push(' '),
            TokenKind::Plain => self.code.push_str(&token.text.replace(' ', "")),
            TokenKind::Identifier => {
                let short = self.state.rename(&token.text);
                self.code.push_str(&short);
            }
            TokenKind::StringLiteral => {
                let payload = cook(literal_body(&token.text));
                let lookup = self.lookup(&payload);
                self.code.push_str(&lookup);
            }
            TokenKind::PropertyName => {
                let lookup = self.lookup(&token.text);
                // `a?.b` must stay an optional access: `a?.[…]`
                if self.code.ends_with('?') {
                    self.code.push('.');
                }
                self.code.push('[');
                self.code.push_str(&lookup);
                self.code.push(']');
            }
            TokenKind::GlobalName => {
                let lookup = self.lookup(&token.text);
                self.code.push_str(&self.config.ambient_scope);
                self.code.push('[');
                self.code.push_str(&lookup);
                self.code.push(']');
            }
            TokenKind::RegexLiteral => self.code.push_str(&token.text),
            TokenKind::TemplateLiteral => {
                let template = self.rewrite_template(&token.text);
                self.code.push_str(&template);
            }
        }
    }

    /// `b[<idx>]` for `payload`, interning it on first sight.
    fn lookup(&mut self, payload: &str) -> String {
        let idx = self.state.literals.intern(payload);
        format!("{}[{idx}]", self.config.table_name)
    }

    /// Rewrite every `${…}` of a template literal in place.
    ///
    /// A span ends at the first `}` after its `${`; braces inside the
    /// expression are not balanced. An escaped `\${` is literal text.
    fn rewrite_template(&mut self, text: &str) -> String {
        let inner = literal_body(text);
        let mut out = String::with_capacity(text.len());
        out.push('`');

        let mut rest = inner;
        while let Some(open) = rest.find("${") {
            if trailing_backslashes(&rest[..open]) % 2 == 1 {
                out.push_str(&rest[..open + 2]);
                rest = &rest[open + 2..];
                continue;
            }
            let after_open = &rest[open + 2..];
            let Some(close) = after_open.find('}') else {
                break;
            };
            let expr = &after_open[..close];

            out.push_str(&rest[..open]);
            out.push_str("${");
            if !expr.is_empty() {
                out.push_str(&self.rewrite_interpolation(expr));
            }
            out.push('}');
            rest = &after_open[close + 1..];
        }
        out.push_str(rest);
        out.push('`');
        out
    }

    fn rewrite_interpolation(&mut self, expr: &str) -> String {
        tracing::trace!(expr, "rewriting interpolation");
        let src = strip_comments(expr);
        let tokens = Lexer::new(&src, self.config).tokenize();
        Rewriter::new(self.config, &mut *self.state)
            .rewrite(&tokens)
            .body
    }
}

/// Drop the opening delimiter and, when present and unescaped, the closing
/// one. Unterminated literals only lose their opening character.
fn literal_body(text: &str) -> &str {
    let mut chars = text.chars();
    let Some(delim) = chars.next() else {
        return text;
    };
    let body = chars.as_str();
    match body.strip_suffix(delim) {
        Some(stripped) if trailing_backslashes(stripped) % 2 == 0 => stripped,
        _ => body,
    }
}

fn trailing_backslashes(s: &str) -> usize {
    s.chars().rev().take_while(|&c| c == '\\').count()
}
