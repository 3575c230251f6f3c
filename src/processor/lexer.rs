//! Hand-written state-machine lexer for JavaScript-like source.
//!
//! The lexer does not understand the grammar. It only splits the text into
//! runs whose role matters to the rewriter:
//!
//! ```text
//!      Identifier    ::= [A-Za-z_$][A-Za-z0-9_$]*    (keyword → Plain,
//!                                                    ambient name → GlobalName)
//!      PropertyName  ::= '.' Identifier              (dot dropped)
//!      StringLiteral ::= '"' … '"' | "'" … "'"       (backslash escapes honoured)
//!      Template      ::= '`' … '`'
//!      Regex         ::= '/' … '/' [a-z]*
//!      Plain         ::= everything in between
//! ```
//
//  Known limitations, kept on purpose:
//    * any `/` outside another token opens a regex (no division check);
//    * a `\/` inside a regex still closes it;
//    * a backtick inside `${…}` closes the template.
//  Unterminated tokens are flushed as-is at end of input.

use std::iter::Peekable;
use std::str::Chars;

use crate::config::Config;
use crate::model::{Token, TokenKind};

pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

pub fn is_ident_char(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexerState {
    Idle,
    InIdentifier,
    /// Remembers the opening quote; only the same quote closes.
    InString(char),
    InPropertyName,
    /// `closed` once the second `/` is seen and only flags may follow.
    InRegex { closed: bool },
    InTemplateLiteral,
}

/// What the tail of the plain buffer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlainRun {
    Other,
    /// `1.5e3`, `0xff`: letters and dots stay plain.
    Number,
    /// A dot that turned out not to start a property (`...`, `. `).
    Dots,
}

pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    config: &'a Config,
    state: LexerState,
    run: PlainRun,
    cache: String,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str, config: &'a Config) -> Self {
        Self {
            chars: src.chars().peekable(),
            config,
            state: LexerState::Idle,
            run: PlainRun::Other,
            cache: String::new(),
            tokens: Vec::new(),
        }
    }

    /// Run the machine over the whole input.
    pub fn tokenize(mut self) -> Vec<Token> {
        while let Some(c) = self.chars.peek().copied() {
            match self.state {
                LexerState::Idle => self.lex_idle(c),
                LexerState::InIdentifier => self.lex_identifier(c),
                LexerState::InString(quote) => self.lex_quoted(c, quote, TokenKind::StringLiteral),
                LexerState::InPropertyName => self.lex_property(c),
                LexerState::InRegex { closed } => self.lex_regex(c, closed),
                LexerState::InTemplateLiteral => {
                    self.lex_quoted(c, '`', TokenKind::TemplateLiteral)
                }
            }
        }
        self.finish();
        tracing::trace!(tokens = self.tokens.len(), "tokenized");
        self.tokens
    }

    /// Consume `c` into the current token.
    fn take(&mut self, c: char) {
        self.cache.push(c);
        self.chars.next();
    }

    fn emit(&mut self, kind: TokenKind) {
        let text = std::mem::take(&mut self.cache);
        if kind == TokenKind::Plain && text.is_empty() {
            return;
        }
        self.tokens.push(Token::new(kind, text));
    }

    fn enter(&mut self, state: LexerState) {
        self.emit(TokenKind::Plain);
        self.state = state;
    }

    fn lex_idle(&mut self, c: char) {
        match self.run {
            PlainRun::Number if c.is_ascii_alphanumeric() || c == '_' || c == '.' => {
                return self.take(c);
            }
            PlainRun::Dots if c == '.' => return self.take(c),
            _ => {}
        }
        self.run = if c.is_ascii_digit() {
            PlainRun::Number
        } else {
            PlainRun::Other
        };

        match c {
            '"' | '\'' => self.enter(LexerState::InString(c)),
            '.' => self.enter(LexerState::InPropertyName),
            '/' => self.enter(LexerState::InRegex { closed: false }),
            '`' => self.enter(LexerState::InTemplateLiteral),
            c if is_ident_start(c) => self.enter(LexerState::InIdentifier),
            _ => {}
        }
        self.take(c);
    }

    fn lex_identifier(&mut self, c: char) {
        if is_ident_char(c) {
            return self.take(c);
        }
        self.emit_identifier();
        self.state = LexerState::Idle;
    }

    fn emit_identifier(&mut self) {
        let kind = if self.config.keywords.contains(&self.cache) {
            TokenKind::Plain
        } else if self.config.ambient_names.contains(&self.cache) {
            TokenKind::GlobalName
        } else {
            TokenKind::Identifier
        };
        self.emit(kind);
    }

    fn lex_quoted(&mut self, c: char, closing: char, kind: TokenKind) {
        self.take(c);
        if c == '\\' {
            if let Some(escaped) = self.chars.peek().copied() {
                self.take(escaped);
            }
        } else if c == closing {
            self.emit(kind);
            self.state = LexerState::Idle;
        }
    }

    fn lex_property(&mut self, c: char) {
        if self.cache == "." {
            if is_ident_start(c) {
                return self.take(c);
            }
            // Not a member access after all; the dot rejoins the plain text.
            self.state = LexerState::Idle;
            self.run = PlainRun::Dots;
            return;
        }
        if is_ident_char(c) {
            return self.take(c);
        }
        self.emit_property();
        self.state = LexerState::Idle;
    }

    fn emit_property(&mut self) {
        let name = std::mem::take(&mut self.cache);
        self.tokens
            .push(Token::new(TokenKind::PropertyName, &name[1..]));
    }

    fn lex_regex(&mut self, c: char, closed: bool) {
        if !closed {
            self.take(c);
            if c == '/' {
                self.state = LexerState::InRegex { closed: true };
            }
        } else if c.is_ascii_alphabetic() {
            self.take(c);
        } else {
            self.emit(TokenKind::RegexLiteral);
            self.state = LexerState::Idle;
        }
    }

    /// Flush whatever is left at end of input as the current state's kind.
    fn finish(&mut self) {
        match self.state {
            LexerState::Idle => self.emit(TokenKind::Plain),
            LexerState::InIdentifier => self.emit_identifier(),
            LexerState::InString(_) => self.emit(TokenKind::StringLiteral),
            LexerState::InPropertyName if self.cache == "." => self.emit(TokenKind::Plain),
            LexerState::InPropertyName => self.emit_property(),
            LexerState::InRegex { .. } => self.emit(TokenKind::RegexLiteral),
            LexerState::InTemplateLiteral => self.emit(TokenKind::TemplateLiteral),
        }
        self.state = LexerState::Idle;
    }
}
