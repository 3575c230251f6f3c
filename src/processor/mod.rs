//! The functional core: guard, strip, lex, rewrite.
pub mod comments;
pub mod escape;
pub mod guard;
pub mod lexer;
pub mod rewriter;
pub mod tables;

use crate::config::Config;
use crate::error::Result;
use crate::model::Rewritten;

use lexer::Lexer;
use rewriter::Rewriter;
use tables::RunState;

/// Run every pass over `source`, recording names and literals in `state`.
///
/// Nothing is produced when the content policy rejects the input.
pub fn run(source: &str, config: &Config, state: &mut RunState) -> Result<Rewritten> {
    guard::check(source, config)?;

    let cleaned = comments::strip_comments(source);
    let tokens = Lexer::new(&cleaned, config).tokenize();
    tracing::debug!(bytes = source.len(), tokens = tokens.len(), "source tokenized");

    let rewritten = Rewriter::new(config, state).rewrite(&tokens);
    tracing::debug!(
        identifiers = state.identifiers.len(),
        literals = state.literals.len(),
        "source rewritten"
    );
    Ok(rewritten)
}
