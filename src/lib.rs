//! Source-level JavaScript obfuscation.
//!
//! Identifiers become short opaque names, string literals plus property
//! and global names move into an encoded table read through indexed
//! lookups, and comments and insignificant whitespace are dropped.
//!
//! ```
//! let out = jsveil::obfuscate("let greeting = 'hi'; console.log(greeting);").unwrap();
//! assert!(out.ends_with("let A=b[0];window[b[1]][b[2]](A);"));
//! ```
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod processor;
pub mod writer;

pub use config::Config;
pub use error::ObfuscateError;
pub use model::{Rewritten, Token, TokenKind};
pub use processor::tables::RunState;

/// A configured obfuscator. Each call starts from a fresh [`RunState`]
/// unless one is supplied.
#[derive(Debug, Clone, Default)]
pub struct Obfuscator {
    config: Config,
}

impl Obfuscator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Obfuscate `source` into a standalone program: prelude, then body.
    pub fn obfuscate(&self, source: &str) -> error::Result<String> {
        let mut state = RunState::default();
        self.obfuscate_with(source, &mut state)
            .map(Rewritten::into_program)
    }

    /// Like [`Obfuscator::obfuscate`], but against caller-owned tables so
    /// that names and slots can be inspected or carried into another run.
    pub fn obfuscate_with(&self, source: &str, state: &mut RunState) -> error::Result<Rewritten> {
        processor::run(source, &self.config, state)
    }
}

/// Obfuscate with the default configuration.
pub fn obfuscate(source: &str) -> error::Result<String> {
    Obfuscator::default().obfuscate(source)
}
