//! CMISQL parser: lexer, recursive-descent grammar, and diagnostics.
//!
//! This crate turns query text into the tree defined in `cmisql-core`:
//! - `lexer` - token kinds, reference lexer, and the rewindable token stream
//! - `parser` - grammar rules, disambiguation, and tree construction
//! - `diagnostics` - structured parse failures and snippet rendering
//! - `options` - dialect and limits, and the reusable `QueryParser`
//!
//! Parsing fails fast: the first structural error aborts with one [`Error`].

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod lexer;
pub mod options;
pub mod parser;

#[cfg(test)]
pub mod test_utils;

pub use cmisql_core::{Node, NodeKind, TreePrinter, views};
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticPrinter, Paraphrase, Rule};
pub use lexer::{Token, TokenKind, TokenStream, lex};
pub use options::{DEFAULT_RECURSION_LIMIT, Dialect, ParseOptions, QueryParser};

/// Errors that can occur during query parsing.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Structural failure with the composed message and its cause.
    #[error("{message}")]
    Syntax {
        message: String,
        #[source]
        cause: Box<Diagnostic>,
    },

    /// Recursion limit exhausted (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,
}

impl Error {
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Self::Syntax { cause, .. } => Some(&**cause),
            Self::RecursionLimitExceeded => None,
        }
    }

    pub fn kind(&self) -> Option<DiagnosticKind> {
        self.diagnostic().map(Diagnostic::kind)
    }

    /// Renders the failure with a source snippet.
    pub fn render(&self, source: &str) -> String {
        self.render_colored(source, false)
    }

    pub fn render_colored(&self, source: &str, colored: bool) -> String {
        match self.diagnostic() {
            Some(diag) => diag.printer(source).colored(colored).render(),
            None => self.to_string(),
        }
    }
}

impl From<Diagnostic> for Error {
    fn from(cause: Diagnostic) -> Self {
        Self::Syntax {
            message: cause.message().to_string(),
            cause: Box::new(cause),
        }
    }
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Parses query text with default limits.
pub fn parse(text: &str, dialect: Dialect) -> Result<Node> {
    QueryParser::new(ParseOptions::default().with_dialect(dialect)).parse(text)
}
