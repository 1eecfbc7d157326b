//! Parse options and the reusable parser facade.

use cmisql_core::Node;
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::lexer::{TokenStream, lex};
use crate::parser::Parser;

pub const DEFAULT_RECURSION_LIMIT: u32 = 256;

/// Grammar dialect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// CMIS standard grammar.
    #[default]
    Strict,
    /// Vendor extensions: quoted keyword identifiers and keyword-named functions.
    Permissive,
}

impl Dialect {
    pub fn is_strict(self) -> bool {
        self == Self::Strict
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strict => f.write_str("strict"),
            Self::Permissive => f.write_str("permissive"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub dialect: Dialect,
    /// Maximum nesting of grouped conditions and tables. `None` = unbounded.
    pub recursion_limit: Option<u32>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            recursion_limit: Some(DEFAULT_RECURSION_LIMIT),
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Depth at which nested conditions and tables abort the parse.
    pub fn with_recursion_limit(mut self, limit: Option<u32>) -> Self {
        self.recursion_limit = limit;
        self
    }
}

/// Immutable, reusable parser configuration.
///
/// Each call to [`parse`](Self::parse) owns its own token stream and rule
/// context, so one `QueryParser` can serve many threads.
#[derive(Debug, Clone, Default)]
pub struct QueryParser {
    options: ParseOptions,
}

impl QueryParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn parse(&self, text: &str) -> Result<Node> {
        self.parse_tokens(lex(text))
    }

    /// Parses a stream produced by an external tokenizer.
    pub fn parse_tokens(&self, tokens: TokenStream<'_>) -> Result<Node> {
        Parser::new(tokens, self.options.dialect)
            .with_recursion_limit(self.options.recursion_limit)
            .parse()
    }
}
