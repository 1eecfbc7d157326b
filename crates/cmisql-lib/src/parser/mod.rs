//! Recursive-descent parser for CMISQL.
//!
//! # Architecture
//!
//! The parser reads a `TokenStream` and builds the `Node` tree bottom-up, one
//! method per grammar rule:
//!
//! - Rule context: every rule runs inside `Parser::rule`, which pushes the rule
//!   name (and a paraphrase for major constructs) and pops them on every exit
//! - Decisions: small classification functions peek ahead without consuming
//! - Speculation: a checkpoint, a trial parse, and a rewind on failure
//! - Dialect: `Strict` or `Permissive`, fixed for the whole parse
//!
//! # Failure
//!
//! There is no recovery. The first structural failure becomes a `Diagnostic`
//! and aborts the parse. Exceeding the recursion limit is fatal and is never
//! swallowed by speculation.

mod core;
mod grammar;

#[cfg(test)]
mod tests;

pub use core::Parser;
