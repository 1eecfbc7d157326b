//! CMISQL abstract syntax tree.
//!
//! This crate holds the tree the parser in `cmisql-lib` produces:
//! - `kind` - the closed set of node kinds
//! - `node` - the homogeneous `Node` and its accessors
//! - `views` - typed read-only views that name positional children
//! - `printer` - indented tree dumps and the S-expression `Display`
//!
//! Trees are built bottom-up and never mutated after a child is attached.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod kind;
mod node;
mod printer;
pub mod views;

#[cfg(test)]
mod printer_tests;
#[cfg(test)]
mod views_tests;

pub use kind::NodeKind;
pub use node::{Descendants, Node};
pub use printer::TreePrinter;

pub use rowan::{TextRange, TextSize};

/// Serializes a range as `{ "start": u32, "end": u32 }`.
pub fn serialize_text_range<S: serde::Serializer>(
    range: &TextRange,
    s: S,
) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeStruct;
    let mut state = s.serialize_struct("TextRange", 2)?;
    state.serialize_field("start", &u32::from(range.start()))?;
    state.serialize_field("end", &u32::from(range.end()))?;
    state.end()
}
