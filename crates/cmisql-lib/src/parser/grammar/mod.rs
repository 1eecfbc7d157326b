//! Grammar productions for CMISQL.
//!
//! Each rule is a method on `Parser`, grouped by clause. Decisions between
//! alternatives are made up front by the classifiers in `lookahead`; only
//! qualifiers, nested joins and parenthesized tables parse speculatively.

mod atoms;
mod conditions;
mod lookahead;
mod query;
mod tables;
