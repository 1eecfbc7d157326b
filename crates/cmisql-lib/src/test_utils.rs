use crate::{Dialect, Error, Node, ParseOptions, QueryParser};

#[track_caller]
pub fn parse_ok(src: &str) -> Node {
    parse_ok_with(src, Dialect::Strict)
}

#[track_caller]
pub fn parse_ok_with(src: &str, dialect: Dialect) -> Node {
    match crate::parse(src, dialect) {
        Ok(node) => node,
        Err(err) => panic!("Expected valid query, got error:\n{}", err.render(src)),
    }
}

#[track_caller]
pub fn parse_err(src: &str) -> Error {
    parse_err_with(src, Dialect::Strict)
}

#[track_caller]
pub fn parse_err_with(src: &str, dialect: Dialect) -> Error {
    match crate::parse(src, dialect) {
        Ok(node) => panic!("Expected invalid query, got valid:\n{}", node.printer().dump()),
        Err(err) => err,
    }
}

/// Indented tree dump of a valid query.
#[track_caller]
pub fn dump(src: &str) -> String {
    parse_ok(src).printer().dump()
}

#[track_caller]
pub fn dump_permissive(src: &str) -> String {
    parse_ok_with(src, Dialect::Permissive).printer().dump()
}

/// Composed message of an invalid query.
#[track_caller]
pub fn message(src: &str) -> String {
    parse_err(src).to_string()
}

#[track_caller]
pub fn message_permissive(src: &str) -> String {
    parse_err_with(src, Dialect::Permissive).to_string()
}

pub fn parse_limited(src: &str, limit: u32) -> crate::Result<Node> {
    QueryParser::new(ParseOptions::new().with_recursion_limit(Some(limit))).parse(src)
}
