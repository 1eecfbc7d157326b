use indoc::indoc;

use crate::test_utils::{parse_err, parse_limited, parse_ok};
use crate::{DiagnosticKind, Error, Node, NodeKind};

#[test]
fn parsing_is_deterministic() {
    let src = indoc! {"
    SELECT d.cmis:name AS name, SCORE() s
    FROM cmis:document d JOIN cmis:folder f ON d.cmis:parentId = f.cmis:objectId
    WHERE IN_TREE(f, 'root') AND (d.size > 100 OR ANY d.tags IN ('a', 'b'))
    ORDER BY name DESC
    "};

    assert_eq!(parse_ok(src), parse_ok(src));
}

/// The condition inside `( ... )` when it is the whole `WHERE` condition.
fn ungroup(disjunction: &Node) -> &Node {
    let test = disjunction.child(0).unwrap().child(0).unwrap();
    assert_eq!(test.kind(), NodeKind::Disjunction);
    test
}

#[test]
fn grouping_leaves_no_trace() {
    let plain = parse_ok("SELECT * FROM T WHERE A = 1 OR B IS NULL");
    let grouped = parse_ok("SELECT * FROM T WHERE (A = 1 OR B IS NULL)");
    let doubled = parse_ok("SELECT * FROM T WHERE ((A = 1 OR B IS NULL))");

    let condition = plain.child(2).unwrap();
    assert!(ungroup(grouped.child(2).unwrap()).same_structure(condition));
    assert!(ungroup(ungroup(doubled.child(2).unwrap())).same_structure(condition));
    assert!(!grouped.child(2).unwrap().same_structure(condition));
}

#[test]
fn literal_text_round_trips() {
    let src = r"SELECT * FROM T WHERE A = 'it\'s' OR B = -0.5E2 OR C = false OR D IN (42, TIMESTAMP '2010-01-01T00:00:00.000Z')";
    let root = parse_ok(src);

    let literals: Vec<_> = root.descendants().filter(|n| n.kind().is_literal()).collect();
    assert_eq!(literals.len(), 5);
    for literal in literals {
        let slice = &src[std::ops::Range::<usize>::from(literal.span())];
        let text = literal.text().unwrap();
        if literal.kind() == NodeKind::DatetimeLiteral {
            assert!(slice.starts_with("TIMESTAMP") && slice.ends_with(text), "{slice}");
        } else {
            assert_eq!(slice, text);
        }
    }
}

#[test]
fn string_literal_unquoted() {
    let root = parse_ok(r"SELECT * FROM T WHERE A = 'it\'s'");
    let literal = root
        .descendants()
        .find(|n| n.kind() == NodeKind::StringLiteral)
        .unwrap();

    assert_eq!(literal.unquoted().as_deref(), Some("it's"));
}

#[test]
fn empty_input() {
    let err = parse_err("");

    assert_eq!(err.kind(), Some(DiagnosticKind::MissingToken));
    insta::assert_snapshot!(err, @"line 1:0 [query] missing SELECT at <EOF> in query");
}

#[test]
fn trailing_input_rejected() {
    let err = parse_err("SELECT * FROM T a b");

    assert_eq!(err.kind(), Some(DiagnosticKind::UnexpectedToken));
    insta::assert_snapshot!(err, @"line 1:18 [query] extraneous input 'b' expecting <EOF> in query");
}

#[test]
fn deep_grouping_hits_recursion_limit() {
    let depth = 100;
    let src = format!(
        "SELECT * FROM T WHERE {}A = 1{}",
        "(".repeat(depth),
        ")".repeat(depth)
    );

    let err = parse_limited(&src, 64).unwrap_err();
    assert!(matches!(err, Error::RecursionLimitExceeded));
}

#[test]
fn deep_tables_hit_recursion_limit() {
    let depth = 100;
    let src = format!(
        "SELECT * FROM {}A JOIN B ON A.x = B.x{}",
        "(".repeat(depth),
        ")".repeat(depth)
    );

    let err = parse_limited(&src, 64).unwrap_err();
    assert!(matches!(err, Error::RecursionLimitExceeded));
}

#[test]
fn recursion_limit_is_configurable() {
    let src = "SELECT * FROM T WHERE ((A = 1))";

    assert!(parse_limited(src, 3).is_ok());
    assert!(matches!(
        parse_limited(src, 2),
        Err(Error::RecursionLimitExceeded)
    ));
}

#[test]
fn recursion_limit_escapes_speculation() {
    let src = "SELECT * FROM A JOIN B JOIN (((C JOIN D ON C.x = D.x))) ON B.x = C.x ON A.x = B.x";

    assert!(parse_limited(src, 16).is_ok());
    assert!(matches!(
        parse_limited(src, 5),
        Err(Error::RecursionLimitExceeded)
    ));
}

#[test]
fn failed_nested_join_rewinds() {
    let err = parse_err("SELECT * FROM A JOIN B JOIN C");

    assert_eq!(err.kind(), Some(DiagnosticKind::MismatchedToken));
    insta::assert_snapshot!(err, @"line 1:23 [query, fromClause, tableReference, joinedTable, joinSpecification] mismatched input 'JOIN' expecting ON in join condition");
}
