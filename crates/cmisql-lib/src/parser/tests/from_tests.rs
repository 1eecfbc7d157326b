use indoc::indoc;

use crate::NodeKind;
use crate::test_utils::{dump, parse_ok};

#[test]
fn table_with_correlation() {
    let res = dump("SELECT * FROM cmis:folder AS f");

    insta::assert_snapshot!(res, @r"
    Query
      AllColumns
      Source
        TableRef
          Identifier cmis:folder
          Identifier f
    ");
}

#[test]
fn inner_join() {
    let res = dump("SELECT * FROM A JOIN B ON A.x = B.y");

    insta::assert_snapshot!(res, @r"
    Query
      AllColumns
      Source
        TableRef
          Identifier A
        Join
          Source
            TableRef
              Identifier B
          OnEquals
            ColumnRef
              Identifier x
              Identifier A
            ColumnRef
              Identifier y
              Identifier B
    ");
}

#[test]
fn join_types() {
    let input = indoc! {"
    SELECT * FROM A
      INNER JOIN B ON A.x = B.x
      LEFT OUTER JOIN C ON A.y = C.y
      LEFT JOIN D ON A.z = D.z
    "};

    let root = parse_ok(input);
    let source = root.child(1).unwrap();
    let join_types: Vec<_> = source
        .children()
        .iter()
        .filter(|n| n.kind() == NodeKind::Join)
        .map(|j| j.child(1).unwrap().text().unwrap().to_string())
        .collect();

    assert_eq!(join_types, ["INNER", "LEFT", "LEFT"]);
    assert_eq!(source.children().len(), 4);
}

#[test]
fn left_outer_join_shape() {
    let res = dump("SELECT * FROM A LEFT OUTER JOIN B b ON A.x = b.x");

    insta::assert_snapshot!(res, @r"
    Query
      AllColumns
      Source
        TableRef
          Identifier A
        Join
          Source
            TableRef
              Identifier B
              Identifier b
          Left LEFT
          OnEquals
            ColumnRef
              Identifier x
              Identifier A
            ColumnRef
              Identifier x
              Identifier b
    ");
}

#[test]
fn parenthesized_join_is_flattened() {
    let res = dump("SELECT * FROM (A JOIN B ON A.x = B.y)");

    insta::assert_snapshot!(res, @r"
    Query
      AllColumns
      Source
        Table
          Source
            TableRef
              Identifier A
            Join
              Source
                TableRef
                  Identifier B
              OnEquals
                ColumnRef
                  Identifier x
                  Identifier A
                ColumnRef
                  Identifier y
                  Identifier B
    ");
}

#[test]
fn redundant_table_parens_leave_no_node() {
    let single = parse_ok("SELECT * FROM (A JOIN B ON A.x = B.y)");
    let double = parse_ok("SELECT * FROM ((A JOIN B ON A.x = B.y))");
    let triple = parse_ok("SELECT * FROM (((A JOIN B ON A.x = B.y)))");

    assert!(single.same_structure(&double));
    assert!(single.same_structure(&triple));
}

#[test]
fn parenthesized_source_joined_again() {
    let res = dump("SELECT * FROM ((A JOIN B ON A.x = B.x) JOIN C ON B.y = C.y)");

    insta::assert_snapshot!(res, @r"
    Query
      AllColumns
      Source
        Table
          Source
            Table
              Source
                TableRef
                  Identifier A
                Join
                  Source
                    TableRef
                      Identifier B
                  OnEquals
                    ColumnRef
                      Identifier x
                      Identifier A
                    ColumnRef
                      Identifier x
                      Identifier B
            Join
              Source
                TableRef
                  Identifier C
              OnEquals
                ColumnRef
                  Identifier y
                  Identifier B
                ColumnRef
                  Identifier y
                  Identifier C
    ");
}

#[test]
fn nested_join_binds_to_inner_table() {
    let res = dump("SELECT * FROM A JOIN B JOIN C ON B.x = C.x ON A.x = B.x");

    insta::assert_snapshot!(res, @r"
    Query
      AllColumns
      Source
        TableRef
          Identifier A
        Join
          Source
            TableRef
              Identifier B
            Join
              Source
                TableRef
                  Identifier C
              OnEquals
                ColumnRef
                  Identifier x
                  Identifier B
                ColumnRef
                  Identifier x
                  Identifier C
          OnEquals
            ColumnRef
              Identifier x
              Identifier A
            ColumnRef
              Identifier x
              Identifier B
    ");
}

#[test]
fn sequential_joins_stay_at_top_level() {
    let root = parse_ok("SELECT * FROM A JOIN B ON A.x = B.x JOIN C ON B.x = C.x");
    let source = root.child(1).unwrap();

    assert_eq!(source.children().len(), 3);
    assert_eq!(source.child(2).unwrap().kind(), NodeKind::Join);
}

#[test]
fn join_source_span_excludes_condition() {
    let root = parse_ok("SELECT * FROM A JOIN B ON A.x = B.x");
    let join = root.child(1).unwrap().child(1).unwrap();
    let source = join.child(0).unwrap();

    assert_eq!(u32::from(join.span().start()), 16);
    assert_eq!(u32::from(source.span().start()), 21);
    assert_eq!(u32::from(source.span().end()), 22);
}
