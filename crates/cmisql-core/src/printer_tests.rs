use rowan::{TextRange, TextSize};

use crate::{Node, NodeKind};

fn range(start: u32, end: u32) -> TextRange {
    TextRange::new(TextSize::from(start), TextSize::from(end))
}

/// `SELECT * FROM T`
fn select_all() -> Node {
    Node::new(
        NodeKind::Query,
        range(0, 15),
        vec![
            Node::marker(NodeKind::AllColumns, range(7, 8)),
            Node::new(
                NodeKind::Source,
                range(14, 15),
                vec![Node::new(
                    NodeKind::TableRef,
                    range(14, 15),
                    vec![Node::leaf(NodeKind::Identifier, range(14, 15), "T")],
                )],
            ),
        ],
    )
}

#[test]
fn dump_tree() {
    insta::assert_snapshot!(select_all().printer().dump(), @r"
    Query
      AllColumns
      Source
        TableRef
          Identifier T
    ");
}

#[test]
fn dump_tree_with_spans() {
    insta::assert_snapshot!(select_all().printer().with_spans(true).dump(), @r"
    Query [0..15]
      AllColumns [7..8]
      Source [14..15]
        TableRef [14..15]
          Identifier [14..15] T
    ");
}

#[test]
fn display_as_s_expression() {
    assert_eq!(
        select_all().to_string(),
        r#"(Query AllColumns (Source (TableRef (Identifier "T"))))"#
    );
}

#[test]
fn display_quotes_leaf_text() {
    let lit = Node::leaf(NodeKind::StringLiteral, range(0, 4), "'a'");
    assert_eq!(lit.to_string(), r#"(StringLiteral "'a'")"#);
}
