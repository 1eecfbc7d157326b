use rowan::{TextRange, TextSize};

use crate::views::{
    ColumnRefView, ComparisonView, FunctionView, InView, JoinType, JoinView, PredExistsView,
    QueryView, SortDirection, SortSpecView, SourceView,
};
use crate::{Node, NodeKind};

fn at(offset: u32) -> TextRange {
    TextRange::empty(TextSize::from(offset))
}

fn ident(name: &str) -> Node {
    Node::leaf(NodeKind::Identifier, at(0), name)
}

fn column_ref(name: &str, qualifier: Option<&str>) -> Node {
    let mut children = vec![ident(name)];
    children.extend(qualifier.map(ident));
    Node::new(NodeKind::ColumnRef, at(0), children)
}

fn source(table: &str, joins: Vec<Node>) -> Node {
    let mut children = vec![Node::new(NodeKind::TableRef, at(0), vec![ident(table)])];
    children.extend(joins);
    Node::new(NodeKind::Source, at(0), children)
}

#[test]
fn column_ref_names_children() {
    let node = column_ref("cmis:name", Some("D"));
    let view = ColumnRefView::cast(&node).unwrap();
    assert_eq!(view.column_name(), Some("cmis:name"));
    assert_eq!(view.qualifier(), Some("D"));

    let bare = column_ref("x", None);
    assert_eq!(ColumnRefView::cast(&bare).unwrap().qualifier(), None);
}

#[test]
fn cast_checks_kind() {
    let node = ident("x");
    assert!(ColumnRefView::cast(&node).is_none());
    assert!(QueryView::cast(&node).is_none());
}

#[test]
fn null_predicate_polarity() {
    let is_null = Node::new(
        NodeKind::PredExists,
        at(0),
        vec![column_ref("p", None), Node::marker(NodeKind::Not, at(0))],
    );
    let is_not_null = Node::new(NodeKind::PredExists, at(0), vec![column_ref("p", None)]);

    assert!(PredExistsView::cast(&is_null).unwrap().is_null());
    assert!(!PredExistsView::cast(&is_not_null).unwrap().is_null());
}

#[test]
fn quantified_comparison() {
    let node = Node::new(
        NodeKind::PredComparison,
        at(0),
        vec![
            Node::marker(NodeKind::Any, at(0)),
            Node::leaf(NodeKind::NumericLiteral, at(0), "1"),
            Node::leaf(NodeKind::Equals, at(0), "="),
            column_ref("p", None),
        ],
    );
    let view = ComparisonView::cast(&node).unwrap();
    assert!(view.is_quantified());
    assert_eq!(view.operator(), Some(NodeKind::Equals));
    assert_eq!(view.lhs().and_then(Node::text), Some("1"));
    assert_eq!(view.rhs().map(Node::kind), Some(NodeKind::ColumnRef));
}

#[test]
fn join_without_type() {
    let join = Node::new(
        NodeKind::Join,
        at(0),
        vec![
            source("B", vec![]),
            Node::new(
                NodeKind::OnEquals,
                at(0),
                vec![column_ref("x", Some("A")), column_ref("y", Some("B"))],
            ),
        ],
    );
    let view = JoinView::cast(&join).unwrap();
    assert_eq!(view.join_type(), None);
    let condition = view.condition().unwrap();
    assert_eq!(condition.lhs().unwrap().qualifier(), Some("A"));
    assert_eq!(condition.rhs().unwrap().column_name(), Some("y"));
    assert_eq!(view.source().unwrap().table().map(Node::kind), Some(NodeKind::TableRef));

    let left = Node::new(
        NodeKind::Join,
        at(0),
        vec![
            source("B", vec![]),
            Node::leaf(NodeKind::Left, at(0), "LEFT"),
            Node::new(
                NodeKind::OnEquals,
                at(0),
                vec![column_ref("x", None), column_ref("y", None)],
            ),
        ],
    );
    assert_eq!(JoinView::cast(&left).unwrap().join_type(), Some(JoinType::Left));
}

#[test]
fn query_parts() {
    let order = Node::new(
        NodeKind::Order,
        at(0),
        vec![
            Node::new(
                NodeKind::SortSpec,
                at(0),
                vec![column_ref("a", None), Node::marker(NodeKind::Asc, at(0))],
            ),
            Node::new(
                NodeKind::SortSpec,
                at(0),
                vec![
                    column_ref("b", None),
                    Node::leaf(NodeKind::Desc, at(0), "DESC"),
                ],
            ),
        ],
    );
    let query = Node::new(
        NodeKind::Query,
        at(0),
        vec![
            Node::marker(NodeKind::AllColumns, at(0)),
            source("T", vec![]),
            order,
        ],
    );

    let view = QueryView::cast(&query).unwrap();
    assert_eq!(view.columns().count(), 1);
    assert!(view.where_clause().is_none());
    assert_eq!(view.source().unwrap().joins().count(), 0);

    let directions: Vec<_> = view.order_by().map(|s: SortSpecView| s.direction()).collect();
    assert_eq!(directions, vec![SortDirection::Asc, SortDirection::Desc]);
}

#[test]
fn childless_nodes_yield_nothing() {
    let empty = |kind| Node::new(kind, at(0), vec![]);

    let function = empty(NodeKind::Function);
    let view = FunctionView::cast(&function).unwrap();
    assert_eq!(view.name(), None);
    assert!(view.arguments().is_empty());

    let source = empty(NodeKind::Source);
    let view = SourceView::cast(&source).unwrap();
    assert_eq!(view.table(), None);
    assert_eq!(view.joins().count(), 0);

    let join = empty(NodeKind::Join);
    let view = JoinView::cast(&join).unwrap();
    assert!(view.condition().is_none());
    assert!(view.source().is_none());

    let comparison = empty(NodeKind::PredComparison);
    let view = ComparisonView::cast(&comparison).unwrap();
    assert!(!view.is_quantified());
    assert_eq!(view.operator(), None);

    let pred_in = empty(NodeKind::PredIn);
    assert!(InView::cast(&pred_in).unwrap().values().is_empty());

    let query = empty(NodeKind::Query);
    let view = QueryView::cast(&query).unwrap();
    assert_eq!(view.columns().count(), 0);
    assert!(view.source().is_none());

    let spec = empty(NodeKind::SortSpec);
    assert_eq!(SortSpecView::cast(&spec).unwrap().direction(), SortDirection::Asc);
}
