//! Typed views over `Node`.
//!
//! Each view borrows a node of one kind and names its positional children.
//! Cast is checked only against the kind. Accessors return `None` when a
//! hand-built node lacks the child the parser would have produced.

use crate::kind::NodeKind;
use crate::node::Node;

macro_rules! node_view {
    ($name:ident, $($kind:ident)|+) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name<'a>(&'a Node);

        impl<'a> $name<'a> {
            pub fn cast(node: &'a Node) -> Option<Self> {
                matches!(node.kind(), $(NodeKind::$kind)|+).then_some(Self(node))
            }

            pub fn as_node(&self) -> &'a Node {
                self.0
            }
        }
    };
}

node_view!(QueryView, Query);
node_view!(ColumnView, Column);
node_view!(AllColumnsView, AllColumns);
node_view!(ColumnRefView, ColumnRef);
node_view!(FunctionView, Function);
node_view!(SourceView, Source);
node_view!(TableRefView, TableRef);
node_view!(JoinView, Join);
node_view!(OnEqualsView, OnEquals);
node_view!(ComparisonView, PredComparison);
node_view!(InView, PredIn);
node_view!(LikeView, PredLike);
node_view!(PredExistsView, PredExists);
node_view!(FtsView, PredFts);
node_view!(FolderView, PredChild | PredDescendant);
node_view!(SortSpecView, SortSpec);
node_view!(ParameterView, Parameter);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinType {
    Inner,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

fn identifier_text(node: &Node) -> &str {
    node.text().unwrap_or_default()
}

fn rest(node: &Node) -> &[Node] {
    node.children().get(1..).unwrap_or_default()
}

impl<'a> QueryView<'a> {
    /// `AllColumns` or `Columns`.
    pub fn select_list(&self) -> Option<&'a Node> {
        self.0.child(0)
    }

    pub fn columns(self) -> impl Iterator<Item = &'a Node> + 'a {
        let items: &'a [Node] = match self.select_list() {
            Some(list) if list.kind() == NodeKind::Columns => list.children(),
            Some(list) => std::slice::from_ref(list),
            None => &[],
        };
        items.iter()
    }

    pub fn source(&self) -> Option<SourceView<'a>> {
        self.0.child_of_kind(NodeKind::Source).map(SourceView)
    }

    /// The `Disjunction` of the `WHERE` clause.
    pub fn where_clause(&self) -> Option<&'a Node> {
        self.0.child_of_kind(NodeKind::Disjunction)
    }

    pub fn order_by(self) -> impl Iterator<Item = SortSpecView<'a>> + 'a {
        self.0
            .child_of_kind(NodeKind::Order)
            .map(Node::children)
            .unwrap_or_default()
            .iter()
            .filter_map(SortSpecView::cast)
    }
}

impl<'a> ColumnView<'a> {
    /// `ColumnRef` or `Function`.
    pub fn value(&self) -> Option<&'a Node> {
        self.0.child(0)
    }

    pub fn alias(&self) -> Option<&'a str> {
        self.0.child(1).map(identifier_text)
    }
}

impl<'a> AllColumnsView<'a> {
    pub fn qualifier(&self) -> Option<&'a str> {
        self.0.child(0).map(identifier_text)
    }
}

impl<'a> ColumnRefView<'a> {
    pub fn column_name(&self) -> Option<&'a str> {
        self.0.child(0).map(identifier_text)
    }

    pub fn qualifier(&self) -> Option<&'a str> {
        self.0.child(1).map(identifier_text)
    }
}

impl<'a> FunctionView<'a> {
    pub fn name(&self) -> Option<&'a str> {
        self.0.child(0).map(identifier_text)
    }

    pub fn arguments(&self) -> &'a [Node] {
        rest(self.0)
    }
}

impl<'a> SourceView<'a> {
    /// `TableRef` or `Table`.
    pub fn table(&self) -> Option<&'a Node> {
        self.0.child(0)
    }

    pub fn joins(self) -> impl Iterator<Item = JoinView<'a>> + 'a {
        rest(self.0).iter().filter_map(JoinView::cast)
    }
}

impl<'a> TableRefView<'a> {
    pub fn table_name(&self) -> Option<&'a str> {
        self.0.child(0).map(identifier_text)
    }

    pub fn correlation_name(&self) -> Option<&'a str> {
        self.0.child(1).map(identifier_text)
    }
}

impl<'a> JoinView<'a> {
    pub fn source(&self) -> Option<SourceView<'a>> {
        self.0.child_of_kind(NodeKind::Source).map(SourceView)
    }

    pub fn join_type(&self) -> Option<JoinType> {
        self.0.children().iter().find_map(|c| match c.kind() {
            NodeKind::Inner => Some(JoinType::Inner),
            NodeKind::Left => Some(JoinType::Left),
            _ => None,
        })
    }

    pub fn condition(&self) -> Option<OnEqualsView<'a>> {
        self.0.children().iter().find_map(OnEqualsView::cast)
    }
}

impl<'a> OnEqualsView<'a> {
    pub fn lhs(&self) -> Option<ColumnRefView<'a>> {
        self.0.child(0).and_then(ColumnRefView::cast)
    }

    pub fn rhs(&self) -> Option<ColumnRefView<'a>> {
        self.0.child(1).and_then(ColumnRefView::cast)
    }
}

impl<'a> ComparisonView<'a> {
    /// `literal op ANY column`.
    pub fn is_quantified(&self) -> bool {
        self.0.child(0).is_some_and(|c| c.kind() == NodeKind::Any)
    }

    pub fn lhs(&self) -> Option<&'a Node> {
        self.0.child(1)
    }

    pub fn operator(&self) -> Option<NodeKind> {
        self.0.child(2).map(Node::kind)
    }

    pub fn rhs(&self) -> Option<&'a Node> {
        self.0.child(3)
    }
}

impl<'a> InView<'a> {
    pub fn is_quantified(&self) -> bool {
        self.0.child(0).is_some_and(|c| c.kind() == NodeKind::Any)
    }

    pub fn column(&self) -> Option<ColumnRefView<'a>> {
        self.0.child(1).and_then(ColumnRefView::cast)
    }

    pub fn values(&self) -> &'a [Node] {
        self.0
            .child_of_kind(NodeKind::List)
            .map(Node::children)
            .unwrap_or_default()
    }

    pub fn is_negated(&self) -> bool {
        self.0.has_child(NodeKind::Not)
    }
}

impl<'a> LikeView<'a> {
    pub fn column(&self) -> Option<ColumnRefView<'a>> {
        self.0.child(0).and_then(ColumnRefView::cast)
    }

    pub fn pattern(&self) -> Option<&'a Node> {
        self.0.child(1)
    }

    pub fn is_negated(&self) -> bool {
        self.0.has_child(NodeKind::Not)
    }
}

impl<'a> PredExistsView<'a> {
    pub fn column(&self) -> Option<ColumnRefView<'a>> {
        self.0.child(0).and_then(ColumnRefView::cast)
    }

    /// `IS NULL` is encoded by the presence of the `Not` marker.
    pub fn is_null(&self) -> bool {
        self.0.has_child(NodeKind::Not)
    }
}

impl<'a> FtsView<'a> {
    /// Raw expression text, quotes included.
    pub fn expression(&self) -> Option<&'a Node> {
        self.0.child(0)
    }

    pub fn qualifier(&self) -> Option<&'a str> {
        self.0.child(1).map(identifier_text)
    }
}

impl<'a> FolderView<'a> {
    pub fn is_descendant(&self) -> bool {
        self.0.kind() == NodeKind::PredDescendant
    }

    pub fn folder_id(&self) -> Option<&'a Node> {
        self.0.child(0)
    }

    pub fn qualifier(&self) -> Option<&'a str> {
        self.0.child(1).map(identifier_text)
    }
}

impl<'a> SortSpecView<'a> {
    pub fn column(&self) -> Option<ColumnRefView<'a>> {
        self.0.child(0).and_then(ColumnRefView::cast)
    }

    pub fn direction(&self) -> SortDirection {
        match self.0.child(1).map(Node::kind) {
            Some(NodeKind::Desc) => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }
}

impl<'a> ParameterView<'a> {
    pub fn name(&self) -> Option<&'a str> {
        self.0.child(0).map(identifier_text)
    }
}
