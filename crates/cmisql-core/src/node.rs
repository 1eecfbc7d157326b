//! Homogeneous tree node.

use std::borrow::Cow;

use rowan::TextRange;
use serde::Serialize;

use crate::kind::NodeKind;
use crate::serialize_text_range;

/// One node of a parsed query.
///
/// Leaves carry the token text, interior nodes carry ordered children.
/// Synthesized markers (a default `Asc`, `SingleValuedProperty`) have neither
/// and an empty span.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Node {
    kind: NodeKind,
    #[serde(serialize_with = "serialize_text_range")]
    span: TextRange,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind, span: TextRange, children: Vec<Node>) -> Self {
        Self {
            kind,
            span,
            text: None,
            children,
        }
    }

    pub fn leaf(kind: NodeKind, span: TextRange, text: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            text: Some(text.into()),
            children: Vec::new(),
        }
    }

    pub fn marker(kind: NodeKind, span: TextRange) -> Self {
        Self::new(kind, span, Vec::new())
    }

    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    #[inline]
    pub fn span(&self) -> TextRange {
        self.span
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    pub fn child_of_kind(&self, kind: NodeKind) -> Option<&Node> {
        self.children.iter().find(|c| c.kind == kind)
    }

    pub fn has_child(&self, kind: NodeKind) -> bool {
        self.child_of_kind(kind).is_some()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn into_children(self) -> Vec<Node> {
        self.children
    }

    /// Pre-order traversal, starting with `self`.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Compares kinds, texts and child order, ignoring spans.
    pub fn same_structure(&self, other: &Node) -> bool {
        self.kind == other.kind
            && self.text == other.text
            && self.children.len() == other.children.len()
            && self
                .children
                .iter()
                .zip(&other.children)
                .all(|(a, b)| a.same_structure(b))
    }

    /// Content of a single-quoted leaf with `\x` escapes resolved.
    ///
    /// Returns `None` for nodes whose text is not a quoted string.
    pub fn unquoted(&self) -> Option<Cow<'_, str>> {
        let text = self.text.as_deref()?;
        let inner = text.strip_prefix('\'')?.strip_suffix('\'')?;
        if !inner.contains('\\') {
            return Some(Cow::Borrowed(inner));
        }

        let mut out = String::with_capacity(inner.len());
        let mut chars = inner.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
                continue;
            }
            out.push(c);
        }
        Some(Cow::Owned(out))
    }
}

pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
