//! Indented tree dumps and the S-expression form of a node.

use std::fmt::Write;

use rowan::TextRange;

use crate::node::Node;

pub struct TreePrinter<'n> {
    root: &'n Node,
    spans: bool,
}

impl<'n> TreePrinter<'n> {
    pub fn new(root: &'n Node) -> Self {
        Self { root, spans: false }
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        self.format_node(self.root, 0, w)
    }

    fn format_node(&self, node: &Node, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        write!(w, "{}{}{}", prefix, node.kind(), self.span_str(node.span()))?;
        if let Some(text) = node.text() {
            write!(w, " {}", text)?;
        }
        writeln!(w)?;
        for child in node.children() {
            self.format_node(child, indent + 1, w)?;
        }
        Ok(())
    }

    fn span_str(&self, range: TextRange) -> String {
        if !self.spans {
            return String::new();
        }
        format!(
            " [{}..{}]",
            u32::from(range.start()),
            u32::from(range.end())
        )
    }
}

impl Node {
    pub fn printer(&self) -> TreePrinter<'_> {
        TreePrinter::new(self)
    }
}

/// `(Kind child ...)`; text leaves print as `(Kind "text")`, bare markers as `Kind`.
impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_leaf() {
            return match self.text() {
                Some(text) => write!(f, "({} {:?})", self.kind(), text),
                None => write!(f, "{}", self.kind()),
            };
        }
        write!(f, "({}", self.kind())?;
        for child in self.children() {
            write!(f, " {}", child)?;
        }
        f.write_char(')')
    }
}
