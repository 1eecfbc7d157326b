//! Builder-pattern printer for rendering a diagnostic against its source.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};
use rowan::TextRange;

use super::Diagnostic;

pub struct DiagnosticPrinter<'a> {
    diagnostic: &'a Diagnostic,
    source: &'a str,
    path: Option<&'a str>,
    colored: bool,
}

impl<'a> DiagnosticPrinter<'a> {
    pub fn new(diagnostic: &'a Diagnostic, source: &'a str) -> Self {
        Self {
            diagnostic,
            source,
            path: None,
            colored: false,
        }
    }

    pub fn path(mut self, path: &'a str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let diag = self.diagnostic;
        let label = diag.paraphrase().map_or(diag.detail(), |p| p.label());
        let mut snippet = Snippet::source(self.source)
            .line_start(1)
            .annotation(
                AnnotationKind::Primary
                    .span(adjust_range(diag.span(), self.source.len()))
                    .label(label),
            );

        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        let report = vec![Level::ERROR.primary_title(diag.detail()).element(snippet)];
        write!(w, "{}", renderer.render(&report))
    }
}

/// Zero-width spans (missing tokens at end of input) are widened to one character.
fn adjust_range(range: TextRange, limit: usize) -> std::ops::Range<usize> {
    let start: usize = range.start().into();
    let end: usize = range.end().into();

    if start == end {
        return start..(start + 1).min(limit);
    }

    start..end
}
