mod message;
mod printer;


use cmisql_core::serialize_text_range;
use rowan::TextRange;
use serde::Serialize;

pub use message::{DiagnosticKind, Paraphrase, Rule};
pub use printer::DiagnosticPrinter;

/// The single structural failure of a parse.
///
/// Carries where it happened, what was found and expected, and the grammar
/// context active at that point: the innermost paraphrase and the chain of
/// rules from `query` down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    kind: DiagnosticKind,
    #[serde(serialize_with = "serialize_text_range")]
    span: TextRange,
    line: u32,
    column: u32,
    found: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    expected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    paraphrase: Option<Paraphrase>,
    rules: Vec<Rule>,
    detail: String,
    message: String,
}

/// Position and grammar context of a failure.
#[derive(Debug, Clone)]
pub(crate) struct Site {
    pub span: TextRange,
    pub line: u32,
    pub column: u32,
    pub rules: Vec<Rule>,
    pub paraphrase: Option<Paraphrase>,
}

impl Diagnostic {
    pub(crate) fn new(
        kind: DiagnosticKind,
        site: Site,
        found: String,
        expected: Option<String>,
    ) -> Self {
        let detail = kind.message(&found, expected.as_deref());
        let chain = site
            .rules
            .iter()
            .map(Rule::name)
            .collect::<Vec<_>>()
            .join(", ");
        let mut message = format!("line {}:{} [{}] {}", site.line, site.column, chain, detail);
        if let Some(paraphrase) = site.paraphrase {
            message.push(' ');
            message.push_str(paraphrase.label());
        }

        Self {
            kind,
            span: site.span,
            line: site.line,
            column: site.column,
            found,
            expected,
            paraphrase: site.paraphrase,
            rules: site.rules,
            detail,
            message,
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn span(&self) -> TextRange {
        self.span
    }

    /// 1-based line.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 0-based column, in characters.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Offending token as quoted text, or `<EOF>`.
    pub fn found(&self) -> &str {
        &self.found
    }

    pub fn expected(&self) -> Option<&str> {
        self.expected.as_deref()
    }

    pub fn paraphrase(&self) -> Option<Paraphrase> {
        self.paraphrase
    }

    /// Active rules, outermost first.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The kind-specific part of the message.
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// `line L:C [rule, ...] detail paraphrase`.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn printer<'a>(&'a self, source: &'a str) -> DiagnosticPrinter<'a> {
        DiagnosticPrinter::new(self, source)
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Diagnostic {}
