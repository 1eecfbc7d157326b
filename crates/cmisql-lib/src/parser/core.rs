//! Parser state and low-level operations.

use cmisql_core::{Node, NodeKind};
use rowan::{TextRange, TextSize};
use tracing::{debug, trace};

use crate::Error;
use crate::diagnostics::{Diagnostic, DiagnosticKind, Paraphrase, Rule, Site};
use crate::lexer::{Token, TokenKind, TokenSet, TokenStream};
use crate::options::Dialect;

/// Why a rule failed.
///
/// Syntax failures are consumed by speculation; a recursion failure always
/// aborts the whole parse.
#[derive(Debug)]
pub(crate) enum Failure {
    Syntax(Box<Diagnostic>),
    RecursionLimit,
}

pub(crate) type PResult<T> = std::result::Result<T, Failure>;

impl From<Failure> for Error {
    fn from(failure: Failure) -> Self {
        match failure {
            Failure::Syntax(diagnostic) => Error::from(*diagnostic),
            Failure::RecursionLimit => Error::RecursionLimitExceeded,
        }
    }
}

pub struct Parser<'src> {
    pub(super) tokens: TokenStream<'src>,
    dialect: Dialect,
    rules: Vec<Rule>,
    paraphrases: Vec<Paraphrase>,
    depth: u32,
    recursion_limit: Option<u32>,
    trials: u32,
}

impl<'src> Parser<'src> {
    pub fn new(tokens: TokenStream<'src>, dialect: Dialect) -> Self {
        Self {
            tokens,
            dialect,
            rules: Vec::with_capacity(16),
            paraphrases: Vec::with_capacity(8),
            depth: 0,
            recursion_limit: None,
            trials: 0,
        }
    }

    pub fn with_recursion_limit(mut self, limit: Option<u32>) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn parse(mut self) -> Result<Node, Error> {
        debug!(dialect = %self.dialect, tokens = self.tokens.len(), "parsing query");
        match self.query() {
            Ok(root) => {
                debug!(nodes = root.descendants().count(), "parsed query");
                Ok(root)
            }
            Err(failure) => {
                let error = Error::from(failure);
                match error.diagnostic() {
                    Some(diag) => debug!(
                        kind = ?diag.kind(),
                        line = diag.line(),
                        column = diag.column(),
                        "query rejected"
                    ),
                    None => debug!(limit = ?self.recursion_limit, "recursion limit exceeded"),
                }
                Err(error)
            }
        }
    }

    #[inline]
    pub(super) fn strict(&self) -> bool {
        self.dialect.is_strict()
    }

    #[inline]
    pub(super) fn peek(&self, k: usize) -> TokenKind {
        self.tokens.peek(k)
    }

    #[inline]
    pub(super) fn at(&self, kind: TokenKind) -> bool {
        self.peek(0) == kind
    }

    #[inline]
    pub(super) fn at_any(&self, set: TokenSet) -> bool {
        set.contains(self.peek(0))
    }

    pub(super) fn bump(&mut self) -> Token {
        self.tokens.consume()
    }

    pub(super) fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        self.at(kind).then(|| self.bump())
    }

    /// Consumes `kind` or fails without consuming.
    ///
    /// Input end is a missing token; a wrong token followed by the wanted one
    /// is extraneous; anything else is a mismatch.
    pub(super) fn expect(&mut self, kind: TokenKind) -> PResult<Token> {
        if let Some(token) = self.eat(kind) {
            return Ok(token);
        }
        let error_kind = if self.at(TokenKind::Eof) {
            DiagnosticKind::MissingToken
        } else if self.peek(1) == kind {
            DiagnosticKind::UnexpectedToken
        } else {
            DiagnosticKind::MismatchedToken
        };
        Err(self.error(error_kind, Some(kind.display_name().to_string())))
    }

    #[inline]
    pub(super) fn text(&self, token: &Token) -> &'src str {
        self.tokens.text(token)
    }

    /// Start offset of the current token.
    pub(super) fn start(&self) -> TextSize {
        self.tokens.offset()
    }

    /// From `start` to the end of the last consumed token.
    pub(super) fn span_from(&self, start: TextSize) -> TextRange {
        TextRange::new(start, self.tokens.last_end().max(start))
    }

    pub(super) fn node(&self, kind: NodeKind, start: TextSize, children: Vec<Node>) -> Node {
        Node::new(kind, self.span_from(start), children)
    }

    pub(super) fn leaf(&self, kind: NodeKind, token: Token) -> Node {
        Node::leaf(kind, token.span, self.text(&token))
    }

    /// Synthesized marker with an empty span at `offset`.
    pub(super) fn marker(&self, kind: NodeKind, offset: TextSize) -> Node {
        Node::marker(kind, TextRange::empty(offset))
    }

    /// Runs `f` with `rule` (and `paraphrase`) pushed; both are popped on every exit.
    pub(super) fn rule<T>(
        &mut self,
        rule: Rule,
        paraphrase: Option<Paraphrase>,
        f: impl FnOnce(&mut Self) -> PResult<T>,
    ) -> PResult<T> {
        self.rules.push(rule);
        if let Some(p) = paraphrase {
            self.paraphrases.push(p);
        }
        let result = f(self);
        if paraphrase.is_some() {
            self.paraphrases.pop();
        }
        self.rules.pop();
        result
    }

    /// Recursion guard for self-nesting constructs.
    pub(super) fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> PResult<T>) -> PResult<T> {
        if let Some(limit) = self.recursion_limit
            && self.depth >= limit
        {
            return Err(Failure::RecursionLimit);
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Trial parse: on a syntax failure the stream is rewound and `None`
    /// returned, with no diagnostic kept. Fatal failures propagate.
    pub(super) fn speculate<T>(
        &mut self,
        trial: &'static str,
        f: impl FnOnce(&mut Self) -> PResult<T>,
    ) -> PResult<Option<T>> {
        let checkpoint = self.tokens.mark();
        let rules = self.rules.len();
        let paraphrases = self.paraphrases.len();
        trace!(trial, nesting = self.trials, at = u32::from(self.start()), "speculating");

        self.trials += 1;
        let result = f(self);
        self.trials -= 1;
        debug_assert_eq!(rules, self.rules.len());
        debug_assert_eq!(paraphrases, self.paraphrases.len());

        match result {
            Ok(value) => {
                trace!(trial, "speculation succeeded");
                Ok(Some(value))
            }
            Err(Failure::Syntax(diag)) => {
                trace!(trial, kind = ?diag.kind(), "speculation failed, rewinding");
                self.tokens.rewind(checkpoint);
                Ok(None)
            }
            Err(fatal) => Err(fatal),
        }
    }

    /// Failure at the current token.
    pub(super) fn error(&self, kind: DiagnosticKind, expected: Option<String>) -> Failure {
        let token = self.tokens.peek_token(0);
        let found = match token.kind {
            TokenKind::Eof => "<EOF>".to_string(),
            _ => format!("'{}'", self.text(&token)),
        };
        let (line, column) = self.tokens.line_col(token.span.start());
        let site = Site {
            span: token.span,
            line,
            column,
            rules: self.rules.clone(),
            paraphrase: self.paraphrases.last().copied(),
        };
        Failure::Syntax(Box::new(Diagnostic::new(kind, site, found, expected)))
    }

    pub(super) fn no_viable_alternative(&self) -> Failure {
        self.error(DiagnosticKind::NoViableAlternative, None)
    }

    pub(super) fn mismatched_set(&self, expected: &str) -> Failure {
        self.error(DiagnosticKind::MismatchedSet, Some(expected.to_string()))
    }

    /// The dialect forbids an alternative the input otherwise matches.
    pub(super) fn failed_guard(&self, rule: Rule) -> Failure {
        self.error(DiagnosticKind::FailedGuard, Some(rule.name().to_string()))
    }
}
