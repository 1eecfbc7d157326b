//! Token classification for the grammar's decision points.
//!
//! These look ahead without consuming and only inspect token kinds. Dialect
//! guards are checked later, when the chosen alternative is parsed.

use crate::lexer::TokenKind;
use crate::lexer::token_sets::{
    COMPARISON_OPERATORS, KEYWORD_OR_ID, KEYWORDS, LITERAL_OR_PARAMETER_FIRST,
};
use crate::parser::Parser;

/// Alternatives of `predicate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum PredicateShape {
    Comparison,
    In,
    Like,
    Null,
    QuantifiedComparison,
    QuantifiedIn,
    TextSearch,
    Folder,
}

impl Parser<'_> {
    /// Tokens spanned by an identifier at `k`: 1 for `ID`, 3 for `" word "`, 0 otherwise.
    pub(super) fn identifier_width(&self, k: usize) -> usize {
        match self.peek(k) {
            TokenKind::Id => 1,
            TokenKind::DoubleQuote
                if KEYWORD_OR_ID.contains(self.peek(k + 1))
                    && self.peek(k + 2) == TokenKind::DoubleQuote =>
            {
                3
            }
            _ => 0,
        }
    }

    /// Identifier-shaped or a keyword used as a function name.
    fn name_width(&self, k: usize) -> Option<usize> {
        match self.identifier_width(k) {
            0 if KEYWORDS.contains(self.peek(k)) && self.peek(k + 1) == TokenKind::LParen => Some(1),
            0 => None,
            width => Some(width),
        }
    }

    /// A name followed by `(`.
    pub(super) fn at_function_call(&self) -> bool {
        self.name_width(0)
            .is_some_and(|width| self.peek(width) == TokenKind::LParen)
    }

    /// Identifier followed by `follow`, as in `q.*` or `q.col`.
    pub(super) fn at_identifier_then(&self, follow: TokenKind) -> bool {
        let width = self.identifier_width(0);
        width > 0 && self.peek(width) == follow
    }

    /// Index just past the `)` matching the `(` at `k`.
    fn skip_parenthesized(&self, k: usize) -> Option<usize> {
        debug_assert_eq!(self.peek(k), TokenKind::LParen);
        let mut depth = 0usize;
        let mut i = k;
        loop {
            match self.peek(i) {
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(i + 1);
                    }
                }
                TokenKind::Eof => return None,
                _ => {}
            }
            i += 1;
        }
    }

    /// Index just past a value expression at `k`: a name, `q.name`, or a call.
    fn skip_value_expression(&self, k: usize) -> Option<usize> {
        let width = self.name_width(k)?;
        let next = k + width;
        match self.peek(next) {
            TokenKind::LParen => self.skip_parenthesized(next),
            TokenKind::Dot => {
                let column = self.identifier_width(next + 1);
                (column > 0).then_some(next + 1 + column)
            }
            _ => Some(next),
        }
    }

    /// Call-shaped predicate keyword followed by a comparison, as in
    /// `CONTAINS(x) = 1`. Only permissive grammars name functions this way.
    fn at_keyword_call_comparison(&self) -> bool {
        if self.strict() || self.peek(1) != TokenKind::LParen {
            return false;
        }
        self.skip_parenthesized(1)
            .is_some_and(|end| COMPARISON_OPERATORS.contains(self.peek(end)))
    }

    /// Literal keyword naming a function, as in `TRUE(x)`. Permissive only.
    fn at_keyword_function(&self) -> bool {
        !self.strict() && KEYWORDS.contains(self.peek(0)) && self.peek(1) == TokenKind::LParen
    }

    /// Picks the predicate alternative by scanning past the leading operand.
    pub(super) fn classify_predicate(&self) -> Option<PredicateShape> {
        match self.peek(0) {
            TokenKind::Any if self.strict() || self.peek(1) != TokenKind::LParen => {
                return Some(PredicateShape::QuantifiedIn);
            }
            TokenKind::Contains if !self.at_keyword_call_comparison() => {
                return Some(PredicateShape::TextSearch);
            }
            TokenKind::InFolder | TokenKind::InTree if !self.at_keyword_call_comparison() => {
                return Some(PredicateShape::Folder);
            }
            kind if LITERAL_OR_PARAMETER_FIRST.contains(kind) && !self.at_keyword_function() => {
                return Some(PredicateShape::QuantifiedComparison);
            }
            _ => {}
        }

        let end = self.skip_value_expression(0)?;
        match self.peek(end) {
            kind if COMPARISON_OPERATORS.contains(kind) => Some(PredicateShape::Comparison),
            TokenKind::Not => match self.peek(end + 1) {
                TokenKind::In => Some(PredicateShape::In),
                TokenKind::Like => Some(PredicateShape::Like),
                _ => None,
            },
            TokenKind::In => Some(PredicateShape::In),
            TokenKind::Like => Some(PredicateShape::Like),
            TokenKind::Is => Some(PredicateShape::Null),
            _ => None,
        }
    }
}
