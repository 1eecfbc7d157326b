//! Identifiers, literals, parameters and comparison operators.

use cmisql_core::{Node, NodeKind};

use crate::diagnostics::Rule;
use crate::lexer::TokenKind;
use crate::lexer::token_sets::{KEYWORD_OR_ID, LITERAL_OR_PARAMETER_FIRST};
use crate::parser::Parser;
use crate::parser::core::PResult;

impl Parser<'_> {
    /// `ID`, or in permissive grammars `" keyWordOrId "` with the quotes stripped.
    pub(crate) fn identifier(&mut self) -> PResult<Node> {
        self.rule(Rule::Identifier, None, |p| match p.peek(0) {
            TokenKind::Id => {
                let token = p.bump();
                Ok(p.leaf(NodeKind::Identifier, token))
            }
            TokenKind::DoubleQuote => {
                if p.strict() {
                    return Err(p.failed_guard(Rule::Identifier));
                }
                let start = p.start();
                p.bump();
                if !p.at_any(KEYWORD_OR_ID) {
                    return Err(p.mismatched_set("keyword or ID"));
                }
                let word = p.bump();
                let text = p.text(&word);
                p.expect(TokenKind::DoubleQuote)?;
                Ok(Node::leaf(NodeKind::Identifier, p.span_from(start), text))
            }
            _ if p.strict() => {
                let token = p.expect(TokenKind::Id)?;
                Ok(p.leaf(NodeKind::Identifier, token))
            }
            _ => Err(p.no_viable_alternative()),
        })
    }

    pub(crate) fn column_name(&mut self) -> PResult<Node> {
        self.rule(Rule::ColumnName, None, Self::identifier)
    }

    pub(crate) fn table_name(&mut self) -> PResult<Node> {
        self.rule(Rule::TableName, None, Self::identifier)
    }

    pub(crate) fn correlation_name(&mut self) -> PResult<Node> {
        self.rule(Rule::CorrelationName, None, Self::identifier)
    }

    /// `AS? name` after a value or table, when present. Strict grammars never
    /// start a bare alias at `"`.
    pub(crate) fn optional_alias(
        &mut self,
        name: fn(&mut Self) -> PResult<Node>,
    ) -> PResult<Option<Node>> {
        let bare = match self.peek(0) {
            TokenKind::Id => true,
            TokenKind::DoubleQuote => !self.strict(),
            _ => false,
        };
        if self.eat(TokenKind::As).is_some() || bare {
            return name(self).map(Some);
        }
        Ok(None)
    }

    pub(crate) fn literal_or_parameter_name(&mut self) -> PResult<Node> {
        self.rule(Rule::LiteralOrParameterName, None, |p| {
            if p.at(TokenKind::Colon) {
                p.parameter_name()
            } else {
                p.literal()
            }
        })
    }

    pub(crate) fn literal(&mut self) -> PResult<Node> {
        self.rule(Rule::Literal, None, |p| match p.peek(0) {
            TokenKind::DecimalIntegerLiteral | TokenKind::FloatingPointLiteral => {
                let token = p.bump();
                Ok(p.leaf(NodeKind::NumericLiteral, token))
            }
            TokenKind::QuotedString => {
                let token = p.bump();
                Ok(p.leaf(NodeKind::StringLiteral, token))
            }
            TokenKind::True | TokenKind::False => {
                let token = p.bump();
                Ok(p.leaf(NodeKind::BooleanLiteral, token))
            }
            TokenKind::Timestamp => {
                let start = p.start();
                p.bump();
                let value = p.expect(TokenKind::QuotedString)?;
                let text = p.text(&value);
                Ok(Node::leaf(NodeKind::DatetimeLiteral, p.span_from(start), text))
            }
            _ => Err(p.mismatched_set("literal")),
        })
    }

    /// `: identifier`.
    pub(crate) fn parameter_name(&mut self) -> PResult<Node> {
        self.rule(Rule::ParameterName, None, |p| {
            let start = p.start();
            p.expect(TokenKind::Colon)?;
            let name = p.identifier()?;
            Ok(p.node(NodeKind::Parameter, start, vec![name]))
        })
    }

    pub(crate) fn comp_op(&mut self) -> PResult<Node> {
        self.rule(Rule::CompOp, None, |p| {
            let kind = match p.peek(0) {
                TokenKind::Equals => NodeKind::Equals,
                TokenKind::NotEquals => NodeKind::NotEquals,
                TokenKind::LessThan => NodeKind::LessThan,
                TokenKind::GreaterThan => NodeKind::GreaterThan,
                TokenKind::LessThanOrEquals => NodeKind::LessThanOrEquals,
                TokenKind::GreaterThanOrEquals => NodeKind::GreaterThanOrEquals,
                _ => return Err(p.mismatched_set("'=', '<>', '<', '>', '<=', '>='")),
            };
            let token = p.bump();
            Ok(p.leaf(kind, token))
        })
    }

    pub(crate) fn character_string_literal(&mut self) -> PResult<Node> {
        self.rule(Rule::CharacterStringLiteral, None, |p| {
            let token = p.expect(TokenKind::QuotedString)?;
            Ok(p.leaf(NodeKind::StringLiteral, token))
        })
    }

    pub(crate) fn text_search_expression(&mut self) -> PResult<Node> {
        self.rule(Rule::TextSearchExpression, None, |p| {
            let token = p.expect(TokenKind::QuotedString)?;
            Ok(p.leaf(NodeKind::TextSearchExpression, token))
        })
    }

    pub(crate) fn folder_id(&mut self) -> PResult<Node> {
        self.rule(Rule::FolderId, None, Self::character_string_literal)
    }

    /// Whether the current token can start `literalOrParameterName`.
    pub(crate) fn at_literal_or_parameter(&self) -> bool {
        self.at_any(LITERAL_OR_PARAMETER_FIRST)
    }
}
