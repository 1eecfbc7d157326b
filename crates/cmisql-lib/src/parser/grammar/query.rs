//! Query root, select list, value expressions and ordering.

use cmisql_core::{Node, NodeKind};

use crate::diagnostics::{Paraphrase, Rule};
use crate::lexer::TokenKind;
use crate::lexer::token_sets::{KEYWORD_OR_ID, SORT_DIRECTIONS};
use crate::parser::Parser;
use crate::parser::core::PResult;

impl Parser<'_> {
    /// `SELECT selectList fromClause whereClause? orderByClause? EOF`
    pub(crate) fn query(&mut self) -> PResult<Node> {
        self.rule(Rule::Query, Some(Paraphrase::Query), |p| {
            let start = p.start();
            p.expect(TokenKind::Select)?;
            let mut children = vec![p.select_list()?, p.from_clause()?];
            if p.at(TokenKind::Where) {
                children.push(p.where_clause()?);
            }
            if p.at(TokenKind::Order) {
                children.push(p.order_by_clause()?);
            }
            p.expect(TokenKind::Eof)?;
            Ok(p.node(NodeKind::Query, start, children))
        })
    }

    fn select_list(&mut self) -> PResult<Node> {
        self.rule(Rule::SelectList, Some(Paraphrase::SelectList), |p| {
            if let Some(star) = p.eat(TokenKind::Star) {
                return Ok(Node::marker(NodeKind::AllColumns, star.span));
            }
            let start = p.start();
            let mut columns = vec![p.select_sub_list()?];
            while p.eat(TokenKind::Comma).is_some() {
                columns.push(p.select_sub_list()?);
            }
            Ok(p.node(NodeKind::Columns, start, columns))
        })
    }

    /// `valueExpression (AS? columnName)?` or `qualifier .*`
    fn select_sub_list(&mut self) -> PResult<Node> {
        self.rule(Rule::SelectSubList, None, |p| {
            let start = p.start();
            if p.at_identifier_then(TokenKind::DotStar) {
                let qualifier = p.qualifier()?;
                p.expect(TokenKind::DotStar)?;
                return Ok(p.node(NodeKind::AllColumns, start, vec![qualifier]));
            }
            let mut children = vec![p.value_expression()?];
            children.extend(p.optional_alias(Self::column_name)?);
            Ok(p.node(NodeKind::Column, start, children))
        })
    }

    pub(crate) fn value_expression(&mut self) -> PResult<Node> {
        self.rule(
            Rule::ValueExpression,
            Some(Paraphrase::ValueExpression),
            |p| {
                if p.at_function_call() {
                    p.value_function()
                } else {
                    p.column_reference()
                }
            },
        )
    }

    /// `(qualifier .)? columnName`, rewritten as `ColumnRef(columnName, qualifier?)`.
    pub(crate) fn column_reference(&mut self) -> PResult<Node> {
        self.rule(Rule::ColumnReference, None, Self::qualified_column)
    }

    /// Column reference on the multi-valued side of `ANY`.
    pub(crate) fn multi_valued_column_reference(&mut self) -> PResult<Node> {
        self.rule(
            Rule::MultiValuedColumnReference,
            None,
            Self::qualified_column,
        )
    }

    fn qualified_column(&mut self) -> PResult<Node> {
        let start = self.start();
        let qualifier = if self.at_identifier_then(TokenKind::Dot) {
            let qualifier = self.qualifier()?;
            self.expect(TokenKind::Dot)?;
            Some(qualifier)
        } else {
            None
        };
        let mut children = vec![self.column_name()?];
        children.extend(qualifier);
        Ok(self.node(NodeKind::ColumnRef, start, children))
    }

    /// `SCORE ( functionArgument* )`; permissive grammars accept any
    /// keyword or identifier as the name.
    fn value_function(&mut self) -> PResult<Node> {
        self.rule(Rule::ValueFunction, None, |p| {
            let start = p.start();
            let name = if p.at(TokenKind::Score) {
                let token = p.bump();
                p.leaf(NodeKind::FunctionName, token)
            } else if p.strict() {
                return Err(p.failed_guard(Rule::ValueFunction));
            } else if p.at_any(KEYWORD_OR_ID) {
                let token = p.bump();
                p.leaf(NodeKind::FunctionName, token)
            } else if p.at(TokenKind::DoubleQuote) {
                let quoted = p.identifier()?;
                let text = quoted.text().unwrap_or_default();
                Node::leaf(NodeKind::FunctionName, quoted.span(), text)
            } else {
                return Err(p.no_viable_alternative());
            };

            p.expect(TokenKind::LParen)?;
            let mut children = vec![name];
            while p.identifier_width(0) > 0 || p.at_literal_or_parameter() {
                children.push(p.function_argument()?);
            }
            p.expect(TokenKind::RParen)?;
            Ok(p.node(NodeKind::Function, start, children))
        })
    }

    /// `qualifier . columnName`, `identifier`, or `literalOrParameterName`.
    fn function_argument(&mut self) -> PResult<Node> {
        self.rule(Rule::FunctionArgument, None, |p| {
            let start = p.start();
            if p.at_identifier_then(TokenKind::Dot) {
                let qualifier = p.qualifier()?;
                p.expect(TokenKind::Dot)?;
                let column = p.column_name()?;
                return Ok(p.node(NodeKind::ColumnRef, start, vec![column, qualifier]));
            }
            if p.identifier_width(0) > 0 {
                return p.identifier();
            }
            if p.at_literal_or_parameter() {
                return p.literal_or_parameter_name();
            }
            Err(p.no_viable_alternative())
        })
    }

    /// Table name or correlation name; tried as a table name first.
    pub(crate) fn qualifier(&mut self) -> PResult<Node> {
        self.rule(Rule::Qualifier, None, |p| {
            if let Some(table) = p.speculate("qualifier as table name", Self::table_name)? {
                return Ok(table);
            }
            p.correlation_name()
        })
    }

    fn order_by_clause(&mut self) -> PResult<Node> {
        self.rule(Rule::OrderByClause, Some(Paraphrase::OrderBy), |p| {
            let start = p.start();
            p.expect(TokenKind::Order)?;
            p.expect(TokenKind::By)?;
            let mut specs = vec![p.sort_specification()?];
            while p.eat(TokenKind::Comma).is_some() {
                specs.push(p.sort_specification()?);
            }
            Ok(p.node(NodeKind::Order, start, specs))
        })
    }

    /// `columnReference (ASC | DESC)?`, ascending when omitted.
    fn sort_specification(&mut self) -> PResult<Node> {
        self.rule(Rule::SortSpecification, None, |p| {
            let start = p.start();
            let column = p.column_reference()?;
            let direction = if p.at_any(SORT_DIRECTIONS) {
                let kind = match p.peek(0) {
                    TokenKind::Desc => NodeKind::Desc,
                    _ => NodeKind::Asc,
                };
                let token = p.bump();
                p.leaf(kind, token)
            } else {
                p.marker(NodeKind::Asc, column.span().end())
            };
            Ok(p.node(NodeKind::SortSpec, start, vec![column, direction]))
        })
    }
}
