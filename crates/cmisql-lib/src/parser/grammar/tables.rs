//! `FROM` clause: tables, joins and parenthesized table expressions.

use cmisql_core::{Node, NodeKind};
use rowan::TextSize;

use crate::diagnostics::{DiagnosticKind, Paraphrase, Rule};
use crate::lexer::TokenKind;
use crate::lexer::token_sets::JOIN_FIRST;
use crate::parser::Parser;
use crate::parser::core::PResult;

impl Parser<'_> {
    pub(crate) fn from_clause(&mut self) -> PResult<Node> {
        self.rule(Rule::FromClause, Some(Paraphrase::From), |p| {
            p.expect(TokenKind::From)?;
            p.table_reference(true)
        })
    }

    /// `singleTable joinedTable*`, rewritten as `Source(singleTable, joinedTable*)`.
    ///
    /// Below the top level a join that does not parse ends the reference and
    /// is left for the enclosing join.
    fn table_reference(&mut self, top_level: bool) -> PResult<Node> {
        self.rule(
            Rule::TableReference,
            Some(Paraphrase::TableReference),
            |p| {
                p.nested(|p| {
                    let start = p.start();
                    let mut children = vec![p.single_table()?];
                    while p.at_any(JOIN_FIRST) {
                        if top_level {
                            children.push(p.joined_table()?);
                            continue;
                        }
                        match p.speculate("nested join", Self::joined_table)? {
                            Some(join) => children.push(join),
                            None => break,
                        }
                    }
                    Ok(p.node(NodeKind::Source, start, children))
                })
            },
        )
    }

    fn single_table(&mut self) -> PResult<Node> {
        self.rule(Rule::SingleTable, Some(Paraphrase::SingleTable), |p| {
            if !p.at(TokenKind::LParen) {
                return p.simple_table();
            }
            let start = p.start();
            let complex = p.complex_table()?;
            Ok(p.node(NodeKind::Table, start, vec![complex]))
        })
    }

    /// `tableName (AS? correlationName)?`
    fn simple_table(&mut self) -> PResult<Node> {
        self.rule(Rule::SimpleTable, Some(Paraphrase::SimpleTable), |p| {
            let start = p.start();
            let mut children = vec![p.table_name()?];
            children.extend(p.optional_alias(Self::correlation_name)?);
            Ok(p.node(NodeKind::TableRef, start, children))
        })
    }

    /// `( singleTable joinedTable+ )` flattened to a `Source`, or
    /// `( complexTable )` passed through.
    ///
    /// Both alternatives share the prefix `( complexTable` when the second
    /// token is `(`: it is parsed once and only the join tail is tried.
    fn complex_table(&mut self) -> PResult<Node> {
        self.rule(Rule::ComplexTable, Some(Paraphrase::ComplexTable), |p| {
            p.nested(|p| {
                if p.peek(1) != TokenKind::LParen {
                    return p.joined_source();
                }

                let start = p.start();
                p.expect(TokenKind::LParen)?;
                let inner_start = p.start();
                let inner = p.complex_table()?;
                if p.at_any(JOIN_FIRST) {
                    let joined = p.speculate("complex table joins", |p| {
                        let table = p.node(NodeKind::Table, inner_start, vec![inner.clone()]);
                        p.joined_tail(start, table)
                    })?;
                    if let Some(source) = joined {
                        return Ok(source);
                    }
                }
                p.expect(TokenKind::RParen)?;
                Ok(inner)
            })
        })
    }

    /// `( singleTable joinedTable+ )` from the opening parenthesis.
    fn joined_source(&mut self) -> PResult<Node> {
        let start = self.start();
        self.expect(TokenKind::LParen)?;
        let table = self.single_table()?;
        self.joined_tail(start, table)
    }

    /// `joinedTable+ )` after the first table of a parenthesized source.
    fn joined_tail(&mut self, start: TextSize, table: Node) -> PResult<Node> {
        if !self.at_any(JOIN_FIRST) {
            return Err(self.error(DiagnosticKind::EmptyRequiredRepetition, None));
        }
        let mut children = vec![table];
        while self.at_any(JOIN_FIRST) {
            children.push(self.joined_table()?);
        }
        self.expect(TokenKind::RParen)?;
        Ok(self.node(NodeKind::Source, start, children))
    }

    /// `joinType? JOIN tableReference joinSpecification`
    fn joined_table(&mut self) -> PResult<Node> {
        self.rule(Rule::JoinedTable, Some(Paraphrase::JoinedTable), |p| {
            let start = p.start();
            let join_type = if p.at(TokenKind::Join) {
                None
            } else {
                Some(p.join_type()?)
            };
            p.expect(TokenKind::Join)?;
            let mut children = vec![p.table_reference(false)?];
            children.extend(join_type);
            children.push(p.join_specification()?);
            Ok(p.node(NodeKind::Join, start, children))
        })
    }

    /// `INNER` or `LEFT OUTER?`
    fn join_type(&mut self) -> PResult<Node> {
        self.rule(Rule::JoinType, None, |p| match p.peek(0) {
            TokenKind::Inner => {
                let token = p.bump();
                Ok(p.leaf(NodeKind::Inner, token))
            }
            TokenKind::Left => {
                let token = p.bump();
                p.eat(TokenKind::Outer);
                Ok(p.leaf(NodeKind::Left, token))
            }
            _ => Err(p.no_viable_alternative()),
        })
    }

    /// `ON columnReference = columnReference`
    fn join_specification(&mut self) -> PResult<Node> {
        self.rule(
            Rule::JoinSpecification,
            Some(Paraphrase::JoinCondition),
            |p| {
                let start = p.start();
                p.expect(TokenKind::On)?;
                let lhs = p.column_reference()?;
                p.expect(TokenKind::Equals)?;
                let rhs = p.column_reference()?;
                Ok(p.node(NodeKind::OnEquals, start, vec![lhs, rhs]))
            },
        )
    }
}
