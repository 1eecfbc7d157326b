//! `WHERE` clause: boolean connectives and the predicate alternatives.

use cmisql_core::{Node, NodeKind};
use rowan::TextSize;

use crate::diagnostics::{Paraphrase, Rule};
use crate::lexer::TokenKind;
use crate::parser::Parser;
use crate::parser::core::PResult;

use super::lookahead::PredicateShape;

impl Parser<'_> {
    /// `WHERE searchOrCondition`, passed through.
    pub(crate) fn where_clause(&mut self) -> PResult<Node> {
        self.rule(Rule::WhereClause, Some(Paraphrase::Where), |p| {
            p.expect(TokenKind::Where)?;
            p.search_or_condition()
        })
    }

    fn search_or_condition(&mut self) -> PResult<Node> {
        self.rule(Rule::SearchOrCondition, None, |p| {
            p.nested(|p| {
                let start = p.start();
                let mut terms = vec![p.search_and_condition()?];
                while p.eat(TokenKind::Or).is_some() {
                    terms.push(p.search_and_condition()?);
                }
                Ok(p.node(NodeKind::Disjunction, start, terms))
            })
        })
    }

    fn search_and_condition(&mut self) -> PResult<Node> {
        self.rule(Rule::SearchAndCondition, None, |p| {
            let start = p.start();
            let mut terms = vec![p.search_not_condition()?];
            while p.eat(TokenKind::And).is_some() {
                terms.push(p.search_not_condition()?);
            }
            Ok(p.node(NodeKind::Conjunction, start, terms))
        })
    }

    fn search_not_condition(&mut self) -> PResult<Node> {
        self.rule(Rule::SearchNotCondition, None, |p| {
            if !p.at(TokenKind::Not) {
                return p.search_test();
            }
            let start = p.start();
            p.bump();
            let test = p.search_test()?;
            Ok(p.node(NodeKind::Negation, start, vec![test]))
        })
    }

    /// `predicate` or `( searchOrCondition )`; the parentheses leave no node.
    fn search_test(&mut self) -> PResult<Node> {
        self.rule(Rule::SearchTest, None, |p| {
            if !p.at(TokenKind::LParen) {
                return p.predicate();
            }
            p.bump();
            let grouped = p.search_or_condition()?;
            p.expect(TokenKind::RParen)?;
            Ok(grouped)
        })
    }

    fn predicate(&mut self) -> PResult<Node> {
        self.rule(Rule::Predicate, None, |p| {
            let Some(shape) = p.classify_predicate() else {
                return Err(p.no_viable_alternative());
            };
            match shape {
                PredicateShape::Comparison => p.comparison_predicate(),
                PredicateShape::In => p.in_predicate(),
                PredicateShape::Like => p.like_predicate(),
                PredicateShape::Null => p.null_predicate(),
                PredicateShape::QuantifiedComparison => p.quantified_comparison_predicate(),
                PredicateShape::QuantifiedIn => p.quantified_in_predicate(),
                PredicateShape::TextSearch => p.text_search_predicate(),
                PredicateShape::Folder => p.folder_predicate(),
            }
        })
    }

    /// `valueExpression compOp literalOrParameterName`
    fn comparison_predicate(&mut self) -> PResult<Node> {
        self.rule(Rule::ComparisonPredicate, None, |p| {
            let start = p.start();
            let property = p.marker(NodeKind::SingleValuedProperty, start);
            let value = p.value_expression()?;
            let op = p.comp_op()?;
            let literal = p.literal_or_parameter_name()?;
            Ok(p.node(
                NodeKind::PredComparison,
                start,
                vec![property, value, op, literal],
            ))
        })
    }

    /// `columnReference NOT? IN ( inValueList )`
    fn in_predicate(&mut self) -> PResult<Node> {
        self.rule(Rule::InPredicate, None, |p| {
            let start = p.start();
            let property = p.marker(NodeKind::SingleValuedProperty, start);
            let column = p.column_reference()?;
            p.in_tail(start, property, column)
        })
    }

    /// `NOT? IN ( inValueList )` after the tested column.
    fn in_tail(&mut self, start: TextSize, quantifier: Node, column: Node) -> PResult<Node> {
        let not = self.eat(TokenKind::Not).map(|token| self.leaf(NodeKind::Not, token));
        self.expect(TokenKind::In)?;
        self.expect(TokenKind::LParen)?;
        let list = self.in_value_list()?;
        self.expect(TokenKind::RParen)?;
        let mut children = vec![quantifier, column, list];
        children.extend(not);
        Ok(self.node(NodeKind::PredIn, start, children))
    }

    /// `literalOrParameterName (, literalOrParameterName)*`
    fn in_value_list(&mut self) -> PResult<Node> {
        self.rule(Rule::InValueList, None, |p| {
            let start = p.start();
            let mut values = vec![p.literal_or_parameter_name()?];
            while p.eat(TokenKind::Comma).is_some() {
                values.push(p.literal_or_parameter_name()?);
            }
            Ok(p.node(NodeKind::List, start, values))
        })
    }

    /// `columnReference NOT? LIKE characterStringLiteral`
    fn like_predicate(&mut self) -> PResult<Node> {
        self.rule(Rule::LikePredicate, None, |p| {
            let start = p.start();
            let column = p.column_reference()?;
            let not = p.eat(TokenKind::Not).map(|token| p.leaf(NodeKind::Not, token));
            p.expect(TokenKind::Like)?;
            let mut children = vec![column, p.character_string_literal()?];
            children.extend(not);
            Ok(p.node(NodeKind::PredLike, start, children))
        })
    }

    /// `columnReference IS NOT? NULL`.
    ///
    /// `IS NULL` carries a `Not` marker (the property does not exist);
    /// `IS NOT NULL` carries none.
    fn null_predicate(&mut self) -> PResult<Node> {
        self.rule(Rule::NullPredicate, None, |p| {
            let start = p.start();
            let column = p.column_reference()?;
            p.expect(TokenKind::Is)?;
            let negated = p.eat(TokenKind::Not).is_some();
            let null = p.expect(TokenKind::Null)?;
            let mut children = vec![column];
            if !negated {
                children.push(Node::marker(NodeKind::Not, null.span));
            }
            Ok(p.node(NodeKind::PredExists, start, children))
        })
    }

    /// `literalOrParameterName compOp ANY multiValuedColumnReference`
    fn quantified_comparison_predicate(&mut self) -> PResult<Node> {
        self.rule(Rule::QuantifiedComparisonPredicate, None, |p| {
            let start = p.start();
            let literal = p.literal_or_parameter_name()?;
            let op = p.comp_op()?;
            let any = p.expect(TokenKind::Any)?;
            let any = p.leaf(NodeKind::Any, any);
            let column = p.multi_valued_column_reference()?;
            Ok(p.node(
                NodeKind::PredComparison,
                start,
                vec![any, literal, op, column],
            ))
        })
    }

    /// `ANY multiValuedColumnReference NOT? IN ( inValueList )`
    fn quantified_in_predicate(&mut self) -> PResult<Node> {
        self.rule(Rule::QuantifiedInPredicate, None, |p| {
            let start = p.start();
            let any = p.expect(TokenKind::Any)?;
            let any = p.leaf(NodeKind::Any, any);
            let column = p.multi_valued_column_reference()?;
            p.in_tail(start, any, column)
        })
    }

    /// `CONTAINS ( (qualifier ,)? textSearchExpression )`
    fn text_search_predicate(&mut self) -> PResult<Node> {
        self.rule(Rule::TextSearchPredicate, None, |p| {
            let start = p.start();
            p.expect(TokenKind::Contains)?;
            p.expect(TokenKind::LParen)?;
            let qualifier = p.leading_qualifier()?;
            let mut children = vec![p.text_search_expression()?];
            children.extend(qualifier);
            p.expect(TokenKind::RParen)?;
            Ok(p.node(NodeKind::PredFts, start, children))
        })
    }

    /// `IN_FOLDER folderPredicateArgs` or `IN_TREE folderPredicateArgs`
    fn folder_predicate(&mut self) -> PResult<Node> {
        self.rule(Rule::FolderPredicate, None, |p| {
            let start = p.start();
            let kind = match p.peek(0) {
                TokenKind::InFolder => NodeKind::PredChild,
                TokenKind::InTree => NodeKind::PredDescendant,
                _ => return Err(p.no_viable_alternative()),
            };
            p.bump();
            let children = p.folder_predicate_args()?;
            Ok(p.node(kind, start, children))
        })
    }

    /// `( (qualifier ,)? folderId )`, returned as `[folderId, qualifier?]`.
    fn folder_predicate_args(&mut self) -> PResult<Vec<Node>> {
        self.rule(Rule::FolderPredicateArgs, None, |p| {
            p.expect(TokenKind::LParen)?;
            let qualifier = p.leading_qualifier()?;
            let mut children = vec![p.folder_id()?];
            children.extend(qualifier);
            p.expect(TokenKind::RParen)?;
            Ok(children)
        })
    }

    /// `qualifier ,` when an identifier is followed by a comma.
    fn leading_qualifier(&mut self) -> PResult<Option<Node>> {
        if !self.at_identifier_then(TokenKind::Comma) {
            return Ok(None);
        }
        let qualifier = self.qualifier()?;
        self.expect(TokenKind::Comma)?;
        Ok(Some(qualifier))
    }
}
