use serde::{Serialize, Serializer};

/// Kinds of structural parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DiagnosticKind {
    /// A wrong token sits where the token after it was required.
    UnexpectedToken,
    /// Input ended where a token was required.
    MissingToken,
    /// A wrong token where one specific token was required.
    MismatchedToken,
    /// No alternative at a decision point matches.
    NoViableAlternative,
    /// A one-or-more repetition matched nothing.
    EmptyRequiredRepetition,
    /// A wrong token where one of a token set was required.
    MismatchedSet,
    /// A dialect guard rejected a syntactically valid alternative.
    FailedGuard,
}

impl DiagnosticKind {
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnexpectedToken => "extraneous input",
            Self::MissingToken => "missing token",
            Self::MismatchedToken => "mismatched input",
            Self::NoViableAlternative => "no viable alternative",
            Self::EmptyRequiredRepetition => "required repetition did not match anything",
            Self::MismatchedSet => "mismatched input",
            Self::FailedGuard => "failed predicate",
        }
    }

    /// Kind-specific message naming the offending token and what was expected.
    ///
    /// For `FailedGuard`, `expected` names the guarded rule.
    pub fn message(&self, found: &str, expected: Option<&str>) -> String {
        let expected = expected.unwrap_or("nothing");
        match self {
            Self::UnexpectedToken => format!("extraneous input {found} expecting {expected}"),
            Self::MissingToken => format!("missing {expected} at {found}"),
            Self::MismatchedToken => format!("mismatched input {found} expecting {expected}"),
            Self::NoViableAlternative => format!("no viable alternative at input {found}"),
            Self::EmptyRequiredRepetition => {
                format!("required (...)+ loop did not match anything at input {found}")
            }
            Self::MismatchedSet => {
                format!("mismatched input {found} expecting one of {expected}")
            }
            Self::FailedGuard => format!("rule {expected} failed predicate: {{strict == false}}?"),
        }
    }
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.fallback_message())
    }
}

/// Grammar rules, named as they appear in rule chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Rule {
    Query,
    SelectList,
    SelectSubList,
    ValueExpression,
    ColumnReference,
    ValueFunction,
    FunctionArgument,
    Qualifier,
    FromClause,
    TableReference,
    SingleTable,
    SimpleTable,
    ComplexTable,
    JoinedTable,
    JoinType,
    JoinSpecification,
    WhereClause,
    SearchOrCondition,
    SearchAndCondition,
    SearchNotCondition,
    SearchTest,
    Predicate,
    ComparisonPredicate,
    InPredicate,
    InValueList,
    LikePredicate,
    NullPredicate,
    QuantifiedComparisonPredicate,
    QuantifiedInPredicate,
    TextSearchPredicate,
    FolderPredicate,
    FolderPredicateArgs,
    OrderByClause,
    SortSpecification,
    CompOp,
    Literal,
    LiteralOrParameterName,
    ParameterName,
    CharacterStringLiteral,
    TextSearchExpression,
    FolderId,
    Identifier,
    ColumnName,
    TableName,
    CorrelationName,
    MultiValuedColumnReference,
}

impl Rule {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::SelectList => "selectList",
            Self::SelectSubList => "selectSubList",
            Self::ValueExpression => "valueExpression",
            Self::ColumnReference => "columnReference",
            Self::ValueFunction => "valueFunction",
            Self::FunctionArgument => "functionArgument",
            Self::Qualifier => "qualifier",
            Self::FromClause => "fromClause",
            Self::TableReference => "tableReference",
            Self::SingleTable => "singleTable",
            Self::SimpleTable => "simpleTable",
            Self::ComplexTable => "complexTable",
            Self::JoinedTable => "joinedTable",
            Self::JoinType => "joinType",
            Self::JoinSpecification => "joinSpecification",
            Self::WhereClause => "whereClause",
            Self::SearchOrCondition => "searchOrCondition",
            Self::SearchAndCondition => "searchAndCondition",
            Self::SearchNotCondition => "searchNotCondition",
            Self::SearchTest => "searchTest",
            Self::Predicate => "predicate",
            Self::ComparisonPredicate => "comparisonPredicate",
            Self::InPredicate => "inPredicate",
            Self::InValueList => "inValueList",
            Self::LikePredicate => "likePredicate",
            Self::NullPredicate => "nullPredicate",
            Self::QuantifiedComparisonPredicate => "quantifiedComparisonPredicate",
            Self::QuantifiedInPredicate => "quantifiedInPredicate",
            Self::TextSearchPredicate => "textSearchPredicate",
            Self::FolderPredicate => "folderPredicate",
            Self::FolderPredicateArgs => "folderPredicateArgs",
            Self::OrderByClause => "orderByClause",
            Self::SortSpecification => "sortSpecification",
            Self::CompOp => "compOp",
            Self::Literal => "literal",
            Self::LiteralOrParameterName => "literalOrParameterName",
            Self::ParameterName => "parameterName",
            Self::CharacterStringLiteral => "characterStringLiteral",
            Self::TextSearchExpression => "textSearchExpression",
            Self::FolderId => "folderId",
            Self::Identifier => "identifier",
            Self::ColumnName => "columnName",
            Self::TableName => "tableName",
            Self::CorrelationName => "correlationName",
            Self::MultiValuedColumnReference => "multiValuedColumnReference",
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Human label for the construct being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paraphrase {
    Query,
    SelectList,
    ValueExpression,
    From,
    TableReference,
    SingleTable,
    SimpleTable,
    ComplexTable,
    JoinedTable,
    JoinCondition,
    Where,
    OrderBy,
}

impl Paraphrase {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Query => "in query",
            Self::SelectList => "in select list",
            Self::ValueExpression => "in value expression",
            Self::From => "in from",
            Self::TableReference => "in table reference",
            Self::SingleTable => "in single table",
            Self::SimpleTable => "in simple table",
            Self::ComplexTable => "in complex table",
            Self::JoinedTable => "in joined table",
            Self::JoinCondition => "in join condition",
            Self::Where => "in where",
            Self::OrderBy => "in order by",
        }
    }
}

impl std::fmt::Display for Paraphrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Paraphrase {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.label())
    }
}
