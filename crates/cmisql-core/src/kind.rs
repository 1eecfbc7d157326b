use serde::Serialize;

/// Every kind of node a CMISQL tree can contain.
///
/// Structural kinds first, then the token leaves the grammar keeps as
/// children (markers, operators, join types, sort directions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum NodeKind {
    Query,
    AllColumns,
    Columns,
    Column,
    ColumnRef,
    Function,
    Source,
    Table,
    TableRef,
    Join,
    OnEquals,
    Disjunction,
    Conjunction,
    Negation,
    PredComparison,
    PredIn,
    PredLike,
    PredExists,
    PredFts,
    PredChild,
    PredDescendant,
    List,
    Order,
    SortSpec,
    NumericLiteral,
    StringLiteral,
    BooleanLiteral,
    DatetimeLiteral,
    Parameter,
    Identifier,

    /// Plain single-valued property test.
    SingleValuedProperty,
    /// Quantified (`ANY`) test against a multi-valued property.
    Any,
    /// Negation flag of `IN`, `LIKE` and the null predicate.
    Not,

    Equals,
    NotEquals,
    LessThan,
    GreaterThan,
    LessThanOrEquals,
    GreaterThanOrEquals,

    Inner,
    Left,

    Asc,
    Desc,

    FunctionName,
    /// Opaque full-text search expression, quotes included.
    TextSearchExpression,
}

impl NodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Query => "Query",
            Self::AllColumns => "AllColumns",
            Self::Columns => "Columns",
            Self::Column => "Column",
            Self::ColumnRef => "ColumnRef",
            Self::Function => "Function",
            Self::Source => "Source",
            Self::Table => "Table",
            Self::TableRef => "TableRef",
            Self::Join => "Join",
            Self::OnEquals => "OnEquals",
            Self::Disjunction => "Disjunction",
            Self::Conjunction => "Conjunction",
            Self::Negation => "Negation",
            Self::PredComparison => "PredComparison",
            Self::PredIn => "PredIn",
            Self::PredLike => "PredLike",
            Self::PredExists => "PredExists",
            Self::PredFts => "PredFts",
            Self::PredChild => "PredChild",
            Self::PredDescendant => "PredDescendant",
            Self::List => "List",
            Self::Order => "Order",
            Self::SortSpec => "SortSpec",
            Self::NumericLiteral => "NumericLiteral",
            Self::StringLiteral => "StringLiteral",
            Self::BooleanLiteral => "BooleanLiteral",
            Self::DatetimeLiteral => "DatetimeLiteral",
            Self::Parameter => "Parameter",
            Self::Identifier => "Identifier",
            Self::SingleValuedProperty => "SingleValuedProperty",
            Self::Any => "Any",
            Self::Not => "Not",
            Self::Equals => "Equals",
            Self::NotEquals => "NotEquals",
            Self::LessThan => "LessThan",
            Self::GreaterThan => "GreaterThan",
            Self::LessThanOrEquals => "LessThanOrEquals",
            Self::GreaterThanOrEquals => "GreaterThanOrEquals",
            Self::Inner => "Inner",
            Self::Left => "Left",
            Self::Asc => "Asc",
            Self::Desc => "Desc",
            Self::FunctionName => "FunctionName",
            Self::TextSearchExpression => "TextSearchExpression",
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Self::NumericLiteral | Self::StringLiteral | Self::BooleanLiteral | Self::DatetimeLiteral
        )
    }

    pub fn is_comparison_operator(&self) -> bool {
        matches!(
            self,
            Self::Equals
                | Self::NotEquals
                | Self::LessThan
                | Self::GreaterThan
                | Self::LessThanOrEquals
                | Self::GreaterThanOrEquals
        )
    }

    pub fn is_predicate(&self) -> bool {
        matches!(
            self,
            Self::PredComparison
                | Self::PredIn
                | Self::PredLike
                | Self::PredExists
                | Self::PredFts
                | Self::PredChild
                | Self::PredDescendant
        )
    }

    /// Structural flags synthesized by the tree rewrite.
    pub fn is_marker(&self) -> bool {
        matches!(self, Self::SingleValuedProperty | Self::Any | Self::Not)
    }

    /// Operator symbol for comparison kinds.
    pub fn operator_symbol(&self) -> Option<&'static str> {
        let symbol = match self {
            Self::Equals => "=",
            Self::NotEquals => "<>",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::LessThanOrEquals => "<=",
            Self::GreaterThanOrEquals => ">=",
            _ => return None,
        };
        Some(symbol)
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
