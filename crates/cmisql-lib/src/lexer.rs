//! Lexer and token stream for CMISQL.
//!
//! Produces span-based tokens without storing text; text is sliced from the
//! source only when a leaf node is built or a diagnostic names the token.
//!
//! ## Error handling
//!
//! Consecutive unrecognized characters are coalesced into one `Garbage` token
//! and left for the parser to report.

use logos::Logos;
use rowan::{TextRange, TextSize};
use std::ops::Range;

/// Token kinds. Keywords match case-insensitively.
///
/// `Garbage` and `Eof` are never produced by logos directly.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[logos(skip r"[ \t\r\n]+")]
#[repr(u16)]
pub enum TokenKind {
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_:$#]*")]
    Id = 0,

    /// Single-quoted string, backslash escapes any character.
    #[regex(r"'([^'\\]|\\(.|\n))*'")]
    QuotedString,

    #[regex(r"[+-]?(0|[1-9][0-9]*)")]
    DecimalIntegerLiteral,

    #[regex(r"[+-]?[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?")]
    #[regex(r"[+-]?\.[0-9]+([eE][+-]?[0-9]+)?")]
    #[regex(r"[+-]?[0-9]+[eE][+-]?[0-9]+")]
    FloatingPointLiteral,

    #[token("\"")]
    DoubleQuote,

    #[token("select", ignore(case))]
    Select,
    #[token("from", ignore(case))]
    From,
    #[token("where", ignore(case))]
    Where,
    #[token("as", ignore(case))]
    As,
    #[token("join", ignore(case))]
    Join,
    #[token("inner", ignore(case))]
    Inner,
    #[token("left", ignore(case))]
    Left,
    #[token("outer", ignore(case))]
    Outer,
    #[token("on", ignore(case))]
    On,
    #[token("order", ignore(case))]
    Order,
    #[token("by", ignore(case))]
    By,
    #[token("asc", ignore(case))]
    Asc,
    #[token("desc", ignore(case))]
    Desc,
    #[token("and", ignore(case))]
    And,
    #[token("or", ignore(case))]
    Or,
    #[token("not", ignore(case))]
    Not,
    #[token("in", ignore(case))]
    In,
    #[token("like", ignore(case))]
    Like,
    #[token("is", ignore(case))]
    Is,
    #[token("null", ignore(case))]
    Null,
    #[token("any", ignore(case))]
    Any,
    #[token("contains", ignore(case))]
    Contains,
    #[token("in_folder", ignore(case))]
    InFolder,
    #[token("in_tree", ignore(case))]
    InTree,
    #[token("timestamp", ignore(case))]
    Timestamp,
    #[token("true", ignore(case))]
    True,
    #[token("false", ignore(case))]
    False,
    #[token("score", ignore(case))]
    Score,

    #[token(".")]
    Dot,
    #[token("..")]
    DotDot,
    #[token(".*")]
    DotStar,
    #[token(",")]
    Comma,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(":")]
    Colon,
    #[token("*")]
    Star,
    #[token("=")]
    Equals,
    #[token("<>")]
    NotEquals,
    #[token("<")]
    LessThan,
    #[token(">")]
    GreaterThan,
    #[token("<=")]
    LessThanOrEquals,
    #[token(">=")]
    GreaterThanOrEquals,
    #[token("~")]
    Tilde,

    /// Coalesced run of unrecognized characters.
    Garbage,

    /// Returned by lookahead past the last token.
    Eof,
}

impl TokenKind {
    pub fn is_keyword(self) -> bool {
        token_sets::KEYWORDS.contains(self)
    }

    /// Name used in "expecting ..." messages.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::QuotedString => "QUOTED_STRING",
            Self::DecimalIntegerLiteral => "DECIMAL_INTEGER_LITERAL",
            Self::FloatingPointLiteral => "FLOATING_POINT_LITERAL",
            Self::DoubleQuote => "'\"'",
            Self::Select => "SELECT",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::As => "AS",
            Self::Join => "JOIN",
            Self::Inner => "INNER",
            Self::Left => "LEFT",
            Self::Outer => "OUTER",
            Self::On => "ON",
            Self::Order => "ORDER",
            Self::By => "BY",
            Self::Asc => "ASC",
            Self::Desc => "DESC",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::In => "IN",
            Self::Like => "LIKE",
            Self::Is => "IS",
            Self::Null => "NULL",
            Self::Any => "ANY",
            Self::Contains => "CONTAINS",
            Self::InFolder => "IN_FOLDER",
            Self::InTree => "IN_TREE",
            Self::Timestamp => "TIMESTAMP",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Score => "SCORE",
            Self::Dot => "'.'",
            Self::DotDot => "'..'",
            Self::DotStar => "'.*'",
            Self::Comma => "','",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Colon => "':'",
            Self::Star => "'*'",
            Self::Equals => "'='",
            Self::NotEquals => "'<>'",
            Self::LessThan => "'<'",
            Self::GreaterThan => "'>'",
            Self::LessThanOrEquals => "'<='",
            Self::GreaterThanOrEquals => "'>='",
            Self::Tilde => "'~'",
            Self::Garbage => "GARBAGE",
            Self::Eof => "<EOF>",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// 64-bit set of token kinds for O(1) membership tests.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TokenSet(u64);

impl TokenSet {
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Panics at compile time if any kind's discriminant >= 64.
    #[inline]
    pub const fn new(kinds: &[TokenKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 64, "TokenKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        let kind = kind as u16;
        if kind >= 64 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }
}

pub mod token_sets {
    use super::TokenKind::*;
    use super::TokenSet;

    /// Reserved words. Also the set of bare names a permissive function call may use.
    pub const KEYWORDS: TokenSet = TokenSet::new(&[
        Select, As, From, Join, Inner, Left, Outer, On, Where, Or, And, Not, In, Like, Is, Null,
        Any, Contains, InFolder, InTree, Order, By, Asc, Desc, Timestamp, True, False, Score,
    ]);

    pub const KEYWORD_OR_ID: TokenSet = KEYWORDS.union(TokenSet::new(&[Id]));

    pub const COMPARISON_OPERATORS: TokenSet = TokenSet::new(&[
        Equals,
        NotEquals,
        LessThan,
        GreaterThan,
        LessThanOrEquals,
        GreaterThanOrEquals,
    ]);

    pub const LITERAL_FIRST: TokenSet = TokenSet::new(&[
        DecimalIntegerLiteral,
        FloatingPointLiteral,
        QuotedString,
        True,
        False,
        Timestamp,
    ]);

    pub const LITERAL_OR_PARAMETER_FIRST: TokenSet = LITERAL_FIRST.union(TokenSet::new(&[Colon]));

    pub const JOIN_FIRST: TokenSet = TokenSet::new(&[Join, Inner, Left]);

    pub const SORT_DIRECTIONS: TokenSet = TokenSet::new(&[Asc, Desc]);
}

/// Zero-copy token: kind + span, text retrieved via [`TokenStream::text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Tokenizes source into a stream ready for parsing.
pub fn lex(source: &str) -> TokenStream<'_> {
    TokenStream::new(source, lex_tokens(source))
}

/// Tokenizes source into a vector of span-based tokens, whitespace dropped.
pub fn lex_tokens(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut garbage: Option<Range<usize>> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(range) = garbage.take() {
                    tokens.push(Token::new(TokenKind::Garbage, range_to_text_range(range)));
                }
                tokens.push(Token::new(kind, range_to_text_range(lexer.span())));
            }
            Some(Err(())) => {
                let span = lexer.span();
                garbage = Some(match garbage {
                    Some(range) => range.start..span.end,
                    None => span,
                });
            }
            None => {
                if let Some(range) = garbage.take() {
                    tokens.push(Token::new(TokenKind::Garbage, range_to_text_range(range)));
                }
                break;
            }
        }
    }

    tokens
}

/// Opaque stream position for speculative parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Checkpoint(usize);

/// Positioned tokens with unbounded lookahead and rewind.
///
/// Callers with their own tokenizer build one with [`TokenStream::new`];
/// whitespace must already be dropped.
#[derive(Debug, Clone)]
pub struct TokenStream<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'src> TokenStream<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Kind of the k-th token from the cursor; `Eof` past the end.
    #[inline]
    pub fn peek(&self, k: usize) -> TokenKind {
        self.tokens
            .get(self.pos + k)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    /// The k-th token from the cursor; an empty `Eof` token at the source end past the last one.
    pub fn peek_token(&self, k: usize) -> Token {
        self.tokens
            .get(self.pos + k)
            .copied()
            .unwrap_or_else(|| Token::new(TokenKind::Eof, TextRange::empty(self.eof_offset())))
    }

    /// Returns the current token and advances. At the end returns `Eof` without moving.
    pub fn consume(&mut self) -> Token {
        let token = self.peek_token(0);
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    pub fn mark(&self) -> Checkpoint {
        Checkpoint(self.pos)
    }

    pub fn rewind(&mut self, checkpoint: Checkpoint) {
        debug_assert!(checkpoint.0 <= self.tokens.len());
        self.pos = checkpoint.0;
    }

    /// Retrieves the text slice for a token. O(1) slice into source.
    #[inline]
    pub fn text(&self, token: &Token) -> &'src str {
        &self.source[Range::<usize>::from(token.span)]
    }

    /// Start of the current token.
    pub fn offset(&self) -> TextSize {
        self.peek_token(0).span.start()
    }

    /// End of the last consumed token, or the current offset if none was consumed.
    pub fn last_end(&self) -> TextSize {
        match self.pos.checked_sub(1).and_then(|i| self.tokens.get(i)) {
            Some(token) => token.span.end(),
            None => self.offset(),
        }
    }

    pub fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    /// 1-based line, 0-based column (in characters) of an offset.
    pub fn line_col(&self, offset: TextSize) -> (u32, u32) {
        let offset = usize::from(offset).min(self.source.len());
        let before = &self.source[..offset];
        let line = before.matches('\n').count() as u32 + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() as u32;
        (line, column)
    }
}
