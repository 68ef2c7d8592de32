//! # Rule Table
//!
//! The scanner's vocabulary is a flat, ordered table of `(kind, pattern)`
//! pairs. At each position the rules are tried top to bottom and the first
//! pattern that matches wins. Match length never breaks ties: a rule placed
//! earlier shadows any later rule that would match at the same position.

use nom::{branch::alt, bytes::complete::tag};

use super::{
    keyword::{Keyword, Reference},
    literal::parse_number,
    operation::Operation,
    symbol::Symbol,
    token::{ParserResult, TokenKind},
};

/// What a rule matches, anchored at the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// An exact, case-sensitive string.
    Exact(&'static str),
    /// Either the uppercase or the lowercase spelling, tried in that order.
    UpperOrLower(&'static str, &'static str),
    /// A numeric literal, see [`parse_number`].
    Number,
}

impl Pattern {
    /// Matches the pattern at the start of `input`, returning the lexeme.
    pub fn recognize<'a>(&self, input: &'a str) -> ParserResult<'a, &'a str> {
        match *self {
            Pattern::Exact(lexeme) => tag(lexeme)(input),
            Pattern::UpperOrLower(upper, lower) => alt((tag(upper), tag(lower)))(input),
            Pattern::Number => parse_number(input),
        }
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pattern::Exact(lexeme) => f.write_str(lexeme),
            Pattern::UpperOrLower(upper, lower) => write!(f, "{}|{}", upper, lower),
            Pattern::Number => f.write_str(r"\d+(\.\d+)?"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub kind: TokenKind,
    pub pattern: Pattern,
}

impl Rule {
    pub const fn new(kind: TokenKind, pattern: Pattern) -> Self {
        Self { kind, pattern }
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}

const fn keyword(keyword: Keyword) -> Rule {
    Rule::new(TokenKind::Keyword(keyword), Pattern::Exact(keyword.lexeme()))
}

const fn operation(operation: Operation) -> Rule {
    let (upper, lower) = operation.spellings();
    Rule::new(
        TokenKind::Operation(operation),
        Pattern::UpperOrLower(upper, lower),
    )
}

const fn reference(reference: Reference) -> Rule {
    Rule::new(
        TokenKind::Reference(reference),
        Pattern::Exact(reference.lexeme()),
    )
}

const fn symbol(symbol: Symbol) -> Rule {
    Rule::new(TokenKind::Symbol(symbol), Pattern::Exact(symbol.lexeme()))
}

/// The fixed rule table, in priority order.
pub const RULES: &[Rule] = &[
    // Reserved words
    keyword(Keyword::Operacion),
    keyword(Keyword::Numero),
    // Arithmetic operations
    operation(Operation::Suma),
    operation(Operation::Resta),
    operation(Operation::Multiplicacion),
    operation(Operation::Division),
    operation(Operation::Potencia),
    operation(Operation::Raiz),
    operation(Operation::Inverso),
    operation(Operation::Mod),
    reference(Reference::P),
    reference(Reference::R),
    // Numeric values
    Rule::new(TokenKind::Number, Pattern::Number),
    // Single-character symbols
    symbol(Symbol::OpenTag),
    symbol(Symbol::CloseTag),
    symbol(Symbol::Slash),
    symbol(Symbol::Equals),
];
