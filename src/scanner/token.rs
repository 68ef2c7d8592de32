use nom::{error::VerboseError, IResult};
use serde::{ser::SerializeStruct, Serialize, Serializer};

use super::{keyword::Keyword, keyword::Reference, operation::Operation, symbol::Symbol};

pub type ParserResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

/// The category a token was classified into.
///
/// Families group the categories the way the rule table does; the flat
/// category name used in reports comes from [`TokenKind::label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword(Keyword),
    Operation(Operation),
    Reference(Reference),
    Number,
    Symbol(Symbol),
}

impl TokenKind {
    /// Flat category label, e.g. `OPERACION`, `SUMA`, `NUMBER`, `OPEN_TAG`.
    pub fn label(&self) -> &'static str {
        match *self {
            TokenKind::Keyword(keyword) => keyword.into(),
            TokenKind::Operation(operation) => operation.into(),
            TokenKind::Reference(reference) => reference.into(),
            TokenKind::Number => "NUMBER",
            TokenKind::Symbol(symbol) => symbol.into(),
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// A classified lexeme with the position of its first character.
///
/// `line` and `column` are 1-based; `column` counts characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
        }
    }

    /// Length of the lexeme in characters.
    pub fn width(&self) -> usize {
        self.lexeme.chars().count()
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token({}, '{}', {}, {})",
            self.kind, self.lexeme, self.line, self.column
        )
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Token", 4)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("lexeme", &self.lexeme)?;
        state.serialize_field("line", &self.line)?;
        state.serialize_field("column", &self.column)?;
        state.end()
    }
}
