use serde::{ser::SerializeStruct, Serialize, Serializer};
use thiserror::Error;

/// Kind label carried by every lexical error.
pub const LEXICAL_ERROR_KIND: &str = "Error Lexico";

/// A single character no rule could match.
///
/// Always recoverable: the scanner records it and resumes one character later.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Error Lexico: unrecognized character {character:?} at line {line}, column {column}")]
pub struct LexicalError {
    pub character: char,
    pub line: usize,
    pub column: usize,
}

impl LexicalError {
    pub fn new(character: char, line: usize, column: usize) -> Self {
        Self {
            character,
            line,
            column,
        }
    }

    pub fn kind(&self) -> &'static str {
        LEXICAL_ERROR_KIND
    }
}

impl Serialize for LexicalError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("LexicalError", 4)?;
        state.serialize_field("lexeme", &self.character.to_string())?;
        state.serialize_field("line", &self.line)?;
        state.serialize_field("column", &self.column)?;
        state.serialize_field("kind", LEXICAL_ERROR_KIND)?;
        state.end()
    }
}
