//! # Reserved Words
//!
//! The two reserved keywords (`Operacion`, `Numero`) and the two single-letter
//! references (`P`, `R`). All four are matched exactly and case-sensitively.
//!
//! Keywords are plain tags: there is no word-boundary check, so `Operaciones`
//! scans as the keyword `Operacion` followed by whatever the remaining `es`
//! produces. References sit after the operation names in the rule table, so a
//! `P` at the start of `POTENCIA` never becomes a reference.

/// Reserved keywords.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::IntoStaticStr,
)]
pub enum Keyword {
    /// `Operacion`, opens an operation block.
    #[strum(serialize = "OPERACION")]
    Operacion,
    /// `Numero`, wraps a numeric operand.
    #[strum(serialize = "NUMERO_KW")]
    Numero,
}

impl Keyword {
    /// The exact source spelling.
    pub const fn lexeme(&self) -> &'static str {
        match self {
            Keyword::Operacion => "Operacion",
            Keyword::Numero => "Numero",
        }
    }
}

/// Single-letter operand references.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::IntoStaticStr,
)]
pub enum Reference {
    P,
    R,
}

impl Reference {
    pub const fn lexeme(&self) -> &'static str {
        match self {
            Reference::P => "P",
            Reference::R => "R",
        }
    }
}
