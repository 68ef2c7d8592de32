//! # Structural Symbols
//!
//! The tag-like markup is built from four single-character symbols:
//! `<Numero>5</Numero>`.

use strum_macros::{Display, EnumIter, IntoStaticStr};

/// Structural symbols. Each one is exactly one character long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Symbol {
    /// `<`
    OpenTag,
    /// `>`
    CloseTag,
    /// `/`
    Slash,
    /// `=`
    Equals,
}

impl Symbol {
    pub const fn lexeme(&self) -> &'static str {
        match self {
            Symbol::OpenTag => "<",
            Symbol::CloseTag => ">",
            Symbol::Slash => "/",
            Symbol::Equals => "=",
        }
    }
}
