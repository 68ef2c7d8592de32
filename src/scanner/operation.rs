//! # Arithmetic Operation Names
//!
//! Each operation is written either fully uppercase (`SUMA`) or fully
//! lowercase (`suma`). Mixed spellings such as `Suma` are not operation names;
//! they fall through to the later rules and usually end up as a run of
//! single-character lexical errors.

/// Arithmetic operations, in rule-table order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    Suma,
    Resta,
    Multiplicacion,
    Division,
    Potencia,
    Raiz,
    Inverso,
    Mod,
}

impl Operation {
    /// The two accepted spellings, uppercase first.
    pub const fn spellings(&self) -> (&'static str, &'static str) {
        match self {
            Operation::Suma => ("SUMA", "suma"),
            Operation::Resta => ("RESTA", "resta"),
            Operation::Multiplicacion => ("MULTIPLICACION", "multiplicacion"),
            Operation::Division => ("DIVISION", "division"),
            Operation::Potencia => ("POTENCIA", "potencia"),
            Operation::Raiz => ("RAIZ", "raiz"),
            Operation::Inverso => ("INVERSO", "inverso"),
            Operation::Mod => ("MOD", "mod"),
        }
    }
}
