//! # Report Rendering
//!
//! Turns a [`ScanResult`] into something a person can read. Every renderer
//! returns a `String`; writing it anywhere is the caller's job.
//!
//! * [`html`]: the token report and the error report pages
//! * [`json`]: one JSON document with tokens, errors and a summary
//! * [`text`]: fixed-width console tables

pub mod html;
pub mod json;
pub mod text;

use serde::{Deserialize, Serialize};

use crate::scanner::ScanResult;

/// Output format of the `analyze` command.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReportFormat {
    /// Token and error pages.
    #[default]
    Html,
    /// A single JSON document.
    Json,
    /// Plain tables on stdout.
    Text,
}

/// Token and error counts of a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub tokens: usize,
    pub errors: usize,
}

impl From<&ScanResult> for Summary {
    fn from(result: &ScanResult) -> Self {
        Self {
            tokens: result.tokens.len(),
            errors: result.errors.len(),
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Tokens reconocidos: {}\nErrores: {}",
            self.tokens, self.errors
        )
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;
    use crate::scanner::Scanner;

    #[test]
    fn test_format_round_trips_through_name() {
        for format in ReportFormat::iter() {
            assert_eq!(ReportFormat::from_str(&format.to_string()).unwrap(), format);
        }
        assert!(ReportFormat::from_str("pdf").is_err());
    }

    #[test]
    fn test_summary() {
        let result = Scanner::new().scan("SUMA 1 ~");
        let summary = Summary::from(&result);
        assert_eq!(summary, Summary { tokens: 2, errors: 1 });
        assert_eq!(summary.to_string(), "Tokens reconocidos: 2\nErrores: 1");
    }
}
