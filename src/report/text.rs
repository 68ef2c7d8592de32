use std::fmt::Write as _;

use super::Summary;
use crate::scanner::ScanResult;

/// Renders fixed-width token and error tables followed by the summary.
pub fn render(result: &ScanResult) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:>5}  {:<16} {:<20} {:>6} {:>7}",
        "#", "TIPO", "LEXEMA", "LINEA", "COLUMNA"
    );
    for (i, token) in result.tokens.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>5}  {:<16} {:<20} {:>6} {:>7}",
            i + 1,
            token.kind.label(),
            token.lexeme,
            token.line,
            token.column
        );
    }

    if !result.errors.is_empty() {
        out.push('\n');
        let _ = writeln!(
            out,
            "{:>5}  {:<16} {:<20} {:>6} {:>7}",
            "#", "TIPO", "LEXEMA", "LINEA", "COLUMNA"
        );
        for (i, error) in result.errors.iter().enumerate() {
            let _ = writeln!(
                out,
                "{:>5}  {:<16} {:<20} {:>6} {:>7}",
                i + 1,
                error.kind(),
                error.character.escape_debug().to_string(),
                error.line,
                error.column
            );
        }
    }

    out.push('\n');
    let _ = writeln!(out, "{}", Summary::from(result));
    out
}
