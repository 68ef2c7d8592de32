use serde::Serialize;

use super::Summary;
use crate::scanner::{LexicalError, ScanResult, Token};

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    source: &'a str,
    tokens: &'a [Token],
    errors: &'a [LexicalError],
    summary: Summary,
}

/// Renders the whole scan as one pretty-printed JSON document.
pub fn render(result: &ScanResult, source_name: &str) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        source: source_name,
        tokens: &result.tokens,
        errors: &result.errors,
        summary: Summary::from(result),
    })
}
