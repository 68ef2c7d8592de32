//! # Whitespace Handling
//!
//! Blanks and newlines are consumed silently: they move the cursor but never
//! produce a token.
//!
//! * blank: a single space or tab, advances the column by one
//! * newline: a single `\n`, advances the line and resets the column
//!
//! Only `\n` ends a line. A carriage return is not whitespace here, so each
//! `\r` of a CRLF file is reported as a lexical error.

use nom::{bytes::complete::tag, character::complete::one_of, combinator::recognize};

use super::token::ParserResult;

/// Recognizes one space or tab.
pub fn parse_blank(input: &str) -> ParserResult<&str> {
    recognize(one_of(" \t"))(input)
}

/// Recognizes one `\n`.
pub fn parse_newline(input: &str) -> ParserResult<&str> {
    tag("\n")(input)
}
