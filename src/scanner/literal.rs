use nom::{
    character::complete::{char, digit1},
    combinator::{opt, recognize},
    error::context,
    sequence::pair,
};

use super::token::ParserResult;

/// Recognizes a numeric literal: one or more digits, optionally followed by a
/// fraction (`.` plus one or more digits).
///
/// A trailing `.` with no digits after it is not part of the literal, so
/// `5.` yields `5` and leaves `.` in the input.
///
/// # Examples
///
/// ```
/// # use lexico::scanner::literal::parse_number;
/// let (rest, number) = parse_number("5.25 rest").unwrap();
/// assert_eq!(number, "5.25");
/// assert_eq!(rest, " rest");
/// ```
#[tracing::instrument(level = "trace", skip(input))]
pub fn parse_number(input: &str) -> ParserResult<&str> {
    context(
        "number literal",
        recognize(pair(digit1, opt(pair(char('.'), digit1)))),
    )(input)
}
