use serde::Serialize;
use tracing::{debug, trace};

use super::{
    error::LexicalError,
    rule::{Rule, RULES},
    token::Token,
    whitespace::{parse_blank, parse_newline},
};

/// Tokens and lexical errors from one scan, each in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexicalError>,
}

impl ScanResult {
    /// `true` when no character was rejected.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_parts(self) -> (Vec<Token>, Vec<LexicalError>) {
        (self.tokens, self.errors)
    }
}

/// Position of the scan cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    offset: usize,
    line: usize,
    column: usize,
}

impl Cursor {
    fn start() -> Self {
        Self {
            offset: 0,
            line: 1,   // 1-based
            column: 1, // 1-based
        }
    }

    /// Moves past `text`, which must not contain a newline.
    fn advance(&mut self, text: &str) {
        self.offset += text.len();
        self.column += text.chars().count();
    }

    fn next_line(&mut self, newline: &str) {
        self.offset += newline.len();
        self.line += 1;
        self.column = 1;
    }
}

/// Splits text into tokens using the fixed, ordered rule table.
///
/// The scanner holds no per-scan state, so one instance can be shared and
/// used from several threads at once.
///
/// # Examples
///
/// ```
/// # use lexico::scanner::Scanner;
/// let result = Scanner::new().scan("SUMA 5");
/// assert_eq!(result.tokens[1].lexeme, "5");
/// assert_eq!(result.tokens[1].column, 6);
/// assert!(result.is_clean());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Scanner {
    rules: &'static [Rule],
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner {
    pub fn new() -> Self {
        Self { rules: RULES }
    }

    /// The rule table in priority order.
    pub fn rules(&self) -> &[Rule] {
        self.rules
    }

    /// Scans `input` from the start.
    ///
    /// Blanks and newlines are skipped. Elsewhere the first rule that matches
    /// at the cursor produces a token; when none does, the character under the
    /// cursor is recorded as a [`LexicalError`] and scanning resumes right
    /// after it. Never fails.
    #[tracing::instrument(level = "debug", skip(self, input), fields(bytes = input.len()))]
    pub fn scan(&self, input: &str) -> ScanResult {
        let mut result = ScanResult::default();
        let mut cursor = Cursor::start();

        while cursor.offset < input.len() {
            let remaining = &input[cursor.offset..];

            if let Ok((_, blank)) = parse_blank(remaining) {
                cursor.advance(blank);
                continue;
            }
            if let Ok((_, newline)) = parse_newline(remaining) {
                cursor.next_line(newline);
                continue;
            }

            match self.match_rule(remaining) {
                Some((rule, lexeme)) => {
                    let token = Token::new(rule.kind, lexeme, cursor.line, cursor.column);
                    trace!("{}", token);
                    result.tokens.push(token);
                    cursor.advance(lexeme);
                }
                None => {
                    let Some(character) = remaining.chars().next() else {
                        break;
                    };
                    let error = LexicalError::new(character, cursor.line, cursor.column);
                    debug!("{}", error);
                    result.errors.push(error);
                    cursor.advance(&remaining[..character.len_utf8()]);
                }
            }
        }

        debug!(
            tokens = result.tokens.len(),
            errors = result.errors.len(),
            lines = cursor.line,
            "scan finished"
        );
        result
    }

    /// First rule matching at the start of `input`, with its lexeme.
    fn match_rule<'a>(&self, input: &'a str) -> Option<(&Rule, &'a str)> {
        self.rules.iter().find_map(|rule| {
            rule.pattern
                .recognize(input)
                .ok()
                .map(|(_, lexeme)| (rule, lexeme))
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::scanner::{
        keyword::{Keyword, Reference},
        operation::Operation,
        symbol::Symbol,
        token::TokenKind,
    };

    fn scan(input: &str) -> ScanResult {
        Scanner::new().scan(input)
    }

    fn tok(kind: TokenKind, lexeme: &str, line: usize, column: usize) -> Token {
        Token::new(kind, lexeme, line, column)
    }

    #[test]
    fn test_empty() {
        assert_eq!(scan(""), ScanResult::default());
    }

    #[test]
    fn test_keyword() {
        let result = scan("Operacion");
        assert_eq!(
            result.tokens,
            vec![tok(TokenKind::Keyword(Keyword::Operacion), "Operacion", 1, 1)]
        );
        assert!(result.is_clean());
    }

    #[test]
    fn test_operation_then_number() {
        let result = scan("SUMA 5");
        assert_eq!(
            result.tokens,
            vec![
                tok(TokenKind::Operation(Operation::Suma), "SUMA", 1, 1),
                tok(TokenKind::Number, "5", 1, 6),
            ]
        );
        assert!(result.is_clean());
    }

    #[test]
    fn test_lowercase_operation() {
        let result = scan("suma");
        assert_eq!(
            result.tokens,
            vec![tok(TokenKind::Operation(Operation::Suma), "suma", 1, 1)]
        );
    }

    #[test]
    fn test_decimal_number() {
        let result = scan("5.25");
        assert_eq!(result.tokens, vec![tok(TokenKind::Number, "5.25", 1, 1)]);
    }

    #[test]
    fn test_tagged_keyword() {
        let result = scan("<Numero>");
        assert_eq!(
            result.tokens,
            vec![
                tok(TokenKind::Symbol(Symbol::OpenTag), "<", 1, 1),
                tok(TokenKind::Keyword(Keyword::Numero), "Numero", 1, 2),
                tok(TokenKind::Symbol(Symbol::CloseTag), ">", 1, 8),
            ]
        );
    }

    #[test]
    fn test_unrecognized_character() {
        let result = scan("#");
        assert!(result.tokens.is_empty());
        assert_eq!(result.errors, vec![LexicalError::new('#', 1, 1)]);
    }

    #[test]
    fn test_error_positions_across_lines() {
        let result = scan("a\nb");
        assert!(result.tokens.is_empty());
        assert_eq!(
            result.errors,
            vec![LexicalError::new('a', 1, 1), LexicalError::new('b', 2, 1)]
        );
    }

    #[test]
    fn test_whitespace_only() {
        let result = scan(" \t\n\n  \n");
        assert_eq!(result, ScanResult::default());
    }

    #[test]
    fn test_mixed_case_operation_cascades() {
        let result = scan("Suma");
        assert!(result.tokens.is_empty());
        let errors: Vec<(char, usize)> = result
            .errors
            .iter()
            .map(|e| (e.character, e.column))
            .collect();
        assert_eq!(errors, vec![('S', 1), ('u', 2), ('m', 3), ('a', 4)]);
    }

    #[test]
    fn test_earlier_rule_shadows_reference() {
        // `P` only wins when no operation name starts at the cursor.
        let result = scan("POTENCIA Pa");
        assert_eq!(
            result.tokens,
            vec![
                tok(TokenKind::Operation(Operation::Potencia), "POTENCIA", 1, 1),
                tok(TokenKind::Reference(Reference::P), "P", 1, 10),
            ]
        );
        assert_eq!(result.errors, vec![LexicalError::new('a', 1, 11)]);
    }

    #[test]
    fn test_keyword_without_boundary() {
        let result = scan("Numero5");
        assert_eq!(
            result.tokens,
            vec![
                tok(TokenKind::Keyword(Keyword::Numero), "Numero", 1, 1),
                tok(TokenKind::Number, "5", 1, 7),
            ]
        );
    }

    #[test]
    fn test_tab_advances_one_column() {
        let result = scan("\t=");
        assert_eq!(
            result.tokens,
            vec![tok(TokenKind::Symbol(Symbol::Equals), "=", 1, 2)]
        );
    }

    #[test]
    fn test_carriage_return_is_an_error() {
        let result = scan("MOD\r\nmod");
        assert_eq!(
            result.tokens,
            vec![
                tok(TokenKind::Operation(Operation::Mod), "MOD", 1, 1),
                tok(TokenKind::Operation(Operation::Mod), "mod", 2, 1),
            ]
        );
        assert_eq!(result.errors, vec![LexicalError::new('\r', 1, 4)]);
    }

    #[test]
    fn test_columns_count_characters() {
        let result = scan("ñ<");
        assert_eq!(result.errors, vec![LexicalError::new('ñ', 1, 1)]);
        assert_eq!(
            result.tokens,
            vec![tok(TokenKind::Symbol(Symbol::OpenTag), "<", 1, 2)]
        );
    }

    #[test]
    fn test_operation_document() {
        let input = "<Operacion= SUMA>\n    <Numero>4.5</Numero>\n</Operacion>";
        let result = scan(input);
        assert!(result.is_clean());

        let labels: Vec<&str> = result.tokens.iter().map(|t| t.kind.label()).collect();
        assert_eq!(
            labels,
            vec![
                "OPEN_TAG", "OPERACION", "EQUALS", "SUMA", "CLOSE_TAG", // line 1
                "OPEN_TAG", "NUMERO_KW", "CLOSE_TAG", "NUMBER", "OPEN_TAG", "SLASH",
                "NUMERO_KW", "CLOSE_TAG", // line 2
                "OPEN_TAG", "SLASH", "OPERACION", "CLOSE_TAG", // line 3
            ]
        );

        let number = &result.tokens[8];
        assert_eq!((number.lexeme.as_str(), number.line, number.column), ("4.5", 2, 13));
        let last = result.tokens.last().unwrap();
        assert_eq!((last.line, last.column), (3, 12));
    }

    #[test]
    fn test_into_parts() {
        let (tokens, errors) = scan("R ?").into_parts();
        assert_eq!(tokens, vec![tok(TokenKind::Reference(Reference::R), "R", 1, 1)]);
        assert_eq!(errors, vec![LexicalError::new('?', 1, 3)]);
    }

    #[test]
    fn test_rules_exposes_table() {
        let scanner = Scanner::default();
        assert_eq!(scanner.rules().len(), 17);
        assert_eq!(scanner.rules()[0].label(), "OPERACION");
    }
}
