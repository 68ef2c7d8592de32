//! # Scanner Component
//!
//! The scanner performs the lexical analysis of operation documents such as
//!
//! ```text
//! <Operacion= SUMA>
//!     <Numero>4.5</Numero>
//!     <Numero>2</Numero>
//! </Operacion>
//! ```
//!
//! turning raw text into classified tokens plus a separate channel of
//! lexical errors.
//!
//! ## Design Principles
//!
//! * **First match wins**: rules are tried in table order and the first one
//!   that matches at the cursor is taken, even if a later rule would match a
//!   longer lexeme. See [`rule::RULES`].
//! * **Never fails**: a character no rule accepts becomes a
//!   [`LexicalError`](error::LexicalError) and scanning resumes right after it.
//! * **Character positions**: lines and columns are 1-based and columns count
//!   characters, not bytes.
//!
//! ## Component Structure
//!
//! * [`scan`]: the [`Scanner`] loop and [`ScanResult`]
//! * [`rule`]: the ordered rule table and its patterns
//! * [`keyword`]: reserved words and single-letter references
//! * [`operation`]: arithmetic operation names
//! * [`literal`]: numeric literals
//! * [`symbol`]: structural symbols
//! * [`whitespace`]: blanks and newlines
//! * [`token`]: token kinds and tokens
//! * [`error`]: lexical errors
//!
//! ## Usage Example
//!
//! ```rust
//! use lexico::scanner::Scanner;
//!
//! let result = Scanner::new().scan("<Numero>12</Numero>\n#");
//! assert_eq!(result.tokens.len(), 8);
//! assert_eq!(result.errors[0].line, 2);
//! ```

pub mod error;
pub mod keyword;
pub mod literal;
pub mod operation;
pub mod rule;
pub mod scan;
pub mod symbol;
pub mod token;
pub mod whitespace;

pub use error::{LexicalError, LEXICAL_ERROR_KIND};
pub use rule::{Pattern, Rule, RULES};
pub use scan::{ScanResult, Scanner};
pub use token::{Token, TokenKind};
