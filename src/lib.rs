//! # lexico: lexical analysis of operation documents
//!
//! `lexico` classifies the text of small markup-like operation documents
//!
//! ```text
//! <Operacion= MULTIPLICACION>
//!     <Numero>2.5</Numero>
//!     <Numero>4</Numero>
//! </Operacion>
//! ```
//!
//! into tokens with source positions, and reports every character it cannot
//! classify instead of stopping at the first one.
//!
//! ## Pipeline
//!
//! ```text
//! File → SourceFile → Scanner → ScanResult → Report (HTML / JSON / text)
//! ```
//!
//! * [`source`]: reads and checks the input file
//! * [`scanner`]: first-match-wins scanning over a fixed rule table
//! * [`report`]: rendering of tokens and lexical errors
//! * [`config`]: JSON configuration with defaults for every field
//! * [`error`]: failures of the file and report layers
//!
//! The scanner never fails; whether lexical errors should stop a build is
//! left to the caller.

pub mod config;
pub mod error;
pub mod report;
pub mod scanner;
pub mod source;

// Re-exports
pub use error::*;
pub use scanner::{LexicalError, ScanResult, Scanner, Token, TokenKind};
