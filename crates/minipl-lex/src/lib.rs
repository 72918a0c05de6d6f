//! Lexical analysis for Mini-PL.
//!
//! The scanner turns source text into a [`TokenStream`]: a finite sequence
//! of (kind, lexeme, line) tokens terminated by exactly one end-of-input
//! token. Scanning never fails globally; every unrecognised sequence becomes
//! an error token, and [`TokenStream::strip_errors`] removes and reports
//! those before the stream reaches the parser.

pub mod cursor;
pub mod lexer;
pub mod stream;
pub mod token;

#[cfg(test)]
mod edge_cases;

pub use lexer::Lexer;
pub use stream::TokenStream;
pub use token::{Token, TokenKind, MAX_LEXEME_LEN};
