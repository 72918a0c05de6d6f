//! Comment skipping.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl Lexer<'_> {
    /// Consumes a `//` comment up to the end of the line. The newline itself
    /// is left for ordinary whitespace skipping.
    pub(crate) fn skip_line_comment(&mut self) {
        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
    }

    /// Consumes a `/* ... */` comment.
    ///
    /// Nesting is not supported: the first `*/` closes the comment. Returns
    /// an error token if the input ends first.
    pub(crate) fn skip_block_comment(&mut self) -> Option<Token> {
        loop {
            if self.cursor.is_at_end() {
                return Some(self.emit(TokenKind::Error, "Unterminated comment."));
            }
            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance();
                self.cursor.advance();
                return None;
            }
            self.cursor.advance();
        }
    }
}
