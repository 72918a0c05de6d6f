//! Integer-literal scanning.

use crate::token::{Token, TokenKind, MAX_LEXEME_LEN};
use crate::Lexer;

impl Lexer<'_> {
    /// An integer literal is a run of decimal digits. The run stops at the
    /// first non-digit, which is what makes the adjacent range in `1..5`
    /// scan as three tokens.
    pub(crate) fn lex_number(&mut self) -> Token {
        let mut len = 0usize;
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
            len += 1;
            if len > MAX_LEXEME_LEN {
                // drain the rest of the run so scanning resumes cleanly
                while self.cursor.current_char().is_ascii_digit() {
                    self.cursor.advance();
                }
                return self.emit(TokenKind::Error, "Integer literal is too long.");
            }
        }

        let text = self.cursor.slice_from(self.token_start);
        self.emit(TokenKind::IntLiteral, text)
    }
}
