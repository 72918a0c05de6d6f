//! Identifier and keyword scanning.

use crate::token::{keyword_from_ident, Token, TokenKind, MAX_LEXEME_LEN};
use crate::Lexer;

impl Lexer<'_> {
    /// A letter begins a run of letters, digits and underscores. The
    /// finished run is checked against the keyword set.
    ///
    /// Runs longer than the lexeme cap become an error token; scanning
    /// resumes where the cap was hit, so the rest of the run comes back as a
    /// fresh identifier.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        let mut len = 0usize;
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
            len += 1;
            if len > MAX_LEXEME_LEN {
                return self.emit(TokenKind::Error, "Ignoring too long identifier.");
            }
        }

        let text = self.cursor.slice_from(self.token_start);
        match keyword_from_ident(text) {
            Some(kind) => self.emit(kind, text),
            None => self.emit(TokenKind::Ident, text),
        }
    }
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
