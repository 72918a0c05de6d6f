//! The two-character look-ahead tokens: `:=`, `..` and the slash family.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl Lexer<'_> {
    /// `:` followed by `=` is the assignment operator; a lone `:` separates
    /// a declared name from its type.
    pub(crate) fn lex_colon(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.emit(TokenKind::Assign, ":=")
        } else {
            self.emit(TokenKind::Colon, ":")
        }
    }

    /// A period only ever starts the range operator `..`; anything else is a
    /// lexical error.
    pub(crate) fn lex_dot(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('.') {
            self.emit(TokenKind::Range, "..")
        } else {
            self.emit(TokenKind::Error, ".")
        }
    }

    /// `//` and `/*` start comments; a lone `/` is the division operator.
    ///
    /// Returns `None` when a comment was consumed without error.
    pub(crate) fn lex_slash(&mut self) -> Option<Token> {
        self.cursor.advance();
        match self.cursor.current_char() {
            '/' => {
                self.cursor.advance();
                self.skip_line_comment();
                None
            }
            '*' => {
                self.cursor.advance();
                self.skip_block_comment()
            }
            _ => Some(self.emit(TokenKind::BinOp, "/")),
        }
    }
}
