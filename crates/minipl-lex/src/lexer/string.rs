//! String-literal scanning and escape decoding.

use crate::token::{Token, TokenKind, MAX_LEXEME_LEN};
use crate::Lexer;

impl Lexer<'_> {
    /// Scans a string literal, decoding the escape sequences
    /// `\n \t \a \b \f \r \v \\ \"` into their single characters. The
    /// token's lexeme is the decoded value.
    ///
    /// On any error inside the literal (an undefined control sequence, a
    /// value past the length cap, or end of input before the closing quote)
    /// exactly one error token is produced and the remainder of the literal
    /// is discarded up to the next unescaped quote.
    pub(crate) fn lex_string(&mut self) -> Token {
        self.cursor.advance();

        let mut value = String::new();
        loop {
            if self.cursor.is_at_end() {
                return self.emit(TokenKind::Error, "Unterminated string literal.");
            }

            let c = self.cursor.current_char();
            self.cursor.advance();

            match c {
                '"' => return self.emit(TokenKind::StrLiteral, value),
                '\\' => {
                    if self.cursor.is_at_end() {
                        return self.emit(TokenKind::Error, "Unterminated string literal.");
                    }
                    let escape = self.cursor.current_char();
                    self.cursor.advance();
                    match decode_escape(escape) {
                        Some(decoded) => value.push(decoded),
                        None => {
                            let token = self.emit(
                                TokenKind::Error,
                                format!("Undefined control sequence \\{escape} in string literal"),
                            );
                            self.skip_string_remainder();
                            return token;
                        }
                    }
                }
                _ => value.push(c),
            }

            if value.len() > MAX_LEXEME_LEN {
                let token = self.emit(TokenKind::Error, "String literal is too long.");
                self.skip_string_remainder();
                return token;
            }
        }
    }

    /// Discards input through the closing quote of a literal being
    /// abandoned, honouring escaped quotes on the way.
    fn skip_string_remainder(&mut self) {
        while !self.cursor.is_at_end() {
            let c = self.cursor.current_char();
            self.cursor.advance();
            match c {
                '"' => return,
                '\\' => {
                    if !self.cursor.is_at_end() {
                        self.cursor.advance();
                    }
                }
                _ => {}
            }
        }
    }
}

fn decode_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        't' => Some('\t'),
        'a' => Some('\x07'),
        'b' => Some('\x08'),
        'f' => Some('\x0C'),
        'r' => Some('\r'),
        'v' => Some('\x0B'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        _ => None,
    }
}
