//! The Mini-PL scanner.
//!
//! [`Lexer::next_token`] dispatches on the leading character of each token;
//! one character of look-ahead separates `:` from `:=`, `.` from `..` and
//! `/` from the two comment forms. The per-family scanning code lives in the
//! submodules.

mod comment;
mod identifier;
mod number;
mod operator;
mod string;

use crate::cursor::Cursor;
use crate::stream::TokenStream;
use crate::token::{Token, TokenKind, MAX_LEXEME_LEN};

pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
    /// Byte position where the current token started.
    pub(crate) token_start: usize,
    /// Line on which the current token started.
    pub(crate) token_line: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_line: 1,
        }
    }

    /// Scans the whole input, returning a stream terminated by exactly one
    /// end-of-input token.
    pub fn tokenize(source: &'a str) -> TokenStream {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return TokenStream::new(tokens);
            }
        }
    }

    /// Returns the next token.
    ///
    /// Whitespace is skipped and comments are consumed without producing a
    /// token; everything else, recognised or not, comes back as a token.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();

            self.token_start = self.cursor.position();
            self.token_line = self.cursor.line();

            if self.cursor.is_at_end() {
                return self.emit(TokenKind::Eof, "EOF");
            }

            let c = self.cursor.current_char();
            return match c {
                '+' | '-' | '*' | '=' | '<' | '&' => {
                    self.cursor.advance();
                    self.emit(TokenKind::BinOp, c.to_string())
                }
                '(' => {
                    self.cursor.advance();
                    self.emit(TokenKind::LParen, "(")
                }
                ')' => {
                    self.cursor.advance();
                    self.emit(TokenKind::RParen, ")")
                }
                ';' => {
                    self.cursor.advance();
                    self.emit(TokenKind::Semicolon, ";")
                }
                '!' => {
                    self.cursor.advance();
                    self.emit(TokenKind::UnOp, "!")
                }
                ':' => self.lex_colon(),
                '.' => self.lex_dot(),
                '/' => match self.lex_slash() {
                    Some(token) => token,
                    // a comment was consumed; go find the next token
                    None => continue,
                },
                '"' => self.lex_string(),
                c if c.is_ascii_alphabetic() => self.lex_identifier(),
                c if c.is_ascii_digit() => self.lex_number(),
                _ => self.lex_unidentified(),
            };
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.cursor.current_char(), ' ' | '\t' | '\n') {
            self.cursor.advance();
        }
    }

    /// An unrecognised leading byte starts an error token spanning up to the
    /// next whitespace, reported as `Unidentified token: <sequence>` at the
    /// line the sequence began on.
    fn lex_unidentified(&mut self) -> Token {
        const PREFIX: &str = "Unidentified token: ";

        let mut sequence = String::new();
        while !self.cursor.is_at_end() {
            let c = self.cursor.current_char();
            if matches!(c, ' ' | '\t' | '\n') {
                break;
            }
            // keep the whole error lexeme within the token length bound
            if PREFIX.len() + sequence.len() + c.len_utf8() > MAX_LEXEME_LEN {
                break;
            }
            sequence.push(c);
            self.cursor.advance();
        }

        self.emit(TokenKind::Error, format!("{PREFIX}{sequence}"))
    }

    pub(crate) fn emit(&self, kind: TokenKind, lexeme: impl Into<String>) -> Token {
        Token::new(kind, lexeme, self.token_line)
    }
}
