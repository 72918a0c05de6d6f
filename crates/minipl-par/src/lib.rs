//! Recursive-descent parsing for Mini-PL.
//!
//! The grammar is LL(1): every production is predicted from the kind of the
//! current unconsumed token. Nullable productions return
//! [`ParseOutcome::Empty`] rather than failing, so parse failure needs its
//! own variant, [`ParseOutcome::Failed`]. Recovery happens at statement
//! boundaries: on a malformed statement the parser reports one diagnostic,
//! skips ahead to the next semicolon and keeps going, so a single run
//! surfaces every syntax error in the file.

pub mod ast;
mod expr;
mod stmt;

#[cfg(test)]
mod edge_cases;

use minipl_lex::{Token, TokenKind, TokenStream};
use minipl_util::{Handler, Stage};

pub use ast::Program;

/// Result of one grammar production.
///
/// `Empty` means an ε-admissible production matched nothing, which is not an
/// error. `Failed` is a genuine parse failure; by the time it reaches the
/// statement list the diagnostic has been decided there, not in the
/// production that failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseOutcome<T> {
    Present(T),
    Empty,
    Failed,
}

pub struct Parser<'a> {
    tokens: Vec<Token>,
    position: usize,
    handler: &'a Handler,
    errors_found: bool,
}

impl<'a> Parser<'a> {
    /// The stream must be terminated by end-of-input, which is what the
    /// scanner and the error-token filter both guarantee.
    pub fn new(stream: TokenStream, handler: &'a Handler) -> Self {
        Self {
            tokens: stream.into_tokens(),
            position: 0,
            handler,
            errors_found: false,
        }
    }

    /// Parses a complete program.
    ///
    /// Returns `None` when any syntax error was found; the caller must not
    /// evaluate in that case.
    pub fn parse(mut self) -> Option<Program> {
        let stmts = self.stmts();

        if self.current().kind != TokenKind::Eof {
            let token = self.current();
            self.handler.report(
                Stage::Syntax,
                token.line,
                format!("Unexpected token {}.", token.lexeme),
            );
            return None;
        }

        if self.errors_found {
            None
        } else {
            Some(Program { stmts })
        }
    }

    pub(crate) fn current(&self) -> &Token {
        &self.tokens[self.position]
    }

    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    /// Moves to the next token; the end-of-input token is never passed.
    pub(crate) fn advance(&mut self) {
        if self.current().kind != TokenKind::Eof {
            self.position += 1;
        }
    }

    /// Consumes and returns the current token if it has the expected kind.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Option<Token> {
        if self.current().kind == kind {
            let token = self.current().clone();
            self.advance();
            Some(token)
        } else {
            None
        }
    }

    pub(crate) fn record_error(&mut self, line: u32, message: impl Into<String>) {
        self.errors_found = true;
        self.handler.report(Stage::Syntax, line, message);
    }

    /// Skips ahead to the next semicolon (or end of input) without consuming
    /// it.
    pub(crate) fn skip_to_semicolon(&mut self) {
        while !matches!(
            self.current().kind,
            TokenKind::Semicolon | TokenKind::Eof
        ) {
            self.advance();
        }
    }

    /// Skips to and then past a run of semicolons, landing on the first
    /// token of the next statement.
    pub(crate) fn skip_past_semicolons(&mut self) {
        self.skip_to_semicolon();
        while self.at(TokenKind::Semicolon) {
            self.advance();
        }
    }
}
