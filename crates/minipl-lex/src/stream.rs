//! Token streams.
//!
//! A token stream is an ordered sequence of tokens terminated by exactly one
//! end-of-input token. Error tokens may be present right after scanning;
//! [`TokenStream::strip_errors`] removes and reports them before the stream
//! reaches the parser.

use minipl_util::{Handler, Stage};

use crate::token::{Token, TokenKind};

#[derive(Clone, Debug)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        debug_assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::Eof));
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Removes every error token from the stream, reporting one lexical
    /// diagnostic per removed token. The returned stream is still terminated
    /// by end-of-input.
    pub fn strip_errors(self, handler: &Handler) -> TokenStream {
        let mut tokens = Vec::with_capacity(self.tokens.len());
        for token in self.tokens {
            if token.kind == TokenKind::Error {
                handler.report(Stage::Lexical, token.line, token.lexeme);
            } else {
                tokens.push(token);
            }
        }
        TokenStream { tokens }
    }
}
