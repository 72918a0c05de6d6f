//! Whole-input scanning tests and scanner invariants.

use proptest::prelude::*;

use crate::token::{TokenKind, MAX_LEXEME_LEN};
use crate::Lexer;
use minipl_util::Handler;

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::tokenize(source)
        .tokens()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn declaration_with_initializer() {
    assert_eq!(
        kinds("var x : int := 4 + 5;"),
        vec![
            TokenKind::Var,
            TokenKind::Ident,
            TokenKind::Colon,
            TokenKind::TypeKey,
            TokenKind::Assign,
            TokenKind::IntLiteral,
            TokenKind::BinOp,
            TokenKind::IntLiteral,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn for_loop_header() {
    assert_eq!(
        kinds("for i in 0..n do print i; end for;"),
        vec![
            TokenKind::For,
            TokenKind::Ident,
            TokenKind::In,
            TokenKind::IntLiteral,
            TokenKind::Range,
            TokenKind::Ident,
            TokenKind::Do,
            TokenKind::Print,
            TokenKind::Ident,
            TokenKind::Semicolon,
            TokenKind::End,
            TokenKind::For,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn assert_with_comparison() {
    assert_eq!(
        kinds("assert (x = 3);"),
        vec![
            TokenKind::Assert,
            TokenKind::LParen,
            TokenKind::Ident,
            TokenKind::BinOp,
            TokenKind::IntLiteral,
            TokenKind::RParen,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn comments_vanish_between_tokens() {
    assert_eq!(
        kinds("print /* inline */ 1; // trailing\n"),
        vec![
            TokenKind::Print,
            TokenKind::IntLiteral,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn error_tokens_do_not_stop_the_scanner() {
    let stream = Lexer::tokenize(". ?? print");
    let scanned: Vec<TokenKind> = stream.iter().map(|token| token.kind).collect();
    assert_eq!(
        scanned,
        vec![
            TokenKind::Error,
            TokenKind::Error,
            TokenKind::Print,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn very_long_unidentified_sequence_is_bounded() {
    let source = "@".repeat(3 * MAX_LEXEME_LEN);
    let stream = Lexer::tokenize(&source);
    for token in stream.iter() {
        assert!(token.lexeme.len() <= MAX_LEXEME_LEN);
    }
    assert_eq!(stream.tokens().last().map(|t| t.kind), Some(TokenKind::Eof));
}

#[test]
fn hello_world_scans_cleanly() {
    let handler = Handler::new();
    let stream = Lexer::tokenize("print \"Hello, world!\\n\";").strip_errors(&handler);
    assert!(!handler.has_errors());
    let tokens = stream.tokens();
    assert_eq!(tokens[1].kind, TokenKind::StrLiteral);
    assert_eq!(tokens[1].lexeme, "Hello, world!\n");
}

proptest! {
    /// Every scan ends with exactly one end-of-input token and nothing after
    /// it, and no lexeme exceeds the length cap.
    #[test]
    fn scanning_terminates_well_formed(source in ".*") {
        let stream = Lexer::tokenize(&source);
        let tokens = stream.tokens();

        prop_assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::Eof));
        let eof_count = tokens.iter().filter(|token| token.kind == TokenKind::Eof).count();
        prop_assert_eq!(eof_count, 1);

        for token in tokens {
            prop_assert!(token.lexeme.len() <= MAX_LEXEME_LEN);
        }
    }

    /// Filtering error tokens preserves the stream shape.
    #[test]
    fn stripping_preserves_termination(source in ".*") {
        let handler = Handler::new();
        let stream = Lexer::tokenize(&source).strip_errors(&handler);
        let tokens = stream.tokens();

        prop_assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::Eof));
        prop_assert!(tokens.iter().all(|token| token.kind != TokenKind::Error));
    }
}
