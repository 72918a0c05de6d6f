//! Parser-level edge cases: top-level recovery and the errors-found
//! contract.

use crate::{Parser, Program};
use minipl_lex::Lexer;
use minipl_util::{Handler, Stage};

fn parse(source: &str) -> (Option<Program>, Handler) {
    let handler = Handler::new();
    let stream = Lexer::tokenize(source).strip_errors(&handler);
    let program = Parser::new(stream, &handler).parse();
    (program, handler)
}

#[test]
fn a_clean_program_yields_a_tree() {
    let (program, handler) = parse(
        "var n : int := 3;\n\
         var total : int := 0;\n\
         total := n * n;\n\
         print total;\n",
    );
    assert!(!handler.has_errors());
    assert_eq!(program.expect("should parse").stmts.len(), 4);
}

#[test]
fn any_syntax_error_withholds_the_tree() {
    let (program, handler) = parse("var ;\nprint 1;\n");
    assert!(program.is_none());
    assert!(handler.has_errors());
}

#[test]
fn unexpected_token_at_top_level() {
    let (program, handler) = parse("5;");
    assert!(program.is_none());
    let diagnostics = handler.diagnostics();
    assert_eq!(diagnostics[0].stage, Stage::Syntax);
    assert_eq!(diagnostics[0].message, "Unexpected token 5.");
}

#[test]
fn stray_closing_paren_at_top_level() {
    let (program, handler) = parse(")");
    assert!(program.is_none());
    assert_eq!(handler.diagnostics()[0].message, "Unexpected token ).");
}

#[test]
fn error_tokens_never_reach_the_parser() {
    // the lexical error is stripped first; what remains parses clean
    let (program, handler) = parse("print 1 ?? ;");
    // `??` is removed, leaving `print 1 ;`
    assert!(program.is_some());
    let diagnostics = handler.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].stage, Stage::Lexical);
}

#[test]
fn semicolon_only_statements_do_not_parse() {
    let (program, handler) = parse(";");
    assert!(program.is_none());
    assert_eq!(handler.diagnostics()[0].message, "Unexpected token ;.");
}

#[test]
fn recovery_spans_multiple_statements_and_lines() {
    let (program, handler) = parse(
        "var x : int := 1;\n\
         var y : in ;\n\
         y := 2;\n\
         print (x;\n\
         print x;\n",
    );
    assert!(program.is_none());
    let messages: Vec<_> = handler
        .diagnostics()
        .iter()
        .map(|d| (d.line, d.message.clone()))
        .collect();
    assert_eq!(
        messages,
        vec![
            (2, "Invalid declaration statement.".to_string()),
            (4, "Invalid print statement.".to_string()),
        ]
    );
}

#[test]
fn eof_inside_a_for_loop_fails_the_statement() {
    let (program, handler) = parse("for i in 0..2 do print i;");
    assert!(program.is_none());
    assert!(handler
        .diagnostics()
        .iter()
        .any(|d| d.message == "Invalid for statement."));
}
