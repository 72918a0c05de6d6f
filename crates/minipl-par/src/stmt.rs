//! Statement parsing and statement-level error recovery.

use minipl_lex::{Token, TokenKind};

use crate::ast::{Expr, Ident, Stmt, Type};
use crate::{ParseOutcome, Parser};

impl Parser<'_> {
    /// Parses a statement list: `stmts → statement ';' stmts | ε`.
    ///
    /// The list itself never fails. A malformed statement is reported and
    /// the parser resynchronizes at the next semicolon; a missing semicolon
    /// after a good statement is reported and skipped past. Either way the
    /// error flag is set, which makes [`Parser::parse`] return `None` at the
    /// end.
    pub(crate) fn stmts(&mut self) -> Vec<Stmt> {
        let mut stmts = Vec::new();

        while self.at_statement_start() {
            let starter = self.current().clone();

            match self.statement() {
                ParseOutcome::Present(stmt) => stmts.push(stmt),
                _ => {
                    self.record_error(
                        starter.line,
                        format!("Invalid {} statement.", statement_label(&starter)),
                    );
                    self.skip_to_semicolon();
                }
            }

            if self.expect(TokenKind::Semicolon).is_none() {
                self.record_error(starter.line, "Expected semicolon.");
                self.skip_past_semicolons();
            }
        }

        stmts
    }

    fn at_statement_start(&self) -> bool {
        matches!(
            self.current().kind,
            TokenKind::Var
                | TokenKind::Ident
                | TokenKind::For
                | TokenKind::Read
                | TokenKind::Print
                | TokenKind::Assert
        )
    }

    fn statement(&mut self) -> ParseOutcome<Stmt> {
        match self.current().kind {
            TokenKind::Var => self.declaration(),
            TokenKind::Ident => self.assignment(),
            TokenKind::For => self.for_statement(),
            TokenKind::Read => self.read_statement(),
            TokenKind::Print => self.print_statement(),
            TokenKind::Assert => self.assert_statement(),
            _ => ParseOutcome::Failed,
        }
    }

    /// `declaration → 'var' id ':' type declaration_suffix`
    fn declaration(&mut self) -> ParseOutcome<Stmt> {
        if self.expect(TokenKind::Var).is_none() {
            return ParseOutcome::Failed;
        }
        let Some(id) = self.expect(TokenKind::Ident) else {
            return ParseOutcome::Failed;
        };
        if self.expect(TokenKind::Colon).is_none() {
            return ParseOutcome::Failed;
        }
        let Some(type_key) = self.expect(TokenKind::TypeKey) else {
            return ParseOutcome::Failed;
        };
        let Some(ty) = Type::from_keyword(&type_key.lexeme) else {
            return ParseOutcome::Failed;
        };
        let init = match self.declaration_suffix() {
            ParseOutcome::Present(expr) => Some(expr),
            ParseOutcome::Empty => None,
            ParseOutcome::Failed => return ParseOutcome::Failed,
        };
        ParseOutcome::Present(Stmt::Declaration {
            name: ident(id),
            ty,
            init,
        })
    }

    /// `declaration_suffix → ':=' expression | ε`
    fn declaration_suffix(&mut self) -> ParseOutcome<Expr> {
        if self.expect(TokenKind::Assign).is_none() {
            return ParseOutcome::Empty;
        }
        self.expression()
    }

    /// `assignment → id ':=' expression`
    fn assignment(&mut self) -> ParseOutcome<Stmt> {
        let Some(id) = self.expect(TokenKind::Ident) else {
            return ParseOutcome::Failed;
        };
        if self.expect(TokenKind::Assign).is_none() {
            return ParseOutcome::Failed;
        }
        match self.expression() {
            ParseOutcome::Present(value) => ParseOutcome::Present(Stmt::Assignment {
                target: ident(id),
                value,
            }),
            _ => ParseOutcome::Failed,
        }
    }

    /// `for → 'for' id 'in' expression '..' expression 'do' stmts 'end' 'for'`
    fn for_statement(&mut self) -> ParseOutcome<Stmt> {
        if self.expect(TokenKind::For).is_none() {
            return ParseOutcome::Failed;
        }
        let Some(id) = self.expect(TokenKind::Ident) else {
            return ParseOutcome::Failed;
        };
        if self.expect(TokenKind::In).is_none() {
            return ParseOutcome::Failed;
        }
        let ParseOutcome::Present(from) = self.expression() else {
            return ParseOutcome::Failed;
        };
        if self.expect(TokenKind::Range).is_none() {
            return ParseOutcome::Failed;
        }
        let ParseOutcome::Present(to) = self.expression() else {
            return ParseOutcome::Failed;
        };
        if self.expect(TokenKind::Do).is_none() {
            return ParseOutcome::Failed;
        }
        let body = self.stmts();
        if self.expect(TokenKind::End).is_none() {
            return ParseOutcome::Failed;
        }
        if self.expect(TokenKind::For).is_none() {
            return ParseOutcome::Failed;
        }
        ParseOutcome::Present(Stmt::For {
            var: ident(id),
            from,
            to,
            body,
        })
    }

    /// `read → 'read' id`
    fn read_statement(&mut self) -> ParseOutcome<Stmt> {
        if self.expect(TokenKind::Read).is_none() {
            return ParseOutcome::Failed;
        }
        let Some(id) = self.expect(TokenKind::Ident) else {
            return ParseOutcome::Failed;
        };
        ParseOutcome::Present(Stmt::Read { target: ident(id) })
    }

    /// `print → 'print' expression`
    fn print_statement(&mut self) -> ParseOutcome<Stmt> {
        let Some(keyword) = self.expect(TokenKind::Print) else {
            return ParseOutcome::Failed;
        };
        match self.expression() {
            ParseOutcome::Present(expr) => ParseOutcome::Present(Stmt::Print {
                expr,
                line: keyword.line,
            }),
            _ => ParseOutcome::Failed,
        }
    }

    /// `assert → 'assert' '(' expression ')'`
    fn assert_statement(&mut self) -> ParseOutcome<Stmt> {
        let Some(keyword) = self.expect(TokenKind::Assert) else {
            return ParseOutcome::Failed;
        };
        if self.expect(TokenKind::LParen).is_none() {
            return ParseOutcome::Failed;
        }
        let ParseOutcome::Present(expr) = self.expression() else {
            return ParseOutcome::Failed;
        };
        if self.expect(TokenKind::RParen).is_none() {
            return ParseOutcome::Failed;
        }
        ParseOutcome::Present(Stmt::Assert {
            expr,
            line: keyword.line,
        })
    }
}

/// The statement label used in `Invalid <kind> statement.` diagnostics,
/// chosen by the statement's leading token.
fn statement_label(starter: &Token) -> String {
    match starter.kind {
        TokenKind::Var => "declaration".to_string(),
        TokenKind::Ident => "assignment".to_string(),
        TokenKind::For => "for".to_string(),
        TokenKind::Read => "read".to_string(),
        TokenKind::Print => "print".to_string(),
        TokenKind::Assert => "assert".to_string(),
        other => format!("type {other:?}"),
    }
}

fn ident(token: Token) -> Ident {
    Ident {
        name: token.lexeme,
        line: token.line,
    }
}
