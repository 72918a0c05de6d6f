//! Expression parsing.
//!
//! Expressions are flat: at most one unary or one binary operator. The
//! grammar has no precedence ladder because chaining is impossible by
//! construction; an operand suffix admits a single operator, so `a + b + c`
//! does not parse.

use minipl_lex::TokenKind;

use crate::ast::{BinOp, Expr, Ident, UnOp};
use crate::{ParseOutcome, Parser};

impl Parser<'_> {
    /// `expression → unary_expression | binary_expression`
    pub(crate) fn expression(&mut self) -> ParseOutcome<Expr> {
        if self.at(TokenKind::UnOp) {
            return self.unary_expression();
        }
        self.binary_expression()
    }

    /// `unary_expression → un_op operand`
    fn unary_expression(&mut self) -> ParseOutcome<Expr> {
        let Some(op) = self.expect(TokenKind::UnOp) else {
            return ParseOutcome::Failed;
        };
        match self.operand() {
            ParseOutcome::Present(operand) => ParseOutcome::Present(Expr::Unary {
                op: UnOp::Not,
                line: op.line,
                operand: Box::new(operand),
            }),
            _ => ParseOutcome::Failed,
        }
    }

    /// `binary_expression → operand operand_suffix`
    fn binary_expression(&mut self) -> ParseOutcome<Expr> {
        let ParseOutcome::Present(lhs) = self.operand() else {
            return ParseOutcome::Failed;
        };
        match self.operand_suffix() {
            ParseOutcome::Empty => ParseOutcome::Present(lhs),
            ParseOutcome::Present((op, line, rhs)) => ParseOutcome::Present(Expr::Binary {
                op,
                line,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            }),
            ParseOutcome::Failed => ParseOutcome::Failed,
        }
    }

    /// `operand_suffix → bin_op operand | ε`
    fn operand_suffix(&mut self) -> ParseOutcome<(BinOp, u32, Expr)> {
        let Some(op_token) = self.expect(TokenKind::BinOp) else {
            return ParseOutcome::Empty;
        };
        let Some(op) = BinOp::from_lexeme(&op_token.lexeme) else {
            return ParseOutcome::Failed;
        };
        match self.operand() {
            ParseOutcome::Present(rhs) => ParseOutcome::Present((op, op_token.line, rhs)),
            _ => ParseOutcome::Failed,
        }
    }

    /// `operand → int_literal | string_literal | id | '(' expression ')'`
    fn operand(&mut self) -> ParseOutcome<Expr> {
        match self.current().kind {
            TokenKind::IntLiteral => {
                let token = self.current().clone();
                self.advance();
                // digit runs that overflow 64 bits saturate
                let value = token.lexeme.parse::<i64>().unwrap_or(i64::MAX);
                ParseOutcome::Present(Expr::Int {
                    value,
                    line: token.line,
                })
            }
            TokenKind::StrLiteral => {
                let token = self.current().clone();
                self.advance();
                ParseOutcome::Present(Expr::Str {
                    value: token.lexeme,
                    line: token.line,
                })
            }
            TokenKind::Ident => {
                let token = self.current().clone();
                self.advance();
                ParseOutcome::Present(Expr::Var(Ident {
                    name: token.lexeme,
                    line: token.line,
                }))
            }
            TokenKind::LParen => {
                self.advance();
                let ParseOutcome::Present(inner) = self.expression() else {
                    return ParseOutcome::Failed;
                };
                if self.expect(TokenKind::RParen).is_none() {
                    return ParseOutcome::Failed;
                }
                ParseOutcome::Present(Expr::Paren(Box::new(inner)))
            }
            _ => ParseOutcome::Failed,
        }
    }
}
