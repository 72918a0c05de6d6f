//! The tree-walking evaluator.
//!
//! Walks the program once, strictly left to right within a statement list.
//! Within a binary expression the right (suffix) operand is evaluated before
//! the left, and both sides are evaluated even when one of them fails;
//! non-commutative operators still apply `left OP right`. The first semantic
//! or runtime error halts execution: the failure propagates out through
//! every enclosing statement list and loop.

use std::io::{BufRead, Write};

use minipl_par::ast::{BinOp, Expr, Ident, Program, Stmt, Type};
use minipl_util::{Handler, Stage};

use crate::symbols::{SymbolError, SymbolTable};
use crate::value::Value;

/// Marker for a halted evaluation. The diagnostic has already been reported
/// by the time this propagates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Halted;

type Exec = Result<(), Halted>;
type Eval = Result<Value, Halted>;

/// Fields accepted by `read` are capped at this many bytes.
const MAX_READ_LEN: usize = 512;

/// Evaluator state: the symbol table, the diagnostic handler, and the
/// program's input and output channels.
///
/// The reader and writer are generic so tests can drive the evaluator with
/// in-memory buffers; the driver passes locked stdin and stdout.
pub struct Evaluator<'a, R, W> {
    symbols: SymbolTable,
    handler: &'a Handler,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Evaluator<'a, R, W> {
    pub fn new(handler: &'a Handler, input: R, output: W) -> Self {
        Self {
            symbols: SymbolTable::new(),
            handler,
            input,
            output,
        }
    }

    /// Runs the program to completion. Returns `false` if a semantic or
    /// runtime error stopped it.
    pub fn run(&mut self, program: &Program) -> bool {
        let ok = self.exec_stmts(&program.stmts).is_ok();
        let _ = self.output.flush();
        ok
    }

    /// The symbol table after (or during) a run.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    fn exec_stmts(&mut self, stmts: &[Stmt]) -> Exec {
        for stmt in stmts {
            self.exec_stmt(stmt)?;
        }
        Ok(())
    }

    fn exec_stmt(&mut self, stmt: &Stmt) -> Exec {
        match stmt {
            Stmt::Declaration { name, ty, init } => {
                self.exec_declaration(name, *ty, init.as_ref())
            }
            Stmt::Assignment { target, value } => self.exec_assignment(target, value),
            Stmt::For {
                var,
                from,
                to,
                body,
            } => self.exec_for(var, from, to, body),
            Stmt::Read { target } => self.exec_read(target),
            Stmt::Print { expr, line } => self.exec_print(expr, *line),
            Stmt::Assert { expr, line } => self.exec_assert(expr, *line),
        }
    }

    fn exec_declaration(&mut self, name: &Ident, ty: Type, init: Option<&Expr>) -> Exec {
        let value = match init {
            Some(expr) => {
                let value = self.eval_expr(expr)?;
                if value.ty() != ty {
                    return self.semantic(name.line, "Incompatible types in declaration");
                }
                value
            }
            None => Value::default_for(ty),
        };

        if self.symbols.insert(&name.name, value).is_err() {
            return self.semantic(name.line, format!("Redeclaration of symbol {}", name.name));
        }
        Ok(())
    }

    fn exec_assignment(&mut self, target: &Ident, value: &Expr) -> Exec {
        let Some(binding) = self.symbols.lookup(&target.name) else {
            return self.semantic(target.line, format!("Undefined variable {}", target.name));
        };
        let declared = binding.value.ty();

        let value = self.eval_expr(value)?;
        if value.ty() != declared {
            return self.semantic(target.line, "Incompatible types in assignment");
        }

        self.store(target, value)
    }

    /// Writes a value through [`SymbolTable::update`], reporting the
    /// constant-violation error for a running loop's control variable.
    fn store(&mut self, target: &Ident, value: Value) -> Exec {
        match self.symbols.update(&target.name, value) {
            Ok(()) => Ok(()),
            Err(SymbolError::Constant) => {
                self.semantic(target.line, "Cannot modify the loop control variable")
            }
            Err(_) => self.semantic(target.line, format!("Undefined variable {}", target.name)),
        }
    }

    /// `for x in a..b do S end for`
    ///
    /// The control variable must already be declared as an integer; both
    /// bounds must evaluate to integers. The range is inclusive and runs
    /// ascending only. While the body executes, the control variable is
    /// written with the constant flag set; the flag is cleared on every exit
    /// path, and after a completed loop the variable holds one past the
    /// final index.
    fn exec_for(&mut self, var: &Ident, from: &Expr, to: &Expr, body: &[Stmt]) -> Exec {
        match self.symbols.lookup(&var.name) {
            None => {
                return self.semantic(
                    var.line,
                    format!("Reference to unknown variable {}", var.name),
                );
            }
            Some(binding) if binding.value.ty() != Type::Int => {
                return self.semantic(var.line, "For variable should be integer");
            }
            Some(_) => {}
        }

        let from = self.eval_expr(from)?;
        let to = self.eval_expr(to)?;
        let (Value::Int(start), Value::Int(end)) = (from, to) else {
            return self.semantic(var.line, "For range should be integer");
        };

        let mut counter = start;
        while counter <= end {
            self.symbols.force_update(&var.name, Value::Int(counter));
            self.symbols.set_constant(&var.name, true);

            if let Err(halted) = self.exec_stmts(body) {
                self.symbols.set_constant(&var.name, false);
                return Err(halted);
            }

            match counter.checked_add(1) {
                Some(next) => counter = next,
                None => break,
            }
        }

        self.symbols.force_update(&var.name, Value::Int(counter));
        self.symbols.set_constant(&var.name, false);
        Ok(())
    }

    fn exec_read(&mut self, target: &Ident) -> Exec {
        let Some(binding) = self.symbols.lookup(&target.name) else {
            return self.semantic(target.line, format!("Undefined variable {}", target.name));
        };
        let ty = binding.value.ty();

        // a prompt printed just before the read must be visible
        let _ = self.output.flush();

        match ty {
            Type::Int => {
                let parsed = self
                    .next_field()
                    .and_then(|field| field.parse::<i64>().ok());
                match parsed {
                    Some(n) => self.store(target, Value::Int(n)),
                    None => self.runtime(target.line, "Failed to read integer"),
                }
            }
            Type::Str => match self.next_field() {
                Some(mut field) => {
                    truncate_to_boundary(&mut field, MAX_READ_LEN);
                    self.store(target, Value::Str(field))
                }
                None => self.runtime(target.line, "Failed to read string"),
            },
            Type::Bool => self.runtime(target.line, "Cannot read boolean value"),
        }
    }

    /// Reads one whitespace-delimited field from the input, or `None` at end
    /// of stream.
    fn next_field(&mut self) -> Option<String> {
        loop {
            let (skip, found) = {
                let buf = self.input.fill_buf().ok()?;
                if buf.is_empty() {
                    return None;
                }
                match buf.iter().position(|b| !b.is_ascii_whitespace()) {
                    Some(start) => (start, true),
                    None => (buf.len(), false),
                }
            };
            self.input.consume(skip);
            if found {
                break;
            }
        }

        let mut field = Vec::new();
        loop {
            let (take, done) = {
                let buf = match self.input.fill_buf() {
                    Ok(buf) => buf,
                    Err(_) => break,
                };
                if buf.is_empty() {
                    break;
                }
                match buf.iter().position(|b| b.is_ascii_whitespace()) {
                    Some(end) => {
                        field.extend_from_slice(&buf[..end]);
                        (end, true)
                    }
                    None => {
                        field.extend_from_slice(buf);
                        (buf.len(), false)
                    }
                }
            };
            self.input.consume(take);
            if done {
                break;
            }
        }

        Some(String::from_utf8_lossy(&field).into_owned())
    }

    fn exec_print(&mut self, expr: &Expr, line: u32) -> Exec {
        match self.eval_expr(expr)? {
            Value::Int(n) => {
                let _ = write!(self.output, "{n}");
                Ok(())
            }
            Value::Str(s) => {
                let _ = write!(self.output, "{s}");
                Ok(())
            }
            Value::Bool(_) => self.runtime(line, "Invalid value in printable expression"),
        }
    }

    fn exec_assert(&mut self, expr: &Expr, line: u32) -> Exec {
        match self.eval_expr(expr)? {
            Value::Bool(true) => Ok(()),
            _ => self.semantic(line, "Assertion failed"),
        }
    }

    fn eval_expr(&mut self, expr: &Expr) -> Eval {
        match expr {
            Expr::Int { value, .. } => Ok(Value::Int(*value)),
            Expr::Str { value, .. } => Ok(Value::Str(value.clone())),
            Expr::Var(ident) => self.eval_var(ident),
            Expr::Unary { line, operand, .. } => self.eval_unary(*line, operand),
            Expr::Binary { op, line, lhs, rhs } => self.eval_binary(*op, *line, lhs, rhs),
            Expr::Paren(inner) => self.eval_expr(inner),
        }
    }

    fn eval_var(&mut self, ident: &Ident) -> Eval {
        match self.symbols.lookup(&ident.name) {
            Some(binding) => Ok(binding.value.clone()),
            None => self.semantic_halt(
                ident.line,
                format!("Reference to unknown variable {}", ident.name),
            ),
        }
    }

    fn eval_unary(&mut self, line: u32, operand: &Expr) -> Eval {
        match self.eval_expr(operand)? {
            Value::Bool(b) => Ok(Value::Bool(!b)),
            _ => self.semantic_halt(line, "The argument type of unary expression must be bool"),
        }
    }

    fn eval_binary(&mut self, op: BinOp, line: u32, lhs: &Expr, rhs: &Expr) -> Eval {
        // suffix operand first; both sides run even if it fails
        let rhs = self.eval_expr(rhs);
        let lhs = self.eval_expr(lhs);
        let (lhs, rhs) = (lhs?, rhs?);

        if lhs.ty() != rhs.ty() {
            return self.semantic_halt(line, "Mismatched types in expression");
        }

        match op {
            BinOp::Add => match (lhs, rhs) {
                (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a.wrapping_add(b))),
                (Value::Str(a), Value::Str(b)) => Ok(Value::Str(a + &b)),
                _ => self.semantic_halt(
                    line,
                    "Trying to use addition operator with boolean values",
                ),
            },
            BinOp::Sub => match (lhs, rhs) {
                (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a.wrapping_sub(b))),
                _ => self.semantic_halt(
                    line,
                    "Trying to use subtraction operator with non integer values",
                ),
            },
            BinOp::Mul => match (lhs, rhs) {
                (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a.wrapping_mul(b))),
                _ => self.semantic_halt(
                    line,
                    "Trying to use multiplication operator with non integer values",
                ),
            },
            BinOp::Div => match (lhs, rhs) {
                (Value::Int(_), Value::Int(0)) => {
                    self.handler.report(Stage::Runtime, line, "Division by zero");
                    Err(Halted)
                }
                (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a.wrapping_div(b))),
                _ => self.semantic_halt(
                    line,
                    "Trying to use division operator with non integer values",
                ),
            },
            BinOp::And => match (lhs, rhs) {
                (Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(a && b)),
                _ => self.semantic_halt(
                    line,
                    "Trying to use logical and operator with non boolean values",
                ),
            },
            BinOp::Less => Ok(Value::Bool(less_than(&lhs, &rhs))),
            BinOp::Eq => Ok(Value::Bool(lhs == rhs)),
        }
    }

    fn semantic(&self, line: u32, message: impl Into<String>) -> Exec {
        self.handler.report(Stage::Semantic, line, message);
        Err(Halted)
    }

    fn runtime(&self, line: u32, message: impl Into<String>) -> Exec {
        self.handler.report(Stage::Runtime, line, message);
        Err(Halted)
    }

    fn semantic_halt(&self, line: u32, message: impl Into<String>) -> Eval {
        self.handler.report(Stage::Semantic, line, message);
        Err(Halted)
    }
}

/// `<` on matching types: numeric order for integers, lexicographic byte
/// order for strings, `false < true` for booleans. The operands are
/// type-checked before this is called.
fn less_than(lhs: &Value, rhs: &Value) -> bool {
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => a < b,
        (Value::Str(a), Value::Str(b)) => a < b,
        (Value::Bool(a), Value::Bool(b)) => a < b,
        _ => false,
    }
}

/// Truncates to at most `max` bytes without splitting a UTF-8 sequence.
fn truncate_to_boundary(s: &mut String, max: usize) {
    if s.len() <= max {
        return;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s.truncate(end);
}
