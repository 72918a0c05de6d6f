//! Diagnostic reporting for all interpreter stages.
//!
//! Mini-PL reports errors in four categories matching the pipeline stages:
//! lexical, syntax, semantic and runtime. The output format is stable and
//! downstream tests match on the exact prefixes, including the line-number
//! padding and the double space after `Syntax` and `Runtime error`.

use std::cell::RefCell;
use std::fmt;

/// Pipeline stage a diagnostic originates from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Lexical,
    Syntax,
    Semantic,
    Runtime,
}

impl Stage {
    /// Error-line prefix. Widths are uneven on purpose so the line numbers
    /// align across stages.
    fn prefix(self) -> &'static str {
        match self {
            Stage::Lexical => "Lexical error in line",
            Stage::Syntax => "Syntax  error in line",
            Stage::Semantic => "Semantic error in line",
            Stage::Runtime => "Runtime error  in line",
        }
    }

    /// Semantic and runtime messages carry a closing period; lexical and
    /// syntax messages ship theirs inside the message text.
    fn terminator(self) -> &'static str {
        match self {
            Stage::Lexical | Stage::Syntax => "",
            Stage::Semantic | Stage::Runtime => ".",
        }
    }
}

/// A single reported error: stage, 1-based source line, message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub stage: Stage,
    pub line: u32,
    pub message: String,
}

impl Diagnostic {
    pub fn new(stage: Stage, line: u32, message: impl Into<String>) -> Self {
        Self {
            stage,
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:3}: {}{}",
            self.stage.prefix(),
            self.line,
            self.message,
            self.stage.terminator()
        )
    }
}

/// Collects diagnostics and mirrors each one to stderr as it is reported.
///
/// The lexer filter, the parser and the evaluator all share one handler by
/// reference; interior mutability keeps the borrow story simple.
#[derive(Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports a diagnostic: prints it to stderr and records it.
    pub fn report(&self, stage: Stage, line: u32, message: impl Into<String>) {
        let diagnostic = Diagnostic::new(stage, line, message);
        eprintln!("{diagnostic}");
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// True if any diagnostic has been reported.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.borrow().is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// All diagnostics reported so far, in order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }
}
