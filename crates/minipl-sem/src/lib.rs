//! Semantic analysis and evaluation for Mini-PL.
//!
//! The evaluator walks the parsed tree once, checking types, scope and the
//! loop-variable immutability rule while performing the side effects of
//! `print`, `read` and `assert`. The first semantic or runtime error stops
//! execution.

pub mod eval;
pub mod symbols;
pub mod value;


pub use eval::Evaluator;
pub use symbols::{SymbolError, SymbolTable};
pub use value::Value;
