//! Shared infrastructure for the Mini-PL interpreter.
//!
//! This crate hosts what every pipeline stage needs: the diagnostic channel
//! with the interpreter's stable error-message formats, and source-file
//! loading.

pub mod diagnostic;
pub mod source;

pub use diagnostic::{Diagnostic, Handler, Stage};
pub use source::{SourceError, SourceFile};
