//! Diagnostic Emitters
//!
//! Emitters turn [`Diagnostic`]s into output. Only the terminal emitter
//! exists today; the trait keeps the driver independent of the format.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics in various formats.
pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    fn flush(&mut self);

    /// Emit a closing summary line for `error_count` errors.
    fn emit_summary(&mut self, error_count: usize);
}
