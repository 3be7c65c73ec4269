//! Diagnostic system for parse failures.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Notes (what the parser was doing)
//!
//! Only user-visible failures become diagnostics: scanning problems and the
//! outermost syntax failure. Failures inside a speculative attempt are local
//! to the parser and never reach this crate.

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
