//! Backtrack IR - shared token types
//!
//! This crate contains the small set of value types every other crate in the
//! workspace agrees on:
//! - Spans for source locations
//! - Tokens, token kinds and token sets
//! - The `TokenSource` contract the parser pulls tokens through
//!
//! # Design Philosophy
//!
//! - **Copy everything**: a `Token` borrows its lexeme from the source text,
//!   so buffering, rolling back and replaying tokens never allocates.
//! - **One owner**: token sources hand tokens out by value; whoever buffers
//!   them owns the only sequence.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-buffered types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod source;
mod span;
mod token;

pub use source::{TokenSource, VecSource};
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenSet, EOF_TEXT};
