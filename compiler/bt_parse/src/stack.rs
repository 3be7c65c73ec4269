//! Stack growth for deeply nested input.
//!
//! Every recursive path through the grammar re-enters a nested `list` body,
//! and [`Parser::nested`](crate::Parser::nested) runs each one through
//! [`ensure_sufficient_stack`]. A long chain of `[[[[...` grows the stack on
//! the heap instead of overflowing it.

/// Remaining stack below which a new segment is allocated.
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment.
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 1024 * 1024;

#[cfg(not(target_arch = "wasm32"))]
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM has no stack switching; the host's stack limit applies.
#[cfg(target_arch = "wasm32")]
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
