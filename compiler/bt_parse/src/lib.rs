//! Speculative backtracking parser for the list language.
//!
//! The engine ([`Parser`]) pulls tokens lazily through a [`LookaheadBuffer`],
//! tries alternatives under a stack of rollback marks, and memoizes rule
//! outcomes per buffer position so re-entering a rule at the same place is
//! free. Once a top-level match commits with nothing left buffered, the
//! buffer compacts and every memo table is cleared with it.
//!
//! # Entry points
//!
//! - [`parse_source`]: lex and parse a string in one call.
//! - [`Parser::parse`] / [`Parser::try_match`]: run a [`TopRule`] against any
//!   [`TokenSource`](bt_ir::TokenSource).
//! - [`Parser::recognize`]: run a custom rule built from the combinators.

mod buffer;
mod config;
mod error;
mod grammar;
mod memo;
mod outcome;
mod parser;
mod speculation;
mod stack;
mod stats;

pub use buffer::LookaheadBuffer;
pub use config::{ParseConfig, DEFAULT_MAX_DEPTH, MAX_DEPTH_ENV, MEMO_ENV};
pub use error::{ParseError, SyntaxError, UnknownRule};
pub use grammar::{TopRule, ASSIGN, ELEMENTS, LIST, STAT};
pub use memo::{FailurePoint, MemoEntry, MemoTable, MemoTables, RuleId};
pub use outcome::Match;
pub use parser::{Parser, Rule};
pub use speculation::SpeculationStack;
pub use stack::ensure_sufficient_stack;
pub use stats::ParseStats;

use bt_lexer::Lexer;

/// Lex and parse `source` as `rule`.
///
/// Scanning errors take precedence: if any character was skipped the input
/// is rejected with the first [`ParseError::Lexical`], even when the
/// remaining tokens happen to match.
pub fn parse_source<'src>(
    source: &'src str,
    rule: TopRule,
    config: ParseConfig,
) -> Result<Match<'src>, ParseError> {
    let mut parser = Parser::with_config(Lexer::new(source), config);
    let result = parser.parse(rule);
    let mut lexer = parser.into_source();
    match lexer.take_errors().into_iter().next() {
        Some(err) => Err(err.into()),
        None => result,
    }
}

#[cfg(test)]
mod tests;
