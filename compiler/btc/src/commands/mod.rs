//! Command implementations for the `btc` binary.

mod check;
mod explain;
mod tokens;

pub use check::{check, parse_check_options, CheckOptions};
pub use explain::explain;
pub use tokens::tokens;

use std::io::{self, Read};

/// Resolve an `<input>` argument: `-` reads standard input, anything else is
/// the text itself.
pub fn read_input(arg: &str) -> io::Result<String> {
    if arg == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(arg.to_string())
    }
}
