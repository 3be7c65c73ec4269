//! Parser configuration.
//!
//! A plain struct with defaults, builder-style overrides and an environment
//! layer. Drivers start from [`ParseConfig::from_env`] and apply their own
//! flags on top.

use tracing::warn;

/// Environment variable toggling memoization (`0`/`off`/`false`/`no` disable it).
pub const MEMO_ENV: &str = "BT_MEMO";
/// Environment variable overriding [`ParseConfig::max_depth`].
pub const MAX_DEPTH_ENV: &str = "BT_MAX_DEPTH";

/// Default limit on nesting levels.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Knobs for one [`Parser`](crate::Parser) instance.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParseConfig {
    /// Consult and fill the per-rule memo tables while speculating.
    ///
    /// Turning this off never changes whether an input is accepted, only how
    /// often rule bodies re-run.
    pub memoize: bool,
    /// Maximum number of [`nested`](crate::Parser::nested) bodies active at
    /// once, which for the list grammar is bracket depth. Going one deeper
    /// fails that attempt like any other failed alternative.
    pub max_depth: usize,
}

impl Default for ParseConfig {
    fn default() -> Self {
        ParseConfig {
            memoize: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseConfig {
    #[must_use]
    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Defaults overridden by `BT_MEMO` and `BT_MAX_DEPTH`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the `BT_*` keys.
    ///
    /// Unparseable values are ignored with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ParseConfig::default();

        if let Some(raw) = lookup(MEMO_ENV) {
            match parse_flag(&raw) {
                Some(memoize) => config.memoize = memoize,
                None => warn!(value = %raw, "ignoring unrecognized {MEMO_ENV}"),
            }
        }

        if let Some(raw) = lookup(MAX_DEPTH_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(depth) if depth > 0 => config.max_depth = depth,
                _ => warn!(value = %raw, "ignoring invalid {MAX_DEPTH_ENV}"),
            }
        }

        config
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "on" | "true" | "yes" => Some(true),
        "0" | "off" | "false" | "no" => Some(false),
        _ => None,
    }
}
