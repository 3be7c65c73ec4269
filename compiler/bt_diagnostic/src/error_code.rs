use std::fmt;

/// Error codes for all parser diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E0xxx: Scanning errors
/// - E1xxx: Recognition errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Scanning Errors (E0xxx)
    /// Invalid character in source
    E0001,

    // Recognition Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Unexpected end of input
    E1002,
    /// Nesting exceeds the configured limit
    E1003,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 4] = [
        ErrorCode::E0001,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
        }
    }

    /// One-line explanation, used by `btc explain`.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "the scanner found a character that starts no token; it was skipped",
            ErrorCode::E1001 => "no grammar alternative accepts the token at this position",
            ErrorCode::E1002 => "the input ended while a rule still expected more tokens",
            ErrorCode::E1003 => "input nested deeper than the configured maximum depth",
        }
    }

    /// Parse a code such as `E1001`, case-insensitively.
    pub fn from_str_opt(code: &str) -> Option<ErrorCode> {
        ErrorCode::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(code))
    }

    /// Is this a scanning (E0xxx) error?
    pub fn is_lexical(&self) -> bool {
        self.as_str().starts_with("E0")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
