//! Token kinds for the list language.

use std::fmt;

/// Token kinds for the list language.
///
/// Discriminants are dense from zero so a kind doubles as a bit index in
/// [`TokenSet`](super::TokenSet).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    /// End of input. Token sources return it forever once exhausted.
    Eof = 0,
    /// A run of ASCII letters: `a`, `abc`.
    Name = 1,
    Comma = 2,
    LBracket = 3,
    RBracket = 4,
    Equals = 5,
}

impl TokenKind {
    /// Every kind, in discriminant order.
    pub const ALL: [TokenKind; 6] = [
        TokenKind::Eof,
        TokenKind::Name,
        TokenKind::Comma,
        TokenKind::LBracket,
        TokenKind::RBracket,
        TokenKind::Equals,
    ];

    /// Bit index of this kind.
    #[inline]
    pub const fn discriminant_index(self) -> u8 {
        self as u8
    }

    /// Upper-case category name used in token dumps: `NAME`, `LBRACK`.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Name => "NAME",
            TokenKind::Comma => "COMMA",
            TokenKind::LBracket => "LBRACK",
            TokenKind::RBracket => "RBRACK",
            TokenKind::Equals => "EQUALS",
        }
    }

    /// How the kind reads in a diagnostic.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Eof => "end of input",
            TokenKind::Name => "name",
            TokenKind::Comma => "`,`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::Equals => "`=`",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
