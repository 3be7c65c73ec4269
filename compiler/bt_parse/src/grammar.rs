//! The list grammar.
//!
//! ```text
//! stat     := list EOF | assign EOF
//! assign   := list '=' list
//! list     := '[' elements ']'
//! elements := element (',' element)*
//! element  := NAME ('=' NAME)? | list
//! ```
//!
//! `stat` is ambiguous on its first token: both alternatives start with a
//! whole list, so the parser speculates through `list EOF` and, on failure,
//! re-enters `list` at the same position for `assign`. The second entry is
//! served from the memo table.
//!
//! Only `list` counts toward the nesting limit, so the limit is a bound on
//! bracket depth.

use std::fmt;
use std::str::FromStr;

use bt_ir::{TokenKind, TokenSource};

use crate::memo::RuleId;
use crate::{Match, ParseError, Parser, UnknownRule};

pub const STAT: RuleId = RuleId::new("stat");
pub const ASSIGN: RuleId = RuleId::new("assign");
pub const LIST: RuleId = RuleId::new("list");
pub const ELEMENTS: RuleId = RuleId::new("elements");

/// Entry points a caller can ask for.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TopRule {
    /// A list or an assignment, then end of input.
    #[default]
    Stat,
    /// A single list, then end of input.
    List,
    /// A single assignment, then end of input.
    Assign,
}

impl TopRule {
    pub const ALL: [TopRule; 3] = [TopRule::Stat, TopRule::List, TopRule::Assign];

    pub const fn name(self) -> &'static str {
        match self {
            TopRule::Stat => "stat",
            TopRule::List => "list",
            TopRule::Assign => "assign",
        }
    }
}

impl fmt::Display for TopRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TopRule {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TopRule::ALL
            .into_iter()
            .find(|rule| rule.name() == s)
            .ok_or_else(|| UnknownRule(s.to_string()))
    }
}

impl<'src, S: TokenSource<'src>> Parser<'src, S> {
    /// Recognize `rule` against the rest of the input.
    pub fn parse(&mut self, rule: TopRule) -> Result<Match<'src>, ParseError> {
        self.recognize(|p| p.entry(rule))
    }

    /// Like [`parse`](Self::parse), keeping only whether it matched.
    pub fn try_match(&mut self, rule: TopRule) -> bool {
        self.parse(rule).is_ok()
    }

    fn entry(&mut self, rule: TopRule) -> bool {
        match rule {
            TopRule::Stat => self.stat(),
            TopRule::List => self.list() && self.end_of_input(),
            TopRule::Assign => self.assign() && self.end_of_input(),
        }
    }

    pub fn stat(&mut self) -> bool {
        self.memoized(STAT, |p| {
            p.one_of(&[Self::list_statement, Self::assign_statement])
        })
    }

    fn list_statement(&mut self) -> bool {
        self.list() && self.end_of_input()
    }

    fn assign_statement(&mut self) -> bool {
        self.assign() && self.end_of_input()
    }

    pub fn assign(&mut self) -> bool {
        self.memoized(ASSIGN, |p| {
            p.sequence(&[Self::list, Self::equals, Self::list])
        })
    }

    pub fn list(&mut self) -> bool {
        self.memoized(LIST, |p| {
            p.nested(|p| {
                p.match_token(TokenKind::LBracket)
                    && p.elements()
                    && p.match_token(TokenKind::RBracket)
            })
        })
    }

    pub fn elements(&mut self) -> bool {
        self.memoized(ELEMENTS, |p| p.separated(Self::element, TokenKind::Comma))
    }

    pub fn element(&mut self) -> bool {
        self.one_of(&[Self::name_element, Self::list])
    }

    /// `NAME ('=' NAME)?`
    fn name_element(&mut self) -> bool {
        if !self.match_token(TokenKind::Name) {
            return false;
        }
        self.optional(|p| p.equals() && p.match_token(TokenKind::Name));
        true
    }

    fn equals(&mut self) -> bool {
        self.match_token(TokenKind::Equals)
    }

    fn end_of_input(&mut self) -> bool {
        self.match_token(TokenKind::Eof)
    }
}
