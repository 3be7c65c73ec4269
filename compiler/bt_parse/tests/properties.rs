//! Property tests for the engine's guarantees over generated input.

use bt_lexer::Lexer;
use bt_parse::{Match, ParseConfig, ParseError, Parser, TopRule};
use proptest::prelude::*;

/// A well-formed element: a name, a binding, or a nested list.
fn element() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        "[a-z]{1,3}",
        ("[a-z]{1,3}", "[a-z]{1,3}").prop_map(|(a, b)| format!("{a}={b}")),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop::collection::vec(inner, 1..4).prop_map(|elems| format!("[{}]", elems.join(", ")))
    })
}

/// A well-formed list.
fn list() -> impl Strategy<Value = String> {
    prop::collection::vec(element(), 1..4).prop_map(|elems| format!("[{}]", elems.join(", ")))
}

/// Arbitrary token soup, mostly ill-formed.
fn soup() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![Just("["), Just("]"), Just(","), Just("="), Just("a"), Just("b")],
        0..16,
    )
    .prop_map(|tokens| tokens.join(" "))
}

/// Well-formed and near-miss statements.
fn statement() -> impl Strategy<Value = String> {
    prop_oneof![
        list(),
        (list(), list()).prop_map(|(l, r)| format!("{l} = {r}")),
        (list(), soup()).prop_map(|(l, tail)| format!("{l} {tail}")),
        soup(),
    ]
}

fn run(source: &str, rule: TopRule, config: ParseConfig) -> Result<Match<'_>, ParseError> {
    Parser::with_config(Lexer::new(source), config).parse(rule)
}

proptest! {
    #[test]
    fn generated_lists_are_accepted(source in list()) {
        for rule in [TopRule::List, TopRule::Stat] {
            let result = run(&source, rule, ParseConfig::default());
            prop_assert!(result.is_ok(), "{} rejected {:?}: {:?}", rule, source, result);
        }
    }

    #[test]
    fn generated_assignments_are_statements(left in list(), right in list()) {
        let source = format!("{left} = {right}");
        prop_assert!(run(&source, TopRule::Stat, ParseConfig::default()).is_ok());
        prop_assert!(run(&source, TopRule::Assign, ParseConfig::default()).is_ok());
        prop_assert!(run(&source, TopRule::List, ParseConfig::default()).is_err());
    }

    #[test]
    fn memoization_never_changes_the_outcome(source in statement()) {
        for rule in TopRule::ALL {
            let memo = run(&source, rule, ParseConfig::default());
            let plain = run(&source, rule, ParseConfig::default().with_memoize(false));
            prop_assert_eq!(memo, plain);
        }
    }

    #[test]
    fn memoization_never_changes_the_outcome_near_the_depth_limit(
        source in statement(),
        max_depth in 1usize..5,
    ) {
        for rule in TopRule::ALL {
            let config = ParseConfig::default().with_max_depth(max_depth);
            let memo = run(&source, rule, config);
            let plain = run(&source, rule, config.with_memoize(false));
            prop_assert_eq!(memo, plain);
        }
    }

    #[test]
    fn memoization_is_invisible_to_a_retried_parse(source in statement()) {
        let retried = |config: ParseConfig| {
            let mut p = Parser::with_config(Lexer::new(&source), config);
            TopRule::ALL.map(|rule| p.parse(rule))
        };
        prop_assert_eq!(
            retried(ParseConfig::default()),
            retried(ParseConfig::default().with_memoize(false))
        );
    }

    #[test]
    fn parsing_is_deterministic(source in statement()) {
        for rule in TopRule::ALL {
            let first = run(&source, rule, ParseConfig::default());
            let second = run(&source, rule, ParseConfig::default());
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn rejection_restores_the_cursor(source in statement()) {
        let mut p = Parser::new(Lexer::new(&source));
        for rule in TopRule::ALL {
            if p.try_match(rule) {
                break;
            }
            prop_assert_eq!(p.absolute_position(), 0);
            prop_assert_eq!(p.speculation_depth(), 0);
        }
        prop_assert!(p.stats().is_balanced());
    }

    #[test]
    fn compaction_does_not_change_later_matches(lists in prop::collection::vec(list(), 1..5)) {
        let joined = lists.join(" ");
        let mut p = Parser::new(Lexer::new(&joined));
        let mut next = 0;
        for (i, alone) in lists.iter().enumerate() {
            let Ok(m) = p.recognize(|p| p.list()) else {
                return Err(TestCaseError::fail(format!("list {i} of {joined:?} rejected")));
            };

            let expected = run(alone, TopRule::List, ParseConfig::default());
            let Ok(expected) = expected else {
                return Err(TestCaseError::fail(format!("{alone:?} rejected alone")));
            };
            // Same tokens, minus the end-of-input `run` adds.
            prop_assert_eq!(m.lexemes(), expected.lexemes()[..expected.len() - 1].to_vec());
            prop_assert_eq!(m.start, next);
            next = m.end();
            prop_assert!(p.memo().is_empty());
        }
        prop_assert_eq!(p.stats().compactions, lists.len());
    }
}
