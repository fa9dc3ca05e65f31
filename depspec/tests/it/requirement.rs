use assert_matches::assert_matches;
use proptest::prelude::*;
use simple_test_case::test_case;

use depspec::{
    Error, ParseError, Requirement,
    parse::{self, Match},
    version,
};

#[test_case("@1.2.3", Requirement::Exact(version!(1, 2, 3)); "exact")]
#[test_case("@from:1.2.3", Requirement::Range(version!(1, 2, 3)..version!(2, 0, 0)); "from")]
#[test_case("@0.1.0..<0.2.0", Requirement::Range(version!(0, 1, 0)..version!(0, 2, 0)); "range")]
#[test_case("", Requirement::default(); "default")]
#[test]
fn display(expected: &str, requirement: Requirement) {
    pretty_assertions::assert_eq!(requirement.to_string(), expected);
    pretty_assertions::assert_eq!(Requirement::parse(expected).expect("must parse"), requirement);
}

#[test_case("@1.2.3junk"; "junk")]
#[test_case("1.2.3"; "no_token")]
#[test_case("@branch:"; "empty_branch")]
#[test]
fn parse_invalid(input: &str) {
    assert_matches!(Requirement::parse(input), Err(Error::Parse(_)));
}

#[test]
fn parse_invalid_kind() {
    assert_matches!(
        Requirement::parse("~>1.2.3"),
        Err(Error::Parse(ParseError::Requirement { .. }))
    );
    assert_matches!(
        Requirement::parse("==1.2.3.4"),
        Err(Error::Parse(ParseError::Trailing { .. }))
    );
}

#[test]
fn precedence_is_first_match() {
    // `>=1.2.3` is both a next-major form and the start of an explicit range;
    // each form must reach the end of the input, so only one of them applies.
    pretty_assertions::assert_eq!(
        parse::run(parse::requirement, ">=1.2.3"),
        Match::new(Requirement::Range(version!(1, 2, 3)..version!(2, 0, 0)), "")
    );
    pretty_assertions::assert_eq!(
        parse::run(parse::requirement, ">=1.2.3<1.5.0"),
        Match::new(Requirement::Range(version!(1, 2, 3)..version!(1, 5, 0)), "")
    );
}

proptest! {
    /// The next-major upper bound only depends on the major component.
    #[test]
    fn next_major_bound(major in 0u64..10_000, minor in any::<u64>(), patch in any::<u64>()) {
        for input in [format!(">={major}.{minor}.{patch}"), format!("@from:{major}.{minor}.{patch}")] {
            let parsed = parse::run(parse::up_to_next_major, &input);
            prop_assert_eq!(parsed.rest, "");
            prop_assert_eq!(
                parsed.result,
                Some(Requirement::Range(version!(major, minor, patch)..version!(major + 1, 0, 0)))
            );
        }
    }

    /// Closed ranges bump only the patch of their upper bound.
    #[test]
    fn closed_range_bound(
        lower in (0u64..1000, 0u64..1000, 0u64..1000),
        major in any::<u64>(),
        minor in any::<u64>(),
        patch in 0u64..u64::MAX,
    ) {
        let input = format!("@{}.{}.{}...{major}.{minor}.{patch}", lower.0, lower.1, lower.2);
        let parsed = parse::run(parse::range, &input);
        prop_assert_eq!(parsed.rest, "");
        prop_assert_eq!(
            parsed.result,
            Some(Requirement::Range(
                version!(lower.0, lower.1, lower.2)..version!(major, minor, patch + 1)
            ))
        );
    }

    /// Half-open ranges keep both bounds verbatim, even out of order.
    #[test]
    fn half_open_range_verbatim(
        lower in (0u64..1000, 0u64..1000, 0u64..1000),
        upper in (0u64..1000, 0u64..1000, 0u64..1000),
    ) {
        let expected = Requirement::Range(
            version!(lower.0, lower.1, lower.2)..version!(upper.0, upper.1, upper.2),
        );
        for input in [
            format!("@{}.{}.{}..<{}.{}.{}", lower.0, lower.1, lower.2, upper.0, upper.1, upper.2),
            format!(">={}.{}.{}<{}.{}.{}", lower.0, lower.1, lower.2, upper.0, upper.1, upper.2),
        ] {
            prop_assert_eq!(parse::run(parse::range, &input), Match::new(expected.clone(), ""));
        }
    }
}
