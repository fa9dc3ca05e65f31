//! # Dependency grammar
//!
//! The parsers in this module are [`nom`] parsers over `&str`.
//! A parser either produces a value along with the unconsumed remainder of its input,
//! or fails; input is never mutated, so alternation (`alt`) can always retry a sibling
//! parser from the original position and a failing sequence never leaves a half-consumed
//! cursor behind.
//!
//! ## Grammar
//!
//! ```text
//! dependency  := url requirement? EOF
//! url         := (!delimiter CHAR)*            ; validated against `Scheme`
//! delimiter   := "==" | ">=" | "@"
//! requirement := exact | up_to_next_major | range | branch | revision
//! exact       := ("==" | "@") version EOF
//! up_to_next_major
//!             := (">=" | "@from:") version EOF
//! range       := ">=" version "<" version EOF
//!              | "@" version "..<" version EOF
//!              | "@" version "..." version EOF
//! branch      := "@branch:" branch_name EOF
//! revision    := "@revision:" NON_WS+ EOF
//! version     := digits "." digits "." digits
//! ```
//!
//! Requirement alternatives are tried in the order listed and the first match wins.
//! Every alternative must reach the end of its input, so a more general form
//! (like `@1.2.3`) never claims a prefix of a more specific one (like `@1.2.3..<2.0.0`).
//!
//! Use [`run`] to observe a parser the way callers see it: either a result and the
//! remaining input, or no result and the original input untouched.

use nom::Parser;

mod dependency;
mod lexical;
mod requirement;

pub use dependency::{dependency, url};
pub use lexical::{char_while, delimiter, digits, literal};
pub use requirement::{
    branch, branch_name, exact, range, requirement, revision, up_to_next_major, version,
};

pub(crate) use dependency::url_candidate;
pub(crate) use requirement::longest_clause;

/// The outcome of running a parser against some input.
///
/// On failure `rest` is always the original input: no partial consumption is retained.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Match<'a, T> {
    /// The parsed value, if the parser matched.
    pub result: Option<T>,

    /// The unconsumed input.
    pub rest: &'a str,
}

impl<'a, T> Match<'a, T> {
    /// A successful match.
    pub fn new(result: T, rest: &'a str) -> Self {
        Self {
            result: Some(result),
            rest,
        }
    }

    /// A failed match against `input`.
    pub fn none(input: &'a str) -> Self {
        Self { result: None, rest: input }
    }

    /// Whether the parser matched.
    pub fn is_match(&self) -> bool {
        self.result.is_some()
    }
}

/// Run `parser` against `input`, discarding the details of any failure.
///
/// ```
/// use depspec::parse::{self, Match};
///
/// let matched = parse::run(parse::version, "1.2.3=");
/// assert_eq!(matched, Match::new(depspec::version!(1, 2, 3), "="));
///
/// let failed = parse::run(parse::version, "1.2");
/// assert_eq!(failed, Match::none("1.2"));
/// ```
pub fn run<'a, P>(mut parser: P, input: &'a str) -> Match<'a, <P as Parser<&'a str>>::Output>
where
    P: Parser<&'a str, Error = nom::error::Error<&'a str>>,
{
    match parser.parse(input) {
        Ok((rest, result)) => Match::new(result, rest),
        Err(_) => Match::none(input),
    }
}
