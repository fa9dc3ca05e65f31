use nom::{
    IResult, Parser,
    character::complete::anychar,
    combinator::{all_consuming, map_opt, not, opt, recognize},
    multi::many0_count,
    sequence::preceded,
};
use url::Url;

use super::{lexical::delimiter, requirement::requirement};
use crate::{Dependency, Scheme};

/// Matches the longest run of characters not starting a requirement [`delimiter`].
///
/// Only the tokens `==`, `>=` and `@` stop the scan;
/// a lone `=` or `>` and characters like `:` are kept.
pub(crate) fn url_candidate(input: &str) -> IResult<&str, &str> {
    recognize(many0_count(preceded(not(delimiter), anychar))).parse(input)
}

/// Matches the url at the start of a dependency.
///
/// The candidate text is validated against each supported [`Scheme`] in turn.
pub fn url(input: &str) -> IResult<&str, Url> {
    map_opt(url_candidate, Scheme::resolve).parse(input)
}

/// Matches a complete dependency: a url followed by an optional requirement clause.
///
/// A missing clause means [`Requirement::default`](crate::Requirement::default).
/// The whole input must be consumed.
pub fn dependency(input: &str) -> IResult<&str, Dependency> {
    map_opt(
        all_consuming((url, opt(requirement))),
        |(url, requirement)| Dependency::new(url, requirement.unwrap_or_default()).ok(),
    )
    .parse(input)
}
