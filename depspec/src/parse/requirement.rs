use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::take_while1,
    character::complete::char,
    combinator::{all_consuming, map, map_opt, verify},
    sequence::{preceded, separated_pair},
};
use non_empty_string::NonEmptyString;

use super::lexical::{digits, literal};
use crate::{BranchName, Requirement, Version};

/// A requirement form that may leave unconsumed input behind.
type Clause = fn(&str) -> IResult<&str, Requirement>;

/// Every requirement form, in precedence order.
const CLAUSES: [Clause; 5] = [
    exact_clause,
    next_major_clause,
    range_clause,
    branch_clause,
    revision_clause,
];

/// Matches `major.minor.patch`.
pub fn version(input: &str) -> IResult<&str, Version> {
    map(
        (digits, preceded(char('.'), digits), preceded(char('.'), digits)),
        |(major, minor, patch)| Version::new(major, minor, patch),
    )
    .parse(input)
}

/// Matches `==1.2.3` or `@1.2.3` as an exact requirement.
pub fn exact(input: &str) -> IResult<&str, Requirement> {
    all_consuming(exact_clause).parse(input)
}

/// Matches `>=1.2.3` or `@from:1.2.3` as a range up to the next major version.
pub fn up_to_next_major(input: &str) -> IResult<&str, Requirement> {
    all_consuming(next_major_clause).parse(input)
}

/// Matches an explicit range:
/// - `>=1.2.3<2.0.0` and `@1.2.3..<2.0.0` are half-open and taken verbatim.
/// - `@1.2.3...2.0.0` is closed; its upper bound is made exclusive by bumping the patch.
///
/// Bounds are not checked against one another.
pub fn range(input: &str) -> IResult<&str, Requirement> {
    all_consuming(range_clause).parse(input)
}

/// Matches `@branch:<name>`.
pub fn branch(input: &str) -> IResult<&str, Requirement> {
    all_consuming(branch_clause).parse(input)
}

/// Matches `@revision:<id>`.
pub fn revision(input: &str) -> IResult<&str, Requirement> {
    all_consuming(revision_clause).parse(input)
}

/// Matches any requirement clause.
///
/// Alternatives are tried in precedence order: exact, up to next major, range,
/// branch, revision. The absence of a clause is not handled here;
/// see [`dependency`](super::dependency).
pub fn requirement(input: &str) -> IResult<&str, Requirement> {
    alt((exact, up_to_next_major, range, branch, revision)).parse(input)
}

/// Matches a maximal run of non-whitespace characters forming a valid branch name.
///
/// Branch names may not start with `/` and may not end with `.` or `/`.
pub fn branch_name(input: &str) -> IResult<&str, BranchName> {
    map(
        verify(non_whitespace, |name: &str| {
            !name.starts_with('/') && !name.ends_with(['.', '/'])
        }),
        BranchName::from_validated,
    )
    .parse(input)
}

/// The shortest remainder left by any requirement form matching a prefix of `input`.
pub(crate) fn longest_clause(input: &str) -> Option<&str> {
    CLAUSES
        .into_iter()
        .filter_map(|clause| clause(input).ok().map(|(rest, _)| rest))
        .min_by_key(|rest| rest.len())
}

fn non_whitespace(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace()).parse(input)
}

fn exact_clause(input: &str) -> IResult<&str, Requirement> {
    map(
        preceded(alt((literal("=="), literal("@"))), version),
        Requirement::Exact,
    )
    .parse(input)
}

fn next_major_clause(input: &str) -> IResult<&str, Requirement> {
    map_opt(
        preceded(alt((literal(">="), literal("@from:"))), version),
        Requirement::up_to_next_major,
    )
    .parse(input)
}

fn range_clause(input: &str) -> IResult<&str, Requirement> {
    let half_open = alt((
        separated_pair(preceded(literal(">="), version), literal("<"), version),
        separated_pair(preceded(literal("@"), version), literal("..<"), version),
    ));
    let closed = separated_pair(preceded(literal("@"), version), literal("..."), version);
    alt((
        map(half_open, |(lower, upper)| Requirement::Range(lower..upper)),
        map_opt(closed, |(lower, upper)| Requirement::closed(lower, upper)),
    ))
    .parse(input)
}

fn branch_clause(input: &str) -> IResult<&str, Requirement> {
    map(
        preceded(literal("@branch:"), branch_name),
        Requirement::Branch,
    )
    .parse(input)
}

fn revision_clause(input: &str) -> IResult<&str, Requirement> {
    map_opt(
        preceded(literal("@revision:"), non_whitespace),
        |id: &str| NonEmptyString::new(id.to_owned()).ok().map(Requirement::Revision),
    )
    .parse(input)
}
