use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::digit1,
    combinator::map_res,
};

/// Matches `token` exactly, consuming its length.
pub fn literal<'a>(token: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    move |input| tag(token).parse(input)
}

/// Matches a maximal non-empty run of decimal digits as an integer.
///
/// Runs too large for a `u64` do not match.
pub fn digits(input: &str) -> IResult<&str, u64> {
    map_res(digit1, |run: &str| run.parse::<u64>()).parse(input)
}

/// Matches a maximal, possibly empty, run of characters satisfying `predicate`.
pub fn char_while<'a>(
    predicate: impl Fn(char) -> bool,
) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    move |input| take_while(|c: char| predicate(c)).parse(input)
}

/// Matches any token that introduces a requirement clause.
pub fn delimiter(input: &str) -> IResult<&str, &str> {
    alt((literal("=="), literal(">="), literal("@"))).parse(input)
}
