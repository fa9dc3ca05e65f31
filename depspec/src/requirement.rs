use std::{fmt, ops::Range, str::FromStr};

use compact_str::CompactString;
use derive_more::Display;
use duplicate::duplicate;
use nom::{
    Parser,
    branch::alt,
    character::complete::satisfy,
    combinator::{all_consuming, opt, peek},
    sequence::terminated,
};
use non_empty_string::NonEmptyString;

use crate::{Error, ParseError, Version, error, parse, version};

/// The requirement used when a dependency names no requirement at all:
/// anything before `1.0.0`.
const DEFAULT_RANGE: Range<Version> = version!(0, 0, 0)..version!(1, 0, 0);

/// Describes which versions of a dependency are acceptable.
///
/// ## Rendering
///
/// Requirements display as the clause that follows the url in a dependency:
/// - `Exact(1.2.3)` renders as `@1.2.3`.
/// - A range from `M.m.p` to the next major version renders as `@from:M.m.p`.
/// - Any other range renders as `@lower..<upper`.
/// - The default range renders as an empty string.
/// - Branches and revisions render as `@branch:name` and `@revision:id`.
///
/// Parsing the rendered clause yields an equal requirement.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Requirement {
    /// Pins a single version.
    Exact(Version),

    /// The half-open interval `[start, end)`.
    ///
    /// `start < end` is not enforced; a range with `start >= end` admits no version.
    Range(Range<Version>),

    /// Tracks a source control branch.
    Branch(BranchName),

    /// Pins an opaque source control revision.
    Revision(NonEmptyString),
}

impl Requirement {
    /// A range from `lower` up to, but excluding, its next major version.
    ///
    /// Returns `None` if the next major version overflows.
    pub fn up_to_next_major(lower: Version) -> Option<Self> {
        Some(Self::Range(lower..lower.next_major()?))
    }

    /// A range from `lower` up to and including `upper`.
    ///
    /// The inclusive upper bound is converted to an exclusive one by bumping its patch.
    /// Returns `None` if that overflows.
    pub fn closed(lower: Version, upper: Version) -> Option<Self> {
        Some(Self::Range(lower..upper.bump_patch()?))
    }

    /// Whether `version` satisfies this requirement.
    ///
    /// Branch and revision requirements are not expressed in versions and never match.
    pub fn matches(&self, version: &Version) -> bool {
        match self {
            Self::Exact(exact) => exact == version,
            Self::Range(range) => range.contains(version),
            Self::Branch(_) | Self::Revision(_) => false,
        }
    }

    /// Whether any version could satisfy this requirement.
    ///
    /// Only ranges whose bounds are out of order are unsatisfiable.
    pub fn is_satisfiable(&self) -> bool {
        match self {
            Self::Range(range) => !range.is_empty(),
            Self::Exact(_) | Self::Branch(_) | Self::Revision(_) => true,
        }
    }

    /// Parse a requirement clause from the complete input.
    ///
    /// An empty input is the default requirement.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, Error> {
        input.as_ref().parse()
    }
}

impl Default for Requirement {
    fn default() -> Self {
        Self::Range(DEFAULT_RANGE)
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range(range) if *range == DEFAULT_RANGE => Ok(()),
            Self::Range(range) if range.start.next_major() == Some(range.end) => {
                write!(f, "@from:{}", range.start)
            }
            Self::Range(range) => write!(f, "@{}..<{}", range.start, range.end),
            Self::Exact(version) => write!(f, "@{version}"),
            Self::Branch(name) => write!(f, "@branch:{name}"),
            Self::Revision(id) => write!(f, "@revision:{id}"),
        }
    }
}

impl FromStr for Requirement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match all_consuming(opt(parse::requirement)).parse(s) {
            Ok((_, requirement)) => Ok(requirement.unwrap_or_default()),
            Err(_) => error::fatal!(classify(s, s)),
        }
    }
}

duplicate! {
    [
        ty;
        [ &str ];
        [ &String ];
        [ String ];
    ]
    impl TryFrom<ty> for Requirement {
        type Error = Error;
        fn try_from(s: ty) -> Result<Self, Self::Error> {
            Self::parse(s)
        }
    }
}

impl From<Version> for Requirement {
    fn from(value: Version) -> Self {
        Self::Exact(value)
    }
}

impl From<Range<Version>> for Requirement {
    fn from(value: Range<Version>) -> Self {
        Self::Range(value)
    }
}

impl From<BranchName> for Requirement {
    fn from(value: BranchName) -> Self {
        Self::Branch(value)
    }
}

impl From<NonEmptyString> for Requirement {
    fn from(value: NonEmptyString) -> Self {
        Self::Revision(value)
    }
}

impl From<&Requirement> for Requirement {
    fn from(value: &Requirement) -> Self {
        value.clone()
    }
}

serde_plain::derive_serialize_from_display!(Requirement);
serde_plain::derive_deserialize_from_fromstr!(Requirement, "a requirement clause like '@1.2.3'");

/// Explain why `clause`, the requirement part of `input`, failed to parse.
///
/// `clause` must be a suffix of `input`.
pub(crate) fn classify(input: &str, clause: &str) -> ParseError {
    if let Some(rest) = parse::longest_clause(clause) {
        return error::spanned!(Trailing, input => rest);
    }

    let version_token = alt((
        parse::literal("=="),
        parse::literal(">="),
        parse::literal("@from:"),
        terminated(parse::literal("@"), peek(satisfy(|c| c.is_ascii_digit()))),
    ))
    .parse(clause);

    match version_token {
        Ok((version, _)) => error::spanned!(Version, input => version),
        Err(_) => error::spanned!(Requirement, input => clause),
    }
}

/// The name of a source control branch.
///
/// A branch name is a non-empty run of non-whitespace characters.
/// It may contain interior `/`, `.` and `-`, but may not start with `/`
/// and may not end with `.` or `/`.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
#[display("{}", self.0)]
pub struct BranchName(CompactString);

impl BranchName {
    /// Wrap a name already accepted by [`parse::branch_name`].
    pub(crate) fn from_validated(name: &str) -> Self {
        Self(CompactString::from(name))
    }

    /// View the item as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse a branch name from the complete input.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, Error> {
        input.as_ref().parse()
    }
}

impl FromStr for BranchName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            error::fatal!(ParseError::Empty)
        }
        match all_consuming(parse::branch_name).parse(s) {
            Ok((_, name)) => Ok(name),
            Err(_) => error::fatal!(error::spanned!(Branch, s => s)),
        }
    }
}

duplicate! {
    [
        ty;
        [ &str ];
        [ &String ];
        [ String ];
    ]
    impl TryFrom<ty> for BranchName {
        type Error = Error;
        fn try_from(s: ty) -> Result<Self, Self::Error> {
            Self::parse(s)
        }
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

serde_plain::derive_serialize_from_display!(BranchName);
serde_plain::derive_deserialize_from_fromstr!(BranchName, "a valid branch name");
