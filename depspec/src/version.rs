use std::str::FromStr;

use derive_more::Display;
use duplicate::duplicate;
use nom::{Parser, combinator::all_consuming};

use crate::{Error, error, parse};

/// Create a [`Version`] from its three components.
///
/// ```
/// let version = depspec::version!(1, 2, 3);
/// assert_eq!("1.2.3", version.to_string());
/// ```
#[macro_export]
macro_rules! version {
    ($major:expr, $minor:expr, $patch:expr) => {
        $crate::Version::new($major, $minor, $patch)
    };
}

/// A three component dotted numeric version, like `1.2.3`.
///
/// Versions order lexicographically by `(major, minor, patch)`.
/// Pre-release and build metadata components are not modeled.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Display)]
#[display("{major}.{minor}.{patch}")]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
}

impl Version {
    /// Create a new instance.
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// The major component.
    pub fn major(&self) -> u64 {
        self.major
    }

    /// The minor component.
    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// The patch component.
    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// The smallest version with a greater major component:
    /// `(M, m, p)` becomes `(M + 1, 0, 0)`.
    ///
    /// Returns `None` if the major component would overflow.
    pub fn next_major(&self) -> Option<Self> {
        Some(Self::new(self.major.checked_add(1)?, 0, 0))
    }

    /// The version immediately following this one in patch order:
    /// `(M, m, p)` becomes `(M, m, p + 1)`.
    ///
    /// Used to turn an inclusive upper bound into an exclusive one.
    /// Returns `None` if the patch component would overflow.
    pub fn bump_patch(&self) -> Option<Self> {
        Some(Self::new(self.major, self.minor, self.patch.checked_add(1)?))
    }

    /// Parse a version from the complete input.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, Error> {
        input.as_ref().parse()
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            error::fatal!(error::ParseError::Empty)
        }
        match all_consuming(parse::version).parse(s) {
            Ok((_, version)) => Ok(version),
            Err(_) => error::fatal!(error::spanned!(Version, s => s)),
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
    impl TryFrom<ty> for Version {
        type Error = Error;
        fn try_from(s: ty) -> Result<Self, Self::Error> {
            Self::parse(s)
        }
    }
}

impl From<Version> for semver::Version {
    fn from(value: Version) -> Self {
        semver::Version::new(value.major, value.minor, value.patch)
    }
}

impl From<&Version> for Version {
    fn from(value: &Version) -> Self {
        *value
    }
}

serde_plain::derive_serialize_from_display!(Version);
serde_plain::derive_deserialize_from_fromstr!(Version, "a version like 'major.minor.patch'");
