use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use duplicate::duplicate;
use url::Url;

use crate::{Error, ParseError, Requirement, error, parse, requirement::classify};

/// Convenience macro for creating a [`Dependency`].
/// Panics if the url or requirement does not parse, or the url contains a requirement delimiter.
///
/// ```
/// let dep = depspec::dependency!("https://github.com/foo/bar");
/// assert_eq!("https://github.com/foo/bar", &dep.to_string());
///
/// let dep = depspec::dependency!("https://github.com/foo/bar", "@1.2.3..<2.1.0");
/// assert_eq!("https://github.com/foo/bar@1.2.3..<2.1.0", &dep.to_string());
/// ```
#[macro_export]
macro_rules! dependency {
    ($url:expr) => {
        $crate::dependency!($url, "")
    };
    ($url:expr, $requirement:expr) => {
        $crate::Dependency::new(
            $crate::macro_support::url::Url::parse($url).expect("parse url"),
            $crate::Requirement::parse($requirement).expect("parse requirement"),
        )
        .expect("create dependency")
    };
}

/// A package dependency: where to fetch it from, and which versions are acceptable.
///
/// ## Parsing
///
/// Dependencies are written as a url immediately followed by an optional
/// requirement clause, with no whitespace in between:
/// ```ignore
/// {url}
/// {url}=={version}
/// {url}@{version}
/// {url}>={version}
/// {url}@from:{version}
/// {url}>={version}<{version}
/// {url}@{version}..<{version}
/// {url}@{version}...{version}
/// {url}@branch:{name}
/// {url}@revision:{id}
/// ```
///
/// The url ends at the first `==`, `>=` or `@`.
/// It must use `https://`, `http://`, `file://` or `file:`, or be an absolute path.
/// Without a requirement clause, any version before `1.0.0` is acceptable.
///
/// The entire input must be consumed; trailing text fails the parse.
///
/// ## Rendering
///
/// Dependencies display in the canonical form of the syntax above
/// (see [`Requirement`] for how clauses are rendered), so that parsing
/// the displayed form yields an equal dependency.
/// [`Dependency::package_clause`] renders the dependency for a package manifest instead.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Dependency {
    url: Url,
    requirement: Requirement,
}

impl Dependency {
    /// Create a new instance.
    ///
    /// Fails with [`Error::Delimiter`] if the serialized url contains `==`, `>=` or `@`.
    pub fn new(url: Url, requirement: impl Into<Requirement>) -> Result<Self, Error> {
        if !matches!(parse::url_candidate(url.as_str()), Ok(("", _))) {
            return Err(Error::Delimiter { url: url.into() });
        }
        Ok(Self {
            url,
            requirement: requirement.into(),
        })
    }

    /// The location of the dependency's source.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The acceptable versions of the dependency.
    pub fn requirement(&self) -> &Requirement {
        &self.requirement
    }

    /// Parse a dependency from the complete input.
    /// For details, see the `Parsing` section on the type documentation.
    #[tracing::instrument(level = "debug", skip_all, fields(input = %input.as_ref()))]
    pub fn parse(input: impl AsRef<str>) -> Result<Self, Error> {
        let input = input.as_ref();
        if input.is_empty() {
            error::fatal!(ParseError::Empty)
        }

        match parse::run(parse::dependency, input).result {
            Some(dependency) => {
                if !dependency.requirement.is_satisfiable() {
                    tracing::warn!(requirement = ?dependency.requirement, "range admits no version");
                }
                Ok(dependency)
            }
            None => {
                let err = explain(input);
                tracing::debug!(%err, "failed to parse dependency");
                Err(err.into())
            }
        }
    }

    /// Render the dependency as a clause for a package manifest's dependency list.
    ///
    /// ```
    /// let dep = depspec::dependency!("https://github.com/foo/bar", "@1.2.3");
    /// assert_eq!(
    ///     dep.package_clause(),
    ///     r#".package(url: "https://github.com/foo/bar", .exact("1.2.3"))"#,
    /// );
    /// ```
    pub fn package_clause(&self) -> String {
        let url = self.url.as_str();
        match &self.requirement {
            Requirement::Exact(version) => {
                format!(r#".package(url: "{url}", .exact("{version}"))"#)
            }
            Requirement::Range(range) => {
                format!(
                    r#".package(url: "{url}", "{}"..<"{}")"#,
                    range.start, range.end
                )
            }
            Requirement::Branch(name) => {
                format!(r#".package(url: "{url}", .branch("{name}"))"#)
            }
            Requirement::Revision(id) => {
                format!(r#".package(url: "{url}", .revision("{id}"))"#)
            }
        }
    }

    /// The local path of the dependency, if its url refers to the filesystem.
    pub fn path(&self) -> Option<PathBuf> {
        if self.url.scheme() != "file" {
            return None;
        }
        self.url.to_file_path().ok()
    }

    /// The directory into which the package toolchain checks out this dependency
    /// when resolving the project at `project_dir`.
    ///
    /// This is `{project_dir}/.build/checkouts/{name}`, where `name` is the last
    /// non-empty segment of the url path without any `.git` suffix.
    pub fn checkout_dir(&self, project_dir: impl AsRef<Path>) -> Option<PathBuf> {
        let segment = self.url.path_segments()?.rev().find(|s| !s.is_empty())?;
        let name = segment.strip_suffix(".git").unwrap_or(segment);
        if name.is_empty() {
            return None;
        }
        Some(project_dir.as_ref().join(".build").join("checkouts").join(name))
    }

    /// The directory holding the dependency's sources once the project at `project_dir`
    /// is resolved: its local path if it has one, otherwise its checkout directory.
    pub fn source_dir(&self, project_dir: impl AsRef<Path>) -> Option<PathBuf> {
        self.path().or_else(|| self.checkout_dir(project_dir))
    }
}

/// Explain why `input` failed to parse as a dependency.
fn explain(input: &str) -> ParseError {
    let Ok((clause, candidate)) = parse::url_candidate(input) else {
        return error::spanned!(Url, input => input);
    };
    if parse::url(input).is_err() {
        return ParseError::Url {
            input: input.into(),
            span: (0, candidate.len()).into(),
        };
    }
    classify(input, clause)
}

/// Parse each input as a dependency.
///
/// Stops at the first input that fails to parse, returning its error;
/// no dependencies are returned unless all of them parse.
pub fn parse_all<I>(inputs: I) -> Result<Vec<Dependency>, Error>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    inputs.into_iter().map(Dependency::parse).collect()
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.url, self.requirement)
    }
}

impl FromStr for Dependency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

duplicate! {
    [
        ty;
        [ &str ];
        [ &String ];
        [ String ];
    ]
    impl TryFrom<ty> for Dependency {
        type Error = Error;
        fn try_from(s: ty) -> Result<Self, Self::Error> {
            Self::parse(s)
        }
    }
}

impl AsRef<Dependency> for Dependency {
    fn as_ref(&self) -> &Dependency {
        self
    }
}

impl From<&Dependency> for Dependency {
    fn from(value: &Dependency) -> Self {
        value.clone()
    }
}

serde_plain::derive_serialize_from_display!(Dependency);
serde_plain::derive_deserialize_from_fromstr!(Dependency, "a dependency like 'https://host/org/repo@1.2.3'");
