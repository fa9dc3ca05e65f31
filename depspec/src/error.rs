use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Records all errors reported by this library.
#[derive(Error, Diagnostic, Clone, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Errors encountered while parsing.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    /// A url could not be paired with a requirement because it contains
    /// a requirement delimiter, so the dependency would not display in a form that parses back.
    #[error("url '{url}' contains a requirement delimiter ('==', '>=' or '@')")]
    #[diagnostic(help("percent-encode the delimiter in the url"))]
    Delimiter {
        /// The serialized url.
        url: String,
    },
}

/// Errors encountered when parsing.
///
/// Every variant names the original input verbatim;
/// variants other than [`ParseError::Empty`] also point at the offending part of it.
#[derive(Error, Diagnostic, Clone, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub enum ParseError {
    /// The provided value was empty, which is invalid for this type.
    #[error("input was empty, which is invalid for this type")]
    Empty,

    /// The text before the requirement clause is not a supported URL.
    #[error("'{input}' is not a valid dependency specification: invalid url")]
    Url {
        /// The input originally provided.
        #[source_code]
        input: String,

        /// The location of the url candidate.
        #[label("expected an absolute url or path")]
        span: SourceSpan,
    },

    /// A version-introducing token was not followed by `major.minor.patch`.
    #[error("'{input}' is not a valid dependency specification: malformed version")]
    Version {
        /// The input originally provided.
        #[source_code]
        input: String,

        /// The location of the malformed version.
        #[label("expected 'major.minor.patch'")]
        span: SourceSpan,
    },

    /// A requirement clause was present but did not match any known form.
    #[error("'{input}' is not a valid dependency specification: unrecognized requirement")]
    Requirement {
        /// The input originally provided.
        #[source_code]
        input: String,

        /// The location of the requirement clause.
        #[label("unrecognized requirement")]
        span: SourceSpan,
    },

    /// A requirement clause was recognized but was followed by unparsed text.
    #[error("'{input}' is not a valid dependency specification: unparsed trailing input")]
    Trailing {
        /// The input originally provided.
        #[source_code]
        input: String,

        /// The location of the unparsed text.
        #[label("unexpected trailing input")]
        span: SourceSpan,
    },

    /// The input is not a valid branch name.
    #[error("'{input}' is not a valid branch name")]
    Branch {
        /// The input originally provided.
        #[source_code]
        input: String,

        /// The location of the error.
        #[label("branch names may not start with '/' or end with '.' or '/'")]
        span: SourceSpan,
    },
}

/// Return the span of `rest` inside `input`.
///
/// `rest` must be a suffix of `input`, as is every remainder handed back by a parser.
pub(crate) fn suffix_span(input: &str, rest: &str) -> SourceSpan {
    let offset = input.len().saturating_sub(rest.len());
    (offset, rest.len()).into()
}

/// Construct a spanned [`ParseError`] variant.
///
/// Provide the input along with the suffix of it that failed.
///
/// ```ignore
/// error::spanned!(Trailing, input => rest);
/// ```
macro_rules! spanned {
    ($variant:ident, $input:expr => $rest:expr) => {
        $crate::error::ParseError::$variant {
            input: $input.into(),
            span: $crate::error::suffix_span($input, $rest),
        }
    };
}
pub(crate) use spanned;

/// Shorthand for conversion into [`Error`] and returning.
macro_rules! fatal {
    ($err:expr) => {
        return Err($crate::error::Error::from($err))
    };
}
pub(crate) use fatal;
