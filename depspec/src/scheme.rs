use strum::{AsRefStr, EnumIter, IntoEnumIterator, IntoStaticStr};
use url::Url;

/// The url schemes accepted at the start of a dependency.
///
/// Schemes are tried in declaration order, so longer prefixes
/// (like `file://`) are tried before prefixes they start with (like `file:`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, EnumIter, AsRefStr, IntoStaticStr)]
pub enum Scheme {
    /// Remote repositories over `https`.
    #[strum(serialize = "https://")]
    Https,

    /// Remote repositories over `http`.
    #[strum(serialize = "http://")]
    Http,

    /// Local repositories addressed by a standard file url.
    #[strum(serialize = "file://")]
    File,

    /// Local repositories addressed as `file:<path>`.
    #[strum(serialize = "file:")]
    NonstandardFile,

    /// Local repositories addressed by an absolute filesystem path.
    #[strum(serialize = "")]
    Empty,
}

impl Scheme {
    /// The prefix identifying this scheme in a dependency.
    pub fn prefix(self) -> &'static str {
        self.into()
    }

    /// Build a url for `path`, the text following this scheme's prefix.
    pub fn url(self, path: &str) -> Option<Url> {
        match self {
            Self::Https | Self::Http | Self::File => {
                Url::parse(&format!("{}{path}", self.prefix())).ok()
            }
            Self::NonstandardFile => Url::parse(&format!("{}{path}", Self::File.prefix())).ok(),
            Self::Empty => Url::from_file_path(path).ok(),
        }
    }

    /// Resolve `candidate` with the first scheme that accepts it.
    ///
    /// Candidates containing whitespace or control characters never resolve.
    pub fn resolve(candidate: &str) -> Option<Url> {
        if candidate.contains(|c: char| c.is_whitespace() || c.is_control()) {
            tracing::trace!(candidate, "url candidate contains whitespace or control characters");
            return None;
        }
        Self::iter().find_map(|scheme| {
            let url = scheme.url(candidate.strip_prefix(scheme.prefix())?)?;
            tracing::trace!(?scheme, %url, "resolved url");
            Some(url)
        })
    }
}
