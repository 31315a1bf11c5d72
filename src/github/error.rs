use thiserror::Error;

/// Why a URL could not be turned into a [`super::GitHubReference`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GitHubUrlError {
    #[error("URL is empty")]
    Empty,

    #[error("Gist URLs have no owner/repo pair")]
    Gist,

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Unsupported URL scheme '{0}'")]
    UnsupportedScheme(String),

    #[error("URL has no host")]
    MissingHost,

    #[error("URL path does not contain an owner and a repository name")]
    MissingSegments,
}
