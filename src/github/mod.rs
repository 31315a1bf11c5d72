//! GitHub repository URL normalization and parsing.
//!
//! Accepts the usual spellings of a repository location:
//! - HTTPS: `https://github.com/owner/repo`
//! - SSH: `git@github.com:owner/repo.git`
//! - `git+ssh://git@github.com/owner/repo.git`
//! - API and archive links: `https://github.com/repos/owner/repo/tarball`
//! - Tree/blob links: `https://github.com/owner/repo/blob/main/src/lib.rs`
//!
//! Gist URLs are recognized by the normalizer but rejected by the parser,
//! since a gist has no owner/repo pair.
mod error;
mod normalize;
mod options;
mod reference;

pub use error::GitHubUrlError;
pub use normalize::{normalize_github_url, BUILTIN_BASE_URLS};
pub use options::GitHubUrlOptions;
pub use reference::{parse_github_url, GitHubReference};
