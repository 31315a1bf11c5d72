use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;
use url::Url;

use super::{normalize_github_url, GitHubUrlError, GitHubUrlOptions};

/// A GitHub repository resolved from a URL.
///
/// `repo` is always `owner/name` and `href` always uses `https`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitHubReference {
    host: String,
    href: String,
    name: String,
    owner: String,
    repo: String,
}

impl GitHubReference {
    /// Normalize and parse `url`, keeping the reason for a rejection.
    ///
    /// Segments after `owner/name` (tree, blob, archive paths) are ignored and
    /// a leading `/repos` API segment is dropped.
    pub fn parse(url: &str, options: &GitHubUrlOptions) -> Result<Self, GitHubUrlError> {
        let normalized = normalize_github_url(url, options);
        if normalized.is_empty() {
            return Err(GitHubUrlError::Empty);
        }
        if normalized.contains("git@gist") || normalized.contains("//gist") {
            return Err(GitHubUrlError::Gist);
        }

        let mut parsed = Url::parse(&normalized)?;
        let scheme = parsed.scheme().to_string();
        match scheme.as_str() {
            "https" => {}
            "http" => parsed
                .set_scheme("https")
                .map_err(|()| GitHubUrlError::UnsupportedScheme("http".to_string()))?,
            other => return Err(GitHubUrlError::UnsupportedScheme(other.to_string())),
        }
        strip_api_prefix(&mut parsed);

        let host = match (parsed.host_str(), parsed.port()) {
            (Some(host), Some(port)) if !host.is_empty() => format!("{host}:{port}"),
            (Some(host), None) if !host.is_empty() => host.to_string(),
            _ => return Err(GitHubUrlError::MissingHost),
        };
        let (owner, name) = owner_and_name(parsed.path()).ok_or(GitHubUrlError::MissingSegments)?;
        let repo = format!("{owner}/{name}");

        Ok(Self {
            host,
            href: parsed.into(),
            name,
            owner,
            repo,
        })
    }

    /// Hostname, with the port when it is not the default one.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The normalized `https` URL.
    #[must_use]
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Repository name, without a `.git` suffix.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// User or organization owning the repository.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// `owner/name`.
    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }
}

impl FromStr for GitHubReference {
    type Err = GitHubUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, &GitHubUrlOptions::default())
    }
}

impl fmt::Display for GitHubReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repo)
    }
}

/// Parse a GitHub repository URL.
///
/// Returns `None` for a missing, empty or malformed URL, for gists, and for
/// paths without both an owner and a repository name.
#[must_use]
pub fn parse_github_url(url: Option<&str>, options: &GitHubUrlOptions) -> Option<GitHubReference> {
    let url = url?;
    match GitHubReference::parse(url, options) {
        Ok(reference) => Some(reference),
        Err(e) => {
            debug!("Not a GitHub repository URL: {e}");
            None
        }
    }
}

/// Drop a leading `/repos` segment (`https://github.com/repos/owner/repo/tarball`).
fn strip_api_prefix(url: &mut Url) {
    let stripped = match url.path().strip_prefix("/repos") {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.to_string(),
        _ => return,
    };
    url.set_path(&stripped);
}

fn owner_and_name(path: &str) -> Option<(String, String)> {
    let mut segments = path.split('/').filter(|segment| !segment.is_empty());
    let owner = segments.next()?;
    let name = clean_repo_name(segments.next()?);
    if name.is_empty() {
        return None;
    }
    Some((owner.to_string(), name.to_string()))
}

/// Strip leading non-word characters and a trailing `.git`.
fn clean_repo_name(segment: &str) -> &str {
    let trimmed = segment.trim_start_matches(|c: char| !(c.is_ascii_alphanumeric() || c == '_'));
    trimmed.strip_suffix(".git").unwrap_or(trimmed)
}

#[cfg(test)]
#[path = "reference_tests.rs"]
mod tests;
