use serde::{Deserialize, Serialize};

/// Options shared by [`super::normalize_github_url`] and [`super::parse_github_url`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubUrlOptions {
    /// Extra hostnames treated like `github.com`, e.g. an Enterprise
    /// instance such as `github.example.com`. Matched after the built-in hosts.
    #[serde(default)]
    pub extra_base_urls: Vec<String>,
}

impl GitHubUrlOptions {
    /// Add one extra hostname.
    #[must_use]
    pub fn with_extra_base_url(mut self, host: impl Into<String>) -> Self {
        self.extra_base_urls.push(host.into());
        self
    }

    /// Add several extra hostnames, keeping their order.
    #[must_use]
    pub fn with_extra_base_urls<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_base_urls.extend(hosts.into_iter().map(Into::into));
        self
    }
}
