use regex::Regex;
use tracing::debug;

use super::GitHubUrlOptions;

/// Hosts that are always treated as GitHub, before any extra base URLs.
pub const BUILTIN_BASE_URLS: [&str; 2] = ["gist.github.com", "github.com"];

/// Optional scheme, then optional `user@` credentials.
const SCHEME_AND_CREDENTIALS: &str = r"^(?:https?://|git://|git\+ssh://)?(?:[^@]+@)?";

/// `:` or `/`, then `owner/repo` or a bare gist id, up to the end of input.
const OWNER_REPO_OR_GIST_ID: &str = r"[:/]([^/]+/[^/]+?|[0-9]+)$";

/// Rewrite a GitHub-style URL into `https://<host>/<owner>/<repo>`.
///
/// Handles HTTPS, `git://`, `git+ssh://` and scp-like `git@host:owner/repo`
/// spellings, with or without a trailing `.git`. Hosts are compared without
/// regard to ASCII case only and are lower-cased in the result.
///
/// Anything that does not match is returned unchanged, so callers that need to
/// know whether normalization happened should compare the result to the input.
#[must_use]
pub fn normalize_github_url(url: &str, options: &GitHubUrlOptions) -> String {
    let pattern = match build_pattern(&options.extra_base_urls) {
        Ok(pattern) => pattern,
        Err(e) => {
            debug!("Could not build GitHub URL pattern: {e}");
            return url.to_string();
        }
    };

    // The input may carry credentials; it is never logged.
    capture_host_and_path(&pattern, url).map_or_else(
        || {
            debug!("Input is not a recognized GitHub URL; leaving it unchanged");
            url.to_string()
        },
        |(host, path)| format!("https://{}/{path}", host.to_ascii_lowercase()),
    )
}

/// Build the matcher for this call's host allow-list.
fn build_pattern(extra_base_urls: &[String]) -> Result<Regex, regex::Error> {
    let hosts: Vec<String> = BUILTIN_BASE_URLS
        .iter()
        .copied()
        .chain(
            extra_base_urls
                .iter()
                .map(|host| host.trim())
                .filter(|host| !host.is_empty()),
        )
        .map(regex::escape)
        .collect();

    Regex::new(&format!(
        "{SCHEME_AND_CREDENTIALS}((?i-u:{})){OWNER_REPO_OR_GIST_ID}",
        hosts.join("|")
    ))
}

/// Host and path captures, after dropping one trailing `.git`.
fn capture_host_and_path<'u>(pattern: &Regex, url: &'u str) -> Option<(&'u str, &'u str)> {
    let candidate = url.strip_suffix(".git").unwrap_or(url);
    let captures = pattern.captures(candidate)?;
    Some((captures.get(1)?.as_str(), captures.get(2)?.as_str()))
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
