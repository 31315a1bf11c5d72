//! Integration tests for GitHub URL normalization and parsing.

use teeny_utils::{normalize_github_url, parse_github_url, GitHubReference, GitHubUrlOptions};

fn parse(url: &str) -> Option<GitHubReference> {
    parse_github_url(Some(url), &GitHubUrlOptions::default())
}

#[test]
fn test_https_and_ssh_are_equivalent() {
    let https = parse("https://github.com/aversini/teeny-js-utilities").expect("https");
    let ssh = parse("git@github.com:aversini/teeny-js-utilities.git").expect("ssh");
    assert_eq!(https, ssh);
    assert_eq!(https.host(), "github.com");
    assert_eq!(https.href(), "https://github.com/aversini/teeny-js-utilities");
    assert_eq!(https.name(), "teeny-js-utilities");
    assert_eq!(https.owner(), "aversini");
    assert_eq!(https.repo(), "aversini/teeny-js-utilities");
}

#[test]
fn test_gists_are_rejected() {
    assert!(parse("git@gist.github.com:9284722.git").is_none());
    assert!(parse("https://gist.github.com/9284722.git").is_none());
}

#[test]
fn test_blob_and_api_paths() {
    let blob = parse("https://github.com/assemble/verb/blob/master/foo/index.js").expect("blob");
    assert_eq!(blob.owner(), "assemble");
    let tarball = parse("https://github.com/repos/assemble/verb/tarball").expect("tarball");
    assert_eq!(tarball.owner(), "assemble");
}

#[test]
fn test_invalid_inputs() {
    let options = GitHubUrlOptions::default();
    assert!(parse_github_url(None, &options).is_none());
    assert!(parse_github_url(Some(""), &options).is_none());
    assert!(parse_github_url(Some("toto"), &options).is_none());
}

#[test]
fn test_enterprise_hosts() {
    let options = GitHubUrlOptions::default().with_extra_base_url("github.example.com");
    let reference = parse_github_url(
        Some("git+ssh://git@github.example.com/team/tool.git"),
        &options,
    )
    .expect("enterprise URL");
    assert_eq!(reference.host(), "github.example.com");
    assert_eq!(reference.repo(), "team/tool");
}

#[test]
fn test_normalization_is_deterministic_and_idempotent() {
    let options = GitHubUrlOptions::default().with_extra_base_url("github.example.com");
    for url in [
        "git@github.com:owner/repo.git",
        "https://github.com/owner/repo",
        "git@github.example.com:team/tool",
        "not a url",
    ] {
        let first = normalize_github_url(url, &options);
        assert_eq!(first, normalize_github_url(url, &options), "deterministic for {url}");
        if first.starts_with("https://") {
            assert_eq!(normalize_github_url(&first, &options), first, "idempotent for {url}");
        }
    }
}

#[test]
fn test_concurrent_calls_agree() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let options = GitHubUrlOptions::default()
                    .with_extra_base_url(format!("ghe{i}.example.com"));
                let url = format!("git@ghe{i}.example.com:org/repo{i}.git");
                parse_github_url(Some(url.as_str()), &options).map(|r| r.repo().to_string())
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let repo = handle.join().expect("thread panicked");
        assert_eq!(repo, Some(format!("org/repo{i}")));
    }
}
