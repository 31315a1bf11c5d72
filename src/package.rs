//! npm package-name helpers.
use regex::Regex;
use std::sync::LazyLock;

/// Scoped package name: `@scope/name`, case-insensitive.
#[expect(
    clippy::expect_used,
    reason = "Regex literal is compile-time constant and cannot fail"
)]
static SCOPED_PACKAGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^@[a-z\d][\w.-]+/[a-z\d][\w.-]*$")
        .expect("SCOPED_PACKAGE_REGEX is a valid regex literal")
});

/// Whether `name` is a scoped npm package such as `@versini/scoped`.
#[must_use]
pub fn is_scoped_package(name: &str) -> bool {
    SCOPED_PACKAGE_REGEX.is_match(name)
}
