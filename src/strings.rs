//! String casing helpers.
use heck::ToKebabCase;

/// Upper-case the first character, leaving the rest untouched.
#[must_use]
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Upper-case the first character and lower-case the rest.
#[must_use]
pub fn capitalize(s: &str) -> String {
    upper_first(&s.to_lowercase())
}

/// Convert to `kebab-case`, splitting camel case and transliterating to ASCII.
#[must_use]
pub fn kebab_case(s: &str) -> String {
    slug::slugify(s.to_kebab_case())
}

#[cfg(test)]
#[path = "strings_tests.rs"]
mod tests;
