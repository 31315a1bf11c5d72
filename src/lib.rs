// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::indexing_slicing
    )
)]

pub mod github;
pub mod logging;
pub mod logs;
pub mod package;
pub mod strings;
pub mod user_config;
pub mod utils;

// Re-export commonly used types
pub use github::{
    normalize_github_url, parse_github_url, GitHubReference, GitHubUrlError, GitHubUrlOptions,
};
pub use logs::{display_error_messages, write_error_messages};
pub use package::is_scoped_package;
pub use strings::{capitalize, kebab_case, upper_first};
pub use user_config::{load_user_config, UserConfig, UserConfigError};
pub use utils::unique_id;
