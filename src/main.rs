#![cfg_attr(
    test,
    allow(clippy::panic, clippy::unwrap_used, clippy::expect_used)
)]

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::Result;
use std::path::PathBuf;
use std::process::ExitCode;
use teeny_utils::logging::{default_log_dir, init_logging, parse_rotation, LogConfig};
use teeny_utils::{
    capitalize, display_error_messages, is_scoped_package, kebab_case, load_user_config,
    normalize_github_url, unique_id, upper_first, GitHubReference, UserConfig,
};
use tracing::{debug, warn, Level};

/// Teeny - small helpers for command-line tooling
#[derive(Parser, Debug)]
#[command(name = "teeny", author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable JSON log format
    #[arg(long, global = true, env = "TEENY_LOG_JSON", default_value = "false")]
    log_json: bool,

    /// Log rotation period for file logs: daily, hourly, or never
    #[arg(long, global = true, env = "TEENY_LOG_ROTATION", default_value = "daily")]
    log_rotation: String,

    /// Also write logs to this directory
    #[arg(long, global = true, env = "TEENY_LOG_DIR")]
    log_dir: Option<String>,

    /// Also write logs to ~/.teeny/logs
    #[arg(long, global = true)]
    log_to_file: bool,

    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a GitHub repository URL and print it as JSON
    Github {
        /// Repository URL (HTTPS, SSH, git+ssh, ...)
        url: String,

        /// Extra hostname to treat as GitHub (repeatable, or comma-separated)
        #[arg(long = "extra-base-url", env = "TEENY_EXTRA_BASE_URLS", value_delimiter = ',')]
        extra_base_urls: Vec<String>,

        /// Print only the normalized URL
        #[arg(long)]
        normalize: bool,
    },
    /// Convert the casing of a string
    Case {
        #[arg(value_enum)]
        style: CaseStyle,
        text: String,
    },
    /// Check whether a package name is scoped (`@scope/name`)
    Scoped { name: String },
    /// Print a random identifier
    Id {
        #[arg(long)]
        prefix: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CaseStyle {
    UpperFirst,
    Capitalize,
    Kebab,
}

fn main() -> Result<ExitCode> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    let args = Args::parse();

    let log_dir = args
        .log_dir
        .map(PathBuf::from)
        .or_else(|| args.log_to_file.then(default_log_dir));
    init_logging(LogConfig {
        log_dir,
        log_level: if args.verbose { Level::DEBUG } else { Level::WARN },
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
    })?;

    run(args.command)
}

fn run(command: Command) -> Result<ExitCode> {
    match command {
        Command::Github {
            url,
            extra_base_urls,
            normalize,
        } => {
            // User-level config is optional; fall back to defaults when unreadable.
            let user_cfg = load_user_config().unwrap_or_else(|e| {
                warn!("Failed to load user config, using defaults: {e}");
                UserConfig::default()
            });
            let options = user_cfg.github.with_extra_base_urls(extra_base_urls);
            debug!("Extra GitHub hosts: {:?}", options.extra_base_urls);

            if normalize {
                println!("{}", normalize_github_url(&url, &options));
                return Ok(ExitCode::SUCCESS);
            }
            match GitHubReference::parse(&url, &options) {
                Ok(reference) => {
                    println!("{}", serde_json::to_string_pretty(&reference)?);
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    display_error_messages(&[format!("Cannot parse '{url}': {e}")], None);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Case { style, text } => {
            let converted = match style {
                CaseStyle::UpperFirst => upper_first(&text),
                CaseStyle::Capitalize => capitalize(&text),
                CaseStyle::Kebab => kebab_case(&text),
            };
            println!("{converted}");
            Ok(ExitCode::SUCCESS)
        }
        Command::Scoped { name } => {
            let scoped = is_scoped_package(&name);
            println!("{scoped}");
            Ok(if scoped {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Id { prefix } => {
            println!("{}", unique_id(prefix.as_deref()));
            Ok(ExitCode::SUCCESS)
        }
    }
}
