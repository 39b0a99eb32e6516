//! Run settings: config file merged with command-line flags
//!
//! Everything a run needs is resolved and validated here, before any network
//! call, and then passed explicitly to the pipeline.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tokio::time::Duration;

use crate::api::DEFAULT_REQUEST_DELAY;
use crate::auth::{self, Credentials, PASSWORD_COMMAND_TIMEOUT};
use crate::cli::Cli;
use crate::config::Config;
use crate::error::ConfigError;
use crate::models::{CommunitySelector, FeedType, ListingTarget, SortType};
use crate::paths;

/// Output directory when neither flag nor config names one
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Fully resolved settings for one run
#[derive(Debug, Clone)]
pub struct Settings {
    /// Instance base URL, with scheme and without trailing slash
    pub instance: String,
    /// Login credentials
    pub credentials: Credentials,
    /// Community or feed to read
    pub target: ListingTarget,
    /// Sort order of the listing
    pub sort: SortType,
    /// Number of listing positions to process
    pub count: usize,
    /// Replace `count` with the community's total post count
    pub fetch_max: bool,
    /// Archive posts without media too
    pub include_all: bool,
    /// Reduce titles to slugs for path names
    pub clean_text: bool,
    /// Archive root
    pub output_dir: PathBuf,
    /// Minimum spacing of API calls
    pub request_delay: Duration,
}

impl Settings {
    /// Load the config file named by `--config` (or the default one), run the
    /// password command if needed, and merge everything with the flags.
    pub async fn load(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => Config::load_required(path)?,
            None => Config::load()?,
        };
        tracing::debug!(?config.username, ?config.instance, ?config.output_dir, "config loaded");

        let password = match (&cli.password, &config.password_command) {
            (Some(password), _) => Some(password.clone()),
            (None, Some(command)) => Some(
                auth::run_password_command(command, PASSWORD_COMMAND_TIMEOUT)
                    .await
                    .context("Failed to get password from password_command")?,
            ),
            (None, None) => config.password.clone(),
        };

        let cwd = std::env::current_dir().context("Could not determine current directory")?;
        let output = cli
            .output_dir
            .clone()
            .or_else(|| config.output_dir.clone())
            .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string());
        let output_dir = paths::resolve_output_dir(&output, &cwd)?;

        Ok(Self::from_sources(cli, &config, password, output_dir)?)
    }

    /// Merge flags over config values and validate the result.
    ///
    /// `password` is the already resolved password (flag, command output or
    /// config value).
    pub fn from_sources(
        cli: &Cli,
        config: &Config,
        password: Option<String>,
        output_dir: PathBuf,
    ) -> Result<Self, ConfigError> {
        let username = cli.username.clone().or_else(|| config.username.clone());
        let instance = cli.instance.clone().or_else(|| config.instance.clone());

        let mut missing = Vec::new();
        if username.as_deref().is_none_or(str::is_empty) {
            missing.push("username");
        }
        if password.as_deref().is_none_or(str::is_empty) {
            missing.push("password");
        }
        if instance.as_deref().is_none_or(|i| i.trim().is_empty()) {
            missing.push("instance");
        }
        let (Some(username), Some(password), Some(instance)) = (username, password, instance) else {
            return Err(ConfigError::MissingCredentials(missing));
        };
        if !missing.is_empty() {
            return Err(ConfigError::MissingCredentials(missing));
        }

        let fetch_max = cli.max || config.get_max;
        let target = match cli.feed {
            FeedType::Community => {
                let community = cli
                    .community
                    .as_deref()
                    .filter(|c| !c.trim().is_empty())
                    .ok_or(ConfigError::MissingCommunity)?;
                ListingTarget::Community(CommunitySelector::parse(community))
            }
            feed => {
                if fetch_max {
                    return Err(ConfigError::MaxRequiresCommunity(format!("{feed:?}").to_lowercase()));
                }
                ListingTarget::Feed(feed)
            }
        };

        let request_delay = config
            .request_delay
            .filter(|secs| secs.is_finite() && *secs >= 0.0)
            .map_or(DEFAULT_REQUEST_DELAY, Duration::from_secs_f64);

        Ok(Self {
            instance: normalize_instance(&instance),
            credentials: Credentials { username, password },
            target,
            sort: cli.sort,
            count: cli.number,
            fetch_max,
            include_all: cli.all,
            clean_text: !(cli.dont_clean_text || config.dont_clean_text),
            output_dir,
            request_delay,
        })
    }
}

/// Instance URL with a scheme and no trailing slash.
///
/// `lemmy.world/` becomes `https://lemmy.world`.
pub fn normalize_instance(instance: &str) -> String {
    let instance = instance.trim().trim_end_matches('/');
    if instance.starts_with("http://") || instance.starts_with("https://") {
        instance.to_string()
    } else {
        format!("https://{instance}")
    }
}
