//! Error types callers match on
//!
//! Everything else travels as `anyhow::Error` with context attached.

use std::path::PathBuf;

use thiserror::Error;

/// Invalid or incomplete run configuration, detected before any network call
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Username, password or instance missing from both CLI and config file
    #[error("You must specify a username, password and instance (missing: {})", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),

    /// Community feed selected without naming a community
    #[error("You need to specify a community (-c <name|id>) when using the community feed")]
    MissingCommunity,

    /// `--max` needs a community post count, feeds have none
    #[error("--max only works with the community feed, not the {0} feed")]
    MaxRequiresCommunity(String),

    /// Explicit `--config` path that is not there
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),
}

/// A single media download that did not produce a file
#[derive(Debug, Error)]
pub enum DownloadError {
    /// No response within the download timeout
    #[error("Connection timed out ({url})")]
    Timeout {
        /// Requested URL
        url: String,
    },

    /// Server answered with a non-success status
    #[error("HTTP {status} for {url}")]
    Status {
        /// Requested URL
        url: String,
        /// Response status code
        status: u16,
    },

    /// Connection, TLS or body transfer failure
    #[error("Failed to download {url}: {source}")]
    Transport {
        /// Requested URL
        url: String,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// Could not write the target file
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        /// Target file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl DownloadError {
    /// Classify a client error for `url`
    pub fn from_reqwest(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
            }
        } else {
            Self::Transport {
                url: url.to_string(),
                source,
            }
        }
    }

    /// Whether the download ran out of time
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credentials_message() {
        let err = ConfigError::MissingCredentials(vec!["username", "instance"]);
        assert_eq!(
            err.to_string(),
            "You must specify a username, password and instance (missing: username, instance)"
        );
    }

    #[test]
    fn test_status_message() {
        let err = DownloadError::Status {
            url: "https://a.io/x.png".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "HTTP 404 for https://a.io/x.png");
        assert!(!err.is_timeout());
    }
}
