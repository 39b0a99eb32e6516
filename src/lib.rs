//! # lemmydl
//!
//! Archive posts, comments and media from a Lemmy community or feed.
//!
//! ## Overview
//!
//! lemmydl logs in to a Lemmy instance, pages through a community or feed,
//! keeps the posts that link media (or all of them), and writes each post to
//! its own directory together with its comments and downloaded media files.
//! Re-running over the same output directory only adds posts not seen yet.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Pipeline                             │
//! │   Fetch a page, filter it, archive each post, repeat        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!          ┌───────────────────┼───────────────────┐
//!          ▼                   ▼                   ▼
//! ┌─────────────────┐ ┌─────────────────┐ ┌─────────────────┐
//! │      Fetch      │ │      Media      │ │     Archive     │
//! │                 │ │                 │ │                 │
//! │ • Page counter  │ │ • URL scanner   │ │ • Directories   │
//! │ • Empty stop    │ │ • Extensions    │ │ • JSON files    │
//! │                 │ │ • Selection     │ │ • Downloads     │
//! └─────────────────┘ └─────────────────┘ └─────────────────┘
//!          │                   │                   │
//!          └───────────────────┴───────────────────┘
//!                              │
//!          ┌───────────────────┼───────────────────┐
//!          ▼                   ▼                   ▼
//! ┌─────────────────┐ ┌─────────────────┐ ┌─────────────────┐
//! │       API       │ │    Settings     │ │     Models      │
//! │                 │ │                 │ │                 │
//! │ • Lemmy v3      │ │ • Config file   │ │ • Post          │
//! │ • Login token   │ │ • CLI flags     │ │ • Community     │
//! │ • Pacing        │ │ • Password cmd  │ │ • Sort / Feed   │
//! └─────────────────┘ └─────────────────┘ └─────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`api`] — Lemmy API client and request pacing
//! - [`archive`] — On-disk archive layout
//! - [`auth`] — Credentials and the password command
//! - [`cli`] — Command-line flags
//! - [`config`] — Configuration file
//! - [`console`] — Colored progress output
//! - [`download`] — Media downloads
//! - [`fetch`] — Listing pagination
//! - [`media`] — Media URL detection and post selection
//! - [`models`] — Data models (Post, Community, SortType, FeedType)
//! - [`pipeline`] — The run loop
//! - [`settings`] — Merged and validated run settings
//! - [`text`] — Path name sanitizing
//!
//! ## Example
//!
//! ```no_run
//! use lemmydl::{ArchiveWriter, Console, LemmyClient, MediaDownloader, pipeline};
//! use lemmydl::cli::Cli;
//! use lemmydl::settings::Settings;
//! use clap::Parser;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let settings = Settings::load(&Cli::parse()).await?;
//! let client = LemmyClient::login(
//!     &settings.instance,
//!     &settings.credentials.username,
//!     &settings.credentials.password,
//!     settings.request_delay,
//! )
//! .await?;
//! let writer = ArchiveWriter::new(settings.output_dir.clone(), settings.clean_text, MediaDownloader::new());
//! pipeline::run(&client, &settings, &writer, &Console::new(true)).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod api;
pub mod archive;
pub mod auth;
pub mod cli;
pub mod config;
pub mod console;
pub mod download;
pub mod error;
pub mod fetch;
pub mod media;
pub mod models;
pub mod paths;
pub mod pipeline;
pub mod settings;
pub mod text;

// Re-export main types for convenience
pub use api::{LemmyApi, LemmyClient};
pub use archive::{ArchiveOutcome, ArchiveWriter};
pub use config::Config;
pub use console::{Console, Tone};
pub use download::MediaDownloader;
pub use error::{ConfigError, DownloadError};
pub use models::{Community, CommunitySelector, FeedType, ListingTarget, Post, PostView, SortType};
pub use pipeline::RunSummary;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
