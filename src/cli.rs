//! Command-line flags

use std::path::PathBuf;

use clap::Parser;

use crate::models::{FeedType, SortType};

/// Default number of posts to look at
pub const DEFAULT_NUMBER: usize = 20;

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(
    name = "lemmydl",
    version,
    about = "A Lemmy downloader: archive posts, comments and media from a community or feed",
    long_about = None
)]
pub struct Cli {
    /// The URL of the Lemmy instance to use
    #[arg(short, long)]
    pub instance: Option<String>,

    /// The username to log in with
    #[arg(short, long)]
    pub username: Option<String>,

    /// The password to log in with
    #[arg(short, long)]
    pub password: Option<String>,

    /// The number of posts to get
    #[arg(short, long, default_value_t = DEFAULT_NUMBER)]
    pub number: usize,

    /// Get all the posts in a community (community feed only)
    #[arg(short, long)]
    pub max: bool,

    /// The name or ID of the community, e.g. <name> for a local community
    /// and <name>@<instance> for a federated one. Numerically named
    /// communities need the full federated name.
    #[arg(short, long)]
    pub community: Option<String>,

    /// How to sort the posts
    #[arg(short, long, value_enum, default_value_t = SortType::New)]
    pub sort: SortType,

    /// The feed to get posts from
    #[arg(short, long, value_enum, default_value_t = FeedType::Community)]
    pub feed: FeedType,

    /// Directory downloads are stored in
    #[arg(short, long, alias = "output_dir")]
    pub output_dir: Option<String>,

    /// Get all posts, not just the ones with media in them
    #[arg(short, long)]
    pub all: bool,

    /// Don't clean post and community path names (not recommended on Windows)
    #[arg(short = 't', long, alias = "dont_clean_text")]
    pub dont_clean_text: bool,

    /// Path of a config file to use instead of the default one
    #[arg(short = 'x', long)]
    pub config: Option<PathBuf>,

    /// Print a verbose log
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable ANSI color output
    #[arg(short = 'b', long)]
    pub no_colors: bool,
}

impl Cli {
    /// Whether progress output should be colored
    pub const fn colors(&self) -> bool {
        !cfg!(windows) && !self.no_colors
    }
}
