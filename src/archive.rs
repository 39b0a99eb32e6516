//! On-disk archive layout
//!
//! ```text
//! <root>/
//!   <community>/
//!     community.json
//!     <post-id>_<title>/
//!       <title>.json
//!       comments.json
//!       <media files>
//! ```
//!
//! Directories double as "already done" markers: a community directory that
//! exists is not touched again, and a post whose directory exists is skipped
//! entirely. Nothing is ever deleted or replaced.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::api::LemmyApi;
use crate::download::{MediaDownloader, media_file_name};
use crate::media::MediaPost;
use crate::models::{Community, Post};
use crate::text::path_segment;

/// Metadata file written once per community directory
pub const COMMUNITY_FILE: &str = "community.json";

/// Comment list file inside each post directory
pub const COMMENTS_FILE: &str = "comments.json";

/// What happened to a post handed to [`ArchiveWriter::archive`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveOutcome {
    /// The post directory was created and filled
    Archived {
        /// Media files written
        media_saved: usize,
        /// Media downloads that failed
        media_failed: usize,
    },
    /// The post directory already existed
    Skipped,
}

/// Writes selected posts below an output root
#[derive(Debug, Clone)]
pub struct ArchiveWriter {
    root: PathBuf,
    clean_text: bool,
    downloader: MediaDownloader,
}

impl ArchiveWriter {
    /// Create a writer for `root`; `clean_text` controls path sanitizing
    pub fn new(root: PathBuf, clean_text: bool, downloader: MediaDownloader) -> Self {
        Self {
            root,
            clean_text,
            downloader,
        }
    }

    /// Output root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory for a community
    pub fn community_dir(&self, community: &Community) -> PathBuf {
        let fallback = format!("community-{}", community.id);
        self.root
            .join(path_segment(&community.name, self.clean_text, &fallback))
    }

    /// Directory name for a post (`<id>_<title>`)
    pub fn post_dir_name(&self, post: &Post) -> String {
        format!("{}_{}", post.id, self.post_title(post))
    }

    fn post_title(&self, post: &Post) -> String {
        path_segment(&post.name, self.clean_text, "post")
    }

    /// Archive one post: community metadata, media, post JSON, comments.
    ///
    /// Media failures are logged and counted; any other error aborts.
    pub async fn archive<A: LemmyApi>(&self, api: &A, entry: &MediaPost) -> Result<ArchiveOutcome> {
        let community_dir = self.ensure_community(&entry.view.community).await?;

        let post = &entry.view.post;
        let post_dir = community_dir.join(self.post_dir_name(post));
        if !create_dir_once(&post_dir).await? {
            tracing::debug!(dir = %post_dir.display(), "post already archived, skipping");
            return Ok(ArchiveOutcome::Skipped);
        }
        tracing::debug!(title = %post.name, dir = %post_dir.display(), "saving post");

        let mut media_saved = 0;
        let mut media_failed = 0;
        for (index, url) in entry.media.iter().enumerate() {
            let file_name = media_file_name(url).unwrap_or_else(|| format!("media-{}", index + 1));
            let dest = post_dir.join(file_name);

            match self.downloader.download(url, &dest).await {
                Ok(bytes) => {
                    tracing::debug!(%url, bytes, "saved media");
                    media_saved += 1;
                }
                Err(e) if e.is_timeout() => {
                    tracing::info!("{e}");
                    media_failed += 1;
                }
                Err(e) => {
                    tracing::warn!("{e}");
                    media_failed += 1;
                }
            }
        }

        let post_file = post_dir.join(format!("{}.json", self.post_title(post)));
        write_json(&post_file, entry).await?;

        let comments = api
            .list_comments(post.id)
            .await
            .with_context(|| format!("Failed to fetch comments for post {}", post.id))?;
        write_json(&post_dir.join(COMMENTS_FILE), &comments).await?;

        Ok(ArchiveOutcome::Archived {
            media_saved,
            media_failed,
        })
    }

    /// Create the community directory, writing `community.json` the first time
    async fn ensure_community(&self, community: &Community) -> Result<PathBuf> {
        let dir = self.community_dir(community);

        tokio::fs::create_dir_all(&self.root)
            .await
            .with_context(|| format!("Failed to create output directory {}", self.root.display()))?;

        if create_dir_once(&dir).await? {
            tracing::debug!(dir = %dir.display(), "created community directory");
            write_json(&dir.join(COMMUNITY_FILE), community).await?;
        }

        Ok(dir)
    }
}

/// Create `dir`; `false` when it already exists.
async fn create_dir_once(dir: &Path) -> Result<bool> {
    match tokio::fs::create_dir(dir).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(e).with_context(|| format!("Failed to create directory {}", dir.display())),
    }
}

async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_vec(value).context("Failed to serialize JSON")?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}
