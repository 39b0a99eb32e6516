//! Lemmy API access

pub mod lemmy;
pub mod pacer;

use anyhow::Result;
use serde_json::Value;

use crate::models::{CommunitySelector, CommunityView, ListingTarget, PostView, SortType};

pub use lemmy::LemmyClient;
pub use pacer::{DEFAULT_REQUEST_DELAY, RequestPacer};

/// Parameters of one post listing request
#[derive(Debug, Clone, Copy)]
pub struct PostQuery<'a> {
    /// 1-based page number
    pub page: u32,
    /// Posts per page
    pub limit: u32,
    /// Sort order
    pub sort: SortType,
    /// Community or feed to list
    pub target: &'a ListingTarget,
}

/// The calls the archiver makes against a Lemmy instance
#[allow(async_fn_in_trait)]
pub trait LemmyApi {
    /// Fetch one page of posts
    async fn list_posts(&self, query: &PostQuery<'_>) -> Result<Vec<PostView>>;

    /// Fetch the comments of a post, as returned by the server
    async fn list_comments(&self, post_id: i64) -> Result<Vec<Value>>;

    /// Look up a community and its counters
    async fn get_community(&self, community: &CommunitySelector) -> Result<CommunityView>;

    /// Ask the instance to federate a remote community (`name@instance`)
    async fn resolve_community(&self, name: &str) -> Result<()>;
}
