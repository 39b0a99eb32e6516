//! Paging through post listings

use anyhow::{Context, Result};

use crate::api::{LemmyApi, PostQuery};
use crate::models::{ListingTarget, PostView, SortType};

/// Posts requested per listing call
pub const PAGE_SIZE: usize = 20;

/// Number of pages needed for `count` posts
pub const fn page_count(count: usize) -> u32 {
    count.div_ceil(PAGE_SIZE) as u32
}

/// Walks the listing pages of a community or feed, one call per page
pub struct PostFetcher<'a, A> {
    api: &'a A,
    target: ListingTarget,
    sort: SortType,
    page: u32,
    pages: u32,
}

impl<'a, A: LemmyApi> PostFetcher<'a, A> {
    /// Fetcher for enough pages to cover `count` posts
    pub fn new(api: &'a A, target: ListingTarget, sort: SortType, count: usize) -> Self {
        Self {
            api,
            target,
            sort,
            page: 0,
            pages: page_count(count),
        }
    }

    /// Total pages this fetcher will request at most
    pub const fn pages(&self) -> u32 {
        self.pages
    }

    /// Last page requested (1-based, 0 before the first call)
    pub const fn current_page(&self) -> u32 {
        self.page
    }

    /// Fetch the next page.
    ///
    /// Returns `None` once all pages are done or the server runs out of
    /// posts. Request errors are returned as-is; there is no retry.
    pub async fn next_page(&mut self) -> Result<Option<Vec<PostView>>> {
        if self.page >= self.pages {
            return Ok(None);
        }
        self.page += 1;
        tracing::debug!("Getting page {} of {}", self.page, self.pages);

        let query = PostQuery {
            page: self.page,
            limit: PAGE_SIZE as u32,
            sort: self.sort,
            target: &self.target,
        };
        let posts = self
            .api
            .list_posts(&query)
            .await
            .with_context(|| format!("Failed to fetch page {} of {}", self.page, self.target))?;

        if posts.is_empty() {
            tracing::debug!(page = self.page, "empty page, no more posts");
            self.pages = self.page;
            return Ok(None);
        }

        Ok(Some(posts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CommunitySelector, CommunityView, FeedType};
    use serde_json::{Value, json};
    use std::sync::Mutex;

    /// Serves `available` posts, numbered from 1, in pages of the requested size
    struct Listing {
        available: usize,
        calls: Mutex<Vec<(u32, u32)>>,
    }

    impl Listing {
        fn new(available: usize) -> Self {
            Self {
                available,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl LemmyApi for Listing {
        async fn list_posts(&self, query: &PostQuery<'_>) -> Result<Vec<PostView>> {
            self.calls.lock().unwrap().push((query.page, query.limit));
            let start = (query.page as usize - 1) * query.limit as usize;
            let end = (start + query.limit as usize).min(self.available);
            Ok((start..end)
                .map(|i| {
                    serde_json::from_value(json!({
                        "post": { "id": i + 1, "name": format!("post {}", i + 1) },
                        "community": { "id": 1, "name": "pics" }
                    }))
                    .unwrap()
                })
                .collect())
        }

        async fn list_comments(&self, _post_id: i64) -> Result<Vec<Value>> {
            Ok(Vec::new())
        }

        async fn get_community(&self, _community: &CommunitySelector) -> Result<CommunityView> {
            anyhow::bail!("not used")
        }

        async fn resolve_community(&self, _name: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0), 0);
        assert_eq!(page_count(1), 1);
        assert_eq!(page_count(20), 1);
        assert_eq!(page_count(21), 2);
        assert_eq!(page_count(25), 2);
        assert_eq!(page_count(40), 2);
    }

    #[tokio::test]
    async fn test_fetches_exactly_needed_pages() {
        let api = Listing::new(100);
        let mut fetcher = PostFetcher::new(&api, ListingTarget::Feed(FeedType::All), SortType::Hot, 25);

        let mut total = 0;
        while let Some(posts) = fetcher.next_page().await.unwrap() {
            total += posts.len();
        }

        assert_eq!(total, 40);
        assert_eq!(*api.calls.lock().unwrap(), vec![(1, 20), (2, 20)]);
        assert_eq!(fetcher.current_page(), 2);
    }

    #[tokio::test]
    async fn test_stops_on_empty_page() {
        let api = Listing::new(20);
        let target = ListingTarget::Community(CommunitySelector::Id(4));
        let mut fetcher = PostFetcher::new(&api, target, SortType::New, 100);
        assert_eq!(fetcher.pages(), 5);

        assert_eq!(fetcher.next_page().await.unwrap().map(|p| p.len()), Some(20));
        assert!(fetcher.next_page().await.unwrap().is_none());
        assert!(fetcher.next_page().await.unwrap().is_none());
        assert_eq!(api.calls.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_zero_count_makes_no_calls() {
        let api = Listing::new(20);
        let mut fetcher = PostFetcher::new(&api, ListingTarget::Feed(FeedType::Local), SortType::New, 0);
        assert!(fetcher.next_page().await.unwrap().is_none());
        assert!(api.calls.lock().unwrap().is_empty());
    }
}
