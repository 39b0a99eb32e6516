//! The fetch, filter and archive loop

use anyhow::{Context, Result};

use crate::api::LemmyApi;
use crate::archive::{ArchiveOutcome, ArchiveWriter};
use crate::console::{Console, Tone};
use crate::fetch::{PAGE_SIZE, PostFetcher};
use crate::media::select_posts;
use crate::models::{CommunitySelector, ListingTarget};
use crate::settings::Settings;

/// Counters for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Listing pages fetched
    pub pages: u32,
    /// Listing positions consumed, media or not
    pub processed: usize,
    /// Posts picked by the media filter
    pub selected: usize,
    /// Posts written to disk
    pub archived: usize,
    /// Posts whose directory already existed
    pub skipped: usize,
    /// Media files written
    pub media_saved: usize,
    /// Media downloads that failed
    pub media_failed: usize,
}

/// Number of posts to process: `--number`, or the community's post count
/// when fetching everything.
pub async fn resolve_count<A: LemmyApi>(api: &A, settings: &Settings) -> Result<usize> {
    if !settings.fetch_max {
        return Ok(settings.count);
    }
    // Feeds are rejected while loading settings
    let ListingTarget::Community(selector) = &settings.target else {
        return Ok(settings.count);
    };

    if let CommunitySelector::Name(name) = selector
        && selector.is_federated()
        && let Err(e) = api.resolve_community(name).await
    {
        tracing::warn!("Could not resolve {name}: {e:#}");
    }

    let view = api
        .get_community(selector)
        .await
        .with_context(|| format!("Failed to look up community {selector}"))?;
    tracing::debug!(community = %view.community.name, posts = view.counts.posts, "community post count");
    Ok(usize::try_from(view.counts.posts).unwrap_or(usize::MAX))
}

/// Fetch, filter and archive posts until the count is reached or the listing
/// runs dry. Any API or filesystem error ends the run.
pub async fn run<A: LemmyApi>(
    api: &A,
    settings: &Settings,
    writer: &ArchiveWriter,
    console: &Console,
) -> Result<RunSummary> {
    let count = resolve_count(api, settings).await?;
    console.line(
        Tone::Info,
        &format!("Getting ~{count} posts in groups of {PAGE_SIZE}"),
    );

    let mut summary = RunSummary::default();
    let mut fetcher = PostFetcher::new(api, settings.target.clone(), settings.sort, count);

    while summary.processed < count {
        let Some(mut posts) = fetcher.next_page().await? else {
            break;
        };
        summary.pages = fetcher.current_page();

        posts.truncate(count - summary.processed);
        summary.processed += posts.len();

        let selected = select_posts(posts, settings.include_all);
        summary.selected += selected.len();

        for (index, entry) in selected.iter().enumerate() {
            console.progress(&format!(
                "Getting post {} of {} in group {} (actual {}/{})...",
                index + 1,
                selected.len(),
                summary.pages,
                summary.processed,
                count
            ));
            match writer.archive(api, entry).await? {
                ArchiveOutcome::Archived {
                    media_saved,
                    media_failed,
                } => {
                    summary.archived += 1;
                    summary.media_saved += media_saved;
                    summary.media_failed += media_failed;
                }
                ArchiveOutcome::Skipped => summary.skipped += 1,
            }
        }
        if !selected.is_empty() {
            console.finish_progress();
        }
    }

    tracing::debug!(?summary, "run finished");
    Ok(summary)
}
