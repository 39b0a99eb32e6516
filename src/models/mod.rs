//! Data models for Lemmy posts, communities and listings

mod community;
mod listing;
mod post;

pub use community::{Community, CommunityCounts, CommunitySelector, CommunityView};
pub use listing::{FeedType, ListingTarget, SortType};
pub use post::{Post, PostView};
