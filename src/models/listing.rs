//! Sort orders, feeds and listing targets

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::CommunitySelector;

/// Post sort order (Lemmy `SortType`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
pub enum SortType {
    /// Hot
    Hot,
    /// Newest first
    #[default]
    New,
    /// Oldest first
    Old,
    /// Most active
    Active,
    /// Top of all time
    #[value(name = "top_all")]
    TopAll,
    /// Top of the day
    #[value(name = "top_day")]
    TopDay,
    /// Top of the week
    #[value(name = "top_week")]
    TopWeek,
    /// Top of the month
    #[value(name = "top_month")]
    TopMonth,
    /// Top of the year
    #[value(name = "top_year")]
    TopYear,
    /// Top of the last hour
    #[value(name = "top_hour")]
    TopHour,
    /// Top of the last six hours
    #[value(name = "top_sixhour")]
    TopSixHour,
    /// Top of the last twelve hours
    #[value(name = "top_twelvehour")]
    TopTwelveHour,
    /// Most recent comments
    #[value(name = "new_comments")]
    NewComments,
    /// Most comments
    #[value(name = "most_comments")]
    MostComments,
}

impl SortType {
    /// Value the Lemmy API expects for `sort`
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hot => "Hot",
            Self::New => "New",
            Self::Old => "Old",
            Self::Active => "Active",
            Self::TopAll => "TopAll",
            Self::TopDay => "TopDay",
            Self::TopWeek => "TopWeek",
            Self::TopMonth => "TopMonth",
            Self::TopYear => "TopYear",
            Self::TopHour => "TopHour",
            Self::TopSixHour => "TopSixHour",
            Self::TopTwelveHour => "TopTwelveHour",
            Self::NewComments => "NewComments",
            Self::MostComments => "MostComments",
        }
    }
}

impl std::fmt::Display for SortType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which feed to read posts from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FeedType {
    /// Everything the instance knows about
    All,
    /// A single community (needs a community selector)
    #[default]
    Community,
    /// Local communities only
    Local,
    /// Communities the account is subscribed to
    Subscribed,
}

impl FeedType {
    /// Value for the API `type_` parameter; `None` for community listings,
    /// which are selected by community ID or name instead.
    pub const fn listing_type(&self) -> Option<&'static str> {
        match self {
            Self::All => Some("All"),
            Self::Community => None,
            Self::Local => Some("Local"),
            Self::Subscribed => Some("Subscribed"),
        }
    }
}

/// What a post listing is fetched for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingTarget {
    /// A single community
    Community(CommunitySelector),
    /// An instance-wide feed
    Feed(FeedType),
}

impl std::fmt::Display for ListingTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Community(selector) => write!(f, "community {selector}"),
            Self::Feed(feed) => write!(f, "{feed:?} feed"),
        }
    }
}
