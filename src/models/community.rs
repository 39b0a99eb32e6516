//! Community model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A Lemmy community
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Community {
    /// Instance-assigned community ID
    pub id: i64,
    /// Community name (without the `@instance` suffix)
    pub name: String,
    /// Remaining fields, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Community with its aggregate counters (from `GET /community`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityView {
    /// The community
    pub community: Community,
    /// Aggregate counters
    pub counts: CommunityCounts,
    /// Remaining fields, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Aggregate counters of a community
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityCounts {
    /// Total number of posts
    pub posts: u64,
    /// Remaining fields, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// How the user picked a community on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommunitySelector {
    /// Numeric community ID
    Id(i64),
    /// Community name, either `name` or federated `name@instance`
    Name(String),
}

impl CommunitySelector {
    /// Parse a selector: anything that parses as an integer is an ID.
    ///
    /// Numerically named communities have to be given in their federated
    /// `name@instance` form.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        s.parse::<i64>()
            .map_or_else(|_| Self::Name(s.to_string()), Self::Id)
    }

    /// Whether this names a community on another instance
    pub fn is_federated(&self) -> bool {
        matches!(self, Self::Name(name) if name.contains('@'))
    }
}

impl std::fmt::Display for CommunitySelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{id}"),
            Self::Name(name) => write!(f, "{name}"),
        }
    }
}
