//! Lemmy HTTP API (v3) client

use anyhow::{Context, Result, bail};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::time::Duration;

use crate::models::{CommunitySelector, CommunityView, ListingTarget, PostView};

use super::{LemmyApi, PostQuery, RequestPacer};

/// Comments fetched per post (the API maximum)
const COMMENT_LIMIT: u32 = 50;

/// Lemmy API client
///
/// Every API call goes through the client's [`RequestPacer`], so calls are
/// spaced by the configured request delay.
pub struct LemmyClient {
    client: Client,
    instance: String,
    jwt: Option<String>,
    pacer: RequestPacer,
}

impl LemmyClient {
    /// Create an anonymous client for `instance` (e.g. `https://lemmy.world`)
    pub fn new(instance: &str, request_delay: Duration) -> Self {
        let client = Client::builder()
            .user_agent(concat!("lemmydl/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();

        Self {
            client,
            instance: instance.trim_end_matches('/').to_string(),
            jwt: None,
            pacer: RequestPacer::new(request_delay),
        }
    }

    /// Create a client and log in with username (or email) and password
    pub async fn login(
        instance: &str,
        username: &str,
        password: &str,
        request_delay: Duration,
    ) -> Result<Self> {
        let mut client = Self::new(instance, request_delay);
        client.log_in(username, password).await?;
        Ok(client)
    }

    /// Log in and keep the returned token for later calls
    pub async fn log_in(&mut self, username: &str, password: &str) -> Result<()> {
        let url = self.api_url("/user/login");

        let request = LoginRequest {
            username_or_email: username,
            password,
        };

        self.pacer.wait().await;
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Failed to log in to Lemmy")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("Lemmy login failed ({status}): {body}");
        }

        let login: LoginResponse = response
            .json()
            .await
            .context("Failed to parse login response")?;

        let jwt = login
            .jwt
            .context("Lemmy login returned no token (unverified email or pending application?)")?;
        tracing::debug!(instance = %self.instance, "logged in");
        self.jwt = Some(jwt);

        Ok(())
    }

    /// Whether a login token is held
    pub const fn is_logged_in(&self) -> bool {
        self.jwt.is_some()
    }

    /// Instance base URL
    pub fn instance(&self) -> &str {
        &self.instance
    }

    /// Build API URL
    fn api_url(&self, endpoint: &str) -> String {
        format!("{}/api/v3{}", self.instance, endpoint)
    }

    /// Build API URL with an encoded query string
    fn api_url_with(&self, endpoint: &str, params: &[(&str, String)]) -> String {
        let query = params
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.api_url(endpoint), query)
    }

    fn get(&self, url: &str) -> RequestBuilder {
        let request = self.client.get(url);
        match &self.jwt {
            Some(jwt) => request.bearer_auth(jwt),
            None => request,
        }
    }

    /// Paced GET returning parsed JSON; non-2xx responses are errors
    async fn get_json<T: DeserializeOwned>(&self, url: &str, what: &str) -> Result<T> {
        self.pacer.wait().await;
        tracing::debug!(%url, "GET");

        let response = self
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {what}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("Lemmy error {status} fetching {what}: {body}");
        }

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse {what} response"))
    }

    fn post_list_url(&self, query: &PostQuery<'_>) -> String {
        let mut params = vec![
            ("page", query.page.to_string()),
            ("limit", query.limit.to_string()),
            ("sort", query.sort.as_str().to_string()),
        ];

        match query.target {
            ListingTarget::Community(CommunitySelector::Id(id)) => {
                params.push(("community_id", id.to_string()));
            }
            ListingTarget::Community(CommunitySelector::Name(name)) => {
                params.push(("community_name", name.clone()));
            }
            ListingTarget::Feed(feed) => {
                if let Some(listing_type) = feed.listing_type() {
                    params.push(("type_", listing_type.to_string()));
                }
            }
        }

        self.api_url_with("/post/list", &params)
    }
}

impl LemmyApi for LemmyClient {
    async fn list_posts(&self, query: &PostQuery<'_>) -> Result<Vec<PostView>> {
        let url = self.post_list_url(query);
        let response: GetPostsResponse = self.get_json(&url, "posts").await?;
        Ok(response.posts)
    }

    async fn list_comments(&self, post_id: i64) -> Result<Vec<Value>> {
        let url = self.api_url_with(
            "/comment/list",
            &[
                ("post_id", post_id.to_string()),
                ("limit", COMMENT_LIMIT.to_string()),
                ("type_", "All".to_string()),
            ],
        );
        let response: GetCommentsResponse = self.get_json(&url, "comments").await?;
        Ok(response.comments)
    }

    async fn get_community(&self, community: &CommunitySelector) -> Result<CommunityView> {
        let param = match community {
            CommunitySelector::Id(id) => ("id", id.to_string()),
            CommunitySelector::Name(name) => ("name", name.clone()),
        };
        let url = self.api_url_with("/community", &[param]);
        let response: GetCommunityResponse = self.get_json(&url, "community").await?;
        Ok(response.community_view)
    }

    async fn resolve_community(&self, name: &str) -> Result<()> {
        let url = self.api_url_with("/resolve_object", &[("q", format!("!{name}"))]);
        let _: Value = self.get_json(&url, "remote community").await?;
        Ok(())
    }
}

// ==================== API Types ====================

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username_or_email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    jwt: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GetPostsResponse {
    posts: Vec<PostView>,
}

#[derive(Debug, Deserialize)]
struct GetCommentsResponse {
    comments: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct GetCommunityResponse {
    community_view: CommunityView,
}
