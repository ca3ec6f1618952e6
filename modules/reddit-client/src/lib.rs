pub mod error;
mod types;

pub use error::{RedditError, Result};

use std::time::Duration;

use tracing::debug;
use types::Listing;

const BASE_URL: &str = "https://www.reddit.com";

/// Static identification string Reddit expects from scripted clients.
const USER_AGENT: &str = "sentipulse/1.0 (snapshot bot)";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct RedditClient {
    client: reqwest::Client,
    base_url: String,
}

impl Default for RedditClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RedditClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Point the client at a different host. Used by tests to target a
    /// local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch the hot listing for a subreddit and return its post titles in
    /// listing order. One request, one attempt; retry policy is the
    /// caller's business.
    pub async fn hot_titles(&self, subreddit: &str, limit: u32) -> Result<Vec<String>> {
        let url = format!("{}/r/{}/hot.json", self.base_url, subreddit);
        debug!(subreddit, limit, "Fetching hot listing");

        let resp = self
            .client
            .get(&url)
            .query(&[("limit", limit)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RedditError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;

        // Two-stage decode: invalid JSON and valid-but-wrong-shape JSON are
        // different failure kinds.
        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| RedditError::Parse(e.to_string()))?;
        let listing: Listing = serde_json::from_value(value)
            .map_err(|e| RedditError::UnexpectedShape(e.to_string()))?;

        let titles = listing
            .data
            .children
            .into_iter()
            .map(|child| child.data.title)
            .collect();
        Ok(titles)
    }
}
