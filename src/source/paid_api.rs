//! Keyed commercial scraping API.
//!
//! Costs money per call, which is why it sits after the free scrape in the
//! fallback chain.  The credential is plain configuration handed to
//! [`PaidApiClient::new`]; without it the client refuses to make a request.

use async_trait::async_trait;
use serde_json::Value;

use super::{RawPost, SourceClient};
use crate::error::{Result, SourceError};
use crate::post::SourceKind;

/// `{handle}` is replaced with the url-encoded profile handle.
pub const DEFAULT_API_URL: &str =
    "https://instagram-scraper-api2.p.rapidapi.com/v1/posts?username_or_id_or_url={handle}";

pub const DEFAULT_API_HOST: &str = "instagram-scraper-api2.p.rapidapi.com";

const KEY_HEADER: &str = "X-RapidAPI-Key";
const HOST_HEADER: &str = "X-RapidAPI-Host";

pub struct PaidApiClient {
    client: reqwest::Client,
    api_url: String,
    api_host: String,
    api_key: Option<String>,
}

impl PaidApiClient {
    /// Create an API client.  A blank `api_key` counts as absent.
    pub fn new(
        client: reqwest::Client,
        api_url: impl Into<String>,
        api_host: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            api_host: api_host.into(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn request_url(&self, handle: &str) -> String {
        self.api_url.replace("{handle}", &urlencoding::encode(handle))
    }

    /// Extract `response.posts` from an API body.
    pub fn parse_response(body: &Value) -> Result<Vec<RawPost>> {
        let posts = body
            .pointer("/response/posts")
            .and_then(Value::as_array)
            .ok_or_else(|| SourceError::unavailable("API body has no response.posts array"))?;

        Ok(posts
            .iter()
            .filter(|post| post.is_object())
            .cloned()
            .map(RawPost::new)
            .collect())
    }
}

#[async_trait]
impl SourceClient for PaidApiClient {
    fn kind(&self) -> SourceKind {
        SourceKind::PaidApi
    }

    async fn fetch_posts(&self, handle: &str) -> Result<Vec<RawPost>> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| SourceError::misconfigured("no API credential configured"))?;

        let url = self.request_url(handle);
        tracing::debug!(%url, "Requesting posts from paid API");

        let resp = self
            .client
            .get(&url)
            .header(KEY_HEADER, key)
            .header(HOST_HEADER, &self.api_host)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SourceError::unavailable(format!(
                "API returned status {}: {}",
                status.as_u16(),
                body.chars().take(200).collect::<String>()
            )));
        }

        let text = resp.text().await?;
        let body: Value = serde_json::from_str(&text)?;
        Self::parse_response(&body)
    }
}
