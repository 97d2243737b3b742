//! Unauthenticated profile scrape through a public CORS relay.
//!
//! The relay proxies the profile's JSON endpoint, so the request is just
//! `{relay}{urlencoded(profile_url)}`.  The upstream endpoint is unofficial
//! and may change shape at any time; anything other than the expected
//! `graphql.user.edge_owner_to_timeline_media.edges` structure is reported as
//! unavailable rather than guessed at.

use async_trait::async_trait;
use serde_json::Value;

use super::{RawPost, SourceClient};
use crate::error::{Result, SourceError};
use crate::post::SourceKind;

pub const DEFAULT_RELAY_URL: &str = "https://api.allorigins.win/raw?url=";

/// `{handle}` is replaced with the url-encoded profile handle.
pub const DEFAULT_PROFILE_URL: &str = "https://www.instagram.com/{handle}/?__a=1&__d=dis";

const EDGES_POINTER: &str = "/graphql/user/edge_owner_to_timeline_media/edges";

pub struct FreeScrapeClient {
    client: reqwest::Client,
    relay_url: String,
    profile_url: String,
}

impl FreeScrapeClient {
    /// Create a scrape client.
    ///
    /// # Arguments
    ///
    /// * `relay_url` — relay prefix; the encoded profile URL is appended
    ///   verbatim, so it usually ends in `?url=`.
    /// * `profile_url` — upstream profile endpoint containing `{handle}`.
    pub fn new(
        client: reqwest::Client,
        relay_url: impl Into<String>,
        profile_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            relay_url: relay_url.into(),
            profile_url: profile_url.into(),
        }
    }

    pub fn request_url(&self, handle: &str) -> String {
        let target = self
            .profile_url
            .replace("{handle}", &urlencoding::encode(handle));
        format!("{}{}", self.relay_url, urlencoding::encode(&target))
    }

    /// Extract the timeline nodes from a profile payload.
    ///
    /// Pure, so the shape rules can be tested without a network.  Edges
    /// without an object `node` are skipped; a missing edge list is an error.
    pub fn parse_profile(body: &Value) -> Result<Vec<RawPost>> {
        let edges = body
            .pointer(EDGES_POINTER)
            .and_then(Value::as_array)
            .ok_or_else(|| SourceError::unavailable("profile payload has no timeline media edges"))?;

        Ok(edges
            .iter()
            .filter_map(|edge| edge.get("node"))
            .filter(|node| node.is_object())
            .cloned()
            .map(RawPost::new)
            .collect())
    }
}

#[async_trait]
impl SourceClient for FreeScrapeClient {
    fn kind(&self) -> SourceKind {
        SourceKind::FreeScrape
    }

    async fn fetch_posts(&self, handle: &str) -> Result<Vec<RawPost>> {
        let url = self.request_url(handle);
        tracing::debug!(%url, "Requesting profile through relay");

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::unavailable(format!(
                "relay returned status {}",
                status.as_u16()
            )));
        }

        let text = resp.text().await?;
        let body: Value = serde_json::from_str(&text)?;
        Self::parse_profile(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::http::{http_client, serve, CannedResponse};
    use serde_json::json;

    fn client(relay: &str) -> FreeScrapeClient {
        FreeScrapeClient::new(http_client(), relay, DEFAULT_PROFILE_URL)
    }

    fn profile_with(nodes: Vec<Value>) -> Value {
        let edges: Vec<Value> = nodes.into_iter().map(|n| json!({ "node": n })).collect();
        json!({ "graphql": { "user": { "edge_owner_to_timeline_media": { "edges": edges } } } })
    }

    #[test]
    fn request_url_encodes_profile_url_into_relay() {
        let c = client("https://relay.example/raw?url=");
        assert_eq!(
            c.request_url("acme.studio"),
            "https://relay.example/raw?url=https%3A%2F%2Fwww.instagram.com%2Facme.studio%2F%3F__a%3D1%26__d%3Ddis"
        );
    }

    #[test]
    fn parse_profile_extracts_nodes() {
        let body = profile_with(vec![json!({ "id": "1" }), json!({ "id": "2" })]);
        let posts = FreeScrapeClient::parse_profile(&body).unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].as_value()["id"], "1");
        assert_eq!(posts[1].as_value()["id"], "2");
    }

    #[test]
    fn parse_profile_skips_malformed_edges() {
        let body = json!({ "graphql": { "user": { "edge_owner_to_timeline_media": { "edges": [
            { "node": { "id": "1" } },
            { "node": "not-an-object" },
            { "cursor": "abc" }
        ] } } } });

        let posts = FreeScrapeClient::parse_profile(&body).unwrap();
        assert_eq!(posts.len(), 1);
    }

    #[test]
    fn parse_profile_rejects_other_shapes() {
        for body in [
            json!({}),
            json!({ "data": { "user": { "edge_owner_to_timeline_media": { "edges": [] } } } }),
            json!({ "graphql": { "user": null } }),
            json!({ "graphql": { "user": { "edge_owner_to_timeline_media": { "edges": {} } } } }),
        ] {
            let err = FreeScrapeClient::parse_profile(&body).unwrap_err();
            assert!(matches!(err, SourceError::Unavailable(_)), "{body}");
        }
    }

    #[test]
    fn parse_profile_allows_empty_edge_list() {
        let posts = FreeScrapeClient::parse_profile(&profile_with(vec![])).unwrap();
        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn fetch_posts_reads_relay_response() {
        let body = profile_with(vec![json!({ "id": "9", "shortcode": "Cx" })]).to_string();
        let server = serve(vec![CannedResponse::json(200, body)]).await;

        let posts = client(&server.url("/raw?url=")).fetch_posts("acme").await.unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].as_value()["shortcode"], "Cx");
        let request = server.requests().await.remove(0);
        assert!(request.starts_with("GET /raw?url=https%3A%2F%2Fwww.instagram.com%2Facme"));
    }

    #[tokio::test]
    async fn fetch_posts_maps_error_status_to_unavailable() {
        let server = serve(vec![CannedResponse::json(500, "{}")]).await;

        let err = client(&server.url("/raw?url=")).fetch_posts("acme").await.unwrap_err();

        assert!(matches!(err, SourceError::Unavailable(ref m) if m.contains("500")));
    }

    #[tokio::test]
    async fn fetch_posts_maps_html_body_to_unavailable() {
        let server = serve(vec![CannedResponse::html(200, "<html>login</html>")]).await;

        let err = client(&server.url("/raw?url=")).fetch_posts("acme").await.unwrap_err();

        assert!(matches!(err, SourceError::Unavailable(_)));
    }
}
