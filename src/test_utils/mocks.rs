//! Scriptable [`SourceClient`] with a call counter.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use crate::error::{Result, SourceError};
use crate::post::SourceKind;
use crate::source::{RawPost, SourceClient};

#[derive(Clone)]
pub enum Outcome {
    Posts(Vec<RawPost>),
    Empty,
    Unavailable,
    Misconfigured,
    /// Never answers within any reasonable test timeout.
    Hang,
}

pub struct MockSource {
    kind: SourceKind,
    outcome: Outcome,
    calls: Arc<AtomicUsize>,
}

impl MockSource {
    pub fn new(kind: SourceKind, outcome: Outcome) -> Self {
        Self {
            kind,
            outcome,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared handle to the call count; stays valid after the mock is boxed.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl SourceClient for MockSource {
    fn kind(&self) -> SourceKind {
        self.kind
    }

    async fn fetch_posts(&self, _handle: &str) -> Result<Vec<RawPost>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Outcome::Posts(posts) => Ok(posts.clone()),
            Outcome::Empty => Ok(Vec::new()),
            Outcome::Unavailable => Err(SourceError::unavailable("mock outage")),
            Outcome::Misconfigured => Err(SourceError::misconfigured("mock missing key")),
            Outcome::Hang => {
                tokio::time::sleep(Duration::from_secs(3_600)).await;
                Err(SourceError::unavailable("mock hang elapsed"))
            }
        }
    }
}

pub fn calls(counter: &Arc<AtomicUsize>) -> usize {
    counter.load(Ordering::SeqCst)
}

/// `n` minimal posts in the free-scrape node shape, ids `{prefix}-0..n`.
pub fn scrape_nodes(prefix: &str, n: usize) -> Vec<RawPost> {
    (0..n)
        .map(|i| {
            RawPost::new(json!({
                "id": format!("{prefix}-{i}"),
                "shortcode": format!("SC{i}"),
                "display_url": format!("https://cdn.example/{prefix}/{i}.jpg"),
                "edge_liked_by": { "count": i }
            }))
        })
        .collect()
}
