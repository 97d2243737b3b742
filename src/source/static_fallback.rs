//! Embedded example posts, the last link of every fallback chain.
//!
//! No I/O and no error path: [`StaticFallbackClient::posts`] is a plain
//! function over a constant table, so the chain always ends with content.

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{RawPost, SourceClient};
use crate::error::Result;
use crate::post::SourceKind;

struct Entry {
    shortcode: &'static str,
    caption: &'static str,
    likes: u64,
    comments: u64,
}

const DATASET: [Entry; 5] = [
    Entry {
        shortcode: "C1brandkit",
        caption: "A new visual identity for a local coffee roaster, from moodboard to packaging.",
        likes: 128,
        comments: 14,
    },
    Entry {
        shortcode: "C2webrelaunch",
        caption: "Relaunch day! Faster pages, cleaner checkout, and a 32% lift in conversions.",
        likes: 243,
        comments: 31,
    },
    Entry {
        shortcode: "C3adcampaign",
        caption: "Behind the scenes of our spring social campaign shoot.",
        likes: 97,
        comments: 8,
    },
    Entry {
        shortcode: "C4seoaudit",
        caption: "Three quick SEO wins we apply to every audit. Swipe for the checklist.",
        likes: 176,
        comments: 22,
    },
    Entry {
        shortcode: "C5teamday",
        caption: "Team workshop: planning next quarter's content calendar together.",
        likes: 64,
        comments: 5,
    },
];

#[derive(Debug, Default, Clone, Copy)]
pub struct StaticFallbackClient;

impl StaticFallbackClient {
    pub fn new() -> Self {
        Self
    }

    /// The fixed dataset with sequential ids `static-1..=static-5`.
    pub fn posts() -> Vec<RawPost> {
        DATASET
            .iter()
            .enumerate()
            .map(|(i, entry)| RawPost::new(entry_json(i, entry)))
            .collect()
    }
}

fn entry_json(index: usize, entry: &Entry) -> Value {
    json!({
        "id": format!("static-{}", index + 1),
        "shortcode": entry.shortcode,
        "embed_url": format!("https://www.instagram.com/p/{}/embed", entry.shortcode),
        "caption": entry.caption,
        "likes": entry.likes,
        "comments": entry.comments,
    })
}

#[async_trait]
impl SourceClient for StaticFallbackClient {
    fn kind(&self) -> SourceKind {
        SourceKind::StaticFallback
    }

    async fn fetch_posts(&self, _handle: &str) -> Result<Vec<RawPost>> {
        Ok(Self::posts())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn dataset_has_five_posts_with_distinct_ids() {
        let posts = StaticFallbackClient::posts();
        assert_eq!(posts.len(), 5);

        let ids: HashSet<&str> = posts
            .iter()
            .filter_map(|p| p.as_value()["id"].as_str())
            .collect();
        assert_eq!(ids.len(), 5);
        assert!(ids.contains("static-1"));
        assert!(ids.contains("static-5"));
    }

    #[tokio::test]
    async fn fetch_ignores_handle_and_never_fails() {
        let client = StaticFallbackClient::new();
        let a = client.fetch_posts("").await.unwrap();
        let b = client.fetch_posts("someone-else").await.unwrap();
        assert_eq!(a, b);
        assert_eq!(client.kind(), SourceKind::StaticFallback);
    }
}
