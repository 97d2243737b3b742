//! The canonical post type handed to renderers.
//!
//! `CanonicalPost` is what every source strategy's payload becomes after
//! [`normalize`](crate::normalize::normalize).  Renderers only ever see this
//! type, so they stay independent of which upstream actually answered.
//!
//! ## For contributors
//!
//! Adding a field here means giving it a default in the normalizer: a
//! missing upstream field must degrade, never fail.

use std::fmt;

use serde::Serialize;

/// Which strategy produced a post.  Used for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    FreeScrape,
    PaidApi,
    StaticFallback,
}

impl SourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SourceKind::FreeScrape => "free-scrape",
            SourceKind::PaidApi => "paid-api",
            SourceKind::StaticFallback => "static-fallback",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MediaKind {
    Image,
    VideoEmbed,
}

/// The visual part of a post: either a direct image or an embeddable page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "url", rename_all = "camelCase")]
pub enum MediaRef {
    Image(String),
    VideoEmbed(String),
}

impl MediaRef {
    pub fn kind(&self) -> MediaKind {
        match self {
            MediaRef::Image(_) => MediaKind::Image,
            MediaRef::VideoEmbed(_) => MediaKind::VideoEmbed,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            MediaRef::Image(url) | MediaRef::VideoEmbed(url) => url,
        }
    }
}

/// A single display-ready post.
///
/// Constructed once per load and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalPost {
    /// Unique within one load.  Upstream ids are kept verbatim; posts
    /// without one get `{source}-{index}`.
    pub id: String,

    pub media: MediaRef,

    /// Never empty; falls back to the locale's placeholder.
    pub caption: String,

    pub like_count: u64,

    pub comment_count: u64,

    /// Output of [`format_relative_at`](crate::timefmt::format_relative_at).
    pub relative_time: String,

    /// Click-through URL of the original post, when the upstream exposes a
    /// shortcode.
    pub permalink: Option<String>,

    pub source_kind: SourceKind,
}
