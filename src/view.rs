//! Renderer-facing view model.
//!
//! [`PostCard::from_post`] is a pure function: whatever a renderer needs to
//! draw a post (labels, truncated caption, click-through link) is computed
//! here once, so renderers only place strings.

use serde::Serialize;

use crate::post::{CanonicalPost, MediaKind};

pub const CAPTION_PREVIEW_CHARS: usize = 120;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCard {
    pub id: String,
    pub media_kind: MediaKind,
    pub media_url: String,
    /// Single line, at most [`CAPTION_PREVIEW_CHARS`] characters.
    pub caption_preview: String,
    /// Full caption for detail views.
    pub caption: String,
    pub likes_label: String,
    pub comments_label: String,
    pub time_label: String,
    pub permalink: Option<String>,
    pub source_label: &'static str,
}

impl PostCard {
    pub fn from_post(post: &CanonicalPost) -> Self {
        Self {
            id: post.id.clone(),
            media_kind: post.media.kind(),
            media_url: post.media.url().to_string(),
            caption_preview: preview(&post.caption, CAPTION_PREVIEW_CHARS),
            caption: post.caption.clone(),
            likes_label: compact_count(post.like_count),
            comments_label: compact_count(post.comment_count),
            time_label: post.relative_time.clone(),
            permalink: post.permalink.clone(),
            source_label: post.source_kind.as_str(),
        }
    }
}

pub fn cards(posts: &[CanonicalPost]) -> Vec<PostCard> {
    posts.iter().map(PostCard::from_post).collect()
}

/// `999`, `1.2K`, `3.4M`.  Truncates rather than rounds.
pub fn compact_count(n: u64) -> String {
    fn scaled(n: u64, unit: u64, suffix: char) -> String {
        let tenths = n / (unit / 10);
        match tenths % 10 {
            0 => format!("{}{suffix}", tenths / 10),
            d => format!("{}.{d}{suffix}", tenths / 10),
        }
    }

    match n {
        0..=999 => n.to_string(),
        1_000..=999_999 => scaled(n, 1_000, 'K'),
        _ => scaled(n, 1_000_000, 'M'),
    }
}

/// Collapse whitespace and cut to `max` characters, ending in `…` if cut.
pub fn preview(text: &str, max: usize) -> String {
    let single_line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() <= max {
        return single_line;
    }
    let mut cut: String = single_line.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
