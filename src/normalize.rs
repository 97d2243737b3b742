//! Raw upstream payloads → [`CanonicalPost`].
//!
//! Each source shape is described by a [`Schema`]: an ordered list of JSON
//! pointers per canonical field.  The first pointer that resolves to a usable
//! value wins; when none does, the field takes its documented default.  No
//! input can make normalization fail.
//!
//! Values are read leniently: counts may be numbers, numeric strings, or
//! `{ "count": n }` objects; captions may be strings or `{ "text": .. }`
//! objects; timestamps may be integers, floats, or numeric strings.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::locale::Locale;
use crate::post::{CanonicalPost, MediaRef, SourceKind};
use crate::source::RawPost;
use crate::timefmt::format_relative_at;

/// Shown when a post has neither media nor a shortcode to embed.
pub const PLACEHOLDER_IMAGE: &str = "https://www.instagram.com/static/images/ico/favicon-200.png";

struct Schema {
    id: &'static [&'static str],
    shortcode: &'static [&'static str],
    caption: &'static [&'static str],
    likes: &'static [&'static str],
    comments: &'static [&'static str],
    timestamp: &'static [&'static str],
    /// Boolean flags: `true` or `"true"`.
    is_video: &'static [&'static str],
    /// Numeric media types: 2 is a video.
    media_type: &'static [&'static str],
    /// Any non-empty URL marks a video.
    video_url: &'static [&'static str],
    embed_url: &'static [&'static str],
    image_url: &'static [&'static str],
}

const FREE_SCRAPE: Schema = Schema {
    id: &["/id"],
    shortcode: &["/shortcode"],
    caption: &["/edge_media_to_caption/edges/0/node/text"],
    likes: &["/edge_liked_by", "/edge_media_preview_like"],
    comments: &["/edge_media_to_comment", "/edge_media_preview_comment"],
    timestamp: &["/taken_at_timestamp"],
    is_video: &["/is_video"],
    media_type: &[],
    video_url: &[],
    embed_url: &[],
    image_url: &["/display_url", "/thumbnail_src"],
};

const PAID_API: Schema = Schema {
    id: &["/id", "/pk"],
    shortcode: &["/code", "/shortcode"],
    caption: &["/caption", "/caption_text"],
    likes: &["/like_count", "/likes_count"],
    comments: &["/comment_count", "/comments_count"],
    timestamp: &["/taken_at", "/taken_at_timestamp"],
    is_video: &["/is_video"],
    media_type: &["/media_type"],
    video_url: &["/video_url"],
    embed_url: &[],
    image_url: &[
        "/thumbnail_url",
        "/display_url",
        "/image_versions/items/0/url",
        "/image_versions2/candidates/0/url",
    ],
};

const STATIC_FALLBACK: Schema = Schema {
    id: &["/id"],
    shortcode: &["/shortcode"],
    caption: &["/caption"],
    likes: &["/likes"],
    comments: &["/comments"],
    timestamp: &["/timestamp"],
    is_video: &[],
    media_type: &[],
    video_url: &[],
    embed_url: &["/embed_url"],
    image_url: &["/image_url"],
};

fn schema(kind: SourceKind) -> &'static Schema {
    match kind {
        SourceKind::FreeScrape => &FREE_SCRAPE,
        SourceKind::PaidApi => &PAID_API,
        SourceKind::StaticFallback => &STATIC_FALLBACK,
    }
}

/// Normalize one post in English against the current wall clock.
///
/// A post without an upstream id gets `{source}-0`; use
/// [`Normalizer::normalize`] with the real position when normalizing a list.
pub fn normalize(raw: &RawPost, kind: SourceKind) -> CanonicalPost {
    Normalizer::new(Locale::English, Utc::now()).normalize(raw, kind, 0)
}

/// Normalization settings shared by every post of one load.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    locale: Locale,
    now: DateTime<Utc>,
}

impl Normalizer {
    pub fn new(locale: Locale, now: DateTime<Utc>) -> Self {
        Self { locale, now }
    }

    /// Map `raw` to a canonical post.  `index` is the post's position in its
    /// source list, used only to synthesize a missing id.
    pub fn normalize(&self, raw: &RawPost, kind: SourceKind, index: usize) -> CanonicalPost {
        let v = raw.as_value();
        let schema = schema(kind);

        let id = first(v, schema.id, text)
            .unwrap_or_else(|| format!("{}-{}", kind.as_str(), index));

        let shortcode = first(v, schema.shortcode, text);

        let caption = first(v, schema.caption, text)
            .unwrap_or_else(|| self.locale.caption_placeholder().to_string());

        let like_count = first(v, schema.likes, count).unwrap_or(0);
        let comment_count = first(v, schema.comments, count).unwrap_or(0);

        let relative_time =
            format_relative_at(first(v, schema.timestamp, epoch), self.now, self.locale);

        let media = resolve_media(v, schema, shortcode.as_deref());
        let permalink = shortcode.map(|code| format!("https://www.instagram.com/p/{code}/"));

        CanonicalPost {
            id,
            media,
            caption,
            like_count,
            comment_count,
            relative_time,
            permalink,
            source_kind: kind,
        }
    }
}

fn resolve_media(v: &Value, schema: &Schema, shortcode: Option<&str>) -> MediaRef {
    if let Some(url) = first(v, schema.embed_url, text) {
        return MediaRef::VideoEmbed(url);
    }

    let is_video = first(v, schema.is_video, flag).unwrap_or(false)
        || first(v, schema.media_type, count) == Some(VIDEO_MEDIA_TYPE)
        || first(v, schema.video_url, non_empty_url).is_some();

    match (is_video, shortcode, first(v, schema.image_url, text)) {
        (true, Some(code), _) => MediaRef::VideoEmbed(embed_url(code)),
        (_, _, Some(url)) => MediaRef::Image(url),
        (_, Some(code), None) => MediaRef::VideoEmbed(embed_url(code)),
        (_, None, None) => MediaRef::Image(PLACEHOLDER_IMAGE.to_string()),
    }
}

const VIDEO_MEDIA_TYPE: u64 = 2;

fn embed_url(shortcode: &str) -> String {
    format!("https://www.instagram.com/p/{shortcode}/embed")
}

/// First pointer whose value `read` accepts.
fn first<T>(v: &Value, pointers: &[&str], read: fn(&Value) -> Option<T>) -> Option<T> {
    pointers.iter().filter_map(|p| v.pointer(p)).find_map(read)
}

fn text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Object(map) => map.get("text").and_then(text),
        _ => None,
    }
}

fn count(v: &Value) -> Option<u64> {
    match v {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite() && *f >= 0.0)
                    .map(|f| f as u64)
            })
        }
        Value::Object(map) => map.get("count").and_then(count),
        _ => None,
    }
}

fn epoch(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f as i64))
        }
        _ => None,
    }
}

fn flag(v: &Value) -> Option<bool> {
    match v {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn non_empty_url(v: &Value) -> Option<String> {
    match v {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}
