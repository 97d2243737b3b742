//! Line-per-post output for `--plain`, useful in scripts and over SSH.

use std::io::Write;

use socialfeed::{FeedRenderer, MediaKind, PostCard};

pub struct PlainRenderer<W: Write> {
    out: W,
}

impl<W: Write> PlainRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn format_card(card: &PostCard) -> String {
    let media = match card.media_kind {
        MediaKind::Image => "image",
        MediaKind::VideoEmbed => "embed",
    };
    format!(
        "{:<15} {:<5} {}  likes={} comments={}  [{}] {}",
        card.time_label,
        media,
        card.caption_preview,
        card.likes_label,
        card.comments_label,
        card.source_label,
        card.permalink.as_deref().unwrap_or(&card.media_url),
    )
}

impl<W: Write> FeedRenderer for PlainRenderer<W> {
    fn render(&mut self, cards: Vec<PostCard>) {
        for card in &cards {
            if let Err(e) = writeln!(self.out, "{}", format_card(card)) {
                tracing::warn!(error = %e, "Failed to write post line");
                return;
            }
        }
    }
}
