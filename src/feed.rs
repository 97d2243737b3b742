//! The boundary between the pipeline and whatever draws it.
//!
//! A [`FeedController`] owns one orchestrator and one profile handle.  Each
//! call to [`load`](FeedController::load) is a fresh "page load": one pass
//! down the fallback chain, converted to [`PostCard`]s and handed over.
//! Nothing is cached between loads.

use crate::orchestrator::FallbackOrchestrator;
use crate::view::{cards, PostCard};

/// Anything that can display a finished list of cards.
///
/// Renderers never see errors: by the time `render` is called the list is
/// complete and non-empty.
pub trait FeedRenderer {
    fn render(&mut self, cards: Vec<PostCard>);
}

pub struct FeedController {
    orchestrator: FallbackOrchestrator,
    handle: String,
}

impl FeedController {
    pub fn new(orchestrator: FallbackOrchestrator, handle: impl Into<String>) -> Self {
        Self {
            orchestrator,
            handle: handle.into(),
        }
    }

    pub fn handle(&self) -> &str {
        &self.handle
    }

    pub async fn load(&self) -> Vec<PostCard> {
        let posts = self.orchestrator.load_posts(&self.handle).await;
        cards(&posts)
    }

    /// Load once and hand the result to `renderer`.
    pub async fn load_into<R>(&self, renderer: &mut R)
    where
        R: FeedRenderer + ?Sized,
    {
        let cards = self.load().await;
        tracing::debug!(handle = %self.handle, count = cards.len(), "Rendering feed");
        renderer.render(cards);
    }
}
