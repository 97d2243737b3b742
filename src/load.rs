//! Background feed loading.
//!
//! Runs one [`FeedController::load`] on the tokio runtime and sends the
//! result to the UI thread over an [`mpsc`] channel.  Exactly one message is
//! sent per spawn; the UI keeps drawing while it waits.

use std::sync::mpsc;

use tokio::runtime::Handle;

use socialfeed::{FeedController, PostCard};

/// Messages sent from the loader task to the UI thread.
pub enum LoadMsg {
    /// The fallback chain finished with these cards (never empty).
    Loaded(Vec<PostCard>),
}

/// Spawn one load on `runtime`.
///
/// Returns a receiver the main loop should drain on every tick.  If the
/// receiver is dropped before the load finishes the result is discarded.
pub fn spawn(runtime: &Handle, controller: FeedController) -> mpsc::Receiver<LoadMsg> {
    let (tx, rx) = mpsc::channel();

    runtime.spawn(async move {
        let cards = controller.load().await;
        let _ = tx.send(LoadMsg::Loaded(cards));
    });

    rx
}
