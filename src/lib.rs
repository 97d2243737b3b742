//! socialfeed — a social post feed that always has something to show.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌────────────────┐ load()  ┌──────────────────────┐ fetch_posts() ┌─────────────────┐
//! │ FeedController │ ──────► │ FallbackOrchestrator │ ────────────► │ SourceClient[i] │
//! │   (feed.rs)    │         │  (orchestrator.rs)   │   in order    │   (source/)     │
//! └────────────────┘         └──────────────────────┘               └─────────────────┘
//!         │ PostCard                   │ RawPost
//!         ▼                            ▼
//!   ┌─────────────┐            ┌──────────────┐  uses  ┌────────────┐
//!   │ FeedRenderer│ ◄── view ──│ normalize.rs │ ─────► │ timefmt.rs │
//!   └─────────────┘            └──────────────┘        └────────────┘
//! ```
//!
//! * **`source/`** — the [`SourceClient`](source::SourceClient) trait and
//!   the three strategies: free scrape, paid API, static fallback.
//! * **`orchestrator`** — tries strategies in order; never fails.
//! * **`normalize`** — maps each source's JSON shape to [`CanonicalPost`].
//! * **`timefmt`** — relative-time labels.
//! * **`view`** / **`feed`** — renderer boundary: view model plus controller.
//! * **`config`** — environment configuration.

pub mod config;
pub mod error;
pub mod feed;
pub mod locale;
pub mod normalize;
pub mod orchestrator;
pub mod post;
pub mod source;
pub mod timefmt;
pub mod view;

#[cfg(test)]
mod test_utils;

pub use config::FeedConfig;
pub use error::{Result, SourceError};
pub use feed::{FeedController, FeedRenderer};
pub use locale::Locale;
pub use orchestrator::FallbackOrchestrator;
pub use post::{CanonicalPost, MediaKind, MediaRef, SourceKind};
pub use view::PostCard;
