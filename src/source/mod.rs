//! Source strategy abstraction layer.
//!
//! This module defines the [`SourceClient`] trait and the [`RawPost`]
//! payload type.  Concrete strategies live in sub-modules, one per file:
//!
//! * [`free_scrape`] — unauthenticated profile scrape through a CORS relay.
//! * [`paid_api`] — keyed commercial scraping API.
//! * [`static_fallback`] — embedded dataset, infallible.
//!
//! ## For contributors — adding a new source
//!
//! 1. Create a new file in this directory (e.g. `graph_api.rs`).
//! 2. Define a struct holding its configuration and implement
//!    [`SourceClient`] for it.
//! 3. Add a [`SourceKind`] variant and teach the normalizer that shape's
//!    key names.
//! 4. Insert it at the right position in
//!    [`FallbackOrchestrator::standard`](crate::orchestrator::FallbackOrchestrator::standard).

mod free_scrape;
mod paid_api;
mod static_fallback;

pub use free_scrape::{FreeScrapeClient, DEFAULT_PROFILE_URL, DEFAULT_RELAY_URL};
pub use paid_api::{PaidApiClient, DEFAULT_API_HOST, DEFAULT_API_URL};
pub use static_fallback::StaticFallbackClient;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::post::SourceKind;

/// One upstream post element, still in its source's native JSON shape.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPost(pub Value);

impl RawPost {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// Trait that every source strategy implements.
///
/// The orchestrator awaits [`fetch_posts`](SourceClient::fetch_posts) on one
/// strategy at a time, so implementations never see concurrent calls from
/// the same load and must not rely on shared mutable state.
///
/// ## Implementing a new source
///
/// ```ignore
/// pub struct MySource { client: reqwest::Client }
///
/// #[async_trait]
/// impl SourceClient for MySource {
///     fn kind(&self) -> SourceKind { SourceKind::PaidApi }
///
///     async fn fetch_posts(&self, handle: &str) -> Result<Vec<RawPost>> {
///         // One request, then parse into RawPost values.
///         todo!()
///     }
/// }
/// ```
#[async_trait]
pub trait SourceClient: Send + Sync {
    /// Tag stamped onto every post this strategy produces.
    fn kind(&self) -> SourceKind;

    /// Label used in logs.
    fn name(&self) -> &str {
        self.kind().as_str()
    }

    /// Fetch the profile's latest posts.
    ///
    /// Returns a non-empty list or an error.  An empty `Ok` is legal but the
    /// orchestrator treats it exactly like a failure.
    async fn fetch_posts(&self, handle: &str) -> Result<Vec<RawPost>>;
}
