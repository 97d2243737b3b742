//! Ordered source fallback.
//!
//! Strategies are tried one at a time, in order, each fully awaited before
//! the next starts.  The first non-empty result wins and is normalized.
//! Failures, empty results, timeouts, and cancellation all just move on to
//! the next strategy.  If the list is exhausted, the embedded static dataset
//! is used, so [`FallbackOrchestrator::load_posts`] cannot fail.

use std::collections::HashSet;
use std::future::Future;
use std::time::Duration;

use chrono::Utc;

use crate::config::FeedConfig;
use crate::error::{Result, SourceError};
use crate::locale::Locale;
use crate::normalize::Normalizer;
use crate::post::{CanonicalPost, SourceKind};
use crate::source::{
    FreeScrapeClient, PaidApiClient, RawPost, SourceClient, StaticFallbackClient,
};

pub const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct FallbackOrchestrator {
    strategies: Vec<Box<dyn SourceClient>>,
    attempt_timeout: Duration,
    locale: Locale,
}

impl FallbackOrchestrator {
    pub fn new(strategies: Vec<Box<dyn SourceClient>>) -> Self {
        Self {
            strategies,
            attempt_timeout: DEFAULT_ATTEMPT_TIMEOUT,
            locale: Locale::default(),
        }
    }

    /// The production chain: free scrape, then paid API, then static data.
    pub fn standard(config: &FeedConfig, client: reqwest::Client) -> Self {
        let strategies: Vec<Box<dyn SourceClient>> = vec![
            Box::new(FreeScrapeClient::new(
                client.clone(),
                &config.relay_url,
                &config.profile_url,
            )),
            Box::new(PaidApiClient::new(
                client,
                &config.api_url,
                &config.api_host,
                config.api_key.clone(),
            )),
            Box::new(StaticFallbackClient::new()),
        ];

        Self::new(strategies)
            .with_attempt_timeout(config.attempt_timeout)
            .with_locale(config.locale)
    }

    pub fn with_attempt_timeout(mut self, timeout: Duration) -> Self {
        self.attempt_timeout = timeout;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn strategy_kinds(&self) -> Vec<SourceKind> {
        self.strategies.iter().map(|s| s.kind()).collect()
    }

    /// Load and normalize the profile's posts.  Never empty.
    pub async fn load_posts(&self, handle: &str) -> Vec<CanonicalPost> {
        self.load_posts_until(handle, std::future::pending::<()>())
            .await
    }

    /// Like [`load_posts`](Self::load_posts), but stops trying network
    /// strategies once `cancel` resolves and serves the static dataset.
    pub async fn load_posts_until<C>(&self, handle: &str, cancel: C) -> Vec<CanonicalPost>
    where
        C: Future<Output = ()>,
    {
        tokio::pin!(cancel);
        let mut cancelled = false;

        for strategy in &self.strategies {
            if cancelled {
                break;
            }

            let attempt = tokio::select! {
                res = self.attempt(strategy.as_ref(), handle) => res,
                _ = &mut cancel => {
                    cancelled = true;
                    Err(SourceError::unavailable("load cancelled"))
                }
            };

            match attempt {
                Ok(raw) => {
                    tracing::info!(
                        source = strategy.name(),
                        handle,
                        count = raw.len(),
                        "Loaded posts"
                    );
                    return self.normalize_all(&raw, strategy.kind());
                }
                Err(e) => {
                    tracing::warn!(
                        source = strategy.name(),
                        handle,
                        error = %e,
                        "Source failed, falling back"
                    );
                }
            }
        }

        tracing::warn!(handle, cancelled, "All sources exhausted, serving embedded posts");
        self.normalize_all(&StaticFallbackClient::posts(), SourceKind::StaticFallback)
    }

    /// One bounded attempt; an empty list counts as a failure.
    async fn attempt(&self, strategy: &dyn SourceClient, handle: &str) -> Result<Vec<RawPost>> {
        tracing::debug!(source = strategy.name(), handle, "Trying source");

        let raw = tokio::time::timeout(self.attempt_timeout, strategy.fetch_posts(handle))
            .await
            .map_err(|_| {
                SourceError::unavailable(format!(
                    "no answer within {}ms",
                    self.attempt_timeout.as_millis()
                ))
            })??;

        if raw.is_empty() {
            return Err(SourceError::unavailable("source returned no posts"));
        }
        Ok(raw)
    }

    /// Normalize in order, keeping the first post for each id.
    fn normalize_all(&self, raw: &[RawPost], kind: SourceKind) -> Vec<CanonicalPost> {
        let normalizer = Normalizer::new(self.locale, Utc::now());
        let mut seen = HashSet::new();

        raw.iter()
            .enumerate()
            .map(|(i, post)| normalizer.normalize(post, kind, i))
            .filter(|post| {
                let fresh = seen.insert(post.id.clone());
                if !fresh {
                    tracing::debug!(id = %post.id, source = %kind, "Dropping duplicate post");
                }
                fresh
            })
            .collect()
    }
}
