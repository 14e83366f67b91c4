//! Ordered provider fallback
//!
//! Providers are tried one after the other; the first one that returns at
//! least one article wins. When all of them fail the fixed sample dataset is
//! returned, so callers always get something to show.

use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use vtv_core::{Article, NewsQuery};

use crate::error::NewsError;
use crate::gnews::GNewsClient;
use crate::mock::sample_articles;
use crate::newsapi::NewsApiClient;
use crate::provider::NewsProvider;
use crate::query::QueryNormalizer;

/// Configuration for ArticleFetcher
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Serve the sample dataset when every provider fails
    pub mock_fallback: bool,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            mock_fallback: true,
        }
    }
}

/// Where the articles of a fetch came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleOrigin {
    /// A provider answered with articles
    Provider(&'static str),
    /// Every provider failed, sample data was used
    Mock,
    /// Every provider failed and sample data is disabled
    Exhausted,
}

/// A provider attempt that did not produce articles
#[derive(Debug)]
pub struct ProviderFailure {
    pub provider: &'static str,
    pub error: NewsError,
}

/// Result of one pass over the provider chain
#[derive(Debug)]
pub struct FetchOutcome {
    pub articles: Vec<Article>,
    pub origin: ArticleOrigin,
    /// Query as it was sent to the providers
    pub normalized_query: String,
    pub failures: Vec<ProviderFailure>,
}

impl FetchOutcome {
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

/// Tries providers in priority order, falling back to sample data
pub struct ArticleFetcher {
    providers: Vec<Arc<dyn NewsProvider>>,
    normalizer: QueryNormalizer,
    config: FetcherConfig,
}

impl ArticleFetcher {
    /// Create a fetcher over an explicit provider chain (highest priority first)
    pub fn new(providers: Vec<Arc<dyn NewsProvider>>, config: FetcherConfig) -> Self {
        Self {
            providers,
            normalizer: QueryNormalizer::default(),
            config,
        }
    }

    /// Build the standard chain: NewsAPI first, then GNews
    ///
    /// Providers without a key are left out of the chain.
    pub fn from_credentials(
        newsapi_key: Option<String>,
        gnews_key: Option<String>,
        config: FetcherConfig,
    ) -> Self {
        let mut providers: Vec<Arc<dyn NewsProvider>> = Vec::new();
        if let Some(key) = newsapi_key {
            providers.push(Arc::new(NewsApiClient::new(key)));
        }
        if let Some(key) = gnews_key {
            providers.push(Arc::new(GNewsClient::new(key)));
        }

        info!(
            "Initializing ArticleFetcher (providers: {:?}, mock fallback: {})",
            providers.iter().map(|p| p.name()).collect::<Vec<_>>(),
            config.mock_fallback
        );

        Self::new(providers, config)
    }

    pub fn with_normalizer(mut self, normalizer: QueryNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn normalizer(&self) -> &QueryNormalizer {
        &self.normalizer
    }

    /// Names of the providers in the chain, in priority order
    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Fetch articles, walking the provider chain until one succeeds
    #[instrument(skip(self, query), fields(query = %query.query))]
    pub async fn fetch(&self, query: &NewsQuery) -> FetchOutcome {
        let normalized = query.with_query(self.normalizer.normalize(&query.query));
        let mut failures = Vec::new();

        for provider in &self.providers {
            let name = provider.name();
            let result = match provider.fetch(&normalized).await {
                Ok(articles) if articles.is_empty() => Err(NewsError::EmptyResult { provider: name }),
                other => other,
            };

            match result {
                Ok(articles) => {
                    info!(
                        "{} returned {} articles for '{}'",
                        name,
                        articles.len(),
                        normalized.query
                    );
                    return FetchOutcome {
                        articles,
                        origin: ArticleOrigin::Provider(name),
                        normalized_query: normalized.query,
                        failures,
                    };
                }
                Err(e) => {
                    error!("{} failed for '{}': {}", name, normalized.query, e);
                    failures.push(ProviderFailure {
                        provider: name,
                        error: e,
                    });
                }
            }
        }

        if self.config.mock_fallback {
            warn!(
                "All {} providers failed for '{}', returning sample data",
                self.providers.len(),
                normalized.query
            );
            FetchOutcome {
                articles: sample_articles(),
                origin: ArticleOrigin::Mock,
                normalized_query: normalized.query,
                failures,
            }
        } else {
            warn!(
                "All {} providers failed for '{}' and sample data is disabled",
                self.providers.len(),
                normalized.query
            );
            FetchOutcome {
                articles: Vec::new(),
                origin: ArticleOrigin::Exhausted,
                normalized_query: normalized.query,
                failures,
            }
        }
    }

    /// Fetch and return only the articles
    pub async fn fetch_articles(&self, query: &NewsQuery) -> Vec<Article> {
        self.fetch(query).await.articles
    }
}
