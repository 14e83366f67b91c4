//! News provider clients for the VTV aggregator
//!
//! This crate provides:
//! - NewsAPI: `everything` search (primary provider)
//! - GNews: `search` endpoint (secondary provider)
//! - ArticleFetcher: ordered fallback over the providers, ending in sample data
//! - Query normalization/relaxation and a keyword filter over results

pub mod error;
pub mod fetcher;
pub mod filter;
pub mod gnews;
pub mod mock;
pub mod newsapi;
pub mod provider;
pub mod query;
pub mod types;

pub use error::NewsError;
pub use fetcher::{ArticleFetcher, ArticleOrigin, FetchOutcome, FetcherConfig, ProviderFailure};
pub use filter::filter_articles;
pub use gnews::GNewsClient;
pub use mock::sample_articles;
pub use newsapi::NewsApiClient;
pub use provider::{NewsProvider, REQUEST_TIMEOUT};
pub use query::{QueryNormalizer, ANCHOR_TERM};
