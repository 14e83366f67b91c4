//! Business logic services for the VTV news aggregator
//!
//! This crate provides:
//! - Translation of article text (LibreTranslate or passthrough)
//! - Conversion of publication times to Vietnam local time
//! - ArticleEnricher: concurrent per-article enrichment
//! - NewsService: category and search pages with a single relaxed retry

pub mod enricher;
pub mod news_service;
pub mod timezone;
pub mod translation;

pub use enricher::{ArticleEnricher, Enriched, EnricherConfig};
pub use news_service::{
    parse_from_date, NewsService, NewsServiceConfig, NewsServiceError, CATEGORY_EMPTY_MESSAGE,
    SEARCH_EMPTY_MESSAGE,
};
pub use timezone::{TimeLocalizer, VietnamTime};
pub use translation::{LibreTranslateClient, PassthroughTranslator, TranslationError, Translator};
