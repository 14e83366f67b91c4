//! Core types for the VTV news aggregator
//!
//! This crate defines the shared data structures used across the workspace:
//! the canonical article model, query descriptors, front-page categories
//! and the page view model returned to clients.

pub mod category;
pub mod error;
pub mod news;

pub use category::Category;
pub use error::{VtvError, VtvResult};
pub use news::{Article, ArticleSource, NewsPage, NewsQuery, SearchRequest, MAX_PAGE_SIZE};
