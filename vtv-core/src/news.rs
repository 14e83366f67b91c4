//! News data structures for the aggregator

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Largest page a single provider request may ask for
pub const MAX_PAGE_SIZE: u32 = 100;

/// Source of a news article
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSource {
    /// Provider-specific source identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Name of the news source (e.g., "Reuters", "VnExpress")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A news article in the canonical shape shared by every provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Source information
    #[serde(default)]
    pub source: ArticleSource,
    /// Article author (providers without authors use the source name)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Article title
    pub title: String,
    /// Brief summary/excerpt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Article body, usually truncated by the provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Article URL
    pub url: String,
    /// Article thumbnail/image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Publication timestamp as sent by the provider
    #[serde(default)]
    pub published_at: String,
    /// Translated title (set by enrichment)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translated_title: Option<String>,
    /// Translated description (set by enrichment)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translated_description: Option<String>,
    /// Publication time in the reader's timezone (set by enrichment)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_published_at: Option<String>,
}

impl Article {
    /// Create an article with the two mandatory fields
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            source: ArticleSource::default(),
            author: None,
            title: title.into(),
            description: None,
            content: None,
            url: url.into(),
            image_url: None,
            published_at: String::new(),
            translated_title: None,
            translated_description: None,
            local_published_at: None,
        }
    }

    /// Whether the enrichment pass has run on this article
    pub fn is_enriched(&self) -> bool {
        self.translated_title.is_some() && self.local_published_at.is_some()
    }
}

/// Parameters of a single fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsQuery {
    /// Free-text query
    pub query: String,
    /// Only return articles published on or after this day
    pub from_date: Option<NaiveDate>,
    /// Provider sort field (e.g., "relevancy", "publishedAt")
    pub sort_by: Option<String>,
    /// Maximum number of results, clamped to `1..=MAX_PAGE_SIZE`
    pub page_size: u32,
}

impl NewsQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            from_date: None,
            sort_by: None,
            page_size: default_page_size(),
        }
    }

    pub fn with_from_date(mut self, from_date: Option<NaiveDate>) -> Self {
        self.from_date = from_date;
        self
    }

    pub fn with_sort_by(mut self, sort_by: Option<String>) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    /// Same parameters with a different query text
    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..self.clone()
        }
    }

    /// `from_date` in the `YYYY-MM-DD` form every provider accepts
    pub fn from_date_param(&self) -> Option<String> {
        self.from_date.map(|d| d.format("%Y-%m-%d").to_string())
    }
}

fn default_page_size() -> u32 {
    50
}

/// Search submitted from the front page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Search query
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Start date (e.g., "2025-03-01")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_date: Option<String>,
    /// Provider sort field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    /// Tab the search was submitted from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_tab: Option<String>,
    /// Display name of that tab
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
}

/// Page model returned for a tab or a search
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsPage {
    /// Tab identifier
    pub active_tab: String,
    /// Tab display name
    pub category_name: String,
    /// Query shown in the search box
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    /// Enriched articles
    #[serde(default)]
    pub articles: Vec<Article>,
    /// Message shown instead of articles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_is_clamped() {
        assert_eq!(NewsQuery::new("x").with_page_size(0).page_size, 1);
        assert_eq!(NewsQuery::new("x").with_page_size(500).page_size, MAX_PAGE_SIZE);
        assert_eq!(NewsQuery::new("x").with_page_size(20).page_size, 20);
    }

    #[test]
    fn test_from_date_param() {
        let query = NewsQuery::new("vietnam")
            .with_from_date(NaiveDate::from_ymd_opt(2025, 3, 7));
        assert_eq!(query.from_date_param().as_deref(), Some("2025-03-07"));
        assert_eq!(NewsQuery::new("vietnam").from_date_param(), None);
    }

    #[test]
    fn test_with_query_keeps_other_params() {
        let query = NewsQuery::new("vietnam economy growth")
            .with_sort_by(Some("relevancy".to_string()))
            .with_page_size(10);
        let relaxed = query.with_query("vietnam economy");
        assert_eq!(relaxed.query, "vietnam economy");
        assert_eq!(relaxed.sort_by.as_deref(), Some("relevancy"));
        assert_eq!(relaxed.page_size, 10);
    }

    #[test]
    fn test_article_serializes_without_unset_fields() {
        let article = Article::new("Title", "https://example.com/a");
        let json = serde_json::to_value(&article).unwrap();
        assert_eq!(json["title"], "Title");
        assert!(json.get("translated_title").is_none());
        assert!(!article.is_enriched());
    }
}
