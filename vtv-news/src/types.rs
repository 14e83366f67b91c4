//! API-specific types for NewsAPI and GNews
//!
//! Every field is optional: records are mapped best-effort and the ones
//! missing a title or URL are dropped during conversion.

use serde::Deserialize;

use vtv_core::{Article, ArticleSource};

// ============================================================================
// NewsAPI Types
// ============================================================================

/// NewsAPI `/v2/everything` response
#[derive(Debug, Deserialize)]
pub struct NewsApiResponse {
    /// "ok" or "error"
    pub status: Option<String>,
    /// Number of matches on the provider side
    #[serde(rename = "totalResults")]
    pub total_results: Option<u64>,
    /// Articles on this page
    #[serde(default)]
    pub articles: Option<Vec<NewsApiArticle>>,
}

/// A single NewsAPI article
#[derive(Debug, Deserialize)]
pub struct NewsApiArticle {
    pub source: Option<NewsApiSource>,
    pub author: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "urlToImage")]
    pub url_to_image: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
    pub content: Option<String>,
}

/// Source block of a NewsAPI article
#[derive(Debug, Deserialize)]
pub struct NewsApiSource {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl NewsApiArticle {
    /// Convert into the canonical article, `None` when title or URL is unusable
    pub fn into_article(self) -> Option<Article> {
        let title = non_blank(self.title)?;
        let url = non_blank(self.url)?;

        let source = self.source.map(|s| ArticleSource {
            id: s.id,
            name: s.name,
        });

        Some(Article {
            source: source.unwrap_or_default(),
            author: self.author,
            description: self.description,
            content: self.content,
            image_url: self.url_to_image,
            published_at: self.published_at.unwrap_or_default(),
            ..Article::new(title, url)
        })
    }
}

// ============================================================================
// GNews Types
// ============================================================================

/// GNews `/api/v4/search` response
#[derive(Debug, Deserialize)]
pub struct GNewsResponse {
    /// Number of matches on the provider side
    #[serde(rename = "totalArticles", default)]
    pub total_articles: u64,
    /// Articles on this page
    #[serde(default)]
    pub articles: Vec<GNewsArticle>,
}

/// A single GNews article
#[derive(Debug, Deserialize)]
pub struct GNewsArticle {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
    pub source: Option<GNewsSource>,
}

/// Source block of a GNews article
#[derive(Debug, Deserialize)]
pub struct GNewsSource {
    pub name: Option<String>,
    pub url: Option<String>,
    pub id: Option<String>,
}

impl GNewsArticle {
    /// Convert into the canonical article, `None` when title or URL is unusable
    ///
    /// GNews has no author field, so the source name stands in for it.
    pub fn into_article(self) -> Option<Article> {
        let title = non_blank(self.title)?;
        let url = non_blank(self.url)?;

        let (source_id, source_name) = match self.source {
            Some(s) => (s.id, s.name),
            None => (None, None),
        };

        Some(Article {
            source: ArticleSource {
                id: source_id,
                name: source_name.clone(),
            },
            author: source_name,
            description: self.description,
            content: self.content,
            image_url: self.image,
            published_at: self.published_at.unwrap_or_default(),
            ..Article::new(title, url)
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
