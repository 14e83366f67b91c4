//! News service
//!
//! Builds the page model for a category tab or a search: fetch through the
//! provider chain, relax the query once if nothing came back, then enrich.

use chrono::{DateTime, NaiveDate};
use thiserror::Error;
use tracing::{info, instrument, warn};

use vtv_core::{Article, Category, NewsPage, NewsQuery, SearchRequest};
use vtv_news::{ArticleFetcher, ArticleOrigin};

use crate::enricher::ArticleEnricher;

/// Shown when a category tab has no articles
pub const CATEGORY_EMPTY_MESSAGE: &str = "Không tìm thấy bài viết phù hợp. Vui lòng thử lại sau.";

/// Shown when a search has no results
pub const SEARCH_EMPTY_MESSAGE: &str = "Không tìm thấy kết quả phù hợp với từ khóa tìm kiếm.";

/// Errors from the news service
#[derive(Debug, Error)]
pub enum NewsServiceError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// News service configuration
#[derive(Debug, Clone)]
pub struct NewsServiceConfig {
    /// Articles requested per page
    pub page_size: u32,
    /// Sort field used when the caller gives none
    pub default_sort: String,
}

impl Default for NewsServiceConfig {
    fn default() -> Self {
        Self {
            page_size: 50,
            default_sort: "relevancy".to_string(),
        }
    }
}

/// News service: fetch, retry and enrich
pub struct NewsService {
    fetcher: ArticleFetcher,
    enricher: ArticleEnricher,
    config: NewsServiceConfig,
}

impl NewsService {
    pub fn new(fetcher: ArticleFetcher, enricher: ArticleEnricher, config: NewsServiceConfig) -> Self {
        info!(
            "Initializing NewsService (providers: {:?}, translator: {})",
            fetcher.provider_names(),
            enricher.translator_name()
        );
        Self {
            fetcher,
            enricher,
            config,
        }
    }

    pub fn fetcher(&self) -> &ArticleFetcher {
        &self.fetcher
    }

    pub fn enricher(&self) -> &ArticleEnricher {
        &self.enricher
    }

    /// Page for a category tab, using the tab's default query
    #[instrument(skip(self), fields(tab = category.slug()))]
    pub async fn category_page(&self, category: Category) -> NewsPage {
        let query = NewsQuery::new(category.default_query())
            .with_sort_by(Some(self.config.default_sort.clone()))
            .with_page_size(self.config.page_size);

        let mut page = NewsPage {
            active_tab: category.slug().to_string(),
            category_name: category.display_name().to_string(),
            query: category.default_query().to_string(),
            sort_by: query.sort_by.clone(),
            ..NewsPage::default()
        };

        self.fill_page(&mut page, query, CATEGORY_EMPTY_MESSAGE).await;
        page
    }

    /// Page for a free-text search
    ///
    /// A blank query searches for the anchor term alone. `from_date` accepts
    /// `YYYY-MM-DD` or an RFC 3339 timestamp.
    #[instrument(skip(self, request), fields(query = ?request.query))]
    pub async fn search(&self, request: &SearchRequest) -> Result<NewsPage, NewsServiceError> {
        let from_date = parse_from_date(request.from_date.as_deref())?;

        let typed = non_blank(request.query.as_deref());
        let sort_by = non_blank(request.sort_by.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| self.config.default_sort.clone());

        let query = NewsQuery::new(typed.unwrap_or(self.fetcher.normalizer().anchor()))
            .with_from_date(from_date)
            .with_sort_by(Some(sort_by))
            .with_page_size(self.config.page_size);

        let active_tab = non_blank(request.active_tab.as_deref())
            .unwrap_or(Category::Home.slug())
            .to_string();
        let category_name = non_blank(request.category_name.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| {
                active_tab
                    .parse::<Category>()
                    .unwrap_or(Category::Home)
                    .display_name()
                    .to_string()
            });

        let mut page = NewsPage {
            active_tab,
            category_name,
            query: typed.unwrap_or_default().to_string(),
            from_date: query.from_date_param(),
            sort_by: query.sort_by.clone(),
            ..NewsPage::default()
        };

        self.fill_page(&mut page, query, SEARCH_EMPTY_MESSAGE).await;
        Ok(page)
    }

    async fn fill_page(&self, page: &mut NewsPage, query: NewsQuery, empty_message: &str) {
        let articles = self.load_articles(query).await;
        if articles.is_empty() {
            page.error_message = Some(empty_message.to_string());
            return;
        }
        page.articles = self.enricher.enrich(articles).await;
    }

    /// Fetch, retrying once with the simplified query when nothing came back
    async fn load_articles(&self, query: NewsQuery) -> Vec<Article> {
        let outcome = self.fetcher.fetch(&query).await;
        if !outcome.is_empty() {
            if outcome.origin == ArticleOrigin::Mock {
                warn!("Serving sample articles for '{}'", outcome.normalized_query);
            }
            return outcome.articles;
        }

        let simplified = self.fetcher.normalizer().simplify(&query.query);
        if simplified == query.query {
            warn!("No articles for '{}'", query.query);
            return Vec::new();
        }

        info!("No articles for '{}', retrying with '{}'", query.query, simplified);
        self.fetcher.fetch(&query.with_query(simplified)).await.articles
    }
}

/// Parse a from-date as `YYYY-MM-DD` or RFC 3339; blank means no filter
pub fn parse_from_date(raw: Option<&str>) -> Result<Option<NaiveDate>, NewsServiceError> {
    let Some(raw) = non_blank(raw) else {
        return Ok(None);
    };

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(Some(date));
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| Some(dt.date_naive()))
        .map_err(|_| NewsServiceError::InvalidDate(raw.to_string()))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
