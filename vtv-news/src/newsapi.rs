//! NewsAPI.org client (primary provider)

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, instrument};
use url::Url;

use vtv_core::{Article, NewsQuery};

use crate::error::NewsError;
use crate::provider::{build_http_client, redact_param, send_and_read, NewsProvider};
use crate::types::NewsApiResponse;

const PROVIDER_NAME: &str = "NewsAPI";

/// Sort order used when the query does not ask for one
const DEFAULT_SORT: &str = "publishedAt";

/// NewsAPI `everything` search client
pub struct NewsApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NewsApiClient {
    /// Create a new NewsAPI client
    pub fn new(api_key: String) -> Self {
        Self {
            client: build_http_client(),
            api_key,
            base_url: "https://newsapi.org".to_string(),
        }
    }

    /// Point the client at another host (self-hosted proxy, staging)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Build the request URL
    ///
    /// No `language` parameter is sent: articles in every language are
    /// wanted and translated afterwards.
    pub fn request_url(&self, query: &NewsQuery) -> Result<Url, NewsError> {
        let mut params: Vec<(&str, String)> = vec![
            ("q", query.query.clone()),
            ("apiKey", self.api_key.clone()),
            ("pageSize", query.page_size.to_string()),
            (
                "sortBy",
                query
                    .sort_by
                    .clone()
                    .unwrap_or_else(|| DEFAULT_SORT.to_string()),
            ),
        ];

        if let Some(from) = query.from_date_param() {
            params.push(("from", from));
        }

        Url::parse_with_params(&format!("{}/v2/everything", self.base_url), &params)
            .map_err(|e| NewsError::InvalidConfig(format!("Bad NewsAPI URL: {}", e)))
    }

    /// Parse a NewsAPI response body into canonical articles
    pub fn parse_response(body: &str) -> Result<Vec<Article>, NewsError> {
        let response: NewsApiResponse =
            serde_json::from_str(body).map_err(|e| NewsError::ParseError(e.to_string()))?;

        let raw = response.articles.unwrap_or_default();
        let received = raw.len();
        let articles: Vec<Article> = raw
            .into_iter()
            .filter_map(|a| a.into_article())
            .collect();

        if articles.len() < received {
            debug!(
                "Skipped {} malformed NewsAPI records",
                received - articles.len()
            );
        }

        if articles.is_empty() {
            return Err(NewsError::EmptyResult {
                provider: PROVIDER_NAME,
            });
        }

        Ok(articles)
    }
}

#[async_trait]
impl NewsProvider for NewsApiClient {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    #[instrument(skip(self, query), fields(provider = PROVIDER_NAME, query = %query.query))]
    async fn fetch(&self, query: &NewsQuery) -> Result<Vec<Article>, NewsError> {
        let url = self.request_url(query)?;
        info!("Calling NewsAPI: {}", redact_param(&url, "apiKey"));

        let body = send_and_read(
            self.client
                .get(url)
                .header("X-Api-Key", &self.api_key),
        )
        .await?;
        debug!("NewsAPI response: {} bytes", body.len());

        let articles = Self::parse_response(&body)?;
        info!("Received {} articles from NewsAPI", articles.len());
        Ok(articles)
    }
}
