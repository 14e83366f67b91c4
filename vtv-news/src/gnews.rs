//! GNews.io client (secondary provider)

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, instrument};
use url::Url;

use vtv_core::{Article, NewsQuery};

use crate::error::NewsError;
use crate::provider::{build_http_client, redact_param, send_and_read, NewsProvider};
use crate::types::GNewsResponse;

const PROVIDER_NAME: &str = "GNews";

/// GNews search client
pub struct GNewsClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GNewsClient {
    /// Create a new GNews client
    pub fn new(api_key: String) -> Self {
        Self {
            client: build_http_client(),
            api_key,
            base_url: "https://gnews.io".to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Build the request URL (no `lang` filter, GNews has no sort override here)
    pub fn request_url(&self, query: &NewsQuery) -> Result<Url, NewsError> {
        let mut params: Vec<(&str, String)> = vec![
            ("q", query.query.clone()),
            ("token", self.api_key.clone()),
            ("max", query.page_size.to_string()),
        ];

        if let Some(from) = query.from_date_param() {
            params.push(("from", from));
        }

        Url::parse_with_params(&format!("{}/api/v4/search", self.base_url), &params)
            .map_err(|e| NewsError::InvalidConfig(format!("Bad GNews URL: {}", e)))
    }

    /// Parse a GNews response body into canonical articles
    pub fn parse_response(body: &str) -> Result<Vec<Article>, NewsError> {
        let response: GNewsResponse =
            serde_json::from_str(body).map_err(|e| NewsError::ParseError(e.to_string()))?;

        debug!(
            "GNews reports {} total articles, {} on this page",
            response.total_articles,
            response.articles.len()
        );

        let articles: Vec<Article> = response
            .articles
            .into_iter()
            .filter_map(|a| a.into_article())
            .collect();

        if articles.is_empty() {
            return Err(NewsError::EmptyResult {
                provider: PROVIDER_NAME,
            });
        }

        Ok(articles)
    }
}

#[async_trait]
impl NewsProvider for GNewsClient {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    #[instrument(skip(self, query), fields(provider = PROVIDER_NAME, query = %query.query))]
    async fn fetch(&self, query: &NewsQuery) -> Result<Vec<Article>, NewsError> {
        let url = self.request_url(query)?;
        info!("Calling GNews: {}", redact_param(&url, "token"));

        let body = send_and_read(self.client.get(url)).await?;
        debug!("GNews response: {} bytes", body.len());

        let articles = Self::parse_response(&body)?;
        info!("Received {} articles from GNews", articles.len());
        Ok(articles)
    }
}
