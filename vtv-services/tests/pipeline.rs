//! End-to-end flow from an empty search to an enriched page

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use vtv_core::{Article, ArticleSource, NewsQuery, SearchRequest};
use vtv_news::{ArticleFetcher, FetcherConfig, NewsError, NewsProvider};
use vtv_services::{
    ArticleEnricher, EnricherConfig, NewsService, NewsServiceConfig, TranslationError, Translator,
    VietnamTime,
};

struct OneArticleProvider {
    queries: Mutex<Vec<String>>,
}

#[async_trait]
impl NewsProvider for OneArticleProvider {
    fn name(&self) -> &'static str {
        "one-article"
    }

    async fn fetch(&self, query: &NewsQuery) -> Result<Vec<Article>, NewsError> {
        self.queries.lock().unwrap().push(query.query.clone());

        let mut article = Article::new(
            "Vietnam's Economy Shows Strong Growth in Q1 2024",
            "https://example.com/economy",
        );
        article.source = ArticleSource {
            id: None,
            name: Some("VnExpress International".to_string()),
        };
        article.description = Some("GDP grew 5.66% year on year.".to_string());
        article.published_at = "2024-04-01T03:15:00Z".to_string();
        Ok(vec![article])
    }
}

struct DownProvider;

#[async_trait]
impl NewsProvider for DownProvider {
    fn name(&self) -> &'static str {
        "down"
    }

    async fn fetch(&self, _query: &NewsQuery) -> Result<Vec<Article>, NewsError> {
        Err(NewsError::ApiError {
            status: 500,
            message: "internal error".to_string(),
        })
    }
}

struct DictionaryTranslator;

#[async_trait]
impl Translator for DictionaryTranslator {
    fn name(&self) -> &'static str {
        "dictionary"
    }

    async fn translate_article(
        &self,
        title: &str,
        description: Option<&str>,
    ) -> Result<(String, Option<String>), TranslationError> {
        let title = title.replace("Vietnam's Economy Shows Strong Growth", "Kinh tế Việt Nam tăng trưởng mạnh");
        Ok((title, description.map(|_| "GDP tăng 5,66% so với cùng kỳ.".to_string())))
    }
}

#[tokio::test]
async fn test_blank_search_through_fallback_to_enriched_page() {
    let primary = Arc::new(DownProvider);
    let secondary = Arc::new(OneArticleProvider {
        queries: Mutex::new(Vec::new()),
    });

    let fetcher = ArticleFetcher::new(
        vec![
            primary as Arc<dyn NewsProvider>,
            secondary.clone() as Arc<dyn NewsProvider>,
        ],
        FetcherConfig { mock_fallback: false },
    );
    let enricher = ArticleEnricher::new(
        Arc::new(DictionaryTranslator),
        Arc::new(VietnamTime),
        EnricherConfig::default(),
    );
    let service = NewsService::new(fetcher, enricher, NewsServiceConfig::default());

    let page = service
        .search(&SearchRequest {
            query: Some(String::new()),
            ..SearchRequest::default()
        })
        .await
        .unwrap();

    assert_eq!(*secondary.queries.lock().unwrap(), vec!["vietnam".to_string()]);
    assert_eq!(page.articles.len(), 1);
    assert!(page.error_message.is_none());

    let article = &page.articles[0];
    assert_eq!(article.title, "Vietnam's Economy Shows Strong Growth in Q1 2024");
    assert_eq!(
        article.translated_title.as_deref(),
        Some("Kinh tế Việt Nam tăng trưởng mạnh in Q1 2024")
    );
    assert_eq!(
        article.translated_description.as_deref(),
        Some("GDP tăng 5,66% so với cùng kỳ.")
    );
    assert_eq!(article.local_published_at.as_deref(), Some("01/04/2024 10:15"));
    assert_eq!(article.source.name.as_deref(), Some("VnExpress International"));
}

#[tokio::test]
async fn test_no_providers_serves_sample_articles() {
    let fetcher = ArticleFetcher::from_credentials(None, None, FetcherConfig::default());
    let enricher = ArticleEnricher::new(
        Arc::new(DictionaryTranslator),
        Arc::new(VietnamTime),
        EnricherConfig::default(),
    );
    let service = NewsService::new(fetcher, enricher, NewsServiceConfig::default());

    let page = service.category_page(vtv_core::Category::Home).await;

    assert_eq!(page.articles.len(), 5);
    assert!(page.error_message.is_none());
    assert!(page
        .articles
        .iter()
        .all(|a| a.translated_title.is_some() && a.local_published_at.is_some()));
}
