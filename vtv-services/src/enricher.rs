//! Article enrichment
//!
//! Adds a translated title/description and a local publication time to each
//! article. A translation failure only affects the article it happened on.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::{debug, instrument, warn};

use vtv_core::Article;

use crate::timezone::TimeLocalizer;
use crate::translation::{TranslationError, Translator};

/// Outcome of enriching a single article
#[derive(Debug)]
pub enum Enriched {
    /// Translation succeeded
    Translated(Article),
    /// Translation failed; the original text was copied into the translated fields
    Untranslated {
        article: Article,
        error: TranslationError,
    },
}

impl Enriched {
    pub fn article(&self) -> &Article {
        match self {
            Enriched::Translated(article) => article,
            Enriched::Untranslated { article, .. } => article,
        }
    }

    pub fn into_article(self) -> Article {
        match self {
            Enriched::Translated(article) => article,
            Enriched::Untranslated { article, .. } => article,
        }
    }

    pub fn is_translated(&self) -> bool {
        matches!(self, Enriched::Translated(_))
    }
}

/// Enricher configuration
#[derive(Debug, Clone)]
pub struct EnricherConfig {
    /// Maximum number of articles translated at the same time
    pub max_concurrency: usize,
}

impl Default for EnricherConfig {
    fn default() -> Self {
        Self { max_concurrency: 8 }
    }
}

/// Translates and localizes batches of articles
pub struct ArticleEnricher {
    translator: Arc<dyn Translator>,
    localizer: Arc<dyn TimeLocalizer>,
    config: EnricherConfig,
}

impl ArticleEnricher {
    pub fn new(
        translator: Arc<dyn Translator>,
        localizer: Arc<dyn TimeLocalizer>,
        config: EnricherConfig,
    ) -> Self {
        Self {
            translator,
            localizer,
            config,
        }
    }

    /// Name of the configured translation backend
    pub fn translator_name(&self) -> &'static str {
        self.translator.name()
    }

    /// Enrich every article, keeping input order
    pub async fn enrich(&self, articles: Vec<Article>) -> Vec<Article> {
        self.enrich_detailed(articles)
            .await
            .into_iter()
            .map(Enriched::into_article)
            .collect()
    }

    /// Enrich every article and report per-article translation outcome
    #[instrument(skip_all, fields(count = articles.len(), translator = self.translator.name()))]
    pub async fn enrich_detailed(&self, articles: Vec<Article>) -> Vec<Enriched> {
        let results: Vec<Enriched> = stream::iter(articles)
            .map(|article| self.enrich_one(article))
            .buffered(self.config.max_concurrency.max(1))
            .collect()
            .await;

        let failed = results.iter().filter(|r| !r.is_translated()).count();
        if failed > 0 {
            warn!("{} of {} articles left untranslated", failed, results.len());
        } else {
            debug!("Enriched {} articles", results.len());
        }

        results
    }

    async fn enrich_one(&self, mut article: Article) -> Enriched {
        let translation = self
            .translator
            .translate_article(&article.title, article.description.as_deref())
            .await;

        article.local_published_at = Some(self.localizer.to_local_time(&article.published_at));

        match translation {
            Ok((title, description)) => {
                article.translated_title = Some(title);
                article.translated_description = description;
                Enriched::Translated(article)
            }
            Err(error) => {
                warn!("Translation failed for '{}': {}", article.title, error);
                article.translated_title = Some(article.title.clone());
                article.translated_description = article.description.clone();
                Enriched::Untranslated { article, error }
            }
        }
    }
}
