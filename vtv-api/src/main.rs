//! VTV News API Server
//!
//! HTTP API server that aggregates Vietnam news from NewsAPI and GNews.

mod config;
mod error;
mod routes;

use axum::{
    http::{header, Method},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vtv_news::{ArticleFetcher, FetcherConfig};
use vtv_services::{
    ArticleEnricher, EnricherConfig, LibreTranslateClient, NewsService, NewsServiceConfig,
    PassthroughTranslator, Translator, VietnamTime,
};

use crate::config::AppConfig;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub news_service: Arc<NewsService>,
}

/// Build the router with CORS for the frontend
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .nest("/api", routes::api_routes())
        .merge(routes::health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env.local file
    if let Err(e) = dotenvy::from_filename(".env.local") {
        // Not an error if the file doesn't exist
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env.local: {}", e);
        }
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,vtv_api=debug")),
        )
        .init();

    info!("Starting VTV News API");

    let config = AppConfig::from_env()?;

    if config.newsapi_key.is_none() && config.gnews_api_key.is_none() {
        info!("No NEWSAPI_KEY or GNEWS_API_KEY set - only sample articles will be served");
    }

    let fetcher = ArticleFetcher::from_credentials(
        config.newsapi_key.clone(),
        config.gnews_api_key.clone(),
        FetcherConfig {
            mock_fallback: config.mock_fallback,
        },
    );

    let translator: Arc<dyn Translator> = match &config.translate_api_url {
        Some(url) => {
            info!("Translating into '{}' via {}", config.translate_target, url);
            Arc::new(LibreTranslateClient::new(
                url.clone(),
                config.translate_api_key.clone(),
                config.translate_target.clone(),
            ))
        }
        None => {
            info!("TRANSLATE_API_URL not set - articles are shown untranslated");
            Arc::new(PassthroughTranslator)
        }
    };

    let enricher = ArticleEnricher::new(translator, Arc::new(VietnamTime), EnricherConfig::default());
    let news_service = NewsService::new(fetcher, enricher, NewsServiceConfig::default());

    let state = AppState {
        news_service: Arc::new(news_service),
    };

    let app = build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
