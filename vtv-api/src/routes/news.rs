//! News page endpoints

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use tracing::info;

use vtv_core::{Category, NewsPage, SearchRequest};

use crate::error::ApiError;
use crate::AppState;

/// Create news routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/news", get(get_home))
        .route("/news/search", get(search_get).post(search_post))
        .route("/news/{tab}", get(get_tab))
}

/// GET /api/news - Home tab
async fn get_home(State(state): State<AppState>) -> Json<NewsPage> {
    Json(state.news_service.category_page(Category::Home).await)
}

/// GET /api/news/{tab} - Category tab (thoisu, kinhte, thegioi, thethao, giaitri)
async fn get_tab(
    State(state): State<AppState>,
    Path(tab): Path<String>,
) -> Result<Json<NewsPage>, ApiError> {
    let category: Category = tab.parse()?;
    info!("Loading tab {}", category.slug());
    Ok(Json(state.news_service.category_page(category).await))
}

/// GET /api/news/search?query=&from_date=&sort_by=&active_tab=
async fn search_get(
    State(state): State<AppState>,
    Query(request): Query<SearchRequest>,
) -> Result<Json<NewsPage>, ApiError> {
    Ok(Json(state.news_service.search(&request).await?))
}

/// POST /api/news/search - same search with a JSON body
async fn search_post(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<NewsPage>, ApiError> {
    Ok(Json(state.news_service.search(&request).await?))
}
