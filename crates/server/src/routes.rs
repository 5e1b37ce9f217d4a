pub mod authors;
pub mod books;
pub mod logs;
pub mod publishers;

use axum::{
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::{IntoParams, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::{openapi::ApiDoc, state::AppState};

/// Query string shared by the paged listings.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct ListParams {
    /// `name_desc` / `title_desc` sorts descending; anything else ascending
    pub sort_by: Option<String>,
    /// Case-insensitive substring filter
    pub search_string: Option<String>,
    /// 1-based page of five rows
    pub page_index: Option<u64>,
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health, the bookkeeping API and the API docs.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/api/publishers", get(publishers::list).post(publishers::create))
        .route("/api/publishers/:id", get(publishers::get).delete(publishers::delete))
        .route("/api/publishers/:id/books-with-authors", get(publishers::books_with_authors))
        .route("/api/books", get(books::list).post(books::create))
        .route("/api/books/:id", get(books::get).put(books::update).delete(books::delete))
        .route("/api/authors", get(authors::list).post(authors::create))
        .route("/api/authors/:id", get(authors::get).delete(authors::delete))
        .route("/api/authors/:id/books", get(authors::books))
        .route("/api/logs/get-all-logs-from-db", get(logs::get_all_from_db));

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request with method and path
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status code and latency
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
