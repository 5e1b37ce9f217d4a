use axum::{extract::State, http::StatusCode, Json};
use models::publisher;
use service::domain::{PublisherInput, PublisherWithBooksAndAuthors};

use crate::{
    errors::ApiError,
    extract::{JsonBody, PathParam, QueryParams},
    routes::ListParams,
    state::AppState,
};

#[utoipa::path(
    get, path = "/api/publishers", tag = "publishers",
    params(ListParams),
    responses((status = 200, description = "One page of publishers", body = [crate::openapi::PublisherDoc]))
)]
pub async fn list(
    State(state): State<AppState>,
    QueryParams(q): QueryParams<ListParams>,
) -> Result<Json<Vec<publisher::Model>>, ApiError> {
    let rows = state
        .publishers
        .list(q.sort_by.as_deref(), q.search_string.as_deref(), q.page_index)
        .await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get, path = "/api/publishers/{id}", tag = "publishers",
    params(("id" = i32, Path, description = "Publisher ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::PublisherDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<AppState>, PathParam(id): PathParam<i32>) -> Result<Json<publisher::Model>, ApiError> {
    state.publishers.get_by_id(id).await?.map(Json).ok_or(ApiError::NotFound)
}

#[utoipa::path(
    get, path = "/api/publishers/{id}/books-with-authors", tag = "publishers",
    params(("id" = i32, Path, description = "Publisher ID")),
    responses(
        (status = 200, description = "Publisher with its books and their authors", body = crate::openapi::PublisherWithBooksAndAuthorsDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn books_with_authors(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<PublisherWithBooksAndAuthors>, ApiError> {
    state
        .publishers
        .get_with_books_and_authors(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

#[utoipa::path(
    post, path = "/api/publishers", tag = "publishers",
    request_body = crate::openapi::PublisherInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::PublisherDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::MessageDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<PublisherInput>,
) -> Result<(StatusCode, Json<publisher::Model>), ApiError> {
    let created = state.publishers.add(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    delete, path = "/api/publishers/{id}", tag = "publishers",
    params(("id" = i32, Path, description = "Publisher ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 400, description = "Publisher does not exist", body = crate::openapi::MessageDoc)
    )
)]
pub async fn delete(State(state): State<AppState>, PathParam(id): PathParam<i32>) -> Result<StatusCode, ApiError> {
    state.publishers.delete_by_id(id).await?;
    Ok(StatusCode::OK)
}
