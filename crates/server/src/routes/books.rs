use axum::{extract::State, http::StatusCode, Json};
use models::book;
use service::domain::{BookInput, BookWithAuthors};

use crate::{
    errors::ApiError,
    extract::{JsonBody, PathParam, QueryParams},
    routes::ListParams,
    state::AppState,
};

#[utoipa::path(
    get, path = "/api/books", tag = "books",
    params(ListParams),
    responses((status = 200, description = "One page of books", body = [crate::openapi::BookDoc]))
)]
pub async fn list(State(state): State<AppState>, QueryParams(q): QueryParams<ListParams>) -> Result<Json<Vec<book::Model>>, ApiError> {
    let rows = state
        .books
        .list(q.sort_by.as_deref(), q.search_string.as_deref(), q.page_index)
        .await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get, path = "/api/books/{id}", tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book with publisher and author names", body = crate::openapi::BookWithAuthorsDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<AppState>, PathParam(id): PathParam<i32>) -> Result<Json<BookWithAuthors>, ApiError> {
    state.books.get_by_id(id).await?.map(Json).ok_or(ApiError::NotFound)
}

#[utoipa::path(
    post, path = "/api/books", tag = "books",
    request_body = crate::openapi::BookInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::BookDoc),
        (status = 400, description = "Validation Error or missing reference", body = crate::openapi::MessageDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<BookInput>,
) -> Result<(StatusCode, Json<book::Model>), ApiError> {
    let created = state.books.add(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/api/books/{id}", tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    request_body = crate::openapi::BookInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::BookDoc),
        (status = 400, description = "Validation Error or missing reference", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(input): JsonBody<BookInput>,
) -> Result<Json<book::Model>, ApiError> {
    Ok(Json(state.books.update_by_id(id, input).await?))
}

#[utoipa::path(
    delete, path = "/api/books/{id}", tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 400, description = "Book does not exist", body = crate::openapi::MessageDoc)
    )
)]
pub async fn delete(State(state): State<AppState>, PathParam(id): PathParam<i32>) -> Result<StatusCode, ApiError> {
    state.books.delete_by_id(id).await?;
    Ok(StatusCode::OK)
}
