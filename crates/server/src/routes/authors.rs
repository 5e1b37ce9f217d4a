use axum::{extract::State, http::StatusCode, Json};
use models::author;
use service::domain::{AuthorInput, AuthorWithBooks};

use crate::{
    errors::ApiError,
    extract::{JsonBody, PathParam},
    state::AppState,
};

#[utoipa::path(
    get, path = "/api/authors", tag = "authors",
    responses((status = 200, description = "All authors by last name", body = [crate::openapi::AuthorDoc]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<author::Model>>, ApiError> {
    Ok(Json(state.authors.list().await?))
}

#[utoipa::path(
    get, path = "/api/authors/{id}", tag = "authors",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::AuthorDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<AppState>, PathParam(id): PathParam<i32>) -> Result<Json<author::Model>, ApiError> {
    state.authors.get_by_id(id).await?.map(Json).ok_or(ApiError::NotFound)
}

#[utoipa::path(
    get, path = "/api/authors/{id}/books", tag = "authors",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author with book titles", body = crate::openapi::AuthorWithBooksDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn books(State(state): State<AppState>, PathParam(id): PathParam<i32>) -> Result<Json<AuthorWithBooks>, ApiError> {
    state.authors.get_with_books(id).await?.map(Json).ok_or(ApiError::NotFound)
}

#[utoipa::path(
    post, path = "/api/authors", tag = "authors",
    request_body = crate::openapi::AuthorInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::AuthorDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::MessageDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<AuthorInput>,
) -> Result<(StatusCode, Json<author::Model>), ApiError> {
    let created = state.authors.add(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    delete, path = "/api/authors/{id}", tag = "authors",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 400, description = "Author does not exist", body = crate::openapi::MessageDoc)
    )
)]
pub async fn delete(State(state): State<AppState>, PathParam(id): PathParam<i32>) -> Result<StatusCode, ApiError> {
    state.authors.delete_by_id(id).await?;
    Ok(StatusCode::OK)
}
