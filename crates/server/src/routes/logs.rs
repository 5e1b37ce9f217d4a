use axum::{extract::State, Json};
use models::log;
use tracing::error;

use crate::{errors::ApiError, state::AppState};

pub const LOAD_FAILED: &str = "Could not load logs from the database";

#[utoipa::path(
    get, path = "/api/logs/get-all-logs-from-db", tag = "logs",
    responses(
        (status = 200, description = "Every persisted log entry", body = [crate::openapi::LogDoc]),
        (status = 400, description = "Logs could not be loaded", body = crate::openapi::MessageDoc)
    )
)]
pub async fn get_all_from_db(State(state): State<AppState>) -> Result<Json<Vec<log::Model>>, ApiError> {
    match state.logs.get_all_logs_from_db().await {
        Ok(rows) => Ok(Json(rows)),
        Err(e) => {
            error!(err = %e, "load logs failed");
            Err(ApiError::BadRequest(LOAD_FAILED.into()))
        }
    }
}
