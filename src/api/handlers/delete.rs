//! Handler for short link deletion.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::response::ApiResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Removes every stored attribute of a code.
///
/// # Endpoint
///
/// `DELETE /{code}`
///
/// Idempotent: deleting an unknown code also returns `200 OK`
/// with `{"code": 200, "message": "Success"}`.
///
/// # Errors
///
/// Returns 400 Bad Request if the code contains characters outside the
/// code alphabet or the store fails.
pub async fn delete_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state.shortener.delete(&code).await?;

    Ok(Json(ApiResponse::success(200, None)))
}
