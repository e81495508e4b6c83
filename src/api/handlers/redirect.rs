//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its destination URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Returns `302 Found` with a `Location` header.
///
/// # Errors
///
/// Returns 410 Gone if the link has expired.
/// Returns 404 Not Found if no destination is stored for the code.
/// Returns 400 Bad Request on store failure.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let full_url = state.shortener.resolve(&code).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, full_url)]))
}
