//! Handler for the link generation endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
};
use validator::Validate;

use crate::api::dto::generate::{GenerateData, GenerateRequest};
use crate::api::dto::response::ApiResponse;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_host::resolve_base_url;

/// Body `code` reported on a successful generate.
const GENERATED_CODE: u16 = 302;

/// Creates (or overwrites) the short link for a URL.
///
/// # Endpoint
///
/// `POST /generate`
///
/// # Request Body
///
/// ```json
/// {
///   "short_code": "test",
///   "full_url": "https://example.com/a",
///   "expire_date": 1900000000,
///   "number_of_hits": 10
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "code": 302,
///   "message": "Success",
///   "data": {
///     "short_code": "test",
///     "full_url": "https://example.com/a",
///     "short_url": "http://localhost:3000/<code>"
///   }
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for malformed JSON, missing or invalid fields,
/// a missing `Host` header (when no public base URL is configured) and
/// store failures.
pub async fn generate_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<GenerateData>>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let base_url = resolve_base_url(state.public_base_url.as_deref(), &headers)?;
    let (short_code, new_link) = payload.into_new_link()?;

    let link = state.shortener.create(new_link).await?;
    let short_url = link.short_url(&base_url);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            GENERATED_CODE,
            Some(GenerateData {
                short_code,
                full_url: link.full_url,
                short_url,
            }),
        )),
    ))
}
