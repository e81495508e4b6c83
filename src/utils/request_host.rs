//! Public base URL resolution from HTTP request headers.

use crate::AppError;
use axum::http::{HeaderMap, header};

/// Returns the `Host` header value, port included.
///
/// Short URLs are built from the host the client used, so the port is kept
/// (e.g. `localhost:3000`).
///
/// # Errors
///
/// Returns [`AppError::Validation`] if:
/// - The `Host` header is missing or empty
/// - The header value contains invalid UTF-8
pub fn extract_host_from_headers(headers: &HeaderMap) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::invalid_parameter("host", "Missing Host header"))?
        .to_str()
        .map_err(|_| AppError::invalid_parameter("host", "Invalid Host header"))?
        .trim();

    if host.is_empty() {
        return Err(AppError::invalid_parameter("host", "Missing Host header"));
    }

    Ok(host.to_string())
}

/// Resolves the base used for `short_url`.
///
/// A configured public base URL wins; otherwise `http://<Host>` is used.
pub fn resolve_base_url(
    configured: Option<&str>,
    headers: &HeaderMap,
) -> Result<String, AppError> {
    match configured {
        Some(base) => Ok(base.trim_end_matches('/').to_string()),
        None => Ok(format!("http://{}", extract_host_from_headers(headers)?)),
    }
}
