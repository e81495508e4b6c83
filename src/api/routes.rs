//! API route configuration.

use crate::api::handlers::{delete_handler, generate_handler, redirect_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Short link routes.
///
/// # Endpoints
///
/// - `POST   /generate` - Create a short link
/// - `GET    /{code}`   - Redirect to the destination
/// - `DELETE /{code}`   - Delete a short link
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/generate", post(generate_handler))
        .route("/{code}", get(redirect_handler).delete(delete_handler))
}
