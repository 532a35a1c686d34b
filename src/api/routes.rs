//! API route configuration.

use crate::api::handlers::{create_url_handler, list_urls_handler, redirect_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Alias routes.
///
/// # Endpoints
///
/// - `POST /urls`           - Create an alias (custom or generated)
/// - `GET  /urls`           - Most accessed aliases (`?limit=1..20`)
/// - `GET  /urls/{alias}`   - Redirect to the original URL and count the access
pub fn url_routes() -> Router<AppState> {
    Router::new()
        .route("/urls", post(create_url_handler).get(list_urls_handler))
        .route("/urls/{alias}", get(redirect_handler))
}
