//! Handler for alias redirect.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, warn};

use crate::api::dto::urls::RedirectResponse;
use crate::domain::access_event::AccessEvent;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its original URL.
///
/// # Endpoint
///
/// `GET /urls/{alias}`
///
/// # Access Counting
///
/// After the alias resolves, an [`AccessEvent`] is queued for the background
/// worker (fire-and-forget). If the queue is full the access is not counted;
/// the redirect is never delayed by the counter.
///
/// # Response
///
/// `302 Found` with a `Location` header and
///
/// ```json
/// { "message": "Redirecting to https://www.example.com" }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let record = state.url_service.resolve_alias(&alias).await?;

    match state.access_sender.try_send(AccessEvent::new(record.alias)) {
        Ok(()) => debug!(alias = %alias, "Access queued"),
        Err(TrySendError::Full(event)) => {
            warn!(alias = %event.alias, "Access queue full, access not counted")
        }
        Err(TrySendError::Closed(event)) => {
            warn!(alias = %event.alias, "Access queue closed, access not counted")
        }
    }

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, record.original_url.clone())],
        Json(RedirectResponse::to(&record.original_url)),
    ))
}
