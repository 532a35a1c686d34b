//! Handler for alias creation.

use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use serde_json::Value;

use crate::api::dto::urls::CreateUrlResponse;
use crate::application::commands::CreateUrlCommand;
use crate::error::AppError;
use crate::state::AppState;

/// Maps a destination URL to a custom or generated alias.
///
/// # Endpoint
///
/// `POST /urls`
///
/// # Request Body
///
/// ```json
/// { "original_url": "https://www.example.com", "alias": "example" }
/// ```
///
/// `alias` is optional (3-20 letters, digits or underscores). Without it an
/// 8-character alias is generated.
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "alias": "example", "original_url": "https://www.example.com" }
/// ```
///
/// # Errors
///
/// - 400 if the body is empty or not JSON
/// - 422 if a field fails validation (first failure only)
/// - 409 if the alias already exists
pub async fn create_url_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreateUrlResponse>), AppError> {
    if body.is_empty() {
        return Err(AppError::bad_request("missing request body"));
    }

    let payload: Value = serde_json::from_slice(&body)
        .map_err(|_| AppError::bad_request("invalid request body"))?;

    let command = CreateUrlCommand::from_json(payload)?;

    let record = state
        .url_service
        .create_alias(command.alias, command.original_url)
        .await?;

    Ok((StatusCode::CREATED, Json(record.into())))
}
