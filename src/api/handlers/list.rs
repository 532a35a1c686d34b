//! Handler for the ranked listing.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use std::collections::HashMap;

use crate::api::dto::urls::ListUrlsResponse;
use crate::application::commands::ListTopQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the most accessed aliases, highest access count first.
///
/// # Endpoint
///
/// `GET /urls`
///
/// # Query Parameters
///
/// - `limit` (optional): number of items, 1-20 (default: 10)
///
/// # Response
///
/// ```json
/// {
///   "limit": 2,
///   "count": 2,
///   "items": [
///     { "alias": "alias1", "original_url": "https://www.example.com/1", "access_count": 10 },
///     { "alias": "alias2", "original_url": "https://www.example.com/2", "access_count": 5 }
///   ]
/// }
/// ```
///
/// Counts may trail the most recent redirects while the access worker catches up.
///
/// # Errors
///
/// - 400 if the query string cannot be decoded
/// - 422 if `limit` is not a number in range
pub async fn list_urls_handler(
    State(state): State<AppState>,
    params: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> Result<Json<ListUrlsResponse>, AppError> {
    let Query(params) = params?;

    let query = ListTopQuery::from_query(params)?;

    let ranked = state.url_service.list_top(query.limit).await?;

    Ok(Json(ListUrlsResponse::new(query.limit, ranked)))
}
