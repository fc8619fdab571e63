//! Custom status handler.

use axum::extract::State;
use axum::http::StatusCode;

use crate::error::ApiError;
use crate::extractors::{CallerIdentity, StatusBody};
use crate::state::AppState;

/// PUT {base}/custom-status-change
///
/// Responds 200 with an empty body once the store accepted the record.
pub async fn custom_status_change(
    State(state): State<AppState>,
    CallerIdentity(user_id): CallerIdentity,
    StatusBody(status): StatusBody,
) -> Result<StatusCode, ApiError> {
    state
        .plugin
        .status_service()
        .update_status(&user_id, &status)
        .await?;

    Ok(StatusCode::OK)
}
