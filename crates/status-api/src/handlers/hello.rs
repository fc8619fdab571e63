//! Greeting handler.

use axum::body::Body;
use axum::http::{StatusCode, header};
use axum::response::Response;

use status_core::error::{AppError, ErrorKind};

use crate::error::ApiError;
use crate::extractors::CallerIdentity;

/// Fixed greeting body.
pub const GREETING: &str = "Hello, world!";

/// GET {base}/hello
pub async fn hello(caller: CallerIdentity) -> Result<Response, ApiError> {
    tracing::debug!(user_id = %caller.0, "Greeting caller");

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .body(Body::from(GREETING))
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to write response");
            ApiError(AppError::with_source(
                ErrorKind::Internal,
                format!("Failed to write response: {e}"),
                e,
            ))
        })
}
