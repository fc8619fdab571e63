//! `StatusBody` extractor: the JSON body of a status change.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};

use plugin_custom_status::CustomStatus;
use status_core::error::AppError;

use crate::error::ApiError;

/// A [`CustomStatus`] parsed from the request body.
///
/// Unlike `axum::Json` this ignores `Content-Type` and reports every
/// unreadable or malformed body, including an empty one, as 400.
#[derive(Debug, Clone)]
pub struct StatusBody(pub CustomStatus);

impl<S> FromRequest<S> for StatusBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(format!("Invalid request body: {e}")))?;

        let status = serde_json::from_slice(&bytes)
            .map_err(|_| AppError::validation("Invalid request body"))?;

        Ok(Self(status))
    }
}
