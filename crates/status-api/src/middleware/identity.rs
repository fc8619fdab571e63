//! Identity gate (tower layer via `axum::middleware::from_fn`).
//!
//! The host authenticates the caller and injects their id into the
//! request, either as the `X-User-Id` header or as a query parameter
//! (`Mattermost-User-ID`, or the shorter `user_id`). The gate only checks
//! that one is present; it never validates credentials.

use std::collections::HashMap;

use axum::extract::{Query, Request};
use axum::http::{HeaderMap, Uri};
use axum::middleware::Next;
use axum::response::Response;

use status_core::error::AppError;
use status_core::types::UserId;

use crate::error::ApiError;

/// Header carrying the caller identity.
pub const IDENTITY_HEADER: &str = "x-user-id";

/// Query parameters carrying the caller identity when the header is
/// absent, in lookup order. Names are case-sensitive.
pub const IDENTITY_QUERY_PARAMS: [&str; 2] = ["Mattermost-User-ID", "user_id"];

/// Rejects requests without a caller identity.
///
/// On success the [`UserId`] is stored in the request extensions, where
/// the [`CallerIdentity`](crate::extractors::CallerIdentity) extractor
/// picks it up. The next handler is never called on rejection.
pub async fn require_identity(mut request: Request, next: Next) -> Result<Response, ApiError> {
    let user_id = identity_from_request(request.headers(), request.uri())
        .ok_or_else(|| AppError::unauthorized("Not authorized"))?;

    request.extensions_mut().insert(user_id);
    Ok(next.run(request).await)
}

/// Read the caller identity from the header, falling back to the query.
pub fn identity_from_request(headers: &HeaderMap, uri: &Uri) -> Option<UserId> {
    let from_header = headers
        .get(IDENTITY_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(UserId::parse);

    from_header.or_else(|| {
        Query::<HashMap<String, String>>::try_from_uri(uri)
            .ok()
            .and_then(|Query(params)| {
                IDENTITY_QUERY_PARAMS
                    .iter()
                    .find_map(|name| params.get(*name).and_then(|v| UserId::parse(v)))
            })
    })
}
