//! `CallerIdentity` extractor: the identity stored by the gate.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use status_core::error::AppError;
use status_core::types::UserId;

use crate::error::ApiError;

/// Identity of the caller, as accepted by
/// [`require_identity`](crate::middleware::identity::require_identity).
#[derive(Debug, Clone)]
pub struct CallerIdentity(pub UserId);

impl std::ops::Deref for CallerIdentity {
    type Target = UserId;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for CallerIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // A route mounted without the gate has no identity to hand out.
        let user_id = parts
            .extensions
            .get::<UserId>()
            .cloned()
            .ok_or_else(|| AppError::unauthorized("Not authorized"))?;

        Ok(Self(user_id))
    }
}
