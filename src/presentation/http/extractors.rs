// src/presentation/http/extractors.rs
use crate::application::{dto::AuthenticatedUser, error::ApplicationError};
use crate::domain::user::{Role, UserId};
use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use super::error::HttpError;

/// Identity extractor. Authentication itself happens upstream; the
/// gateway forwards the verified subject as `x-user-id` and `x-role-id`
/// headers, which are resolved here into the request-scoped actor.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

fn header_uuid(parts: &Parts, name: &str) -> Result<Uuid, HttpError> {
    let raw = parts
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            HttpError::from_error(ApplicationError::unauthorized(format!(
                "missing {name} header"
            )))
        })?;

    raw.parse().map_err(|_| {
        HttpError::from_error(ApplicationError::unauthorized(format!(
            "invalid {name} header"
        )))
    })
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = header_uuid(parts, "x-user-id")?;
        let role_id = header_uuid(parts, "x-role-id")?;

        let role = Role::from_id(role_id).map_err(|_| {
            HttpError::from_error(ApplicationError::unauthorized("unrecognized role id"))
        })?;

        Ok(Self(AuthenticatedUser {
            id: UserId::new(user_id),
            role,
        }))
    }
}
