//! Extractors whose rejections answer in the same JSON shape as `AppError`.

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{StatusCode, request::Parts},
    response::IntoResponse,
};
use axum_extra::extract::Form;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// The integer `:id` segment of a route.
///
/// A segment that is not an integer does not name any record, so it is
/// answered like an unknown route.
#[derive(Debug, Clone, Copy)]
pub struct RecordId(pub i64);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for RecordId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound("Not found".to_string()))?;
        Ok(Self(id))
    }
}

/// A urlencoded form body. Repeated keys (`genres=Jazz&genres=Folk`) collect into a `Vec`.
#[derive(Debug, Clone)]
pub struct FormBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for FormBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Form::<T>::from_request(req, state).await {
            Ok(Form(value)) => Ok(Self(value)),
            Err(rejection) => {
                let status = rejection.into_response().status();
                let message = if status == StatusCode::UNSUPPORTED_MEDIA_TYPE {
                    "Form requests must have `Content-Type: application/x-www-form-urlencoded`."
                } else {
                    "The form body could not be read."
                };
                tracing::debug!(%status, "Rejected form body.");
                Err(AppError::Rejected {
                    status,
                    message: message.to_string(),
                })
            }
        }
    }
}
