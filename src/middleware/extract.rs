use axum::{
    async_trait,
    extract::{rejection::PathRejection, FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::schemas::Validate;

/// JSON body extractor that answers 400 for malformed, mistyped or
/// invalid payloads instead of axum's default 422
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state).await?;
        payload.validate()?;
        Ok(ValidJson(payload))
    }
}

/// Path extractor whose failures are JSON errors; a segment that does not
/// parse as an id cannot name an existing record, so it is reported as 404
#[derive(Debug)]
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(ApiPath(value)),
            Err(PathRejection::FailedToDeserializePathParams(e)) => {
                tracing::debug!("Unparseable path parameters: {}", e.body_text());
                Err(ApiError::not_found("Resource not found."))
            }
            Err(other) => {
                tracing::error!("Path extraction failed: {}", other.body_text());
                Err(ApiError::internal_server_error("Could not read request path"))
            }
        }
    }
}
