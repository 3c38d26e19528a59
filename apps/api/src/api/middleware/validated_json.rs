use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
};
use serde::de::DeserializeOwned;

use crate::api::errors::ApiError;
use crate::domain::Validate;

/// JSON body extractor that runs the payload's `Validate` hook
///
/// A body without a JSON content type, or an empty body, is read as `{}`.
///
/// Usage:
/// ```rust,ignore
/// async fn create(
///     ValidatedJson(fields): ValidatedJson<ProductFields>,
/// ) -> Result<StatusCode, ApiError> {
///     // fields passed validation
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json = is_json(req.headers());
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::new(rejection.status(), rejection.body_text()))?;

        let raw: &[u8] = if json && !body.is_empty() { &body } else { b"{}" };
        let value: T = serde_json::from_slice(raw)
            .map_err(|e| ApiError::bad_request(format!("Invalid JSON body: {}", e)))?;

        value.validate().map_err(ApiError::bad_request)?;

        Ok(ValidatedJson(value))
    }
}
