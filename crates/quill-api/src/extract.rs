//! Request extraction.
//!
//! Write endpoints accept either JSON or URL-encoded form bodies. A request
//! with no body, or with a content type we do not decode, is treated as an
//! empty object so that field validation reports what is missing. JSON bodies
//! must be objects.

use axum::Form;
use axum::Json;
use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use quill_core::error::DomainError;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

const EMPTY_OBJECT: &[u8] = b"{}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyFormat {
    Json,
    Form,
    Unknown,
}

impl BodyFormat {
    fn of(headers: &HeaderMap) -> Self {
        let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
            return Self::Unknown;
        };
        let mime = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if mime == "application/json" || mime.ends_with("+json") {
            Self::Json
        } else if mime == "application/x-www-form-urlencoded" {
            Self::Form
        } else {
            Self::Unknown
        }
    }
}

/// A request body decoded from JSON or form data.
#[derive(Debug)]
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match BodyFormat::of(req.headers()) {
            BodyFormat::Form => {
                let Form(value) = Form::<T>::from_request(req, state)
                    .await
                    .map_err(|rejection| {
                        tracing::debug!(%rejection, "rejected form body");
                        ApiError::invalid_body()
                    })?;
                Ok(Self(value))
            }
            BodyFormat::Json => {
                let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
                    tracing::debug!(%rejection, "failed to read request body");
                    ApiError::invalid_body()
                })?;
                let raw: &[u8] = if bytes.is_empty() { EMPTY_OBJECT } else { &bytes[..] };
                decode_json(raw).map(Self)
            }
            BodyFormat::Unknown => decode_json(EMPTY_OBJECT).map(Self),
        }
    }
}

fn decode_json<T: DeserializeOwned>(raw: &[u8]) -> Result<T, ApiError> {
    let Json(value) = Json::<Value>::from_bytes(raw).map_err(|rejection| {
        tracing::debug!(%rejection, "rejected json body");
        ApiError::invalid_body()
    })?;
    if !value.is_object() {
        tracing::debug!("json body is not an object");
        return Err(ApiError::invalid_body());
    }
    serde_json::from_value(value).map_err(|err| {
        tracing::debug!(error = %err, "json body does not match the request");
        ApiError::invalid_body()
    })
}

/// The raw `{id}` path segment. Undecodable segments are reported as an
/// invalid id rather than axum's plain-text path rejection.
#[derive(Debug)]
pub struct RawId(pub String);

impl<S> FromRequestParts<S> for RawId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(%rejection, "rejected id path segment");
                ApiError(DomainError::InvalidId)
            })?;
        Ok(Self(id))
    }
}
