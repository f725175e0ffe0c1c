//! Body extractors that reject with the JSON error envelope instead of
//! Axum's plain-text rejections.

use axum::{
    Json,
    body::{Body, Bytes},
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use tether_adapters::http::{AuthApiError, INVALID_BODY_MESSAGE, optional_json_body};

/// Largest body accepted by the credential routes.
pub const BODY_LIMIT: usize = 64 * 1024;

/// `Json<T>` whose rejection is a `400` envelope.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AuthApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(%rejection, "rejected request body");
                AuthApiError::InvalidInput(INVALID_BODY_MESSAGE.to_owned())
            })?;
        Ok(Self(value))
    }
}

/// JSON body that may be missing altogether, with or without a content type.
pub struct OptionalJsonBody<T>(pub T);

impl<T, S> FromRequest<S> for OptionalJsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AuthApiError;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let bytes = read_body(req.into_body()).await?;
        optional_json_body(&bytes).map(Self)
    }
}

pub(crate) async fn read_body(body: Body) -> Result<Bytes, AuthApiError> {
    axum::body::to_bytes(body, BODY_LIMIT)
        .await
        .map_err(|e| {
            tracing::debug!(error = %e, "failed to read request body");
            AuthApiError::InvalidInput(INVALID_BODY_MESSAGE.to_owned())
        })
}
