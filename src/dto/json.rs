//! JSON body extractor whose rejections follow the API error contract.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AppError;

/// Drop-in replacement for [`axum::Json`] on request bodies.
///
/// A non-JSON `Content-Type` yields `415`, a failed body read yields `500`,
/// and a body that is not a JSON object or does not decode into `T` yields
/// `400`, all rendered through [`AppError`].
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state).await?;

        // Structs would otherwise also decode from positional arrays.
        if !value.is_object() {
            return Err(AppError::BadRequest(
                "request body must be a JSON object".into(),
            ));
        }

        serde_json::from_value(value)
            .map(JsonBody)
            .map_err(|err| AppError::BadRequest(err.to_string()))
    }
}
