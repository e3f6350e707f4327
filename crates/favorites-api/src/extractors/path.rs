//! Path parameter extractor
//!
//! Type-safe extraction of UUID identifiers from path parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::response::ApiError;

/// Extract a typed identifier (or tuple of them) from the path
///
/// A malformed id is a 400, never a 404.
#[derive(Debug, Clone)]
pub struct IdPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for IdPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        Ok(IdPath(inner))
    }
}
