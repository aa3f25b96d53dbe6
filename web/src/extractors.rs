//! Custom Axum extractors.
//!
//! - `TodoIdPath`: parse the `:id` path segment into a [`TodoId`], rejecting
//!   anything that is not a positive integer before the handler runs
//!
//! # Examples
//!
//! ```ignore
//! use hx_todo_web::extractors::TodoIdPath;
//!
//! async fn handler(TodoIdPath(id): TodoIdPath) -> String {
//!     format!("Todo {id}")
//! }
//! ```

use crate::error::AppError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use hx_todo_core::TodoId;

/// Todo id taken from the request path.
///
/// Rejects with a 400 `BAD_REQUEST` (`MalformedId`) so malformed ids never
/// reach storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoIdPath(pub TodoId);

#[async_trait]
impl<S> FromRequestParts<S> for TodoIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::bad_request(format!("Missing todo id: {rejection}")))?;

        let id = raw.parse::<TodoId>()?;
        Ok(Self(id))
    }
}
