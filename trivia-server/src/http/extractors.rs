//! Custom Axum extractors and rejection mapping

use std::convert::Infallible;

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;
use axum::Json;

use super::error::ApiError;
use crate::models::{Pagination, PaginationParams};

/// Integer id from the single path parameter.
///
/// A non-integer segment is reported as NotFound, the same as an id that
/// does not exist.
pub struct PathId(pub i32);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<i32> = Path::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(%rejection, "invalid path id");
                ApiError::NotFound
            })?;

        Ok(Self(id))
    }
}

/// Page selected by the `page` query parameter.
///
/// Never rejects: a query string that fails to deserialize (for example a
/// repeated `page`) is treated like an absent one and selects page 1.
pub struct Page(pub Pagination);

impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = match Query::<PaginationParams>::from_request_parts(parts, state).await {
            Ok(Query(params)) => params,
            Err(rejection) => {
                tracing::debug!(%rejection, "unparseable query string, using first page");
                PaginationParams::default()
            }
        };

        Ok(Self(Pagination::from(params)))
    }
}

/// Unwrap a JSON body, mapping a parse/content-type rejection to `err`.
///
/// Handlers take `Result<Json<T>, JsonRejection>` so each endpoint picks
/// its own status for a malformed body.
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>, err: ApiError) -> Result<T, ApiError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            tracing::debug!(%rejection, status = %err, "rejected request body");
            Err(err)
        }
    }
}
