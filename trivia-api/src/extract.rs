//! Request extractors that report failures through [`ApiError`].

use std::collections::HashMap;
use std::num::IntErrorKind;
use std::str::FromStr;

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use trivia_core::normalize_page;

use crate::error::ApiError;

/// JSON body whose rejections (missing body, wrong content type, missing
/// or ill-typed fields) all surface as 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError::BadRequest(rejection.body_text())),
        }
    }
}

/// 1-based page number from the `page` query parameter.
///
/// The value is untrusted: a missing or non-integer value means page 1 and
/// anything below 1 is raised to 1. A number too large to represent is
/// still past the end of any listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNumber(pub usize);

impl Default for PageNumber {
    fn default() -> Self {
        Self(1)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PageNumber
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        let page = params.get("page").map_or(1, |raw| parse_page(raw));

        Ok(Self(page))
    }
}

fn parse_page(raw: &str) -> usize {
    match raw.trim().parse::<i64>() {
        Ok(page) => normalize_page(page),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => usize::MAX,
        Err(_) => 1,
    }
}

/// Single path segment parsed as an id. A segment that does not parse
/// names no resource, so it is a 404 rather than a 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for IdPath<T>
where
    T: FromStr + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::NotFound(rejection.body_text()))?;

        raw.parse::<T>()
            .map(Self)
            .map_err(|_| ApiError::NotFound(format!("no resource with id {:?}", raw)))
    }
}
