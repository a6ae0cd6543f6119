//! Request extractors whose rejections render as the JSON `ErrorBody`.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts};
use axum::http::StatusCode;
use tracing::debug;

use crate::errors::JsonApiError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(JsonApiError))]
pub struct ApiJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(JsonApiError))]
pub struct ApiPath<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(JsonApiError))]
pub struct ApiQuery<T>(pub T);

fn rejected(status: StatusCode, detail: String) -> JsonApiError {
    debug!(%status, %detail, "request rejected by extractor");
    JsonApiError::new(status, status.canonical_reason().unwrap_or("Bad Request"), Some(detail))
}

impl From<JsonRejection> for JsonApiError {
    fn from(r: JsonRejection) -> Self { rejected(r.status(), r.body_text()) }
}

impl From<PathRejection> for JsonApiError {
    fn from(r: PathRejection) -> Self { rejected(r.status(), r.body_text()) }
}

impl From<QueryRejection> for JsonApiError {
    fn from(r: QueryRejection) -> Self { rejected(r.status(), r.body_text()) }
}
