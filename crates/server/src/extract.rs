use crate::error::ServerError;
use axum::extract::FromRequest;

/// JSON body extractor whose rejections render as [`ServerError`].
///
/// Malformed JSON, wrong field types and a missing `Content-Type` all come
/// back as `400 {"error": {"code": "BAD_REQUEST", ...}}` instead of axum's
/// plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ServerError))]
pub struct ApiJson<T>(pub T);
