//! Shared response types for API handlers.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use crm_core::types::DbId;
use serde::Serialize;

/// `201 Created` with a `Location` header pointing at the new resource's
/// get-by-id route and the created entity as the body.
#[derive(Debug)]
pub struct Created<T: Serialize> {
    pub location: String,
    pub body: T,
}

impl<T: Serialize> Created<T> {
    /// `base` is the resource's mount path, e.g. `/api/lead`.
    pub fn at(base: &str, id: DbId, body: T) -> Self {
        Self {
            location: format!("{base}/id/{id}"),
            body,
        }
    }
}

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        (
            StatusCode::CREATED,
            [(header::LOCATION, self.location)],
            Json(self.body),
        )
            .into_response()
    }
}
