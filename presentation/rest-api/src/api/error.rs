use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body of every non-2xx answer.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Error family, e.g. "ValidationError" or "NotFound"
    pub name: String,
    /// Code-style identifier, e.g. "product.sku_required"
    pub message: String,
}

/// Maps a domain error onto its HTTP status and body.
pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
