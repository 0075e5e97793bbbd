use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body shared by every endpoint.
///
/// `message` is a code-style identifier (e.g. `product.not_found`) so
/// clients can translate it.
#[derive(Object, Debug, Clone)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
