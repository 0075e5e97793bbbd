use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = match &self {
            ProductError::NameEmpty
            | ProductError::NameTooLong
            | ProductError::PriceInvalid
            | ProductError::StockInvalid => StatusCode::BAD_REQUEST,
            ProductError::NotFound => StatusCode::NOT_FOUND,
            ProductError::Repository(err) => {
                tracing::error!("Product repository failure: {err}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let name = match status {
            StatusCode::BAD_REQUEST => "ValidationError",
            StatusCode::NOT_FOUND => "NotFound",
            _ => "InternalError",
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: self.to_string(),
            }),
        )
    }
}
