use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::item::errors::ItemError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ItemError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        let validation = |field: &str| {
            (
                StatusCode::BAD_REQUEST,
                ErrorResponse::validation(field, &message),
            )
        };

        let (status, body) = match &self {
            ItemError::NameEmpty => validation("name"),
            ItemError::InvalidPrice => validation("price"),
            ItemError::InvalidQuantity => validation("quantity"),
            ItemError::InvalidMaxPrice => validation("maxPrice"),
            ItemError::InvalidMaxQuantity => validation("maxQuantity"),
            ItemError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    name: "NotFound".to_string(),
                    message: message.clone(),
                    field: None,
                },
            ),
            ItemError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    name: "InternalError".to_string(),
                    message: "repository.persistence".to_string(),
                    field: None,
                },
            ),
        };

        (status, Json(body))
    }
}
