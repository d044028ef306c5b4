use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
    /// Offending request field, for validation errors
    #[oai(skip_serializing_if_is_none)]
    pub field: Option<String>,
}

impl ErrorResponse {
    pub fn validation(field: &str, message: &str) -> Self {
        Self {
            name: "ValidationError".to_string(),
            message: message.to_string(),
            field: Some(field.to_string()),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
