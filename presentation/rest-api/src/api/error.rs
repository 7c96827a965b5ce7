use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            message: message.into(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Body for requests poem-openapi could not parse: malformed path or query
/// parameters, or a JSON payload with wrong types or unknown fields.
pub fn invalid_request(err: &poem::Error) -> Json<ErrorResponse> {
    tracing::debug!(error = %err, "rejecting unparsable request");
    Json(ErrorResponse::new("ValidationError", "request.invalid"))
}
