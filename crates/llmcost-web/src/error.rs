use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use llmcost_core::CoreError;

/// Any failed submission, rendered as `{ "error": message }`
#[derive(Debug)]
pub enum ApiError {
    /// The calculator rejected the submission
    Calculation(CoreError),
    /// The body was not a valid submission (bad JSON, unknown option, negative count)
    InvalidBody(JsonRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Calculation(CoreError::EmptyInput) => StatusCode::BAD_REQUEST,
            Self::Calculation(CoreError::UnsupportedModel(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Calculation(CoreError::InvalidRate { .. } | CoreError::Tokenizer(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::InvalidBody(rejection) => rejection.status(),
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Calculation(err) => err.to_string(),
            Self::InvalidBody(rejection) => rejection.body_text(),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        Self::Calculation(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();
        if status.is_server_error() {
            tracing::error!("Calculation failed: {}", message);
        } else {
            tracing::warn!("Rejected submission: {}", message);
        }
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(CoreError::EmptyInput).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(CoreError::UnsupportedModel("x".to_string())).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::from(CoreError::Tokenizer("boom".to_string())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_message_is_user_facing() {
        assert_eq!(
            ApiError::from(CoreError::EmptyInput).message(),
            "Please enter a prompt"
        );
    }
}
