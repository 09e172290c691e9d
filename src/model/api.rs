use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope wrapping every successful API response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Always `true` for this envelope
    pub success: bool,
    /// Response payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human readable message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }
}

impl ApiResponse<()> {
    /// Success envelope carrying only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// Always `false` for this envelope
    pub success: bool,
    /// Machine readable error code, e.g. `NO_TICKETS_AVAILABLE`
    pub error_code: String,
    /// The error message, safe to show to end users
    pub message: String,
}

impl ErrorDto {
    pub fn new(error_code: &str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error_code: error_code.to_string(),
            message: message.into(),
        }
    }
}
