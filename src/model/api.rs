use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error envelope returned with every non-2xx response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ErrorDto {
    pub message: String,
    /// Mirrors the HTTP status code of the response.
    pub status_code: u16,
}

/// Acknowledgment returned by favorite mutations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct MessageDto {
    #[serde(rename = "Message")]
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Static payload returned by `GET /user`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct GreetingDto {
    pub msg: String,
}
