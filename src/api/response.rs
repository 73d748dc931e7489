//! Response types for the shift roster API.
//!
//! This module defines the success bodies, the error response structure and
//! the mapping from [`RosterError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::RosterError;
use crate::models::{CalendarEvent, EventPayload, ShiftRecord};

/// Response body for `/parse`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResponse {
    /// The parsed shift record.
    pub parsed: ShiftRecord,
    /// The projected event payload.
    pub event_data: EventPayload,
}

/// Response body for `/calendar-event`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEventResponse {
    /// The calendar the event is meant for.
    pub calendar_id: String,
    /// The insert body to send to the calendar service.
    pub event: CalendarEvent,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<RosterError> for ApiErrorResponse {
    fn from(error: RosterError) -> Self {
        let message = error.to_string();
        match error {
            RosterError::MissingInput { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "MISSING_INPUT",
                    message,
                    "The roster must contain a date and both start and finish times",
                ),
            ),
            RosterError::InvalidDateFormat { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_DATE_FORMAT",
                    message,
                    "Dates must look like 01/Jan/2026",
                ),
            ),
            RosterError::InvalidMonth { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_MONTH",
                    message,
                    "Months must be English names or abbreviations such as Jan",
                ),
            ),
            RosterError::InvalidTimeFormat { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_TIME_FORMAT",
                    message,
                    "Times must look like 7:30 AM",
                ),
            ),
            RosterError::NonexistentDate { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("NONEXISTENT_DATE", message))
            }
            RosterError::NonexistentLocalTime { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "NONEXISTENT_LOCAL_TIME",
                    message,
                    "The time falls in a daylight saving gap",
                ),
            ),
            RosterError::ConfigNotFound { .. }
            | RosterError::ConfigParseError { .. }
            | RosterError::InvalidTimeZone { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_invalid_month_maps_to_bad_request() {
        let api_error: ApiErrorResponse = RosterError::InvalidMonth {
            value: "Xyz".to_string(),
        }
        .into();

        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_MONTH");
        assert_eq!(api_error.error.message, "Invalid month: Xyz");
    }

    #[test]
    fn test_missing_input_maps_to_bad_request() {
        let api_error: ApiErrorResponse = RosterError::MissingInput { field: "time" }.into();

        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "MISSING_INPUT");
        assert!(api_error.error.details.is_some());
    }

    #[tokio::test]
    async fn test_error_response_carries_status_and_json_body() {
        let response = ApiErrorResponse::bad_request(ApiError::validation_error("No text provided"))
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()["content-type"], "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "No text provided");
    }

    #[test]
    fn test_config_errors_map_to_server_error() {
        let api_error: ApiErrorResponse = RosterError::InvalidTimeZone {
            name: "Nowhere".to_string(),
        }
        .into();

        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
        assert_eq!(
            api_error.error.details.as_deref(),
            Some("Unknown time zone: Nowhere")
        );
    }
}
