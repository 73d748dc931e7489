//! HTTP request handlers for the shift roster API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::CalendarEvent;
use crate::parser::parse_shift_schedule;

use super::request::{CalendarEventRequest, ParseRequest};
use super::response::{ApiError, ApiErrorResponse, CalendarEventResponse, ParseResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/parse", post(parse_handler))
        .route("/calendar-event", post(calendar_event_handler))
        .with_state(state)
}

/// Handler for POST /parse.
///
/// Parses the pasted roster text and projects it into an event payload.
async fn parse_handler(
    State(state): State<AppState>,
    payload: Result<Json<ParseRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing parse request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    // Blank text is rejected before parsing
    let text = match request.text.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => text,
        _ => {
            warn!(correlation_id = %correlation_id, "No roster text provided");
            return ApiErrorResponse::bad_request(ApiError::validation_error("No text provided"))
                .into_response();
        }
    };

    // Parse, then project in the configured zone
    let started = Instant::now();
    let parsed = parse_shift_schedule(text);

    match state.projector().project(&parsed) {
        Ok(event_data) => {
            info!(
                correlation_id = %correlation_id,
                start = %event_data.start_date_time,
                end = %event_data.end_date_time,
                duration_us = started.elapsed().as_micros(),
                "Roster parsed successfully"
            );
            json_response(StatusCode::OK, ParseResponse { parsed, event_data })
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Roster projection failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /calendar-event.
///
/// Builds the calendar service insert body for an event payload. The body is
/// returned to the caller, who forwards it to the calendar service.
async fn calendar_event_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalendarEventRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calendar event request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    // Both the calendar and the event are required
    let calendar_id = request
        .calendar_id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty());

    let (calendar_id, event_details) = match (calendar_id, request.event_details) {
        (Some(calendar_id), Some(event_details)) => (calendar_id, event_details),
        _ => {
            warn!(correlation_id = %correlation_id, "Calendar event request incomplete");
            return ApiErrorResponse::bad_request(ApiError::validation_error(
                "Missing required fields",
            ))
            .into_response();
        }
    };

    let event = CalendarEvent::from_payload(&event_details, &request.attendees, state.settings());
    info!(
        correlation_id = %correlation_id,
        calendar_id = %calendar_id,
        attendees = event.attendees.len(),
        "Calendar event prepared"
    );

    json_response(StatusCode::OK, CalendarEventResponse { calendar_id, event })
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's message, e.g. the missing field
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::malformed_json(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse::bad_request(error).into_response()
}
