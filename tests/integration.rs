//! Integration tests for the shift roster crate.
//!
//! This test suite covers:
//! - Parsing the pasted roster block end to end
//! - Projection into an event payload
//! - The HTTP endpoints
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use shift_roster::api::{AppState, create_router};
use shift_roster::calendar::{EventProjector, create_event_from_shift};
use shift_roster::config::ConfigLoader;
use shift_roster::error::RosterError;
use shift_roster::parser::parse_shift_schedule;

// =============================================================================
// Test Helpers
// =============================================================================

const EXAMPLE_ROSTER: &str = "Thursday 01/Jan/2026
STRATH VILLAGE VIC
Start 7:30 AM Thursday 01/Jan/2026
Finish 3:30 PM Thursday 01/Jan/2026
Break time 11:30 AM - 12:00 PM
7:30hrs +0:30hrs Break
DT2:DT Intermediate - OTC";

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/roster").expect("Failed to load config");
    create_router(AppState::new(config))
}

async fn post(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

// =============================================================================
// Library flow
// =============================================================================

#[test]
fn test_example_roster_end_to_end() {
    let record = parse_shift_schedule(EXAMPLE_ROSTER);
    let event = create_event_from_shift(&record).unwrap();

    let lines: Vec<&str> = event.description_lines().collect();
    assert_eq!(
        lines,
        vec![
            "Location: STRATH VILLAGE VIC",
            "Break: 11:30 AM - 12:00 PM",
            "Total Hours: 7:30 (Break: 0:30)",
            "Area: DT2:DT Intermediate - OTC",
        ]
    );
    assert_eq!(event.summary, "Work");
    assert_eq!(event.location, "STRATH VILLAGE VIC");
    assert_eq!(event.start_date_time.to_rfc3339(), "2026-01-01T07:30:00+11:00");
    assert_eq!(event.end_date_time.to_rfc3339(), "2026-01-01T15:30:00+11:00");
}

#[test]
fn test_roster_without_header_lines() {
    let record = parse_shift_schedule("Start 9:00 AM Monday 05/Jan/2026\nFinish 5:00 PM Monday 05/Jan/2026");
    let event = create_event_from_shift(&record).unwrap();

    assert_eq!(record.date, None);
    assert_eq!(event.location, "");
    assert_eq!(event.description, "");
    assert_eq!(
        (event.end_date_time - event.start_date_time).num_hours(),
        8
    );
}

#[test]
fn test_gibberish_parses_but_does_not_project() {
    let record = parse_shift_schedule("lorem ipsum\ndolor sit amet");
    assert!(record.is_empty());

    assert_eq!(
        create_event_from_shift(&record),
        Err(RosterError::MissingInput { field: "date" })
    );
}

#[test]
fn test_bad_month_in_roster_surfaces_invalid_month() {
    let roster = EXAMPLE_ROSTER.replace("Jan", "Jnx");
    let record = parse_shift_schedule(&roster);

    assert_eq!(record.date.as_deref(), Some("01/Jnx/2026"));
    assert_eq!(
        create_event_from_shift(&record),
        Err(RosterError::InvalidMonth {
            value: "Jnx".to_string()
        })
    );
}

#[test]
fn test_configured_projector_matches_default() {
    let config = ConfigLoader::load("./config/roster").unwrap();
    let record = parse_shift_schedule(EXAMPLE_ROSTER);

    assert_eq!(
        config.projector().project(&record),
        EventProjector::default().project(&record)
    );
}

// =============================================================================
// HTTP flow
// =============================================================================

#[tokio::test]
async fn test_parse_endpoint_example_roster() {
    let (status, json) = post(
        create_router_for_test(),
        "/parse",
        json!({ "text": EXAMPLE_ROSTER }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["parsed"]["day"], "Thursday");
    assert_eq!(json["parsed"]["breakStart"], "11:30 AM");
    assert_eq!(json["parsed"]["totalHours"], "7:30");
    assert_eq!(json["eventData"]["location"], "STRATH VILLAGE VIC");
    assert_eq!(json["eventData"]["endDateTime"], "2026-01-01T15:30:00+11:00");
}

#[tokio::test]
async fn test_parse_endpoint_invalid_time() {
    let roster = EXAMPLE_ROSTER.replace("3:30 PM", "half three");
    let (status, json) = post(create_router_for_test(), "/parse", json!({ "text": roster })).await;

    // The finish line no longer has a readable time, so no end time is recorded.
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "MISSING_INPUT");
}

#[tokio::test]
async fn test_parse_endpoint_nonexistent_date() {
    let roster = EXAMPLE_ROSTER.replace("01/Jan/2026", "31/Apr/2026");
    let (status, json) = post(create_router_for_test(), "/parse", json!({ "text": roster })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "NONEXISTENT_DATE");
}

#[tokio::test]
async fn test_parse_then_calendar_event_round_trip() {
    let (_, parsed) = post(
        create_router_for_test(),
        "/parse",
        json!({ "text": EXAMPLE_ROSTER }),
    )
    .await;

    let (status, json) = post(
        create_router_for_test(),
        "/calendar-event",
        json!({
            "calendarId": "primary",
            "eventDetails": parsed["eventData"],
            "attendees": ["sam@example.com", "SAM@example.com", ""]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let event = &json["event"];
    assert_eq!(event["summary"], "Work");
    assert_eq!(event["start"]["dateTime"], "2026-01-01T07:30:00+11:00");
    assert_eq!(event["end"]["timeZone"], "Australia/Melbourne");
    assert_eq!(event["attendees"].as_array().unwrap().len(), 1);
    assert_eq!(event["reminders"]["overrides"][0]["minutes"], 30);
}

#[tokio::test]
async fn test_calendar_event_missing_details() {
    let (status, json) = post(
        create_router_for_test(),
        "/calendar-event",
        json!({ "calendarId": "primary" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}
