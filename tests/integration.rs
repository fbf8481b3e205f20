//! Comprehensive integration tests for the attendance engine API.
//!
//! This test suite covers the full request flow:
//! - User account management
//! - Attendance record creation and correction
//! - Derived listings (filtering, sorting)
//! - Monthly statements with goal progress
//! - Payroll and dashboard aggregates
//! - Daily report listings
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use attendance_engine::api::{AppState, create_router};
use attendance_engine::config::PayPolicy;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_router() -> Router {
    create_router(AppState::new(PayPolicy::default()))
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Parses a Decimal out of a JSON string value.
fn decimal_field(value: &Value) -> Decimal {
    Decimal::from_str(value.as_str().expect("expected a decimal string")).unwrap()
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json");
    let request = match body {
        Some(body) => builder.body(Body::from(body.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create_user(router: &Router, body: Value) -> String {
    let (status, body) = send(router, "POST", "/users", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

async fn create_record(
    router: &Router,
    user_id: &str,
    date: &str,
    start: &str,
    end: &str,
    break_minutes: u32,
    report: &str,
) -> String {
    let (status, body) = send(
        router,
        "POST",
        "/attendances",
        Some(json!({
            "user_id": user_id,
            "date": date,
            "start_time": format!("{date}T{start}:00"),
            "end_time": format!("{date}T{end}:00"),
            "break_minutes": break_minutes,
            "report": report
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create record failed: {body}");
    body["id"].as_str().unwrap().to_string()
}

fn hourly_user(name: &str, rate: &str) -> Value {
    json!({
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "role": "USER",
        "pay_type": "HOURLY",
        "pay_rate": rate
    })
}

fn monthly_user(name: &str, rate: &str) -> Value {
    json!({
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "role": "USER",
        "pay_type": "MONTHLY",
        "pay_rate": rate
    })
}

// =============================================================================
// Attendance derivation through the API
// =============================================================================

#[tokio::test]
async fn test_plain_day_derives_hours_and_salary() {
    let router = create_test_router();
    let user = create_user(&router, hourly_user("Sato", "1500")).await;
    create_record(&router, &user, "2025-03-10", "09:00", "18:00", 60, "").await;

    let (status, body) = send(
        &router,
        "GET",
        &format!("/users/{user}/attendances?month=2025-03"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let views = body.as_array().unwrap();
    assert_eq!(views.len(), 1);
    assert_eq!(decimal_field(&views[0]["work_hours"]), dec("8"));
    assert_eq!(decimal_field(&views[0]["daily_salary"]), dec("12000"));
}

#[tokio::test]
async fn test_midnight_crossing_shift_counts_eight_hours() {
    let router = create_test_router();
    let user = create_user(&router, hourly_user("Sato", "1500")).await;
    create_record(&router, &user, "2025-03-10", "22:00", "06:00", 0, "").await;

    let (_, body) = send(
        &router,
        "GET",
        &format!("/users/{user}/attendances?month=2025-03"),
        None,
    )
    .await;

    assert_eq!(decimal_field(&body[0]["work_hours"]), dec("8"));
}

#[tokio::test]
async fn test_break_longer_than_shift_clamps_to_zero() {
    let router = create_test_router();
    let user = create_user(&router, hourly_user("Sato", "1500")).await;
    create_record(&router, &user, "2025-03-10", "09:00", "10:00", 120, "").await;

    let (_, body) = send(
        &router,
        "GET",
        &format!("/users/{user}/attendances?month=2025-03"),
        None,
    )
    .await;

    assert_eq!(decimal_field(&body[0]["work_hours"]), Decimal::ZERO);
    assert_eq!(decimal_field(&body[0]["daily_salary"]), Decimal::ZERO);
}

#[tokio::test]
async fn test_monthly_pay_yields_daily_share_per_worked_day() {
    let router = create_test_router();
    let user = create_user(&router, monthly_user("Suzuki", "330000")).await;
    create_record(&router, &user, "2025-03-10", "09:00", "18:00", 60, "").await;
    create_record(&router, &user, "2025-03-11", "09:00", "10:00", 0, "").await;

    let (_, body) = send(
        &router,
        "GET",
        &format!("/users/{user}/summary?month=2025-03"),
        None,
    )
    .await;

    // Two worked days at 330000 / 22 each.
    assert_eq!(decimal_field(&body["total_salary"]), dec("30000"));
}

// =============================================================================
// Filtering and sorting
// =============================================================================

#[tokio::test]
async fn test_listing_filters_by_user_and_month() {
    let router = create_test_router();
    let sato = create_user(&router, hourly_user("Sato", "1500")).await;
    let suzuki = create_user(&router, hourly_user("Suzuki", "1200")).await;

    create_record(&router, &sato, "2025-03-03", "09:00", "17:00", 0, "").await;
    create_record(&router, &sato, "2025-02-27", "09:00", "17:00", 0, "").await;
    create_record(&router, &sato, "2025-03-20", "09:00", "17:00", 0, "").await;
    create_record(&router, &suzuki, "2025-03-05", "09:00", "17:00", 0, "").await;

    let (_, body) = send(
        &router,
        "GET",
        &format!("/users/{sato}/attendances?month=2025-03"),
        None,
    )
    .await;

    let views = body.as_array().unwrap();
    assert_eq!(views.len(), 2);
    // Default order: date descending.
    assert_eq!(views[0]["date"], "2025-03-20");
    assert_eq!(views[1]["date"], "2025-03-03");
}

#[tokio::test]
async fn test_listing_sorts_by_work_hours_ascending() {
    let router = create_test_router();
    let user = create_user(&router, hourly_user("Sato", "1500")).await;
    create_record(&router, &user, "2025-03-03", "09:00", "18:00", 0, "").await; // 9h
    create_record(&router, &user, "2025-03-04", "09:00", "13:00", 0, "").await; // 4h
    create_record(&router, &user, "2025-03-05", "09:00", "16:00", 0, "").await; // 7h

    let (_, body) = send(
        &router,
        "GET",
        &format!("/users/{user}/attendances?month=2025-03&sort=work_hours&order=ascending"),
        None,
    )
    .await;

    let dates: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2025-03-04", "2025-03-05", "2025-03-03"]);
}

// =============================================================================
// Monthly statements and goal progress
// =============================================================================

#[tokio::test]
async fn test_statement_with_explicit_goal_reports_progress() {
    let router = create_test_router();
    let mut user_body = hourly_user("Sato", "1500");
    user_body["goal"] = json!("300000");
    let user = create_user(&router, user_body).await;

    // 100 hours at 1500 = 150000, half the goal.
    for day in 1..=10 {
        create_record(
            &router,
            &user,
            &format!("2025-03-{day:02}"),
            "08:00",
            "18:00",
            0,
            "",
        )
        .await;
    }

    let (_, body) = send(
        &router,
        "GET",
        &format!("/users/{user}/summary?month=2025-03"),
        None,
    )
    .await;

    assert_eq!(decimal_field(&body["total_salary"]), dec("150000"));
    assert_eq!(body["goal"]["percentage"], 50);
    assert_eq!(decimal_field(&body["goal"]["remaining"]), dec("150000"));
    let ring = body["goal"]["ring"].as_array().unwrap();
    assert_eq!(ring.len(), 2);
    assert_eq!(ring[0]["label"], "achieved");
    assert_eq!(ring[1]["label"], "remaining");
}

#[tokio::test]
async fn test_statement_derives_default_goal_for_hourly_user() {
    let router = create_test_router();
    let user = create_user(&router, hourly_user("Sato", "2000")).await;

    let (_, body) = send(
        &router,
        "GET",
        &format!("/users/{user}/summary?month=2025-03"),
        None,
    )
    .await;

    // 2000 * 8 hours * 22 days
    assert_eq!(decimal_field(&body["goal"]["goal"]), dec("352000"));
}

#[tokio::test]
async fn test_statement_derives_default_goal_for_monthly_user() {
    let router = create_test_router();
    let user = create_user(&router, monthly_user("Suzuki", "330000")).await;

    let (_, body) = send(
        &router,
        "GET",
        &format!("/users/{user}/summary?month=2025-03"),
        None,
    )
    .await;

    assert_eq!(decimal_field(&body["goal"]["goal"]), dec("330000"));
}

#[tokio::test]
async fn test_statement_without_any_goal_has_undefined_percentage() {
    // A zero pay rate derives a zero default goal: no target at all.
    let router = create_test_router();
    let user = create_user(&router, hourly_user("Sato", "0")).await;
    create_record(&router, &user, "2025-03-10", "09:00", "17:00", 0, "").await;

    let (_, body) = send(
        &router,
        "GET",
        &format!("/users/{user}/summary?month=2025-03"),
        None,
    )
    .await;

    assert!(body["goal"]["percentage"].is_null());
    let ring = body["goal"]["ring"].as_array().unwrap();
    assert_eq!(ring.len(), 1);
    // Zero achieved keeps a unit-sized ring so charts never divide by zero.
    assert_eq!(decimal_field(&ring[0]["value"]), Decimal::ONE);
}

#[tokio::test]
async fn test_statement_goal_can_exceed_one_hundred_percent() {
    let router = create_test_router();
    let mut user_body = hourly_user("Sato", "1500");
    user_body["goal"] = json!("10000");
    let user = create_user(&router, user_body).await;
    create_record(&router, &user, "2025-03-10", "09:00", "17:00", 0, "").await; // 12000

    let (_, body) = send(
        &router,
        "GET",
        &format!("/users/{user}/summary?month=2025-03"),
        None,
    )
    .await;

    assert_eq!(body["goal"]["percentage"], 120);
    assert_eq!(decimal_field(&body["goal"]["remaining"]), Decimal::ZERO);
}

#[tokio::test]
async fn test_updating_goal_changes_statement() {
    let router = create_test_router();
    let user = create_user(&router, hourly_user("Sato", "1500")).await;

    let (status, _) = send(
        &router,
        "PUT",
        &format!("/users/{user}"),
        Some(json!({
            "name": "Sato",
            "email": "sato@example.com",
            "role": "USER",
            "pay_type": "HOURLY",
            "pay_rate": "1500",
            "goal": "99000"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(
        &router,
        "GET",
        &format!("/users/{user}/summary?month=2025-03"),
        None,
    )
    .await;
    assert_eq!(decimal_field(&body["goal"]["goal"]), dec("99000"));
}

// =============================================================================
// Record correction
// =============================================================================

#[tokio::test]
async fn test_updating_record_changes_derived_values() {
    let router = create_test_router();
    let user = create_user(&router, hourly_user("Sato", "1500")).await;
    let record = create_record(&router, &user, "2025-03-10", "09:00", "17:00", 0, "").await;

    let (status, _) = send(
        &router,
        "PUT",
        &format!("/attendances/{record}"),
        Some(json!({
            "date": "2025-03-10",
            "start_time": "2025-03-10T09:00:00",
            "end_time": "2025-03-10T13:00:00",
            "break_minutes": 0,
            "report": "Half day."
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(
        &router,
        "GET",
        &format!("/users/{user}/summary?month=2025-03"),
        None,
    )
    .await;
    assert_eq!(decimal_field(&body["total_hours"]), dec("4"));
    assert_eq!(decimal_field(&body["total_salary"]), dec("6000"));
}

#[tokio::test]
async fn test_updating_unknown_record_returns_404() {
    let router = create_test_router();
    let (status, body) = send(
        &router,
        "PUT",
        &format!("/attendances/{}", uuid::Uuid::new_v4()),
        Some(json!({
            "date": "2025-03-10",
            "start_time": "2025-03-10T09:00:00",
            "end_time": "2025-03-10T17:00:00",
            "break_minutes": 0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "RECORD_NOT_FOUND");
}

// =============================================================================
// Payroll and dashboard
// =============================================================================

#[tokio::test]
async fn test_payroll_sums_employees_and_excludes_admins() {
    let router = create_test_router();
    let admin = create_user(
        &router,
        json!({
            "name": "Admin",
            "email": "admin@example.com",
            "role": "ADMIN",
            "pay_type": "MONTHLY",
            "pay_rate": "500000"
        }),
    )
    .await;
    let sato = create_user(&router, hourly_user("Sato", "1500")).await;
    let suzuki = create_user(&router, monthly_user("Suzuki", "330000")).await;

    create_record(&router, &admin, "2025-03-10", "09:00", "17:00", 0, "").await;
    create_record(&router, &sato, "2025-03-10", "09:00", "17:00", 0, "").await; // 12000
    create_record(&router, &suzuki, "2025-03-10", "09:00", "17:00", 0, "").await; // 15000
    create_record(&router, &suzuki, "2025-04-01", "09:00", "17:00", 0, "").await; // other month

    let (status, body) = send(&router, "GET", "/payroll?month=2025-03", None).await;
    assert_eq!(status, StatusCode::OK);

    let employees = body["employees"].as_array().unwrap();
    assert_eq!(employees.len(), 2);
    assert_eq!(decimal_field(&body["total_payroll"]), dec("27000"));
}

#[tokio::test]
async fn test_dashboard_aggregates_all_time() {
    let router = create_test_router();
    let sato = create_user(&router, hourly_user("Sato", "1000")).await;
    create_record(&router, &sato, "2025-02-10", "09:00", "17:00", 0, "").await; // 8h
    create_record(&router, &sato, "2025-03-10", "09:00", "13:00", 0, "").await; // 4h

    let (status, body) = send(&router, "GET", "/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["active_employees"], 1);
    assert_eq!(decimal_field(&body["total_hours"]), dec("12"));
    assert_eq!(decimal_field(&body["total_salary"]), dec("12000"));
}

#[tokio::test]
async fn test_deleting_user_removes_their_records() {
    let router = create_test_router();
    let sato = create_user(&router, hourly_user("Sato", "1000")).await;
    create_record(&router, &sato, "2025-03-10", "09:00", "17:00", 0, "").await;

    let (status, _) = send(&router, "DELETE", &format!("/users/{sato}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(
        &router,
        "GET",
        &format!("/users/{sato}/summary?month=2025-03"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "USER_NOT_FOUND");

    let (_, body) = send(&router, "GET", "/dashboard", None).await;
    assert_eq!(body["active_employees"], 0);
    assert_eq!(decimal_field(&body["total_hours"]), Decimal::ZERO);
}

// =============================================================================
// Daily reports
// =============================================================================

#[tokio::test]
async fn test_reports_list_submitted_text_most_recent_first() {
    let router = create_test_router();
    let sato = create_user(&router, hourly_user("Sato", "1500")).await;
    create_record(
        &router,
        &sato,
        "2025-03-10",
        "09:00",
        "17:00",
        0,
        "Closed out the March invoices.",
    )
    .await;
    create_record(&router, &sato, "2025-03-11", "09:00", "17:00", 0, "").await;
    create_record(
        &router,
        &sato,
        "2025-03-12",
        "09:00",
        "17:00",
        0,
        "Prepared the client demo.",
    )
    .await;

    let (status, body) = send(&router, "GET", "/reports?month=2025-03", None).await;
    assert_eq!(status, StatusCode::OK);

    let lines = body.as_array().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["date"], "2025-03-12");
    assert_eq!(lines[0]["user_name"], "Sato");
    assert_eq!(lines[1]["report"], "Closed out the March invoices.");
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_malformed_record_date_returns_400() {
    let router = create_test_router();
    let user = create_user(&router, hourly_user("Sato", "1500")).await;

    let (status, _) = send(
        &router,
        "POST",
        "/attendances",
        Some(json!({
            "user_id": user,
            "date": "not-a-date",
            "start_time": "2025-03-10T09:00:00",
            "end_time": "2025-03-10T17:00:00",
            "break_minutes": 0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_field_mentions_the_field() {
    let router = create_test_router();
    let (status, body) = send(
        &router,
        "POST",
        "/users",
        Some(json!({
            "email": "sato@example.com",
            "role": "USER",
            "pay_type": "HOURLY",
            "pay_rate": "1500"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap();
    assert!(
        message.contains("missing field") || message.contains("name"),
        "Expected error message to mention the missing field, got: {message}"
    );
}

#[tokio::test]
async fn test_repeated_summary_requests_are_identical() {
    let router = create_test_router();
    let user = create_user(&router, hourly_user("Sato", "1375")).await;
    create_record(&router, &user, "2025-03-10", "22:00", "06:30", 45, "").await;

    let (_, first) = send(
        &router,
        "GET",
        &format!("/users/{user}/summary?month=2025-03"),
        None,
    )
    .await;
    let (_, second) = send(
        &router,
        "GET",
        &format!("/users/{user}/summary?month=2025-03"),
        None,
    )
    .await;

    assert_eq!(first, second);
}
