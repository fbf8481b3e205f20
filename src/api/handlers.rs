//! HTTP request handlers for the attendance engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    SortField, SortOrder, calculate_daily_info, dashboard_summary, monthly_statement,
    payroll_summary, sort_records,
};
use crate::models::{AttendanceRecord, User, YearMonth};

use super::request::{
    CreateRecordRequest, CreateUserRequest, UpdateRecordRequest, UpdateUserRequest,
};
use super::response::{ApiError, ApiErrorResponse, AttendanceView, ReportLine};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/users", post(create_user).get(list_users))
        .route("/users/:id", put(update_user).delete(delete_user))
        .route("/users/:id/attendances", get(list_user_attendances))
        .route("/users/:id/summary", get(user_summary))
        .route("/attendances", post(create_record))
        .route("/attendances/:id", put(update_record))
        .route("/payroll", get(payroll))
        .route("/dashboard", get(dashboard))
        .route("/reports", get(reports))
        .with_state(state)
}

/// Query parameters selecting an optional month.
#[derive(Debug, Deserialize)]
struct MonthQuery {
    month: Option<String>,
}

/// Query parameters for record listings.
#[derive(Debug, Deserialize)]
struct ListQuery {
    month: Option<String>,
    sort: Option<SortField>,
    order: Option<SortOrder>,
}

/// Unwraps a JSON payload, mapping rejections to the error envelope.
fn parse_json<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    match payload {
        Ok(Json(req)) => Ok(req),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // The body text carries the detailed error from serde
                    let body_text = err.body_text();
                    warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err(ApiErrorResponse::bad_request(error))
        }
    }
}

/// Parses an optional `YYYY-MM` query value.
fn parse_month(month: Option<&str>) -> Result<Option<YearMonth>, ApiErrorResponse> {
    month
        .map(|m| m.parse::<YearMonth>().map_err(ApiErrorResponse::from))
        .transpose()
}

/// Parses a required `YYYY-MM` query value.
fn require_month(month: Option<&str>) -> Result<YearMonth, ApiErrorResponse> {
    parse_month(month)?.ok_or_else(|| {
        ApiErrorResponse::bad_request(ApiError::validation_error(
            "Query parameter 'month' is required",
        ))
    })
}

/// Handler for `POST /users`.
async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let request = parse_json(payload, correlation_id)?;
    request.validate()?;

    let user: User = request.into();
    let user = state.store().write().await.add_user(user);

    info!(
        correlation_id = %correlation_id,
        user_id = %user.id,
        role = ?user.role,
        "User created"
    );
    Ok((StatusCode::CREATED, Json(user)))
}

/// Handler for `GET /users`.
async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.store().read().await.users())
}

/// Handler for `PUT /users/{id}`.
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<User>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let request = parse_json(payload, correlation_id)?;
    request.validate()?;

    let mut store = state.store().write().await;
    let current = store.user(id)?;
    let updated = store.update_user(request.apply_to(current))?;

    info!(correlation_id = %correlation_id, user_id = %id, "User updated");
    Ok(Json(updated))
}

/// Handler for `DELETE /users/{id}`.
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiErrorResponse> {
    state.store().write().await.delete_user(id)?;
    info!(user_id = %id, "User deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for `GET /users/{id}/attendances`.
///
/// Lists one user's records with derived worked hours and salary,
/// optionally narrowed to a month and ordered by the requested field.
/// The default view is by date, most recent first.
async fn list_user_attendances(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<AttendanceView>>, ApiErrorResponse> {
    let month = parse_month(query.month.as_deref())?;

    let store = state.store().read().await;
    let user = store.user(id)?;
    let mut records = store.records_for_user(id, month);
    drop(store);

    let policy = state.policy();
    sort_records(
        &mut records,
        query.sort.unwrap_or_default(),
        query.order.unwrap_or_default(),
        Some(&user.pay),
        policy,
    );

    let views = records
        .into_iter()
        .map(|record| {
            let info = calculate_daily_info(&record, Some(&user.pay), policy);
            AttendanceView {
                record,
                work_hours: info.work_hours,
                daily_salary: info.daily_salary,
            }
        })
        .collect();

    Ok(Json(views))
}

/// Handler for `GET /users/{id}/summary`.
///
/// Returns the user's monthly statement: per-day derived lines, totals
/// and goal progress with the ring chart data.
async fn user_summary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<MonthQuery>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let month = require_month(query.month.as_deref())?;

    let store = state.store().read().await;
    let user = store.user(id)?;
    let records = store.records_for_user(id, Some(month));
    drop(store);

    let statement = monthly_statement(&user, &records, month, state.policy());

    info!(
        user_id = %id,
        month = %month,
        total_salary = %statement.total_salary,
        "Monthly statement computed"
    );
    Ok(Json(statement))
}

/// Handler for `POST /attendances`.
async fn create_record(
    State(state): State<AppState>,
    payload: Result<Json<CreateRecordRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let request = parse_json(payload, correlation_id)?;

    let record: AttendanceRecord = request.into();
    let record = state.store().write().await.add_record(record)?;

    info!(
        correlation_id = %correlation_id,
        record_id = %record.id,
        user_id = %record.user_id,
        date = %record.date,
        "Attendance record created"
    );
    Ok((StatusCode::CREATED, Json(record)))
}

/// Handler for `PUT /attendances/{id}`.
async fn update_record(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdateRecordRequest>, JsonRejection>,
) -> Result<Json<AttendanceRecord>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let request = parse_json(payload, correlation_id)?;

    let record = state
        .store()
        .write()
        .await
        .update_record(request.into_record(id))?;

    info!(correlation_id = %correlation_id, record_id = %id, "Attendance record updated");
    Ok(Json(record))
}

/// Handler for `GET /payroll`.
async fn payroll(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let month = require_month(query.month.as_deref())?;

    let store = state.store().read().await;
    let users = store.users();
    let records = store.records_for_month(month);
    drop(store);

    let summary = payroll_summary(&users, &records, month, state.policy());

    info!(
        month = %month,
        employees = summary.employees.len(),
        total_payroll = %summary.total_payroll,
        "Payroll computed"
    );
    Ok(Json(summary))
}

/// Handler for `GET /dashboard`.
async fn dashboard(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store().read().await;
    let users = store.users();
    let records = store.records();
    drop(store);

    Json(dashboard_summary(&users, &records, state.policy()))
}

/// Handler for `GET /reports`.
///
/// Lists submitted (non-empty) daily reports, most recent first,
/// optionally narrowed to a month.
async fn reports(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<Vec<ReportLine>>, ApiErrorResponse> {
    let month = parse_month(query.month.as_deref())?;

    let store = state.store().read().await;
    let names = store.user_names();
    let records = match month {
        Some(month) => store.records_for_month(month),
        None => store.records(),
    };
    drop(store);

    let mut lines: Vec<ReportLine> = records
        .into_iter()
        .filter(|r| !r.report.is_empty())
        .map(|r| ReportLine {
            record_id: r.id,
            user_id: r.user_id,
            user_name: names.get(&r.user_id).cloned().unwrap_or_default(),
            date: r.date,
            report: r.report,
        })
        .collect();
    lines.sort_by(|a, b| b.date.cmp(&a.date));

    Ok(Json(lines))
}
