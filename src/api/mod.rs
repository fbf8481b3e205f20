//! HTTP API module for the attendance engine.
//!
//! This module provides the REST endpoints for managing users and
//! attendance records and for reading the derived monthly, payroll and
//! dashboard views.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CreateRecordRequest, CreateUserRequest, UpdateRecordRequest, UpdateUserRequest};
pub use response::{ApiError, AttendanceView, ReportLine};
pub use state::AppState;
