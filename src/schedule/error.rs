use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the schedule service and API.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("schedule not found")]
    NotFound,
    #[error("schedule has registrations")]
    HasRegistrations,
    #[error("test date cannot be in the past")]
    PastDate,
    #[error("invalid schedule: {0}")]
    Invalid(&'static str),
    #[error("invalid schedule ID")]
    InvalidId,
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("invalid sort_by field. Valid fields are: date_time, available")]
    InvalidSortField,
    #[error("invalid sort_order. Valid values are: asc, desc")]
    InvalidSortOrder,
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl ScheduleError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::HasRegistrations => StatusCode::CONFLICT,
            Self::PastDate
            | Self::Invalid(_)
            | Self::InvalidId
            | Self::InvalidRequest(_)
            | Self::InvalidSortField
            | Self::InvalidSortOrder => StatusCode::BAD_REQUEST,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ScheduleError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(name: "schedule.storage_error", error = %self, "Schedule storage failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
