//! JSON endpoints for test schedules, nested under `/api/schedules`.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    routing::get,
};

use super::error::ScheduleError;
use super::model::{CreateSchedule, ListParams, PaginatedResponse, Schedule, UpdateSchedule};
use super::service::ScheduleService;

pub fn build_router() -> Router<ScheduleService> {
    Router::new()
        .route("/", get(list_schedules).post(create_schedule))
        .route(
            "/{id}",
            get(get_schedule)
                .put(update_schedule)
                .delete(delete_schedule),
        )
}

fn parse_id(raw: &str) -> Result<i64, ScheduleError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or(ScheduleError::InvalidId)
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ScheduleError> {
    payload
        .map(|Json(value)| value)
        .map_err(|e| ScheduleError::InvalidRequest(e.body_text()))
}

/// GET / - List upcoming schedules
async fn list_schedules(
    State(service): State<ScheduleService>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<PaginatedResponse>, ScheduleError> {
    let Query(params) = params.map_err(|e| ScheduleError::InvalidRequest(e.body_text()))?;
    Ok(Json(service.list(&params).await?))
}

/// POST / - Create a schedule
async fn create_schedule(
    State(service): State<ScheduleService>,
    payload: Result<Json<CreateSchedule>, JsonRejection>,
) -> Result<(StatusCode, Json<Schedule>), ScheduleError> {
    let schedule = service.create(body(payload)?).await?;
    Ok((StatusCode::CREATED, Json(schedule)))
}

/// GET /{id} - Get a schedule
async fn get_schedule(
    State(service): State<ScheduleService>,
    Path(id): Path<String>,
) -> Result<Json<Schedule>, ScheduleError> {
    Ok(Json(service.get(parse_id(&id)?).await?))
}

/// PUT /{id} - Update a schedule
async fn update_schedule(
    State(service): State<ScheduleService>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateSchedule>, JsonRejection>,
) -> Result<Json<Schedule>, ScheduleError> {
    let id = parse_id(&id)?;
    Ok(Json(service.update(id, body(payload)?).await?))
}

/// DELETE /{id} - Delete an unbooked schedule
async fn delete_schedule(
    State(service): State<ScheduleService>,
    Path(id): Path<String>,
) -> Result<StatusCode, ScheduleError> {
    service.delete(parse_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
