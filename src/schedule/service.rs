use std::sync::Arc;

use chrono::Utc;

use super::error::ScheduleError;
use super::model::{
    CreateSchedule, ListParams, ListQuery, PaginatedResponse, Schedule, UpdateSchedule,
};
use super::persistence::ScheduleRepository;

/// Schedule business rules on top of a [`ScheduleRepository`].
#[derive(Debug, Clone)]
pub struct ScheduleService {
    repo: Arc<dyn ScheduleRepository>,
}

impl ScheduleService {
    pub fn new(repo: Arc<dyn ScheduleRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, req: CreateSchedule) -> Result<Schedule, ScheduleError> {
        let new = req.validate(Utc::now().date_naive())?;
        let schedule = self.repo.create(new).await?;
        tracing::info!(
            name: "schedule.created",
            id = schedule.id,
            plot_id = schedule.plot_id,
            quota = schedule.quota,
            "Schedule created"
        );
        Ok(schedule)
    }

    pub async fn get(&self, id: i64) -> Result<Schedule, ScheduleError> {
        self.repo.get(id).await?.ok_or(ScheduleError::NotFound)
    }

    pub async fn update(&self, id: i64, req: UpdateSchedule) -> Result<Schedule, ScheduleError> {
        let mut schedule = self.get(id).await?;
        req.apply(&mut schedule, Utc::now().date_naive())?;
        let updated = self.repo.update(&schedule).await?;
        tracing::info!(
            name: "schedule.updated",
            id = updated.id,
            quota = updated.quota,
            available = updated.available,
            "Schedule updated"
        );
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ScheduleError> {
        self.get(id).await?;
        if !self.repo.delete_unbooked(id).await? {
            return Err(ScheduleError::HasRegistrations);
        }
        tracing::info!(name: "schedule.deleted", id, "Schedule deleted");
        Ok(())
    }

    pub async fn list(&self, params: &ListParams) -> Result<PaginatedResponse, ScheduleError> {
        let query = ListQuery::from_params(params)?;
        let (data, total) = self.repo.list_upcoming(Utc::now(), &query).await?;
        Ok(PaginatedResponse::new(&query, total, data))
    }
}
