use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::error::ScheduleError;
use super::model::{ListQuery, NewSchedule, Schedule};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryScheduleStore;
pub use postgres::PostgresScheduleStore;

#[async_trait]
pub trait ScheduleRepository: Send + Sync + std::fmt::Debug {
    /// Insert a schedule with every seat available and the next free plot id
    /// for its day.
    async fn create(&self, schedule: NewSchedule) -> Result<Schedule, ScheduleError>;

    async fn get(&self, id: i64) -> Result<Option<Schedule>, ScheduleError>;

    /// Persist mutable fields and bump `updated_at`.
    async fn update(&self, schedule: &Schedule) -> Result<Schedule, ScheduleError>;

    /// Delete a schedule nobody has booked. Returns `false` when the schedule
    /// is missing or has registrations.
    async fn delete_unbooked(&self, id: i64) -> Result<bool, ScheduleError>;

    /// One page of schedules at or after `now`, plus the total match count.
    async fn list_upcoming(
        &self,
        now: DateTime<Utc>,
        query: &ListQuery,
    ) -> Result<(Vec<Schedule>, u64), ScheduleError>;
}
