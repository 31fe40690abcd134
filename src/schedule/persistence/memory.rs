use std::cmp::Ordering;
use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::ScheduleRepository;
use crate::schedule::error::ScheduleError;
use crate::schedule::model::{
    ListQuery, NewSchedule, PLOTS_PER_DAY, Schedule, SortBy, SortOrder, next_plot_id, plot_base,
};

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    schedules: BTreeMap<i64, Schedule>,
}

/// Process-local store used when no database is configured.
#[derive(Debug, Default)]
pub struct InMemoryScheduleStore {
    inner: RwLock<Inner>,
}

impl InMemoryScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn compare(a: &Schedule, b: &Schedule, query: &ListQuery) -> Ordering {
    let primary = match query.sort_by {
        SortBy::DateTime => a.date_time.cmp(&b.date_time),
        SortBy::Available => a.available.cmp(&b.available),
    };
    let primary = match query.sort_order {
        SortOrder::Asc => primary,
        SortOrder::Desc => primary.reverse(),
    };
    primary.then(a.id.cmp(&b.id))
}

#[async_trait]
impl ScheduleRepository for InMemoryScheduleStore {
    async fn create(&self, schedule: NewSchedule) -> Result<Schedule, ScheduleError> {
        let mut inner = self.inner.write().await;

        let base = plot_base(schedule.date_time.date_naive());
        let day_max = inner
            .schedules
            .values()
            .map(|s| s.plot_id)
            .filter(|p| (base..base + PLOTS_PER_DAY).contains(p))
            .max();
        let plot_id = next_plot_id(base, day_max)?;

        inner.next_id += 1;
        let now = Utc::now();
        let created = Schedule {
            id: inner.next_id,
            plot_id,
            date_time: schedule.date_time,
            location: schedule.location,
            quota: schedule.quota,
            available: schedule.quota,
            created_at: now,
            updated_at: now,
        };
        inner.schedules.insert(created.id, created.clone());
        Ok(created)
    }

    async fn get(&self, id: i64) -> Result<Option<Schedule>, ScheduleError> {
        Ok(self.inner.read().await.schedules.get(&id).cloned())
    }

    async fn update(&self, schedule: &Schedule) -> Result<Schedule, ScheduleError> {
        let mut inner = self.inner.write().await;
        let stored = inner
            .schedules
            .get_mut(&schedule.id)
            .ok_or(ScheduleError::NotFound)?;

        stored.date_time = schedule.date_time;
        stored.location.clone_from(&schedule.location);
        stored.quota = schedule.quota;
        stored.available = schedule.available;
        stored.updated_at = Utc::now();
        Ok(stored.clone())
    }

    async fn delete_unbooked(&self, id: i64) -> Result<bool, ScheduleError> {
        let mut inner = self.inner.write().await;
        match inner.schedules.get(&id) {
            Some(s) if s.booked() == 0 => {
                inner.schedules.remove(&id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn list_upcoming(
        &self,
        now: DateTime<Utc>,
        query: &ListQuery,
    ) -> Result<(Vec<Schedule>, u64), ScheduleError> {
        let inner = self.inner.read().await;
        let mut upcoming: Vec<&Schedule> = inner
            .schedules
            .values()
            .filter(|s| s.date_time >= now)
            .collect();
        upcoming.sort_by(|a, b| compare(a, b, query));

        let total = upcoming.len() as u64;
        let offset = usize::try_from(query.offset()).unwrap_or(usize::MAX);
        let page = upcoming
            .into_iter()
            .skip(offset)
            .take(query.page_size as usize)
            .cloned()
            .collect();
        Ok((page, total))
    }
}
