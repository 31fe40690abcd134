use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::ScheduleRepository;
use crate::schedule::error::ScheduleError;
use crate::schedule::model::{
    ListQuery, NO_PLOTS_LEFT, NewSchedule, PLOTS_PER_DAY, Schedule, plot_base,
};

const COLUMNS: &str = "id, plot_id, date_time, location, quota, available, created_at, updated_at";

#[derive(Debug)]
pub struct PostgresScheduleStore {
    pool: PgPool,
}

impl PostgresScheduleStore {
    pub async fn new(connection_string: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(connection_string)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl ScheduleRepository for PostgresScheduleStore {
    async fn create(&self, schedule: NewSchedule) -> Result<Schedule, ScheduleError> {
        let base = plot_base(schedule.date_time.date_naive());

        // The plot order is derived from the day's highest plot id; the
        // UNIQUE constraint rejects a concurrent duplicate. No row comes back
        // once the day's last order is taken.
        let created = sqlx::query_as::<_, Schedule>(&format!(
            r#"
            INSERT INTO schedules (plot_id, date_time, location, quota, available)
            SELECT COALESCE(MAX(plot_id), $1) + 1, $2, $3, $4, $4
            FROM schedules
            WHERE plot_id > $1 AND plot_id < $1 + $5
            HAVING COALESCE(MAX(plot_id), $1) + 1 < $1 + $5
            RETURNING {COLUMNS}
            "#
        ))
        .bind(base)
        .bind(schedule.date_time)
        .bind(&schedule.location)
        .bind(schedule.quota)
        .bind(PLOTS_PER_DAY)
        .fetch_optional(&self.pool)
        .await?;

        created.ok_or(ScheduleError::Invalid(NO_PLOTS_LEFT))
    }

    async fn get(&self, id: i64) -> Result<Option<Schedule>, ScheduleError> {
        let schedule =
            sqlx::query_as::<_, Schedule>(&format!("SELECT {COLUMNS} FROM schedules WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(schedule)
    }

    async fn update(&self, schedule: &Schedule) -> Result<Schedule, ScheduleError> {
        let updated = sqlx::query_as::<_, Schedule>(&format!(
            r#"
            UPDATE schedules
            SET date_time = $2, location = $3, quota = $4, available = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(schedule.id)
        .bind(schedule.date_time)
        .bind(&schedule.location)
        .bind(schedule.quota)
        .bind(schedule.available)
        .fetch_optional(&self.pool)
        .await?;

        updated.ok_or(ScheduleError::NotFound)
    }

    async fn delete_unbooked(&self, id: i64) -> Result<bool, ScheduleError> {
        let result = sqlx::query("DELETE FROM schedules WHERE id = $1 AND available = quota")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_upcoming(
        &self,
        now: DateTime<Utc>,
        query: &ListQuery,
    ) -> Result<(Vec<Schedule>, u64), ScheduleError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM schedules WHERE date_time >= $1")
            .bind(now)
            .fetch_one(&self.pool)
            .await?;

        // Column and direction come from closed enums, never from raw input.
        let rows = sqlx::query_as::<_, Schedule>(&format!(
            "SELECT {COLUMNS} FROM schedules WHERE date_time >= $1 ORDER BY {} {}, id ASC LIMIT $2 OFFSET $3",
            query.sort_by.column(),
            query.sort_order.keyword(),
        ))
        .bind(now)
        .bind(query.limit())
        .bind(query.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok((rows, u64::try_from(total).unwrap_or_default()))
    }
}
