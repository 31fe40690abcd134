//! Schedule domain types and validation rules.

use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::error::ScheduleError;

/// Plots per day; the last three digits of a plot id.
pub const PLOTS_PER_DAY: i64 = 1000;

/// Default and maximum page sizes for listings.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// A test session ("plot") students can register for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Schedule {
    pub id: i64,
    /// `YYYYMMDD` followed by the three-digit order of the plot on that day.
    pub plot_id: i64,
    pub date_time: DateTime<Utc>,
    pub location: String,
    pub quota: i32,
    pub available: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Schedule {
    /// Seats already taken.
    pub fn booked(&self) -> i32 {
        self.quota - self.available
    }
}

/// First plot id of a day; the day's plots are `base + 1 ..= base + 999`.
pub fn plot_base(date: NaiveDate) -> i64 {
    let day = i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day());
    day * PLOTS_PER_DAY
}

/// Message for a day whose plot orders 1..=999 are all taken.
pub const NO_PLOTS_LEFT: &str = "no plots left for this date";

/// Next plot id after the day's highest one (`None` when the day is empty).
pub fn next_plot_id(base: i64, day_max: Option<i64>) -> Result<i64, ScheduleError> {
    let next = day_max.unwrap_or(base) + 1;
    if next - base >= PLOTS_PER_DAY {
        return Err(ScheduleError::Invalid(NO_PLOTS_LEFT));
    }
    Ok(next)
}

/// Validated input for inserting a schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSchedule {
    pub date_time: DateTime<Utc>,
    pub location: String,
    pub quota: i32,
}

/// Request body for creating a schedule.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateSchedule {
    pub date_time: DateTime<Utc>,
    pub location: String,
    pub quota: i32,
}

impl CreateSchedule {
    pub fn validate(self, today: NaiveDate) -> Result<NewSchedule, ScheduleError> {
        check_date(self.date_time, today)?;
        let location = check_location(&self.location)?;
        check_quota(self.quota)?;

        Ok(NewSchedule {
            date_time: self.date_time,
            location,
            quota: self.quota,
        })
    }
}

/// Request body for updating a schedule; absent fields stay unchanged.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UpdateSchedule {
    #[serde(default)]
    pub date_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub quota: Option<i32>,
}

impl UpdateSchedule {
    /// Validates the supplied fields and applies them to `schedule`.
    ///
    /// A quota change moves `available` by the same amount, and is rejected
    /// when fewer seats would remain than are already booked.
    pub fn apply(self, schedule: &mut Schedule, today: NaiveDate) -> Result<(), ScheduleError> {
        if let Some(date_time) = self.date_time {
            check_date(date_time, today)?;
            schedule.date_time = date_time;
        }
        if let Some(location) = &self.location {
            schedule.location = check_location(location)?;
        }
        if let Some(quota) = self.quota {
            check_quota(quota)?;
            let available = schedule.available + (quota - schedule.quota);
            if available < 0 {
                return Err(ScheduleError::Invalid(
                    "quota cannot be lower than the number of registrations",
                ));
            }
            schedule.quota = quota;
            schedule.available = available;
        }
        Ok(())
    }
}

fn check_date(date_time: DateTime<Utc>, today: NaiveDate) -> Result<(), ScheduleError> {
    if date_time.date_naive() < today {
        return Err(ScheduleError::PastDate);
    }
    Ok(())
}

fn check_location(location: &str) -> Result<String, ScheduleError> {
    let trimmed = location.trim();
    if trimmed.is_empty() {
        return Err(ScheduleError::Invalid("location is required"));
    }
    Ok(trimmed.to_string())
}

fn check_quota(quota: i32) -> Result<(), ScheduleError> {
    if quota <= 0 {
        return Err(ScheduleError::Invalid("quota must be greater than 0"));
    }
    Ok(())
}

/// Listing sort key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortBy {
    #[default]
    DateTime,
    Available,
}

impl SortBy {
    pub fn column(self) -> &'static str {
        match self {
            Self::DateTime => "date_time",
            Self::Available => "available",
        }
    }
}

impl FromStr for SortBy {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date_time" => Ok(Self::DateTime),
            "available" => Ok(Self::Available),
            _ => Err(ScheduleError::InvalidSortField),
        }
    }
}

/// Listing sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(ScheduleError::InvalidSortOrder),
        }
    }
}

/// Raw listing query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// Normalised listing query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub page_size: u32,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
        }
    }
}

impl ListQuery {
    /// Unparseable or zero page numbers fall back to the defaults; unknown
    /// sort keys are rejected.
    pub fn from_params(params: &ListParams) -> Result<Self, ScheduleError> {
        let page = params
            .page
            .as_deref()
            .and_then(|p| p.parse::<u32>().ok())
            .filter(|p| *p > 0)
            .unwrap_or(1);
        let page_size = params
            .page_size
            .as_deref()
            .and_then(|p| p.parse::<u32>().ok())
            .filter(|p| *p > 0)
            .map_or(DEFAULT_PAGE_SIZE, |p| p.min(MAX_PAGE_SIZE));
        let sort_by = params.sort_by.as_deref().map_or(Ok(SortBy::default()), str::parse)?;
        let sort_order = params
            .sort_order
            .as_deref()
            .map_or(Ok(SortOrder::default()), str::parse)?;

        Ok(Self {
            page,
            page_size,
            sort_by,
            sort_order,
        })
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.page_size)
    }
}

/// One page of schedules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedResponse {
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u64,
    pub total_items: u64,
    pub data: Vec<Schedule>,
}

impl PaginatedResponse {
    pub fn new(query: &ListQuery, total_items: u64, data: Vec<Schedule>) -> Self {
        Self {
            page: query.page,
            page_size: query.page_size,
            total_pages: total_items.div_ceil(u64::from(query.page_size)),
            total_items,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 8, 0, 0).unwrap()
    }

    fn schedule(quota: i32, available: i32) -> Schedule {
        Schedule {
            id: 1,
            plot_id: 20_250_510_001,
            date_time: at(2025, 5, 10),
            location: "Lab Bahasa".into(),
            quota,
            available,
            created_at: at(2025, 4, 1),
            updated_at: at(2025, 4, 1),
        }
    }

    #[test]
    fn plot_base_encodes_date() {
        assert_eq!(plot_base(today()), 20_250_501_000);
        assert_eq!(plot_base(today()) + 1, 20_250_501_001);
    }

    #[test]
    fn next_plot_id_stops_at_order_999() {
        let base = plot_base(today());
        assert_eq!(next_plot_id(base, None).unwrap(), base + 1);
        assert_eq!(next_plot_id(base, Some(base + 998)).unwrap(), base + 999);
        assert!(matches!(
            next_plot_id(base, Some(base + 999)),
            Err(ScheduleError::Invalid(NO_PLOTS_LEFT))
        ));
    }

    #[test]
    fn create_accepts_today_and_trims_location() {
        let new = CreateSchedule {
            date_time: at(2025, 5, 1),
            location: "  Gedung A  ".into(),
            quota: 30,
        }
        .validate(today())
        .unwrap();
        assert_eq!(new.location, "Gedung A");
    }

    #[test]
    fn create_rejects_past_blank_and_zero_quota() {
        let past = CreateSchedule {
            date_time: at(2025, 4, 30),
            location: "A".into(),
            quota: 1,
        };
        assert!(matches!(past.validate(today()), Err(ScheduleError::PastDate)));

        let blank = CreateSchedule {
            date_time: at(2025, 5, 2),
            location: "   ".into(),
            quota: 1,
        };
        assert!(matches!(blank.validate(today()), Err(ScheduleError::Invalid(_))));

        let zero = CreateSchedule {
            date_time: at(2025, 5, 2),
            location: "A".into(),
            quota: 0,
        };
        assert!(matches!(zero.validate(today()), Err(ScheduleError::Invalid(_))));
    }

    #[test]
    fn update_changes_only_supplied_fields() {
        let mut s = schedule(30, 30);
        UpdateSchedule {
            location: Some("Aula".into()),
            ..Default::default()
        }
        .apply(&mut s, today())
        .unwrap();
        assert_eq!(s.location, "Aula");
        assert_eq!(s.quota, 30);
        assert_eq!(s.date_time, at(2025, 5, 10));
    }

    #[test]
    fn quota_change_shifts_available() {
        let mut s = schedule(30, 20);
        UpdateSchedule {
            quota: Some(40),
            ..Default::default()
        }
        .apply(&mut s, today())
        .unwrap();
        assert_eq!((s.quota, s.available), (40, 30));

        let err = UpdateSchedule {
            quota: Some(5),
            ..Default::default()
        }
        .apply(&mut s, today())
        .unwrap_err();
        assert!(matches!(err, ScheduleError::Invalid(_)));
        assert_eq!((s.quota, s.available), (40, 30));
    }

    #[test]
    fn update_rejects_moving_into_the_past() {
        let mut s = schedule(30, 30);
        let err = UpdateSchedule {
            date_time: Some(at(2025, 5, 1) - Duration::days(2)),
            ..Default::default()
        }
        .apply(&mut s, today())
        .unwrap_err();
        assert!(matches!(err, ScheduleError::PastDate));
    }

    #[test]
    fn list_query_defaults_and_caps() {
        let q = ListQuery::from_params(&ListParams::default()).unwrap();
        assert_eq!(q, ListQuery::default());

        let q = ListQuery::from_params(&ListParams {
            page: Some("0".into()),
            page_size: Some("500".into()),
            sort_by: Some("available".into()),
            sort_order: Some("desc".into()),
        })
        .unwrap();
        assert_eq!(q.page, 1);
        assert_eq!(q.page_size, MAX_PAGE_SIZE);
        assert_eq!(q.sort_by, SortBy::Available);
        assert_eq!(q.sort_order, SortOrder::Desc);

        let q = ListQuery::from_params(&ListParams {
            page: Some("3".into()),
            page_size: Some("abc".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(q.offset(), 20);
        assert_eq!(q.limit(), 10);
    }

    #[test]
    fn list_query_rejects_unknown_sort() {
        let err = ListQuery::from_params(&ListParams {
            sort_by: Some("location".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidSortField));

        let err = ListQuery::from_params(&ListParams {
            sort_order: Some("up".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidSortOrder));
    }

    #[test]
    fn total_pages_rounds_up() {
        let q = ListQuery::default();
        assert_eq!(PaginatedResponse::new(&q, 0, vec![]).total_pages, 0);
        assert_eq!(PaginatedResponse::new(&q, 10, vec![]).total_pages, 1);
        assert_eq!(PaginatedResponse::new(&q, 11, vec![]).total_pages, 2);
    }
}
