//! TOEFL test schedules ("plots").
//!
//! - [`model`]: schedule types, validation and listing parameters
//! - [`persistence`]: repository trait with in-memory and Postgres stores
//! - [`service`]: business rules (quota bookkeeping, delete guard)
//! - [`api`]: Axum JSON routes

pub mod api;
pub mod error;
pub mod model;
pub mod persistence;
pub mod service;

pub use error::ScheduleError;
pub use model::{CreateSchedule, PaginatedResponse, Schedule, UpdateSchedule};
pub use persistence::{InMemoryScheduleStore, PostgresScheduleStore, ScheduleRepository};
pub use service::ScheduleService;
