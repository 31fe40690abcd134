//! UNW TOEFL registration portal
//!
//! Server-rendered student portal for TOEFL test registration: a login page,
//! a protected application shell with a collapsible sidebar, and the JSON
//! API for test schedules.
//!
//! # Architecture
//!
//! - **Server**: Axum router with tracing, CORS and request timeouts
//! - **UI**: Leptos SSR components in ShadCN style, plain script for the sidebar toggle
//! - **Storage**: schedule repository over Postgres (`sqlx`) or in memory
//!
//! # Modules
//!
//! - [`config`]: Layered configuration (defaults, YAML, environment, CLI)
//! - [`domain`]: Student, registration, payment and score types
//! - [`portal`]: Navigation and user data the shell renders
//! - [`schedule`]: Test schedule model, storage, service and API
//! - [`ui`]: Components and pages

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::unused_async)]

pub mod config;
pub mod domain;
pub mod portal;
pub mod schedule;
pub mod server;
pub mod telemetry;
pub mod ui;

use crate::config::AppConfig;
use crate::schedule::ScheduleService;
use std::sync::Arc;

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Global Configuration
    pub config: Arc<AppConfig>,
    /// Schedule business rules and storage
    pub schedules: ScheduleService,
}
