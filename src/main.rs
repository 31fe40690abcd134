//! UNW TOEFL portal server
//!
//! Entry point: loads configuration, initializes logging and serves the portal.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::sync::Arc;

use dotenvy::dotenv;
use tracing::info;

use unw_toefl_portal::{config::AppConfig, server, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    let _ = dotenv();

    let config = AppConfig::load()?;
    telemetry::init(config.log_format());

    info!(
        name: "config.loaded",
        environment = %config.server.environment,
        brand = %config.portal.brand,
        navigation_items = config.portal.navigation.len(),
        database = config.database.url.is_some(),
        "Configuration loaded"
    );

    server::start_server(Arc::new(config)).await
}
