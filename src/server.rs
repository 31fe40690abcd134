use axum::{
    Router,
    extract::{Query, Request, State},
    http::{HeaderName, HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{Html, IntoResponse, Redirect},
    routing::get,
};
use axum_extra::extract::CookieJar;
use leptos::prelude::*;
use serde::Deserialize;
use std::pin::pin;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use tracing::{info, warn};

use crate::AppState;
use crate::config::{AppConfig, CorsConfig};
use crate::schedule::{
    self, InMemoryScheduleStore, PostgresScheduleStore, ScheduleRepository, ScheduleService,
};
use crate::ui::{
    self,
    app::{DashboardPage, LoginPage, NotFoundPage, html_shell},
    components::sidebar::SIDEBAR_COOKIE,
    portal::AuthOutcome,
};

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let repo: Arc<dyn ScheduleRepository> = match &config.database.url {
        Some(url) => {
            let store = PostgresScheduleStore::new(url, config.database.max_connections).await?;
            info!(
                name: "storage.ready",
                backend = "postgres",
                max_connections = config.database.max_connections,
                "Schedule storage ready"
            );
            Arc::new(store)
        }
        None => {
            warn!(
                name: "storage.ready",
                backend = "memory",
                "No database configured; schedules are kept in memory"
            );
            Arc::new(InMemoryScheduleStore::new())
        }
    };

    let state = AppState {
        config: config.clone(),
        schedules: ScheduleService::new(repo),
    };
    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        environment = %config.server.environment,
        "Server started"
    );

    let stop = Arc::new(Notify::new());
    let server = axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown({
            let stop = stop.clone();
            async move { stop.notified().await }
        })
        .into_future();
    let mut server = pin!(server);

    tokio::select! {
        res = &mut server => res?,
        () = shutdown_signal() => {
            let grace = Duration::from_secs(config.server.shutdown_timeout_secs);
            info!(name: "server.shutdown", grace_secs = grace.as_secs(), "Shutting down");
            stop.notify_one();
            match tokio::time::timeout(grace, server).await {
                Ok(res) => res?,
                Err(_) => warn!(
                    name: "server.shutdown.forced",
                    "Grace period elapsed with connections still open"
                ),
            }
        }
    }

    info!(name: "server.stopped", "Server stopped");
    Ok(())
}

/// Build the application router with all middleware applied.
pub fn build_router(state: AppState) -> Router {
    let timeout_duration = Duration::from_secs(state.config.server.request_timeout_secs);
    let cors = cors_layer(&state.config.cors);

    Router::new()
        .route("/", get(|| async { Redirect::to("/dashboard") }))
        .route("/login", get(login_page))
        .route("/dashboard", get(dashboard_page))
        .route("/healthz", get(|| async { "ok" }))
        .nest(
            "/api/schedules",
            schedule::api::build_router().with_state(state.schedules.clone()),
        )
        .nest_service("/static", ServeDir::new("static"))
        .fallback(not_found_page)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(axum::middleware::from_fn(
                    move |req: Request, next: Next| async move {
                        match tokio::time::timeout(timeout_duration, next.run(req)).await {
                            Ok(res) => res,
                            Err(_) => {
                                (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response()
                            }
                        }
                    },
                )),
        )
        .with_state(state)
}

/// `*` (or nothing) allows any origin without credentials; an explicit list
/// allows those origins with credentials.
fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let methods = [
        Method::POST,
        Method::OPTIONS,
        Method::GET,
        Method::PUT,
        Method::DELETE,
    ];

    if cors.allows_any() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(name: "cors.origin.invalid", origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(vec![
            header::CONTENT_TYPE,
            header::CONTENT_LENGTH,
            header::ACCEPT_ENCODING,
            HeaderName::from_static("x-csrf-token"),
            header::AUTHORIZATION,
            header::ACCEPT,
            header::ORIGIN,
            header::CACHE_CONTROL,
            HeaderName::from_static("x-requested-with"),
        ])
        .allow_credentials(true)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {:?}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {:?}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct LoginQuery {
    #[serde(default)]
    outcome: Option<String>,
}

/// GET /login - Login page
async fn login_page(State(state): State<AppState>, Query(query): Query<LoginQuery>) -> Html<String> {
    let outcome = AuthOutcome::from_query(query.outcome.as_deref());
    let brand = state.config.portal.brand.clone();
    let body = ui::render({
        let brand = brand.clone();
        move || view! { <LoginPage outcome=outcome brand=brand /> }
    });
    Html(html_shell("Masuk", &brand, &body))
}

/// GET /dashboard - Dashboard inside the protected layout
async fn dashboard_page(State(state): State<AppState>, jar: CookieJar) -> Html<String> {
    let sidebar_open = jar
        .get(SIDEBAR_COOKIE)
        .is_none_or(|cookie| cookie.value() != "false");
    let portal = state.config.portal.clone();
    let brand = portal.brand.clone();
    let body =
        ui::render(move || view! { <DashboardPage portal=portal sidebar_open=sidebar_open /> });
    Html(html_shell("Dashboard", &brand, &body))
}

async fn not_found_page(State(state): State<AppState>) -> (StatusCode, Html<String>) {
    let body = ui::render(|| view! { <NotFoundPage /> });
    (
        StatusCode::NOT_FOUND,
        Html(html_shell("Tidak ditemukan", &state.config.portal.brand, &body)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http;
    use tower::ServiceExt;

    fn app(args: &[&str]) -> Router {
        let mut argv = vec!["unw-toefl-portal"];
        argv.extend_from_slice(args);
        let config = AppConfig::load_from_args(argv).expect("config");
        build_router(AppState {
            config: Arc::new(config),
            schedules: ScheduleService::new(Arc::new(InMemoryScheduleStore::new())),
        })
    }

    #[tokio::test]
    async fn explicit_origins_allow_credentials() {
        let response = app(&["--allowed-origins", "http://a.test,http://b.test"])
            .oneshot(
                http::Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/schedules")
                    .header(header::ORIGIN, "http://b.test")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "http://b.test");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    }

    #[tokio::test]
    async fn unlisted_origin_gets_no_cors_headers() {
        let response = app(&["--allowed-origins", "http://a.test"])
            .oneshot(
                http::Request::builder()
                    .uri("/healthz")
                    .header(header::ORIGIN, "http://evil.test")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            !response
                .headers()
                .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        );
    }

    #[tokio::test]
    async fn sidebar_cookie_other_than_false_keeps_sidebar_open() {
        let response = app(&[])
            .oneshot(
                http::Request::builder()
                    .uri("/dashboard")
                    .header(header::COOKIE, "sidebar_state=true")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains(r#"aria-expanded="true""#));
        assert!(!html.contains(r#"data-state="collapsed""#));
    }
}
