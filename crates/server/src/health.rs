use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use pathwise_core::{CourseEngine, CuratedCourses};
use serde::Serialize;
use tracing::{error, info};

#[derive(Clone)]
pub struct HealthState {
    engine: Arc<CourseEngine>,
    curated: Arc<CuratedCourses>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub catalog: HealthCheck,
    pub checked_at: String,
}

pub fn router(engine: Arc<CourseEngine>, curated: Arc<CuratedCourses>) -> Router {
    Router::new().route("/health", get(health)).with_state(HealthState { engine, curated })
}

pub async fn spawn(
    bind_address: &str,
    port: u16,
    engine: Arc<CourseEngine>,
    curated: Arc<CuratedCourses>,
) -> std::io::Result<()> {
    let address = format!("{bind_address}:{port}");
    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!(
        event_name = "system.health.start",
        bind_address = %address,
        "health endpoint started"
    );

    tokio::spawn(async move {
        if let Err(error) = axum::serve(listener, router(engine, curated)).await {
            error!(
                event_name = "system.health.error",
                error = %error,
                "health endpoint server terminated unexpectedly"
            );
        }
    });

    Ok(())
}

pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let catalog = catalog_check(&state);
    let ready = catalog.status == "ready";

    let payload = HealthResponse {
        status: if ready { "ready" } else { "degraded" },
        service: HealthCheck {
            status: "ready",
            detail: "pathwise-server runtime initialized".to_string(),
        },
        catalog,
        checked_at: Utc::now().to_rfc3339(),
    };

    let status_code = if ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status_code, Json(payload))
}

fn catalog_check(state: &HealthState) -> HealthCheck {
    let buckets = state.engine.catalog().bucket_count();
    let records = state.engine.catalog().record_count();
    let curated_tools = state.curated.tool_count();

    if buckets == 0 || records == 0 || curated_tools == 0 {
        return HealthCheck {
            status: "degraded",
            detail: format!(
                "course data incomplete: {buckets} buckets, {records} records, {curated_tools} curated tools"
            ),
        };
    }

    HealthCheck {
        status: "ready",
        detail: format!("{buckets} buckets, {records} records, {curated_tools} curated tools"),
    }
}
