//! Handlers for health check endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;
use crate::utils::process_memory;

type HealthResult = Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)>;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Database**: `SELECT 1` round trip
/// 2. **Cache**: Backend ping
/// 3. **Memory**: Resident set size against `HEALTH_MEMORY_LIMIT_MB`
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected" },
///     "cache": { "status": "ok", "message": "memory cache available" },
///     "memory": { "status": "ok", "message": "RSS 48 MB of 150 MB" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> HealthResult {
    respond(HealthChecks {
        database: Some(check_database(&state).await),
        cache: Some(check_cache(&state).await),
        memory: Some(check_memory(&state)),
    })
}

/// `GET /health/database`
pub async fn database_health_handler(State(state): State<AppState>) -> HealthResult {
    respond(HealthChecks {
        database: Some(check_database(&state).await),
        ..Default::default()
    })
}

/// `GET /health/memory`
pub async fn memory_health_handler(State(state): State<AppState>) -> HealthResult {
    respond(HealthChecks {
        memory: Some(check_memory(&state)),
        ..Default::default()
    })
}

fn respond(checks: HealthChecks) -> HealthResult {
    let all_healthy = [&checks.database, &checks.cache, &checks.memory]
        .into_iter()
        .flatten()
        .all(CheckStatus::is_ok);

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks,
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_database(state: &AppState) -> CheckStatus {
    match state.health.ping().await {
        Ok(()) => CheckStatus::ok("Connected"),
        Err(e) => CheckStatus::error(format!("Database error: {}", e)),
    }
}

async fn check_cache(state: &AppState) -> CheckStatus {
    let backend = state.cache.backend();
    if state.cache.health_check().await {
        CheckStatus::ok(format!("{} cache available", backend))
    } else {
        CheckStatus::error(format!("{} cache unreachable", backend))
    }
}

fn check_memory(state: &AppState) -> CheckStatus {
    const MB: u64 = 1024 * 1024;
    let limit = state.memory_limit_bytes;

    match process_memory::resident_set_bytes() {
        Some(rss) if rss <= limit => {
            CheckStatus::ok(format!("RSS {} MB of {} MB", rss / MB, limit / MB))
        }
        Some(rss) => CheckStatus::error(format!(
            "RSS {} MB exceeds {} MB",
            rss / MB,
            limit / MB
        )),
        None => CheckStatus::ok("RSS not available on this platform"),
    }
}
