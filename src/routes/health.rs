use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::routes::AppState;

/// Process liveness. Succeeds whenever the server is up, regardless of
/// database state.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    tracing::info!("Health check requested");

    Json(json!({
        "status": "ok",
        "service": state.settings.app_name,
        "env": state.settings.environment,
    }))
}

/// Database liveness. Round-trips a trivial query on a raw pooled
/// connection; an unreachable database surfaces as an error response.
pub async fn health_db(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let mut conn = state.pool.acquire().await?;
    let result: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&mut *conn).await?;

    Ok(Json(json!({ "db": "ok", "result": result })))
}
