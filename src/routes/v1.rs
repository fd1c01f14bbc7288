use axum::Router;

use crate::routes::AppState;

/// Versioned API router. Feature routes land here as modules are built out.
pub fn router() -> Router<AppState> {
    Router::new()
}
