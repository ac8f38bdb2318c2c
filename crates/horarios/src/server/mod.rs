use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::server::endpoints::lookup;
use crate::types::AppState;

mod endpoints;
mod types;

/// Creates a router that can be used by `axum`.
///
/// # Parameters
/// - `app_state`: The app server state.
///
/// # Returns
/// The router.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(lookup::get_index))
        .route("/health", get(lookup::get_health))
        .route(
            "/api/disciplinas-por-horario",
            get(lookup::get_classes_by_slot),
        )
        .with_state(app_state)
}
