//! HTTP routes

mod api;
mod badges;
mod ui;

use axum::Router;

use crate::state::AppState;

/// Create main router with all routes
pub fn app_routes(state: AppState) -> Router {
    Router::new()
        // Gallery page
        .merge(ui::routes())
        // Badge previews
        .nest("/badge", badges::routes())
        // REST API routes
        .nest("/api/v1", api::routes())
        .with_state(state)
}
