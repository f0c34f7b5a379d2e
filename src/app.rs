use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/entries", post(handlers::submit_form))
        .route(
            "/api/entries",
            get(handlers::list_entries).post(handlers::create_entry),
        )
        .route("/api/today", get(handlers::get_today))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/analytics", get(handlers::get_analytics))
        .route(
            "/api/profile",
            get(handlers::get_profile).put(handlers::update_profile),
        )
        .route("/api/profile/premium", post(handlers::upgrade_premium))
        .route(
            "/api/preferences",
            get(handlers::get_preferences).put(handlers::update_preferences),
        )
        .route("/api/sample-data", post(handlers::add_sample_data))
        .with_state(state)
}
