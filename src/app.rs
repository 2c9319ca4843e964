use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/activity/add", post(handlers::add_today))
        .route("/api/today", get(handlers::get_today))
        .route("/api/activity", post(handlers::record_activity))
        .route("/api/calendar", get(handlers::get_calendar))
        .route("/api/records", get(handlers::get_records))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/notes", get(handlers::get_notes).post(handlers::put_note))
        .with_state(state)
}
