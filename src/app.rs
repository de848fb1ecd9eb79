use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/screen", post(handlers::switch_screen))
        .route("/goals/toggle", post(handlers::toggle_goal))
        .route("/mood", post(handlers::save_mood))
        .route("/journal", post(handlers::save_journal))
        .route("/journal/clear", post(handlers::clear_journal))
        .route("/api/state", get(handlers::get_state))
        .route("/api/moods", get(handlers::list_moods).post(handlers::record_mood))
        .route("/api/trend", get(handlers::get_trend))
        .route("/api/suggestion", get(handlers::get_suggestion))
        .route("/api/journal", get(handlers::get_journal).post(handlers::write_journal))
        .route("/api/insights", get(handlers::get_insights))
        .with_state(state)
}
