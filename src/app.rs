use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post, put}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/habits", get(handlers::list_habits).post(handlers::create_habit))
        .route(
            "/api/habits/:id",
            get(handlers::get_habit).delete(handlers::delete_habit),
        )
        .route(
            "/api/habits/:id/logs/:date",
            put(handlers::set_log).delete(handlers::clear_log),
        )
        .route("/api/select", post(handlers::select_habit))
        .route("/api/reset", post(handlers::reset))
        .with_state(state)
}
