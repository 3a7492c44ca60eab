use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{jobs, AppState};

/// Path prefix every job route is mounted under.
pub const JOBS_PREFIX: &str = "/api/jobs";

fn job_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(jobs::list).post(jobs::create))
        .route("/:id", get(jobs::get).put(jobs::update).delete(jobs::delete))
}

pub fn build_routes(state: AppState) -> Router {
    Router::new()
        .nest(JOBS_PREFIX, job_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
