pub mod health;
pub mod requests;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let routes: Router<AppState> = Router::new()
        .route("/health", get(health::health_handler))
        .route("/createPrompt", post(requests::handle_create_prompt))
        .route("/createTask", post(requests::handle_create_task));

    // API Gateway REST events arrive with the stage as the first path segment.
    Router::new()
        .merge(routes.clone())
        .nest("/:stage", routes)
        .with_state(state)
}
