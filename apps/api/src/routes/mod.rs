pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ticket_analysis::handlers;

pub fn build_router() -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/prompts/ticket-analysis",
            post(handlers::handle_render_prompt),
        )
        .route(
            "/api/v1/prompts/ticket-analysis/contract",
            get(handlers::handle_contract),
        )
}
