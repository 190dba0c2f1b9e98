pub mod assets;
pub mod config;
pub mod error;
pub mod orders;
pub mod pager;
pub mod state;
pub mod web;

use axum::Router;
use axum::extract::State;
use axum::response::Json;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "orders": state.orders.len(),
        "page_size": state.config.demo.page_size,
    }))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { axum::response::Redirect::to("/orders") }))
        .route("/health", get(health_check))
        .nest("/orders", web::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
