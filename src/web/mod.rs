pub mod context;
pub mod orders;

use axum::Router;
use axum::routing::get;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::index))
        .route("/ajax", get(orders::ajax))
        .route("/search", get(orders::search))
        .route("/ajax_search", get(orders::ajax_search))
        .route("/bootstrap", get(orders::bootstrap))
}
