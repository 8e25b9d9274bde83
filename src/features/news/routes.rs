use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::news::handlers;
use crate::features::news::services::NewsService;

/// Create routes for the news feature
pub fn routes(service: Arc<NewsService>) -> Router {
    Router::new()
        .route("/uploadNews", post(handlers::create_news))
        .route("/news", get(handlers::list_news))
        .with_state(service)
}
