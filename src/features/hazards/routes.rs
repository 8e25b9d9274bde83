use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::hazards::handlers;
use crate::features::hazards::services::HazardService;

/// Create routes for the hazards feature
pub fn routes(service: Arc<HazardService>) -> Router {
    Router::new()
        .route("/uploadHazard", post(handlers::create_hazard))
        .route("/hazards", get(handlers::list_hazards))
        .with_state(service)
}
