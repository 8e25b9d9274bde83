use utoipa::OpenApi;

use crate::features::hazards::{dtos as hazard_dtos, handlers as hazard_handlers};
use crate::features::news::{dtos as news_dtos, handlers as news_handlers};
use crate::shared::types::{ErrorResponse, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // News
        news_handlers::create_news,
        news_handlers::list_news,
        // Hazards
        hazard_handlers::create_hazard,
        hazard_handlers::list_hazards,
    ),
    components(schemas(
        // Shared
        MessageResponse,
        ErrorResponse,
        // News
        news_dtos::CreateNewsDto,
        news_dtos::NewsItemDto,
        // Hazards
        hazard_dtos::UploadHazardDto,
        hazard_dtos::HazardItemDto,
    )),
    tags(
        (name = "news", description = "Geo-tagged news items"),
        (name = "hazards", description = "Hazard reports with one attached file")
    ),
    info(
        title = "HazardWatch API",
        description = "Backend for submitting and retrieving news items and hazard reports"
    )
)]
pub struct ApiDoc;
