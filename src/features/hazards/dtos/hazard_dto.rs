use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Multipart form schema for submitting a hazard report. Used for the
/// OpenAPI document; the handler reads the parts directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadHazardDto {
    pub title: String,
    pub description: String,
    /// The attached file
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
}

/// Response DTO for a stored hazard report.
///
/// `image` is the absolute URL of the attached file, rebuilt from the current
/// request's scheme and host.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HazardItemDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
}
