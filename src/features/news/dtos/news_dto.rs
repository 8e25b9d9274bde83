use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Request DTO for submitting a news item.
///
/// All fields are optional at the deserialization layer; presence of `title`
/// and `summary` is enforced by the handler so that a missing field and an
/// empty field produce the same contract error.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateNewsDto {
    pub title: Option<String>,
    pub summary: Option<String>,
    /// Latitude, unvalidated
    pub lat: Option<f64>,
    /// Longitude, unvalidated
    pub lon: Option<f64>,
}

/// Response DTO for a stored news item.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsItemDto {
    pub id: Uuid,
    pub title: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    pub created_at: DateTime<Utc>,
}
