use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::news::dtos::NewsItemDto;

/// Database row for a news item.
#[derive(Debug, Clone, FromRow)]
pub struct NewsItem {
    pub id: Uuid,
    pub title: String,
    pub summary: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl From<NewsItem> for NewsItemDto {
    fn from(item: NewsItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            summary: item.summary,
            lat: item.lat,
            lon: item.lon,
            created_at: item.created_at,
        }
    }
}
