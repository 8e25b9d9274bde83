use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::hazards::dtos::HazardItemDto;

/// Database row for a hazard report. `file` holds the relative storage path
/// (`uploads/<stored-name>`); the absolute URL only exists in responses.
#[derive(Debug, Clone, FromRow)]
pub struct HazardReport {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub file: String,
    pub created_at: DateTime<Utc>,
}

impl HazardReport {
    /// Rewrite the stored relative path into an absolute URL under
    /// `base_url`, normalizing any backslash separators.
    pub fn into_dto(self, base_url: &str) -> HazardItemDto {
        let file = self.file.replace('\\', "/");
        HazardItemDto {
            id: self.id,
            title: self.title,
            description: self.description,
            image: format!("{}/{}", base_url.trim_end_matches('/'), file),
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(file: &str) -> HazardReport {
        HazardReport {
            id: Uuid::nil(),
            title: "Landslide".to_string(),
            description: "Road blocked".to_string(),
            file: file.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn image_is_an_absolute_url() {
        let dto = report("uploads/123-photo.png").into_dto("http://example.com");
        assert_eq!(dto.image, "http://example.com/uploads/123-photo.png");
    }

    #[test]
    fn backslashes_are_normalized() {
        let dto = report("uploads\\123-photo.png").into_dto("https://example.com/");
        assert_eq!(dto.image, "https://example.com/uploads/123-photo.png");
    }
}
