use std::sync::Arc;

use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::hazards::models::HazardReport;
use crate::modules::storage::UploadStore;

/// Service for hazard reports and their attached files.
pub struct HazardService {
    pool: PgPool,
    store: Arc<UploadStore>,
}

impl HazardService {
    pub fn new(pool: PgPool, store: Arc<UploadStore>) -> Self {
        Self { pool, store }
    }

    /// Persist the uploaded file, then the record. If the record insert
    /// fails, the just-written file is removed so no orphan is left behind.
    pub async fn create(
        &self,
        title: &str,
        description: &str,
        file_name: &str,
        data: &[u8],
    ) -> Result<()> {
        let stored_name = self.store.save(file_name, data).await?;
        let file_path = format!("uploads/{}", stored_name);

        let result = sqlx::query_as::<_, HazardReport>(
            r#"
            INSERT INTO hazards (title, description, file)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, file, created_at
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(&file_path)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(report) => {
                tracing::info!("Hazard report created: id={}, file={}", report.id, report.file);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to insert hazard report: {:?}", e);
                self.store.remove(&stored_name).await;
                Err(AppError::Database(e))
            }
        }
    }

    /// All hazard reports, newest first.
    pub async fn list(&self) -> Result<Vec<HazardReport>> {
        let reports = sqlx::query_as::<_, HazardReport>(
            r#"
            SELECT id, title, description, file, created_at
            FROM hazards
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list hazard reports: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(pool: PgPool, dir: &std::path::Path) -> HazardService {
        HazardService::new(pool, Arc::new(UploadStore::new(dir).unwrap()))
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn created_reports_come_back_with_their_file_path(pool: PgPool) {
        let dir = tempfile::tempdir().unwrap();
        let service = service(pool, dir.path());

        service
            .create("Landslide", "Road blocked", "photo.png", b"pretend-png-bytes")
            .await
            .unwrap();

        let reports = service.list().await.unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].title, "Landslide");
        assert_eq!(reports[0].description, "Road blocked");
        assert!(reports[0].file.starts_with("uploads/"));
        assert!(reports[0].file.ends_with("-photo.png"));

        // the stored path resolves to the written file
        let stored_name = reports[0].file.strip_prefix("uploads/").unwrap();
        let written = std::fs::read(dir.path().join(stored_name)).unwrap();
        assert_eq!(written, b"pretend-png-bytes");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn list_returns_newest_first(pool: PgPool) {
        let dir = tempfile::tempdir().unwrap();
        let service = service(pool, dir.path());

        service
            .create("First", "oldest", "a.png", b"a")
            .await
            .unwrap();
        service
            .create("Second", "middle", "b.png", b"b")
            .await
            .unwrap();
        service
            .create("Third", "newest", "c.png", b"c")
            .await
            .unwrap();

        let reports = service.list().await.unwrap();
        let titles: Vec<&str> = reports.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Third", "Second", "First"]);
        assert!(reports
            .windows(2)
            .all(|w| w[0].created_at >= w[1].created_at));
    }
}
