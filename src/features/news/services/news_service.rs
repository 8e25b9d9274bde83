use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::news::models::NewsItem;

/// Service for the news collection.
pub struct NewsService {
    pool: PgPool,
}

impl NewsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a news item. `id` and `created_at` are assigned by the
    /// database.
    pub async fn create(
        &self,
        title: &str,
        summary: &str,
        lat: Option<f64>,
        lon: Option<f64>,
    ) -> Result<()> {
        let item = sqlx::query_as::<_, NewsItem>(
            r#"
            INSERT INTO news (title, summary, lat, lon)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, summary, lat, lon, created_at
            "#,
        )
        .bind(title)
        .bind(summary)
        .bind(lat)
        .bind(lon)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert news item: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("News item created: id={}", item.id);
        Ok(())
    }

    /// All news items, newest first.
    pub async fn list(&self) -> Result<Vec<NewsItem>> {
        let items = sqlx::query_as::<_, NewsItem>(
            r#"
            SELECT id, title, summary, lat, lon, created_at
            FROM news
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list news items: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "./migrations")]
    async fn created_items_come_back_with_their_fields(pool: PgPool) {
        let service = NewsService::new(pool);
        service
            .create("Flood Alert", "Heavy rain expected", Some(12.9), Some(77.6))
            .await
            .unwrap();

        let items = service.list().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Flood Alert");
        assert_eq!(items[0].summary, "Heavy rain expected");
        assert_eq!(items[0].lat, Some(12.9));
        assert_eq!(items[0].lon, Some(77.6));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn list_returns_newest_first(pool: PgPool) {
        let service = NewsService::new(pool);
        service
            .create("First", "oldest", None, None)
            .await
            .unwrap();
        service
            .create("Second", "middle", None, None)
            .await
            .unwrap();
        service
            .create("Third", "newest", None, None)
            .await
            .unwrap();

        let items = service.list().await.unwrap();
        let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Third", "Second", "First"]);
        assert!(items
            .windows(2)
            .all(|w| w[0].created_at >= w[1].created_at));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn list_of_empty_collection_is_empty(pool: PgPool) {
        let service = NewsService::new(pool);
        assert!(service.list().await.unwrap().is_empty());
    }
}
