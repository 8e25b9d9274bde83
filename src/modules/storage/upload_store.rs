use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::core::error::{AppError, Result};

/// How many alternative names to try when a generated name is already taken.
const MAX_NAME_ATTEMPTS: u32 = 100;

/// Local-disk store for uploaded files.
///
/// Files are named `<millisecond-timestamp>-<original-name>`. The store never
/// overwrites: files are created with `create_new`, and a name that is
/// already taken gets a numeric infix (`<millis>-<n>-<original-name>`) until
/// a free slot is found.
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    /// Open the store rooted at `dir`, creating the directory if absent.
    pub fn new(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let root = dir.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persist one uploaded file and return the stored file name. The stored
    /// name always ends with the sanitized client-supplied name.
    pub async fn save(&self, original_name: &str, data: &[u8]) -> Result<String> {
        let safe_name = sanitize_file_name(original_name);
        let millis = Utc::now().timestamp_millis();

        for attempt in 0..MAX_NAME_ATTEMPTS {
            let candidate = if attempt == 0 {
                format!("{}-{}", millis, safe_name)
            } else {
                format!("{}-{}-{}", millis, attempt, safe_name)
            };
            let path = self.root.join(&candidate);

            match tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(mut file) => {
                    file.write_all(data).await?;
                    file.flush().await?;
                    debug!("Stored upload {} ({} bytes)", candidate, data.len());
                    return Ok(candidate);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(AppError::Storage(e)),
            }
        }

        Err(AppError::Internal(format!(
            "No free name for upload '{}' after {} attempts",
            safe_name, MAX_NAME_ATTEMPTS
        )))
    }

    /// Best-effort delete of a stored file. Used to clean up an upload whose
    /// database record failed to persist.
    pub async fn remove(&self, stored_name: &str) {
        let path = self.root.join(stored_name);
        if let Err(e) = tokio::fs::remove_file(&path).await {
            warn!("Failed to remove stored file {}: {}", path.display(), e);
        }
    }
}

/// Strip path components from a client-supplied file name so the stored file
/// cannot land outside the store root.
fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name).trim();
    if base.is_empty() || base == "." || base == ".." {
        "unnamed".to_string()
    } else {
        base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sanitize_strips_path_components() {
        assert_eq!(sanitize_file_name("photo.png"), "photo.png");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\Users\\me\\cat.jpg"), "cat.jpg");
        assert_eq!(sanitize_file_name(""), "unnamed");
        assert_eq!(sanitize_file_name("dir/"), "unnamed");
        assert_eq!(sanitize_file_name(".."), "unnamed");
    }

    #[tokio::test]
    async fn save_keeps_the_original_name_as_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path()).unwrap();

        let stored = store.save("photo.png", b"hello").await.unwrap();
        assert!(stored.ends_with("-photo.png"), "got {}", stored);

        let written = std::fs::read(dir.path().join(&stored)).unwrap();
        assert_eq!(written, b"hello");
    }

    #[tokio::test]
    async fn concurrent_same_name_uploads_never_collide() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path()).unwrap();

        // Rapid saves of the same name land in the same millisecond and must
        // still produce distinct files.
        let mut names = HashSet::new();
        for i in 0..10u8 {
            let stored = store.save("report.pdf", &[i]).await.unwrap();
            names.insert(stored);
        }
        assert_eq!(names.len(), 10);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 10);
    }

    #[tokio::test]
    async fn remove_deletes_the_stored_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path()).unwrap();

        let stored = store.save("note.txt", b"x").await.unwrap();
        store.remove(&stored).await;
        assert!(!dir.path().join(&stored).exists());

        // removing a name that is already gone is a no-op
        store.remove(&stored).await;
    }

    #[tokio::test]
    async fn stored_files_are_served_back_over_http() {
        use axum_test::TestServer;

        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path()).unwrap();
        let stored = store.save("map.png", b"raw bytes").await.unwrap();

        let app = axum::Router::new()
            .nest_service("/uploads", tower_http::services::ServeDir::new(dir.path()));
        let server = TestServer::new(app).unwrap();

        let res = server.get(&format!("/uploads/{}", stored)).await;
        res.assert_status_ok();
        assert_eq!(res.as_bytes().to_vec(), b"raw bytes".to_vec());

        let missing = server.get("/uploads/does-not-exist.png").await;
        missing.assert_status_not_found();
    }

    #[tokio::test]
    async fn new_creates_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = UploadStore::new(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(store.root(), nested.as_path());
    }
}
