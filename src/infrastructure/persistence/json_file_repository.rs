//! JSON file implementation of the URL repository.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::json;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::domain::entities::UrlList;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Stores the bookmark list as a single JSON document.
///
/// Every save writes the whole list to `<path>.tmp` and renames it over the
/// data file, so a failed save leaves the previous file untouched. The file
/// is created with mode `0600` on Unix.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    /// Sibling of the data file, so the final rename stays on one filesystem.
    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

/// Writes `bytes` to a fresh file at `path` and syncs it to disk.
async fn write_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o600);

    let mut file = options.open(path).await?;
    file.write_all(bytes).await?;
    file.flush().await?;
    file.sync_all().await?;
    Ok(())
}

#[async_trait]
impl UrlRepository for JsonFileRepository {
    async fn load(&self) -> Result<Option<UrlList>, AppError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.display_path(), "No data file yet, starting empty");
                return Ok(None);
            }
            Err(e) => {
                return Err(AppError::internal(
                    "Failed to read data file",
                    json!({ "path": self.display_path(), "reason": e.to_string() }),
                ));
            }
        };

        let list = serde_json::from_slice::<UrlList>(&bytes).map_err(|e| {
            AppError::internal(
                "Failed to decode data file",
                json!({ "path": self.display_path(), "reason": e.to_string() }),
            )
        })?;

        Ok(Some(list))
    }

    async fn save(&self, list: &UrlList) -> Result<(), AppError> {
        let bytes = serde_json::to_vec(list).map_err(|e| {
            AppError::internal("Failed to encode bookmarks", json!({ "reason": e.to_string() }))
        })?;

        let tmp = self.temp_path();

        if let Err(e) = write_file(&tmp, &bytes).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(AppError::internal(
                "Failed to write data file",
                json!({ "path": tmp.display().to_string(), "reason": e.to_string() }),
            ));
        }

        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(AppError::internal(
                "Failed to replace data file",
                json!({ "path": self.display_path(), "reason": e.to_string() }),
            ));
        }

        tracing::debug!(path = %self.display_path(), count = list.len(), "Data file written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("data.json"));

        assert_eq!(repo.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("data.json"));
        let list = UrlList::new(vec!["https://a.com/".to_string()]);

        repo.save(&list).await.unwrap();

        assert_eq!(repo.load().await.unwrap(), Some(list));
    }

    #[tokio::test]
    async fn test_save_writes_expected_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let repo = JsonFileRepository::new(&path);

        repo.save(&UrlList::new(vec!["https://a.com/".to_string()]))
            .await
            .unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw, r#"{"urls":["https://a.com/"]}"#);
    }

    #[tokio::test]
    async fn test_save_truncates_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("data.json"));

        repo.save(&UrlList::new(vec![
            "https://a-very-long-domain-name.com/".to_string(),
            "https://b.com/".to_string(),
        ]))
        .await
        .unwrap();
        repo.save(&UrlList::default()).await.unwrap();

        assert_eq!(repo.load().await.unwrap(), Some(UrlList::default()));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_save_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let repo = JsonFileRepository::new(&path);

        repo.save(&UrlList::default()).await.unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[tokio::test]
    async fn test_load_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "not json").unwrap();

        let repo = JsonFileRepository::new(&path);

        assert!(matches!(repo.load().await, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_save_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("missing").join("data.json"));

        assert!(repo.save(&UrlList::default()).await.is_err());
    }

    #[tokio::test]
    async fn test_failed_save_keeps_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let repo = JsonFileRepository::new(&path);
        repo.save(&UrlList::new(vec!["https://a.com/".to_string()]))
            .await
            .unwrap();
        let before = std::fs::read(&path).unwrap();

        // A directory in the way makes the temp file impossible to create.
        std::fs::create_dir(dir.path().join("data.json.tmp")).unwrap();

        let result = repo
            .save(&UrlList::new(vec![
                "https://b.com/".to_string(),
                "https://a.com/".to_string(),
            ]))
            .await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
        assert_eq!(std::fs::read(&path).unwrap(), before);
    }

    #[tokio::test]
    async fn test_save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let repo = JsonFileRepository::new(&path);

        repo.save(&UrlList::default()).await.unwrap();

        assert!(path.exists());
        assert!(!dir.path().join("data.json.tmp").exists());
    }
}
