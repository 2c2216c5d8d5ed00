use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::io::AsyncWriteExt;

use crate::{Collection, Result, store::CollectionStore};

/// File-backed collection store.
///
/// Each collection is one `<dir>/<name>.json` document holding the full
/// record list. Writes go through a temp file and an atomic rename so a
/// crash mid-save leaves the previous document intact.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Creates a store rooted at the given directory.
    ///
    /// The directory is created lazily on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the directory the store persists into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn document_path(&self, collection: Collection) -> PathBuf {
        self.dir.join(format!("{}.json", collection.as_str()))
    }
}

#[async_trait]
impl CollectionStore for JsonFileStore {
    async fn load(&self, collection: Collection) -> Result<Vec<Value>> {
        let path = self.document_path(collection);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = tokio::fs::read_to_string(&path).await?;
        let records = serde_json::from_str(&content)?;
        Ok(records)
    }

    async fn save(&self, collection: Collection, records: Vec<Value>) -> Result<()> {
        if !self.dir.exists() {
            tokio::fs::create_dir_all(&self.dir).await?;
        }

        let content = serde_json::to_string_pretty(&records)?;
        let path = self.document_path(collection);
        let tmp_path = self.dir.join(format!(
            ".{}.{}.tmp",
            collection.as_str(),
            uuid::Uuid::new_v4().simple()
        ));

        let write_result = async {
            let mut file = tokio::fs::File::create(&tmp_path).await?;
            file.write_all(content.as_bytes()).await?;
            file.flush().await?;
            file.sync_all().await?;
            drop(file);
            tokio::fs::rename(&tmp_path, &path).await?;
            Ok::<(), std::io::Error>(())
        }
        .await;

        if let Err(e) = write_result {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(e.into());
        }

        tracing::debug!(collection = %collection, records = records.len(), "collection saved");
        Ok(())
    }
}
