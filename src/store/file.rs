use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::error::AppError;
use crate::store::KeyValueStore;

#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
    tmp_counter: AtomicU64,
}

impl FileStore {
    pub async fn open(root: impl AsRef<Path>) -> Result<Self, AppError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await.map_err(|err| {
            AppError::Storage(format!(
                "failed to create store directory {}: {err}",
                root.display()
            ))
        })?;

        Ok(Self {
            root,
            tmp_counter: AtomicU64::new(0),
        })
    }

    fn resolve(&self, key: &str) -> Result<PathBuf, AppError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(AppError::Storage(format!("invalid store key: {key:?}")));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.resolve(key)?;
        match fs::read_to_string(&path).await {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(AppError::Storage(format!(
                "failed to read {}: {err}",
                path.display()
            ))),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let path = self.resolve(key)?;
        let seq = self.tmp_counter.fetch_add(1, Ordering::Relaxed);
        let tmp_path = self.root.join(format!("{key}.json.tmp{seq}"));

        if let Err(err) = fs::write(&tmp_path, value).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(AppError::Storage(format!(
                "failed to write {}: {err}",
                tmp_path.display()
            )));
        }

        if let Err(err) = fs::rename(&tmp_path, &path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(AppError::Storage(format!(
                "failed to replace {}: {err}",
                path.display()
            )));
        }

        debug!(key, bytes = value.len(), "store value written");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), AppError> {
        let path = self.resolve(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(AppError::Storage(format!(
                "failed to remove {}: {err}",
                path.display()
            ))),
        }
    }
}
