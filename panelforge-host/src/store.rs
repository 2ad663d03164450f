//! YAML-file-backed options store.
//!
//! One `.yaml` file per option key under a root directory. Writes go to a
//! temp file first, then rename, so a crash never leaves a half-written
//! value. Unreadable files read back as absent with a warning.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use panelforge_schema::OptionValue;
use tokio::fs;
use tracing::{debug, warn};
use ulid::Ulid;

use crate::error::{HostError, Result};
use crate::traits::OptionsStore;

/// File-backed [`OptionsStore`]. Keys map to `{root}/{key}.yaml`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open or create the store directory.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).await?;
        debug!(?root, "file store opened");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        // Keys double as file names; anything that could escape the root
        // directory is rejected.
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(HostError::InvalidKey {
                key: key.to_string(),
            });
        }
        Ok(self.root.join(format!("{key}.yaml")))
    }
}

#[async_trait]
impl OptionsStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<OptionValue>> {
        let path = self.key_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).await?;
        match serde_yaml_ng::from_str::<OptionValue>(&content) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(?path, %e, "skipping unreadable option value");
                Ok(None)
            }
        }
    }

    async fn set(&self, key: &str, value: OptionValue) -> Result<()> {
        let path = self.key_path(key)?;
        let yaml = serde_yaml_ng::to_string(&value)?;
        atomic_write(&path, yaml.as_bytes()).await?;
        debug!(key, "option stored");
        Ok(())
    }
}

/// Write to a temp file then rename for atomic persistence.
async fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::InvalidInput, "no parent dir"))?;
    let tmp = dir.join(format!(".tmp_{}", Ulid::new()));
    fs::write(&tmp, data).await?;
    fs::rename(&tmp, path).await?;
    Ok(())
}
