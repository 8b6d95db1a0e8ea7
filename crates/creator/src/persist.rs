//! Persistence - Write rendered markup to the filesystem
//!
//! Missing parent directories are created before the write. Directory
//! creation and the write itself fail with distinct errors.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("A file path is required")]
    MissingPath,

    #[error("Something went wrong when creating the file {path:?}: {source}")]
    CreateDirs {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Something went wrong when writing to the file {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PersistError>;

/// Persistence collaborator
#[async_trait]
pub trait Persist: Send + Sync {
    async fn persist(&self, path: &Path, content: &str) -> Result<()>;
}

/// Writes through `tokio::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct FsPersister;

#[async_trait]
impl Persist for FsPersister {
    async fn persist(&self, path: &Path, content: &str) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(PersistError::MissingPath);
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| PersistError::CreateDirs {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        tokio::fs::write(path, content)
            .await
            .map_err(|source| PersistError::Write {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!("Wrote {} bytes to {:?}", content.len(), path);
        Ok(())
    }
}
