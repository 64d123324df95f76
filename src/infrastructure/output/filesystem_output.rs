//! Filesystem-based output service implementation

use async_trait::async_trait;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::generation::{GenerationError, OutputService, SourceFile};

/// Output service that writes generated sources to the filesystem
pub struct FileSystemOutputService;

impl FileSystemOutputService {
    pub fn new() -> Self {
        Self
    }
}

fn write_error(path: &Path) -> impl FnOnce(std::io::Error) -> GenerationError + '_ {
    move |source| GenerationError::FileWrite {
        path: path.to_path_buf(),
        source,
    }
}

#[async_trait]
impl OutputService for FileSystemOutputService {
    async fn write_file(&self, file: &SourceFile) -> Result<(), GenerationError> {
        if let Some(parent) = file.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(write_error(parent))?;
            }
        }

        // Truncates any existing file
        let mut handle = fs::File::create(&file.path)
            .await
            .map_err(write_error(&file.path))?;
        handle
            .write_all(file.content.as_bytes())
            .await
            .map_err(write_error(&file.path))?;
        handle.flush().await.map_err(write_error(&file.path))?;

        debug!(path = %file.path.display(), bytes = file.content.len(), "File flushed");
        Ok(())
    }

    async fn ensure_directory(&self, path: &Path) -> Result<(), GenerationError> {
        fs::create_dir_all(path).await.map_err(write_error(path))
    }
}

impl Default for FileSystemOutputService {
    fn default() -> Self {
        Self::new()
    }
}
