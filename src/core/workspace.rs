use crate::domain::ports::Workspace;
use crate::utils::error::{Result, ScaffoldError};
use async_trait::async_trait;
use std::path::Path;
use tokio::fs;

/// Real filesystem implementation of the [`Workspace`] port. Permission
/// failures are mapped here, where the offending path is still known.
#[derive(Debug, Clone, Default)]
pub struct LocalWorkspace;

impl LocalWorkspace {
    pub fn new() -> Self {
        Self
    }
}

pub(crate) fn map_io_error(path: &Path, err: std::io::Error) -> ScaffoldError {
    if err.kind() == std::io::ErrorKind::PermissionDenied {
        ScaffoldError::PermissionDenied(path.to_path_buf())
    } else {
        ScaffoldError::IoError(err)
    }
}

#[async_trait]
impl Workspace for LocalWorkspace {
    async fn create_dir(&self, path: &Path) -> Result<()> {
        // Deliberately not create_dir_all at the call that creates the
        // project root: AlreadyExists must surface, never be absorbed.
        fs::create_dir(path)
            .await
            .map_err(|e| map_io_error(path, e))
    }

    async fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        fs::write(path, data)
            .await
            .map_err(|e| map_io_error(path, e))
    }

    async fn remove_dir_all(&self, path: &Path) -> Result<()> {
        fs::remove_dir_all(path)
            .await
            .map_err(|e| map_io_error(path, e))
    }
}
