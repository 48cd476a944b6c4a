use crate::domain::model::RawConfig;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// A front-end that can produce the raw configuration mapping (CLI flags,
/// a TOML file, or an upstream request body).
pub trait ConfigSource {
    fn raw_config(&self) -> Result<RawConfig>;
}

/// Mutating filesystem operations performed inside the destination
/// subtree. Reads of the read-only template tree go straight through
/// tokio; writes go through this port so tests can inject failures
/// mid-materialization.
#[async_trait]
pub trait Workspace: Send + Sync {
    async fn create_dir(&self, path: &Path) -> Result<()>;
    async fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
    async fn remove_dir_all(&self, path: &Path) -> Result<()>;
}
