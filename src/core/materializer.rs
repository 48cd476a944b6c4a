//! Template-tree materialization: walks the read-only template directory
//! and reproduces it under the destination, renaming placeholder path
//! segments and substituting the token in textual contents. The template
//! tree is never mutated; all writes stay inside the destination subtree.

use crate::core::substitute::{substitute_content, substitute_segment, PROJECT_NAME_TOKEN};
use crate::core::workspace::map_io_error;
use crate::domain::ports::Workspace;
use crate::utils::error::{Result, ScaffoldError};
use std::path::{Path, PathBuf};
use tokio::fs;

pub struct DirectoryMaterializer<'a, W: Workspace> {
    workspace: &'a W,
    project_name: &'a str,
}

impl<'a, W: Workspace> DirectoryMaterializer<'a, W> {
    pub fn new(workspace: &'a W, project_name: &'a str) -> Self {
        Self {
            workspace,
            project_name,
        }
    }

    /// Runs the destination preconditions and creates the project
    /// directory `<target_directory>/<project_name>`. Nothing is written
    /// before this succeeds, so a failure here leaves the filesystem
    /// untouched and needs no cleanup. Returns the absolute path of the
    /// created directory, which is the rollback unit from here on.
    pub async fn create_project_dir(
        &self,
        template_root: &Path,
        target_directory: &Path,
    ) -> Result<PathBuf> {
        let target_meta = match fs::metadata(target_directory).await {
            Ok(meta) => meta,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ScaffoldError::TargetNotFound(target_directory.to_path_buf()));
            }
            Err(e) => return Err(map_io_error(target_directory, e)),
        };
        if !target_meta.is_dir() {
            return Err(ScaffoldError::TargetNotADirectory(
                target_directory.to_path_buf(),
            ));
        }

        match fs::metadata(template_root).await {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) | Err(_) => {
                return Err(ScaffoldError::TemplateNotFound(template_root.to_path_buf()));
            }
        }

        let target_directory = fs::canonicalize(target_directory)
            .await
            .map_err(|e| map_io_error(target_directory, e))?;
        let project_dir = target_directory.join(self.project_name);

        if fs::try_exists(&project_dir).await? {
            return Err(ScaffoldError::DestinationExists(project_dir));
        }

        // Re-check at the point of creation: create_dir is not
        // create_dir_all, so a concurrent winner turns into
        // DestinationExists instead of a silent overwrite.
        match self.workspace.create_dir(&project_dir).await {
            Err(ScaffoldError::IoError(e))
                if e.kind() == std::io::ErrorKind::AlreadyExists =>
            {
                return Err(ScaffoldError::DestinationExists(project_dir));
            }
            other => other?,
        }
        tracing::info!("Created project directory at {}", project_dir.display());

        Ok(project_dir)
    }

    /// Copies the template tree into the already-created project
    /// directory.
    ///
    /// The template root's directory entry named exactly
    /// [`PROJECT_NAME_TOKEN`] is the project skeleton: its contents land
    /// directly in the project directory. Sibling entries are copied into
    /// the project directory with the segment-rename rule applied.
    pub async fn populate(&self, template_root: &Path, project_dir: &Path) -> Result<()> {
        // Directories are created when enqueued, so a parent always exists
        // before any of its children is written.
        let mut pending: Vec<(PathBuf, PathBuf)> = Vec::new();
        self.copy_entries(template_root, project_dir, &mut pending, true)
            .await?;
        while let Some((src_dir, dst_dir)) = pending.pop() {
            self.copy_entries(&src_dir, &dst_dir, &mut pending, false)
                .await?;
        }
        Ok(())
    }

    async fn copy_entries(
        &self,
        src_dir: &Path,
        dst_dir: &Path,
        pending: &mut Vec<(PathBuf, PathBuf)>,
        template_root: bool,
    ) -> Result<()> {
        let mut entries = fs::read_dir(src_dir)
            .await
            .map_err(|e| map_io_error(src_dir, e))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| map_io_error(src_dir, e))?
        {
            let name = entry.file_name().to_string_lossy().into_owned();
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| map_io_error(&entry.path(), e))?;

            if file_type.is_dir() {
                if template_root && name == PROJECT_NAME_TOKEN {
                    // The skeleton directory: its contents become the
                    // project root itself.
                    pending.push((entry.path(), dst_dir.to_path_buf()));
                    continue;
                }
                let dst_child = dst_dir.join(substitute_segment(&name, self.project_name));
                self.workspace.create_dir(&dst_child).await?;
                tracing::debug!("Created directory {}", dst_child.display());
                pending.push((entry.path(), dst_child));
            } else {
                let dst_child = dst_dir.join(substitute_segment(&name, self.project_name));
                self.copy_file(&entry.path(), &dst_child).await?;
                tracing::debug!("Materialized file {}", dst_child.display());
            }
        }

        Ok(())
    }

    /// UTF-8 files get token substitution; anything else is copied
    /// byte-for-byte, with only the path segment eligible for renaming.
    async fn copy_file(&self, src: &Path, dst: &Path) -> Result<()> {
        let bytes = fs::read(src).await.map_err(|e| map_io_error(src, e))?;
        match std::str::from_utf8(&bytes) {
            Ok(text) => {
                let substituted = substitute_content(text, self.project_name);
                self.workspace.write_file(dst, substituted.as_bytes()).await
            }
            Err(_) => self.workspace.write_file(dst, &bytes).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::workspace::LocalWorkspace;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_target_directory_is_rejected() {
        let template = TempDir::new().unwrap();
        let workspace = LocalWorkspace::new();
        let materializer = DirectoryMaterializer::new(&workspace, "demo");

        let result = materializer
            .create_project_dir(template.path(), Path::new("/definitely/not/there"))
            .await;
        assert!(matches!(result, Err(ScaffoldError::TargetNotFound(_))));
    }

    #[tokio::test]
    async fn test_target_must_be_a_directory() {
        let template = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        let file_path = target.path().join("not_a_dir");
        std::fs::write(&file_path, b"x").unwrap();

        let workspace = LocalWorkspace::new();
        let materializer = DirectoryMaterializer::new(&workspace, "demo");
        let result = materializer
            .create_project_dir(template.path(), &file_path)
            .await;
        assert!(matches!(result, Err(ScaffoldError::TargetNotADirectory(_))));
    }

    #[tokio::test]
    async fn test_existing_destination_is_rejected() {
        let template = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        std::fs::create_dir(target.path().join("demo")).unwrap();

        let workspace = LocalWorkspace::new();
        let materializer = DirectoryMaterializer::new(&workspace, "demo");
        let result = materializer
            .create_project_dir(template.path(), target.path())
            .await;
        assert!(matches!(result, Err(ScaffoldError::DestinationExists(_))));
    }

    #[tokio::test]
    async fn test_missing_template_root_is_rejected_before_any_write() {
        let target = TempDir::new().unwrap();
        let workspace = LocalWorkspace::new();
        let materializer = DirectoryMaterializer::new(&workspace, "demo");

        let result = materializer
            .create_project_dir(Path::new("/no/template/here"), target.path())
            .await;
        assert!(matches!(result, Err(ScaffoldError::TemplateNotFound(_))));
        assert!(!target.path().join("demo").exists());
    }
}
