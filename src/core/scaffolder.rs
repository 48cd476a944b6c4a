//! Generation engine. Drives one request through
//! Validating -> Materializing -> GeneratingArtifacts -> Committed and
//! owns the rollback boundary: once the project directory exists, any
//! later failure deletes the whole subtree before the error propagates,
//! so the caller observes either a complete project or none at all.

use crate::core::artifacts::ArtifactGenerator;
use crate::core::materializer::DirectoryMaterializer;
use crate::core::validator;
use crate::core::workspace::LocalWorkspace;
use crate::domain::model::{GenerationState, ProjectConfig, RawConfig};
use crate::domain::ports::Workspace;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

pub struct Scaffolder<W: Workspace> {
    workspace: W,
    template_root: PathBuf,
}

impl Scaffolder<LocalWorkspace> {
    pub fn new(template_root: impl Into<PathBuf>) -> Self {
        Self {
            workspace: LocalWorkspace::new(),
            template_root: template_root.into(),
        }
    }
}

impl<W: Workspace> Scaffolder<W> {
    /// Same engine, custom workspace port. Used by tests to inject
    /// mid-materialization failures.
    pub fn with_workspace(workspace: W, template_root: impl Into<PathBuf>) -> Self {
        Self {
            workspace,
            template_root: template_root.into(),
        }
    }

    /// Validates the raw configuration and materializes the project.
    /// Returns the absolute path of the created project directory.
    pub async fn generate(&self, raw: &RawConfig) -> Result<PathBuf> {
        tracing::debug!(state = ?GenerationState::Validating, "Starting generation");
        let config = match validator::validate(raw) {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!(state = ?GenerationState::Rejected, "Configuration rejected");
                return Err(e);
            }
        };
        tracing::info!("Generating project '{}'", config.project_name);

        tracing::debug!(state = ?GenerationState::Materializing, "Copying template tree");
        let materializer = DirectoryMaterializer::new(&self.workspace, &config.project_name);

        // Precondition failures surface before the project directory
        // exists, so there is nothing to delete for them. Once creation
        // succeeds, that directory is the rollback unit.
        let project_dir = materializer
            .create_project_dir(&self.template_root, &config.target_directory)
            .await?;

        if let Err(e) = self
            .populate_and_emit(&materializer, &config, &project_dir)
            .await
        {
            self.rollback(&project_dir).await;
            tracing::debug!(state = ?GenerationState::RolledBack, "Generation rolled back");
            return Err(e);
        }

        tracing::debug!(state = ?GenerationState::Committed, "Generation committed");
        Ok(project_dir)
    }

    async fn populate_and_emit(
        &self,
        materializer: &DirectoryMaterializer<'_, W>,
        config: &ProjectConfig,
        project_dir: &Path,
    ) -> Result<()> {
        materializer.populate(&self.template_root, project_dir).await?;

        tracing::debug!(state = ?GenerationState::GeneratingArtifacts, "Writing artifacts");
        let artifacts = ArtifactGenerator::new(&self.workspace, config);
        artifacts.write_all(project_dir).await
    }

    /// Deletes the partially created project subtree. A cleanup failure is
    /// secondary: it is logged and the original error still propagates.
    async fn rollback(&self, project_dir: &Path) {
        tracing::warn!("Rolling back partial project at {}", project_dir.display());
        if let Err(cleanup) = self.workspace.remove_dir_all(project_dir).await {
            tracing::warn!(
                "Failed to clean up project directory {}: {}",
                project_dir.display(),
                cleanup
            );
        }
    }
}
