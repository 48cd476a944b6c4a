use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Untrusted configuration mapping as delivered by a caller (CLI flags,
/// TOML file, or an upstream request layer).
pub type RawConfig = HashMap<String, serde_json::Value>;

/// Required keys, checked in this order. `target_directory` comes last
/// because it belongs to the materialization boundary rather than the pure
/// generator.
pub const REQUIRED_FIELDS: [&str; 11] = [
    "project_name",
    "project_description",
    "open_source_license",
    "cloud_provider",
    "experiment_tracker",
    "python_version",
    "include_docker",
    "include_ci",
    "include_tests",
    "include_notebooks",
    "target_directory",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloudProvider {
    Aws,
    Gcp,
    Azure,
    /// The "no cloud" sentinel; no environment file is emitted.
    None,
    Other(String),
}

impl CloudProvider {
    pub fn parse(value: &str) -> Self {
        match value {
            "AWS" => Self::Aws,
            "GCP" => Self::Gcp,
            "Azure" => Self::Azure,
            "None" => Self::None,
            other => Self::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExperimentTracker {
    MLflow,
    TensorBoard,
    WandB,
    Other(String),
}

impl ExperimentTracker {
    pub fn parse(value: &str) -> Self {
        match value {
            "MLflow" => Self::MLflow,
            "TensorBoard" => Self::TensorBoard,
            "WandB" => Self::WandB,
            other => Self::Other(other.to_string()),
        }
    }

    /// Extra pip requirement demanded by the tracker, if any.
    pub fn extra_requirement(&self) -> Option<&'static str> {
        match self {
            Self::TensorBoard => Some("tensorboard>=2.13.0"),
            Self::WandB => Some("wandb>=0.15.0"),
            Self::MLflow | Self::Other(_) => None,
        }
    }
}

/// Validated, immutable configuration for one generation request.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    pub project_name: String,
    pub project_description: String,
    pub open_source_license: String,
    pub cloud_provider: CloudProvider,
    pub experiment_tracker: ExperimentTracker,
    pub python_version: String,
    pub include_docker: bool,
    pub include_ci: bool,
    pub include_tests: bool,
    pub include_notebooks: bool,
    pub target_directory: PathBuf,
}

/// Per-invocation lifecycle. `Committed`, `Rejected` and `RolledBack` are
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationState {
    Validating,
    Materializing,
    GeneratingArtifacts,
    Committed,
    Rejected,
    RolledBack,
}
