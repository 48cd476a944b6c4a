pub mod toml_config;

use crate::domain::model::RawConfig;
use crate::domain::ports::ConfigSource;
use crate::utils::error::{Result, ScaffoldError};
use crate::utils::validation::Validate;
use clap::Parser;
use serde_json::Value;

#[derive(Debug, Clone, Parser)]
#[command(name = "mlops-scaffold")]
#[command(about = "Materialize a new MLOps project from the bundled template tree")]
pub struct CliConfig {
    /// Load the whole configuration from a TOML file instead of flags
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long)]
    pub project_name: Option<String>,

    #[arg(long)]
    pub project_description: Option<String>,

    #[arg(long)]
    pub open_source_license: Option<String>,

    /// One of AWS, GCP, Azure, None
    #[arg(long)]
    pub cloud_provider: Option<String>,

    /// One of MLflow, TensorBoard, WandB
    #[arg(long)]
    pub experiment_tracker: Option<String>,

    #[arg(long)]
    pub python_version: Option<String>,

    /// yes or no
    #[arg(long)]
    pub include_docker: Option<String>,

    /// yes or no
    #[arg(long)]
    pub include_ci: Option<String>,

    /// yes or no
    #[arg(long)]
    pub include_tests: Option<String>,

    /// yes or no
    #[arg(long)]
    pub include_notebooks: Option<String>,

    /// Directory the project is created under; must already exist
    #[arg(long)]
    pub target_directory: Option<String>,

    #[arg(long, default_value = "./templates/project_template")]
    pub template_dir: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    fn insert_if_present(raw: &mut RawConfig, key: &str, value: &Option<String>) {
        if let Some(v) = value {
            raw.insert(key.to_string(), Value::String(v.clone()));
        }
    }
}

impl ConfigSource for CliConfig {
    /// Maps flags 1:1 onto the raw mapping. Absent flags are simply left
    /// out; the core validator is the one that reports which field is
    /// missing.
    fn raw_config(&self) -> Result<RawConfig> {
        let mut raw = RawConfig::new();
        Self::insert_if_present(&mut raw, "project_name", &self.project_name);
        Self::insert_if_present(&mut raw, "project_description", &self.project_description);
        Self::insert_if_present(&mut raw, "open_source_license", &self.open_source_license);
        Self::insert_if_present(&mut raw, "cloud_provider", &self.cloud_provider);
        Self::insert_if_present(&mut raw, "experiment_tracker", &self.experiment_tracker);
        Self::insert_if_present(&mut raw, "python_version", &self.python_version);
        Self::insert_if_present(&mut raw, "include_docker", &self.include_docker);
        Self::insert_if_present(&mut raw, "include_ci", &self.include_ci);
        Self::insert_if_present(&mut raw, "include_tests", &self.include_tests);
        Self::insert_if_present(&mut raw, "include_notebooks", &self.include_notebooks);
        Self::insert_if_present(&mut raw, "target_directory", &self.target_directory);
        Ok(raw)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.config.is_none() && self.project_name.is_none() {
            return Err(ScaffoldError::MissingField {
                field: "project_name".to_string(),
            });
        }
        Ok(())
    }
}
