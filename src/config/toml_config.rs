//! TOML file front-end, so a saved configuration can be replayed with
//! `--config scaffold.toml` instead of passing every flag.

use crate::domain::model::RawConfig;
use crate::domain::ports::ConfigSource;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub project: ProjectSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSection {
    pub project_name: Option<String>,
    pub project_description: Option<String>,
    pub open_source_license: Option<String>,
    pub cloud_provider: Option<String>,
    pub experiment_tracker: Option<String>,
    pub python_version: Option<String>,
    pub include_docker: Option<bool>,
    pub include_ci: Option<bool>,
    pub include_tests: Option<bool>,
    pub include_notebooks: Option<bool>,
    pub target_directory: Option<String>,
}

impl TomlConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()).into()
        })
    }
}

fn insert_string(raw: &mut RawConfig, key: &str, value: &Option<String>) {
    if let Some(v) = value {
        raw.insert(key.to_string(), Value::String(v.clone()));
    }
}

fn insert_bool(raw: &mut RawConfig, key: &str, value: &Option<bool>) {
    if let Some(v) = value {
        raw.insert(key.to_string(), Value::Bool(*v));
    }
}

impl ConfigSource for TomlConfig {
    fn raw_config(&self) -> Result<RawConfig> {
        let mut raw = RawConfig::new();
        let p = &self.project;
        insert_string(&mut raw, "project_name", &p.project_name);
        insert_string(&mut raw, "project_description", &p.project_description);
        insert_string(&mut raw, "open_source_license", &p.open_source_license);
        insert_string(&mut raw, "cloud_provider", &p.cloud_provider);
        insert_string(&mut raw, "experiment_tracker", &p.experiment_tracker);
        insert_string(&mut raw, "python_version", &p.python_version);
        insert_bool(&mut raw, "include_docker", &p.include_docker);
        insert_bool(&mut raw, "include_ci", &p.include_ci);
        insert_bool(&mut raw, "include_tests", &p.include_tests);
        insert_bool(&mut raw, "include_notebooks", &p.include_notebooks);
        insert_string(&mut raw, "target_directory", &p.target_directory);
        Ok(raw)
    }
}
