//! Configuration validation. Pure: touches no filesystem state, so a
//! rejected request is guaranteed to have performed zero writes.

use crate::domain::model::{
    CloudProvider, ExperimentTracker, ProjectConfig, RawConfig, REQUIRED_FIELDS,
};
use crate::utils::error::Result;
use crate::utils::validation::{flag_field, required_value, string_field, validate_project_name};
use std::path::PathBuf;

/// Checks the raw mapping for completeness and basic semantic validity,
/// producing the immutable [`ProjectConfig`] used by the rest of the
/// pipeline. The first absent field (in [`REQUIRED_FIELDS`] order) is the
/// one reported.
pub fn validate(raw: &RawConfig) -> Result<ProjectConfig> {
    for field in REQUIRED_FIELDS {
        required_value(raw, field)?;
    }

    let project_name = validate_project_name(&string_field(raw, "project_name")?)?;

    Ok(ProjectConfig {
        project_name,
        project_description: string_field(raw, "project_description")?,
        open_source_license: string_field(raw, "open_source_license")?,
        cloud_provider: CloudProvider::parse(&string_field(raw, "cloud_provider")?),
        experiment_tracker: ExperimentTracker::parse(&string_field(raw, "experiment_tracker")?),
        python_version: string_field(raw, "python_version")?,
        include_docker: flag_field(raw, "include_docker")?,
        include_ci: flag_field(raw, "include_ci")?,
        include_tests: flag_field(raw, "include_tests")?,
        include_notebooks: flag_field(raw, "include_notebooks")?,
        target_directory: PathBuf::from(string_field(raw, "target_directory")?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ScaffoldError;
    use serde_json::json;

    fn full_config() -> RawConfig {
        let mut raw = RawConfig::new();
        raw.insert("project_name".into(), json!("demo"));
        raw.insert("project_description".into(), json!("A demo project"));
        raw.insert("open_source_license".into(), json!("MIT"));
        raw.insert("cloud_provider".into(), json!("AWS"));
        raw.insert("experiment_tracker".into(), json!("MLflow"));
        raw.insert("python_version".into(), json!("3.11"));
        raw.insert("include_docker".into(), json!("yes"));
        raw.insert("include_ci".into(), json!("no"));
        raw.insert("include_tests".into(), json!(true));
        raw.insert("include_notebooks".into(), json!(false));
        raw.insert("target_directory".into(), json!("/tmp/projects"));
        raw
    }

    #[test]
    fn test_valid_config_passes() {
        let config = validate(&full_config()).unwrap();
        assert_eq!(config.project_name, "demo");
        assert_eq!(config.cloud_provider, CloudProvider::Aws);
        assert_eq!(config.experiment_tracker, ExperimentTracker::MLflow);
        assert!(config.include_docker);
        assert!(!config.include_ci);
        assert!(config.include_tests);
        assert!(!config.include_notebooks);
        assert_eq!(config.target_directory, PathBuf::from("/tmp/projects"));
    }

    #[test]
    fn test_missing_field_names_first_absent_in_declared_order() {
        let mut raw = full_config();
        raw.remove("experiment_tracker");
        raw.remove("python_version");
        match validate(&raw) {
            Err(ScaffoldError::MissingField { field }) => {
                assert_eq!(field, "experiment_tracker");
            }
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_every_required_field_is_enforced() {
        for field in REQUIRED_FIELDS {
            let mut raw = full_config();
            raw.remove(field);
            match validate(&raw) {
                Err(ScaffoldError::MissingField { field: reported }) => {
                    assert_eq!(reported, field);
                }
                other => panic!("expected MissingField for {}, got {:?}", field, other),
            }
        }
    }

    #[test]
    fn test_whitespace_project_name_is_rejected() {
        let mut raw = full_config();
        raw.insert("project_name".into(), json!("   "));
        assert!(matches!(
            validate(&raw),
            Err(ScaffoldError::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn test_project_name_is_trimmed() {
        let mut raw = full_config();
        raw.insert("project_name".into(), json!("  acme  "));
        assert_eq!(validate(&raw).unwrap().project_name, "acme");
    }

    #[test]
    fn test_null_field_counts_as_missing() {
        let mut raw = full_config();
        raw.insert("cloud_provider".into(), serde_json::Value::Null);
        assert!(matches!(
            validate(&raw),
            Err(ScaffoldError::MissingField { field }) if field == "cloud_provider"
        ));
    }
}
