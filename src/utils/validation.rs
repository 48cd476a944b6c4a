use crate::domain::model::RawConfig;
use crate::utils::error::{Result, ScaffoldError};
use serde_json::Value;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Looks up a required field in the raw configuration. Absent keys and
/// explicit nulls are both reported as missing.
pub fn required_value<'a>(raw: &'a RawConfig, field: &str) -> Result<&'a Value> {
    match raw.get(field) {
        Some(Value::Null) | None => Err(ScaffoldError::MissingField {
            field: field.to_string(),
        }),
        Some(value) => Ok(value),
    }
}

/// Extracts a required string field. Numbers are accepted and rendered as
/// text because web forms and TOML files disagree on whether values like a
/// Python version are strings.
pub fn string_field(raw: &RawConfig, field: &str) -> Result<String> {
    match required_value(raw, field)? {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(ScaffoldError::MissingField {
            field: field.to_string(),
        }),
    }
}

/// Extracts a boolean-like flag. Accepts JSON booleans and the literal
/// strings "yes"/"true" (case-insensitive); any other present value reads
/// as negative, matching what the request layer has always sent.
pub fn flag_field(raw: &RawConfig, field: &str) -> Result<bool> {
    match required_value(raw, field)? {
        Value::Bool(b) => Ok(*b),
        Value::String(s) => Ok(s.eq_ignore_ascii_case("yes") || s.eq_ignore_ascii_case("true")),
        _ => Ok(false),
    }
}

/// Trims surrounding whitespace and rejects names that end up empty.
pub fn validate_project_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ScaffoldError::InvalidProjectName {
            name: name.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn raw(pairs: &[(&str, Value)]) -> RawConfig {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect::<HashMap<_, _>>()
    }

    #[test]
    fn test_required_value_rejects_null_and_absent() {
        let config = raw(&[("project_name", Value::Null)]);
        assert!(required_value(&config, "project_name").is_err());
        assert!(required_value(&config, "python_version").is_err());
    }

    #[test]
    fn test_string_field_accepts_numbers() {
        let config = raw(&[("python_version", json!(3.11))]);
        assert_eq!(string_field(&config, "python_version").unwrap(), "3.11");
    }

    #[test]
    fn test_flag_field_accepts_yes_and_bool() {
        let config = raw(&[
            ("include_docker", json!("yes")),
            ("include_ci", json!("YES")),
            ("include_tests", json!(true)),
            ("include_notebooks", json!("no")),
        ]);
        assert!(flag_field(&config, "include_docker").unwrap());
        assert!(flag_field(&config, "include_ci").unwrap());
        assert!(flag_field(&config, "include_tests").unwrap());
        assert!(!flag_field(&config, "include_notebooks").unwrap());
    }

    #[test]
    fn test_validate_project_name_trims() {
        assert_eq!(validate_project_name("  demo  ").unwrap(), "demo");
        assert!(validate_project_name("   ").is_err());
        assert!(validate_project_name("").is_err());
    }
}
