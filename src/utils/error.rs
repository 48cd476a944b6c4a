use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Missing required configuration: {field}")]
    MissingField { field: String },

    #[error("Project name cannot be empty")]
    InvalidProjectName { name: String },

    #[error("Target directory does not exist: {0}")]
    TargetNotFound(PathBuf),

    #[error("Target path is not a directory: {0}")]
    TargetNotADirectory(PathBuf),

    #[error("Project directory already exists: {0}")]
    DestinationExists(PathBuf),

    #[error("Template directory not found: {0}")]
    TemplateNotFound(PathBuf),

    #[error("Insufficient permissions for path: {0}")]
    PermissionDenied(PathBuf),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Filesystem,
    Template,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ScaffoldError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingField { .. } | Self::InvalidProjectName { .. } => {
                ErrorCategory::Validation
            }
            Self::TemplateNotFound(_) => ErrorCategory::Template,
            _ => ErrorCategory::Filesystem,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingField { .. } | Self::InvalidProjectName { .. } => ErrorSeverity::Low,
            Self::TargetNotFound(_)
            | Self::TargetNotADirectory(_)
            | Self::DestinationExists(_) => ErrorSeverity::Medium,
            Self::TemplateNotFound(_) | Self::PermissionDenied(_) => ErrorSeverity::High,
            Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MissingField { field } => {
                format!("Configuration is incomplete: '{}' was not provided", field)
            }
            Self::InvalidProjectName { .. } => {
                "Project name must contain at least one non-whitespace character".to_string()
            }
            Self::TargetNotFound(path) => {
                format!("Target directory '{}' does not exist", path.display())
            }
            Self::TargetNotADirectory(path) => {
                format!("Target path '{}' is not a directory", path.display())
            }
            Self::DestinationExists(path) => format!(
                "A project already exists at '{}'; choose a different name or target",
                path.display()
            ),
            Self::TemplateNotFound(path) => format!(
                "Template directory '{}' is missing from the installation",
                path.display()
            ),
            Self::PermissionDenied(path) => {
                format!("Insufficient permissions to write '{}'", path.display())
            }
            Self::IoError(e) => format!("File operation failed: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "Provide the missing field and retry",
            Self::InvalidProjectName { .. } => "Pick a non-empty project name",
            Self::TargetNotFound(_) => "Create the target directory first, or fix the path",
            Self::TargetNotADirectory(_) => "Point --target-directory at a directory, not a file",
            Self::DestinationExists(_) => "Remove the existing directory or pick another name",
            Self::TemplateNotFound(_) => "Check --template-dir points at the bundled templates",
            Self::PermissionDenied(_) => "Check ownership and write permissions on the target",
            Self::IoError(_) => "Check disk space and filesystem health, then retry",
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let err = ScaffoldError::MissingField {
            field: "project_name".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.severity(), ErrorSeverity::Low);

        let err = ScaffoldError::DestinationExists(PathBuf::from("/tmp/demo"));
        assert_eq!(err.category(), ErrorCategory::Filesystem);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err = ScaffoldError::IoError(std::io::Error::other("disk full"));
        assert_eq!(err.category(), ErrorCategory::Filesystem);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
