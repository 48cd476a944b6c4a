//! Supplementary artifact generation: README, requirements manifest,
//! ignore-file, and the flag-gated .env / Dockerfile. All content is a
//! deterministic function of the validated configuration; rendering is
//! split from writing so the text can be unit tested.

use crate::domain::model::{CloudProvider, ProjectConfig};
use crate::domain::ports::Workspace;
use crate::utils::error::Result;
use std::path::Path;

const BASE_REQUIREMENTS: [&str; 8] = [
    "numpy>=1.26.0",
    "pandas>=2.0.0",
    "scikit-learn>=1.3.0",
    "mlflow>=2.5.0",
    "pytest>=7.0.0",
    "black>=23.0.0",
    "isort>=5.10.0",
    "flake8>=6.0.0",
];

const NOTEBOOK_REQUIREMENTS: [&str; 2] = ["jupyter>=1.0.0", "ipykernel>=6.0.0"];

const GITIGNORE_PATTERNS: [&str; 14] = [
    "__pycache__/*",
    "*.pyc",
    ".env",
    ".venv/*",
    "venv/*",
    "*.log",
    "mlruns/*",
    "*.ipynb_checkpoints/*",
    ".pytest_cache/*",
    ".coverage",
    "htmlcov/*",
    "dist/*",
    "build/*",
    "*.egg-info/*",
];

const README_STRUCTURE: &str = "## Project Structure
```
.
├── src/              # Source code
│   ├── __init__.py
│   ├── data/         # Data processing
│   ├── models/       # ML models
│   └── utils/        # Utility functions
├── tests/           # Test files
└── requirements.txt # Project dependencies
```
";

const DOCKERFILE: &str = "FROM python:3.11-slim

WORKDIR /app

COPY requirements.txt .
RUN pip install --no-cache-dir -r requirements.txt

COPY . .

CMD [\"python\", \"src/train.py\"]";

pub struct ArtifactGenerator<'a, W: Workspace> {
    workspace: &'a W,
    config: &'a ProjectConfig,
}

impl<'a, W: Workspace> ArtifactGenerator<'a, W> {
    pub fn new(workspace: &'a W, config: &'a ProjectConfig) -> Self {
        Self { workspace, config }
    }

    /// Writes every artifact into the project directory. Writes are
    /// independent; the first failure aborts the remainder and surfaces
    /// the underlying error.
    pub async fn write_all(&self, project_dir: &Path) -> Result<()> {
        self.workspace
            .write_file(&project_dir.join("README.md"), self.readme().as_bytes())
            .await?;
        tracing::debug!("Generated README.md");

        self.workspace
            .write_file(
                &project_dir.join("requirements.txt"),
                self.requirements().as_bytes(),
            )
            .await?;
        tracing::debug!("Generated requirements.txt");

        self.workspace
            .write_file(&project_dir.join(".gitignore"), gitignore().as_bytes())
            .await?;
        tracing::debug!("Generated .gitignore");

        if let Some(env) = self.env_file() {
            self.workspace
                .write_file(&project_dir.join(".env"), env.as_bytes())
                .await?;
            tracing::debug!("Generated .env file");
        }

        if self.config.include_docker {
            self.workspace
                .write_file(&project_dir.join("Dockerfile"), DOCKERFILE.as_bytes())
                .await?;
            tracing::debug!("Generated Dockerfile");
        }

        Ok(())
    }

    fn readme(&self) -> String {
        format!(
            "# {}\n\n{}\n\n{}",
            self.config.project_name, self.config.project_description, README_STRUCTURE
        )
    }

    fn requirements(&self) -> String {
        let mut lines: Vec<&str> = BASE_REQUIREMENTS.to_vec();
        if let Some(extra) = self.config.experiment_tracker.extra_requirement() {
            lines.push(extra);
        }
        if self.config.include_notebooks {
            lines.extend(NOTEBOOK_REQUIREMENTS);
        }
        lines.join("\n")
    }

    /// None when the provider is the "None" sentinel. Unrecognized
    /// providers still get the header comment, just no credential block.
    fn env_file(&self) -> Option<String> {
        let mut content = String::from("# Cloud Provider Configuration\n");
        match &self.config.cloud_provider {
            CloudProvider::None => return None,
            CloudProvider::Aws => {
                content.push_str("AWS_ACCESS_KEY_ID=your_access_key\n");
                content.push_str("AWS_SECRET_ACCESS_KEY=your_secret_key\n");
            }
            CloudProvider::Gcp => {
                content.push_str("GOOGLE_APPLICATION_CREDENTIALS=path/to/credentials.json\n");
            }
            CloudProvider::Azure => {
                content.push_str("AZURE_STORAGE_CONNECTION_STRING=your_connection_string\n");
            }
            CloudProvider::Other(_) => {}
        }
        Some(content)
    }
}

fn gitignore() -> String {
    GITIGNORE_PATTERNS.join("\n")
}
