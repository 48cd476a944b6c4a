pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{toml_config::TomlConfig, CliConfig};
pub use core::{scaffolder::Scaffolder, workspace::LocalWorkspace};
pub use domain::model::{ProjectConfig, RawConfig};
pub use domain::ports::{ConfigSource, Workspace};
pub use utils::error::{Result, ScaffoldError};
