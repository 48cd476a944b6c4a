pub mod artifacts;
pub mod materializer;
pub mod scaffolder;
pub mod substitute;
pub mod validator;
pub mod workspace;

pub use crate::domain::model::{GenerationState, ProjectConfig, RawConfig};
pub use crate::domain::ports::{ConfigSource, Workspace};
pub use crate::utils::error::Result;
