//! TOML configuration for the terminal front-end.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, RepositoryConfig, SessionConfig, UiConfig};
