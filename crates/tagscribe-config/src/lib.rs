//! Configuration management for Tagscribe.
//!
//! This crate handles loading the optional `tagscribe.toml` configuration file.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{
    CONFIG_FILE_NAME, find_and_load_config_from, load_config, load_or_default,
    render_default_config,
};
pub use schema::{ChangelogConfig, Config, DEFAULT_FILE_NAME, DEFAULT_HEADER};
