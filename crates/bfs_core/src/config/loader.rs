//! Loading of settings and scene-context files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::settings::JobSettings;
use crate::models::SceneContext;

/// Errors that can occur while loading configuration files.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
}

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Load job settings from a TOML file.
pub fn load_settings(path: impl AsRef<Path>) -> ConfigResult<JobSettings> {
    Ok(toml::from_str(&read(path.as_ref())?)?)
}

/// Load a scene context from a TOML file.
pub fn load_scene(path: impl AsRef<Path>) -> ConfigResult<SceneContext> {
    Ok(toml::from_str(&read(path.as_ref())?)?)
}

fn read(path: &Path) -> ConfigResult<String> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}
