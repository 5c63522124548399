//! Configuration for BlendFarm Submit.
//!
//! Job settings are TOML-based with logical sections, populated once at
//! job-submission time. Missing fields fall back to defaults, so a minimal
//! settings file stays minimal.

mod loader;
mod settings;

pub use loader::{load_scene, load_settings, ConfigError, ConfigResult};
pub use settings::{FrameSettings, JobSettings, OutputSettings, SceneSettings};
