//! Job settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! They are populated once at job-submission time and flow through the
//! compile pipeline unchanged; the computed output-path template is not a
//! settings field but a separate value produced by the path resolver.

use serde::{Deserialize, Serialize};

use crate::models::{AddressingMode, ImageFormat};

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobSettings {
    /// Output location settings.
    #[serde(default)]
    pub output: OutputSettings,

    /// Frame range and chunking settings.
    #[serde(default)]
    pub frames: FrameSettings,

    /// Scene and renderer settings.
    #[serde(default)]
    pub scene: SceneSettings,
}

/// Output location configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// How the output root directory is derived.
    #[serde(default)]
    pub mode: AddressingMode,

    /// Farm output root (root-relative mode only).
    #[serde(default)]
    pub root: String,

    /// Number of trailing directory components of the blend file's location
    /// to reproduce under the root (root-relative mode, 0 disables).
    #[serde(default)]
    pub add_path_components: u32,

    /// Render into the same directory on every submission instead of a
    /// fresh timestamped one.
    #[serde(default)]
    pub stable_dir: bool,

    /// Force the renderer to overwrite existing output files.
    #[serde(default)]
    pub force_overwrite: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            mode: AddressingMode::default(),
            root: String::new(),
            add_path_components: 0,
            stable_dir: false,
            force_overwrite: false,
        }
    }
}

/// Frame range and chunking configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSettings {
    /// Frame-range expression, e.g. "3, 5-10, 47-327".
    /// Blank falls back to the scene's full playback range.
    #[serde(default)]
    pub frame_range: Option<String>,

    /// Maximum number of frames per task.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: i64,

    /// Frame rate, passed through to the scheduler for time estimates.
    #[serde(default = "default_fps")]
    pub fps: u32,
}

fn default_chunk_size() -> i64 {
    5
}

fn default_fps() -> u32 {
    24
}

impl Default for FrameSettings {
    fn default() -> Self {
        Self {
            frame_range: None,
            chunk_size: default_chunk_size(),
            fps: default_fps(),
        }
    }
}

/// Scene and renderer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSettings {
    /// Job name shown in the scheduler and used as a directory segment.
    #[serde(default)]
    pub job_name: String,

    /// Path to the blend file the workers load.
    #[serde(default)]
    pub blend_file: String,

    /// Scene to render; blank renders the file's active scene.
    #[serde(default)]
    pub scene_name: Option<String>,

    /// Output image format override; blank uses the scene's own format.
    #[serde(default)]
    pub image_format: Option<ImageFormat>,

    /// Output file extension, informational for the host (Blender appends
    /// the extension itself).
    #[serde(default = "default_file_extension")]
    pub file_extension: String,
}

fn default_file_extension() -> String {
    ".png".to_string()
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            job_name: String::new(),
            blend_file: String::new(),
            scene_name: None,
            image_format: None,
            file_extension: default_file_extension(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_serializes() {
        let settings = JobSettings::default();
        let toml = toml::to_string_pretty(&settings).unwrap();
        assert!(toml.contains("[output]"));
        assert!(toml.contains("[frames]"));
        assert!(toml.contains("chunk_size"));
    }

    #[test]
    fn settings_round_trip() {
        let mut settings = JobSettings::default();
        settings.output.mode = AddressingMode::RootRelative;
        settings.output.root = "/farm".to_string();
        settings.scene.job_name = "MyJob".to_string();

        let toml = toml::to_string_pretty(&settings).unwrap();
        let parsed: JobSettings = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let minimal = "[scene]\njob_name = \"shot010\"";
        let parsed: JobSettings = toml::from_str(minimal).unwrap();
        // Custom value preserved
        assert_eq!(parsed.scene.job_name, "shot010");
        // Defaults applied for missing
        assert_eq!(parsed.frames.chunk_size, 5);
        assert_eq!(parsed.output.mode, AddressingMode::SceneRelative);
        assert!(!parsed.output.stable_dir);
    }
}
