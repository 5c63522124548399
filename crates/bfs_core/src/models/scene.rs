//! Scene context supplied by the host at submission time.

use serde::{Deserialize, Serialize};

use super::enums::ImageFormat;

/// Snapshot of the scene values the compiler derives defaults from.
///
/// The host reads these out of the open scene when the job is submitted.
/// Keeping them in a plain struct means no scene access (and no embedded
/// expression evaluation) happens inside the compiler itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneContext {
    /// First frame of the scene's playback range.
    pub frame_start: i64,
    /// Last frame of the scene's playback range (inclusive).
    pub frame_end: i64,
    /// The scene's configured render output path (directory + filename prefix).
    pub output_path: String,
    /// The scene's configured output format.
    #[serde(default)]
    pub image_format: ImageFormat,
}

impl SceneContext {
    /// Create a new scene context.
    pub fn new(
        frame_start: i64,
        frame_end: i64,
        output_path: impl Into<String>,
        image_format: ImageFormat,
    ) -> Self {
        Self {
            frame_start,
            frame_end,
            output_path: output_path.into(),
            image_format,
        }
    }

    /// Frame-range expression covering the scene's full playback range.
    ///
    /// Used when the job settings leave the frame range blank.
    pub fn default_frame_range(&self) -> String {
        format!("{}-{}", self.frame_start, self.frame_end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_frame_range_spans_scene() {
        let scene = SceneContext::new(1, 250, "/proj/render/beauty", ImageFormat::Png);
        assert_eq!(scene.default_frame_range(), "1-250");
    }

    #[test]
    fn scene_context_deserializes_with_default_format() {
        let toml = "frame_start = 1\nframe_end = 10\noutput_path = \"/tmp/out\"";
        let scene: SceneContext = toml::from_str(toml).unwrap();
        assert_eq!(scene.image_format, ImageFormat::Png);
    }
}
