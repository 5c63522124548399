//! Core enums used throughout the job compiler.

use serde::{Deserialize, Serialize};

/// Blender output image format identifiers.
///
/// These match the identifiers Blender accepts on its `--render-format`
/// command line. The video container formats (`AVI_JPEG`, `AVI_RAW`,
/// `FFMPEG`) cannot be rendered frame-by-frame on a farm and are rejected
/// by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ImageFormat {
    #[serde(rename = "BMP")]
    Bmp,
    #[serde(rename = "IRIS")]
    Iris,
    #[default]
    #[serde(rename = "PNG")]
    Png,
    #[serde(rename = "JPEG")]
    Jpeg,
    #[serde(rename = "JPEG2000")]
    Jpeg2000,
    #[serde(rename = "TARGA")]
    Targa,
    #[serde(rename = "TARGA_RAW")]
    TargaRaw,
    #[serde(rename = "CINEON")]
    Cineon,
    #[serde(rename = "DPX")]
    Dpx,
    #[serde(rename = "OPEN_EXR")]
    OpenExr,
    #[serde(rename = "OPEN_EXR_MULTILAYER")]
    OpenExrMultilayer,
    #[serde(rename = "HDR")]
    Hdr,
    #[serde(rename = "TIFF")]
    Tiff,
    #[serde(rename = "WEBP")]
    Webp,
    #[serde(rename = "AVI_JPEG")]
    AviJpeg,
    #[serde(rename = "AVI_RAW")]
    AviRaw,
    #[serde(rename = "FFMPEG")]
    Ffmpeg,
}

impl ImageFormat {
    /// Get the Blender identifier for this format (the `--render-format` value).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bmp => "BMP",
            Self::Iris => "IRIS",
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
            Self::Jpeg2000 => "JPEG2000",
            Self::Targa => "TARGA",
            Self::TargaRaw => "TARGA_RAW",
            Self::Cineon => "CINEON",
            Self::Dpx => "DPX",
            Self::OpenExr => "OPEN_EXR",
            Self::OpenExrMultilayer => "OPEN_EXR_MULTILAYER",
            Self::Hdr => "HDR",
            Self::Tiff => "TIFF",
            Self::Webp => "WEBP",
            Self::AviJpeg => "AVI_JPEG",
            Self::AviRaw => "AVI_RAW",
            Self::Ffmpeg => "FFMPEG",
        }
    }

    /// Whether this is a video container format.
    ///
    /// Video containers require a single sequential encode and cannot be
    /// split across farm tasks.
    pub fn is_video(&self) -> bool {
        matches!(self, Self::AviJpeg | Self::AviRaw | Self::Ffmpeg)
    }

    /// Get all available formats.
    pub fn all() -> &'static [ImageFormat] {
        &[
            Self::Bmp,
            Self::Iris,
            Self::Png,
            Self::Jpeg,
            Self::Jpeg2000,
            Self::Targa,
            Self::TargaRaw,
            Self::Cineon,
            Self::Dpx,
            Self::OpenExr,
            Self::OpenExrMultilayer,
            Self::Hdr,
            Self::Tiff,
            Self::Webp,
            Self::AviJpeg,
            Self::AviRaw,
            Self::Ffmpeg,
        ]
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How the output root directory is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressingMode {
    /// Base directory comes from the scene's own configured output path.
    #[default]
    SceneRelative,
    /// Base directory comes from a configured farm root, optionally joined
    /// with path components inherited from the blend file's location.
    RootRelative,
}

impl std::fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddressingMode::SceneRelative => write!(f, "scene-relative"),
            AddressingMode::RootRelative => write!(f, "root-relative"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_serializes_blender_identifier() {
        let json = serde_json::to_string(&ImageFormat::OpenExr).unwrap();
        assert_eq!(json, "\"OPEN_EXR\"");
    }

    #[test]
    fn format_deserializes_blender_identifier() {
        let format: ImageFormat = serde_json::from_str("\"AVI_JPEG\"").unwrap();
        assert_eq!(format, ImageFormat::AviJpeg);
    }

    #[test]
    fn video_formats_flagged() {
        for format in ImageFormat::all() {
            let expected = matches!(
                format,
                ImageFormat::AviJpeg | ImageFormat::AviRaw | ImageFormat::Ffmpeg
            );
            assert_eq!(format.is_video(), expected, "format {}", format);
        }
    }

    #[test]
    fn addressing_mode_serializes_snake_case() {
        let json = serde_json::to_string(&AddressingMode::RootRelative).unwrap();
        assert_eq!(json, "\"root_relative\"");
    }
}
