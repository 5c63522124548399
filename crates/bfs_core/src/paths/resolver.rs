//! Output path resolution.
//!
//! Produces the single source-of-truth output path template for a job and
//! resolves it with the job's timestamp. Two addressing modes exist:
//!
//! - **Scene-relative**: directory and filename prefix both come from the
//!   scene's own configured output path.
//! - **Root-relative**: directory = farm root, optionally extended with the
//!   trailing components of the blend file's location, then the job name.
//!   The filename prefix still comes from the scene's output path.
//!
//! Unless the stable-directory flag is set, a `{timestamp}` segment is
//! inserted immediately before the filename so each submission renders into
//! a distinct directory.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::template::PathTemplate;
use crate::compiler::{CompileError, CompileResult};
use crate::config::JobSettings;
use crate::models::{AddressingMode, SceneContext};

/// The resolved output location for one job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedOutput {
    /// The unresolved template, kept for diagnostics.
    pub template: PathTemplate,
    /// Full output file template with the timestamp substituted.
    /// Ends in `<prefix>_######`; the six-hash frame token is Blender's
    /// convention and is never resolved here.
    pub file_template: String,
    /// The resolved output directory (everything but the filename segment).
    pub directory: PathBuf,
}

/// Build the unresolved output path template for a job.
pub fn build_template(
    settings: &JobSettings,
    scene: &SceneContext,
) -> CompileResult<PathTemplate> {
    let prefix = filename_prefix(scene)?;
    let mut path = base_directory(settings, scene)?;

    if !settings.output.stable_dir {
        path.push("{timestamp}");
    }
    path.push(format!("{}_######", prefix));

    Ok(PathTemplate::new(path.to_string_lossy().into_owned()))
}

/// Build and resolve the output location with the job's timestamp.
pub fn resolve_output(
    settings: &JobSettings,
    scene: &SceneContext,
    timestamp: &str,
) -> CompileResult<ResolvedOutput> {
    let template = build_template(settings, scene)?;
    let file_template = template.resolve(timestamp);
    let directory = Path::new(&file_template)
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .to_path_buf();

    tracing::debug!(
        mode = %settings.output.mode,
        template = %template,
        directory = %directory.display(),
        "resolved output path"
    );

    Ok(ResolvedOutput {
        template,
        file_template,
        directory,
    })
}

/// Filename prefix, always borrowed from the scene's configured output path.
///
/// A trailing separator means the scene renders with an empty prefix into
/// that directory, which is preserved here.
fn filename_prefix(scene: &SceneContext) -> CompileResult<String> {
    let raw = scene.output_path.trim();
    if raw.is_empty() {
        return Err(CompileError::missing_setting("scene.output_path"));
    }
    if raw.ends_with('/') || raw.ends_with('\\') {
        return Ok(String::new());
    }
    Ok(Path::new(raw)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default())
}

/// Base output directory according to the addressing mode.
fn base_directory(settings: &JobSettings, scene: &SceneContext) -> CompileResult<PathBuf> {
    match settings.output.mode {
        AddressingMode::SceneRelative => {
            let raw = scene.output_path.trim();
            if raw.is_empty() {
                return Err(CompileError::missing_setting("scene.output_path"));
            }
            let path = Path::new(raw);
            if raw.ends_with('/') || raw.ends_with('\\') {
                Ok(path.to_path_buf())
            } else {
                Ok(path
                    .parent()
                    .unwrap_or_else(|| Path::new(""))
                    .to_path_buf())
            }
        }
        AddressingMode::RootRelative => {
            let root = settings.output.root.trim();
            if root.is_empty() {
                return Err(CompileError::missing_setting("output.root"));
            }
            let mut dir = PathBuf::from(root);

            let count = settings.output.add_path_components as usize;
            if count > 0 {
                for component in trailing_components(&settings.scene.blend_file, count)? {
                    dir.push(component);
                }
            }

            let job_name = settings.scene.job_name.trim();
            if job_name.is_empty() {
                return Err(CompileError::missing_setting("scene.job_name"));
            }
            dir.push(job_name);
            Ok(dir)
        }
    }
}

/// The last `count` directory components of the blend file's location,
/// in original order.
fn trailing_components(blend_file: &str, count: usize) -> CompileResult<Vec<String>> {
    let trimmed = blend_file.trim();
    if trimmed.is_empty() {
        return Err(CompileError::missing_setting("scene.blend_file"));
    }
    let dir = Path::new(trimmed)
        .parent()
        .unwrap_or_else(|| Path::new(""));
    let components: Vec<String> = dir
        .components()
        .filter_map(|component| match component {
            Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    let skip = components.len().saturating_sub(count);
    Ok(components[skip..].to_vec())
}
