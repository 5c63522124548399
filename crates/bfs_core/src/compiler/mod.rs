//! Job compilation pipeline.
//!
//! One synchronous pass per submission: validate the settings, resolve the
//! output path, chunk the frame range, author the tasks. Every stage is
//! pure; the only non-determinism is the job timestamp, sampled exactly
//! once so all tasks of a job share one output directory. Any failure
//! aborts the compile before a single task is produced.

mod errors;

pub use errors::{CompileError, CompileResult};

use serde::{Deserialize, Serialize};

use crate::author::author_tasks;
use crate::config::JobSettings;
use crate::frames::{chunk_frames, FrameSet};
use crate::models::{ImageFormat, SceneContext, TaskDescriptor};
use crate::paths::{resolve_output, ResolvedOutput};

/// Format of the job timestamp (path-safe local time).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// A fully compiled job, ready to hand to the scheduler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledJob {
    /// Job name shown in the scheduler.
    pub job_name: String,
    /// Resolved output location shared by every task.
    pub output: ResolvedOutput,
    /// The timestamp substituted into the output path.
    pub timestamp: String,
    /// Output file extension, informational for the host.
    pub file_extension: String,
    /// Tasks in ascending frame order.
    pub tasks: Vec<TaskDescriptor>,
}

/// Validate domain rules before any path or task computation.
///
/// Structural typing is the caller's responsibility; this checks only the
/// rules a correctly-typed settings mapping can still violate.
pub fn validate(settings: &JobSettings, scene: &SceneContext) -> CompileResult<()> {
    let format = effective_format(settings, scene);
    if format.is_video() {
        return Err(CompileError::unsupported_format(format.name()));
    }

    if settings.scene.job_name.trim().is_empty() {
        return Err(CompileError::missing_setting("scene.job_name"));
    }
    if scene.output_path.trim().is_empty() {
        return Err(CompileError::missing_setting("scene.output_path"));
    }

    if settings.output.mode == crate::models::AddressingMode::RootRelative {
        if settings.output.root.trim().is_empty() {
            return Err(CompileError::missing_setting("output.root"));
        }
        if settings.output.add_path_components > 0
            && settings.scene.blend_file.trim().is_empty()
        {
            return Err(CompileError::missing_setting("scene.blend_file"));
        }
    }

    Ok(())
}

/// Compile a job, sampling the timestamp now.
pub fn compile(settings: &JobSettings, scene: &SceneContext) -> CompileResult<CompiledJob> {
    let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
    compile_with_timestamp(settings, scene, &timestamp)
}

/// Compile a job with an explicit timestamp.
///
/// The timestamp is applied to every chunk of the job, so repeated calls
/// with the same inputs are fully deterministic.
pub fn compile_with_timestamp(
    settings: &JobSettings,
    scene: &SceneContext,
    timestamp: &str,
) -> CompileResult<CompiledJob> {
    validate(settings, scene)?;

    let settings = with_scene_defaults(settings, scene);
    tracing::debug!(job = %settings.scene.job_name, %timestamp, "compiling job");

    let output = resolve_output(&settings, scene, timestamp)?;

    let expr = settings
        .frames
        .frame_range
        .clone()
        .unwrap_or_else(|| scene.default_frame_range());
    let frames = FrameSet::parse(&expr)?;
    let chunks = chunk_frames(&frames, settings.frames.chunk_size)?;

    let tasks = author_tasks(&settings, &output, &chunks);
    tracing::debug!(tasks = tasks.len(), "job compiled");

    Ok(CompiledJob {
        job_name: settings.scene.job_name.trim().to_string(),
        output,
        timestamp: timestamp.to_string(),
        file_extension: settings.scene.file_extension.clone(),
        tasks,
    })
}

/// Fill blank settings from the scene context.
///
/// Returns a new value; the caller's settings are never mutated.
fn with_scene_defaults(settings: &JobSettings, scene: &SceneContext) -> JobSettings {
    let mut settings = settings.clone();
    if settings.scene.image_format.is_none() {
        settings.scene.image_format = Some(scene.image_format);
    }
    if settings.frames.frame_range.is_none() {
        settings.frames.frame_range = Some(scene.default_frame_range());
    }
    settings
}

fn effective_format(settings: &JobSettings, scene: &SceneContext) -> ImageFormat {
    settings.scene.image_format.unwrap_or(scene.image_format)
}
