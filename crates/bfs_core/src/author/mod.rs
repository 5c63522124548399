//! Blender command authoring.
//!
//! Builds one task per chunk, each carrying a complete Blender command
//! line. Token order is fixed: load preamble, scene selection, overwrite
//! script, output path, output format, frame selection.

use crate::config::JobSettings;
use crate::frames::Chunk;
use crate::models::{CommandDescriptor, TaskDescriptor};
use crate::paths::ResolvedOutput;

/// Python snippet forcing overwrite of existing output files.
///
/// Workers run headless, so there is no interactive overwrite prompt; this
/// runs after the blend file loads and before any frame renders, flipping
/// the scene to treat existing files as overwritable instead of skippable.
const OVERWRITE_EXPR: &str =
    "import bpy; bpy.context.scene.render.use_overwrite = True; \
     bpy.context.scene.render.use_placeholder = False";

/// Builder for Blender command-line tokens.
///
/// Generates the argument list for one chunk of the job. All chunks share
/// the same resolved output, so every task of a job renders into the same
/// directory.
pub struct BlenderArgsBuilder<'a> {
    settings: &'a JobSettings,
    output: &'a ResolvedOutput,
}

impl<'a> BlenderArgsBuilder<'a> {
    /// Create a new args builder.
    pub fn new(settings: &'a JobSettings, output: &'a ResolvedOutput) -> Self {
        Self { settings, output }
    }

    /// Build the complete argument tokens for one chunk.
    pub fn build(&self, chunk: &Chunk) -> Vec<String> {
        let mut tokens = Vec::new();

        // Background load of the blend file
        tokens.push("-b".to_string());
        tokens.push(self.settings.scene.blend_file.clone());

        // Scene selection
        if let Some(scene_name) = self.scene_name() {
            tokens.push("--scene".to_string());
            tokens.push(scene_name.to_string());
        }

        // Overwrite enforcement, before any frame renders
        if self.settings.output.force_overwrite {
            tokens.push("--python-expr".to_string());
            tokens.push(OVERWRITE_EXPR.to_string());
        }

        // Output path template
        tokens.push("--render-output".to_string());
        tokens.push(self.output.file_template.clone());

        // Output format
        tokens.push("--render-format".to_string());
        tokens.push(self.format_name());

        // Frame selection, in Blender's `..` range syntax
        tokens.push("--render-frame".to_string());
        tokens.push(chunk.renderer_token());

        tokens
    }

    fn scene_name(&self) -> Option<&str> {
        self.settings
            .scene
            .scene_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    fn format_name(&self) -> String {
        // The compiler fills a blank format override from the scene before
        // tasks are authored.
        self.settings
            .scene
            .image_format
            .unwrap_or_default()
            .name()
            .to_string()
    }
}

/// Author one task per chunk, in ascending chunk order.
pub fn author_tasks(
    settings: &JobSettings,
    output: &ResolvedOutput,
    chunks: &[Chunk],
) -> Vec<TaskDescriptor> {
    let builder = BlenderArgsBuilder::new(settings, output);
    let job_name = settings.scene.job_name.trim();

    chunks
        .iter()
        .map(|chunk| {
            let name = format!("{}_{}", job_name, chunk.token());
            let command = CommandDescriptor::new("blender", builder.build(chunk));
            tracing::debug!(task = %name, frames = chunk.frame_count(), "authored task");
            TaskDescriptor::blender(name, chunk.frame_count(), command)
        })
        .collect()
}

/// Format tokens for pretty display (one option per line).
pub fn format_tokens_pretty(tokens: &[String]) -> String {
    let mut result = String::new();
    let mut i = 0;

    while i < tokens.len() {
        let token = &tokens[i];
        if token.starts_with('-') && i + 1 < tokens.len() && !tokens[i + 1].starts_with('-') {
            // Option with value
            result.push_str(&format!("{} {} \\\n", token, tokens[i + 1]));
            i += 2;
        } else {
            result.push_str(&format!("{} \\\n", token));
            i += 1;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frames::{chunk_frames, FrameSet};
    use crate::models::ImageFormat;
    use crate::paths::{PathTemplate, ResolvedOutput};
    use std::path::PathBuf;

    fn output() -> ResolvedOutput {
        ResolvedOutput {
            template: PathTemplate::new("/out/{timestamp}/beauty_######"),
            file_template: "/out/STAMP/beauty_######".to_string(),
            directory: PathBuf::from("/out/STAMP"),
        }
    }

    fn settings() -> JobSettings {
        let mut settings = JobSettings::default();
        settings.scene.job_name = "shot010".to_string();
        settings.scene.blend_file = "/proj/shot010.blend".to_string();
        settings.scene.image_format = Some(ImageFormat::OpenExr);
        settings
    }

    fn one_chunk(expr: &str) -> Chunk {
        chunk_frames(&FrameSet::parse(expr).unwrap(), 1000)
            .unwrap()
            .remove(0)
    }

    #[test]
    fn builds_tokens_in_fixed_order() {
        let settings = settings();
        let out = output();
        let builder = BlenderArgsBuilder::new(&settings, &out);
        let tokens = builder.build(&one_chunk("47-52"));

        assert_eq!(
            tokens,
            vec![
                "-b",
                "/proj/shot010.blend",
                "--render-output",
                "/out/STAMP/beauty_######",
                "--render-format",
                "OPEN_EXR",
                "--render-frame",
                "47..52",
            ]
        );
    }

    #[test]
    fn scene_argument_only_when_configured() {
        let mut settings = settings();
        settings.scene.scene_name = Some("LayoutScene".to_string());
        let out = output();
        let tokens = BlenderArgsBuilder::new(&settings, &out).build(&one_chunk("1"));

        let pos = tokens.iter().position(|t| t == "--scene").unwrap();
        assert_eq!(tokens[pos + 1], "LayoutScene");
        // Scene selection comes before the overwrite/output arguments
        assert!(pos < tokens.iter().position(|t| t == "--render-output").unwrap());
    }

    #[test]
    fn blank_scene_name_is_omitted() {
        let mut settings = settings();
        settings.scene.scene_name = Some("   ".to_string());
        let out = output();
        let tokens = BlenderArgsBuilder::new(&settings, &out).build(&one_chunk("1"));
        assert!(!tokens.contains(&"--scene".to_string()));
    }

    #[test]
    fn overwrite_script_only_when_forced() {
        let mut settings = settings();
        let out = output();

        let tokens = BlenderArgsBuilder::new(&settings, &out).build(&one_chunk("1"));
        assert!(!tokens.contains(&"--python-expr".to_string()));

        settings.output.force_overwrite = true;
        let tokens = BlenderArgsBuilder::new(&settings, &out).build(&one_chunk("1"));
        let pos = tokens.iter().position(|t| t == "--python-expr").unwrap();
        assert!(tokens[pos + 1].contains("use_overwrite = True"));
        // Overwrite precedes output so it runs before any frame renders
        assert!(pos < tokens.iter().position(|t| t == "--render-output").unwrap());
    }

    #[test]
    fn authors_one_task_per_chunk() {
        let settings = settings();
        let out = output();
        let chunks = chunk_frames(&FrameSet::parse("1-5").unwrap(), 2).unwrap();

        let tasks = author_tasks(&settings, &out, &chunks);
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].name, "shot010_1-2");
        assert_eq!(tasks[2].name, "shot010_5");
        assert_eq!(tasks[0].frame_count, 2);
        assert_eq!(tasks[2].frame_count, 1);
        assert!(tasks.iter().all(|t| t.executor == "blender"));
    }

    #[test]
    fn pretty_format_pairs_options_with_values() {
        let tokens = vec![
            "-b".to_string(),
            "/x/a.blend".to_string(),
            "--render-frame".to_string(),
            "1..5".to_string(),
        ];
        let pretty = format_tokens_pretty(&tokens);
        assert!(pretty.contains("-b /x/a.blend"));
        assert!(pretty.contains("--render-frame 1..5"));
    }
}
