use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use bfs_core::author::format_tokens_pretty;
use bfs_core::compiler::{compile, CompiledJob};
use bfs_core::config::{load_scene, load_settings};

#[derive(Parser, Debug)]
#[command(name = "bfs", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a job into scheduler tasks.
    Compile(CompileArgs),
}

#[derive(Parser, Debug)]
struct CompileArgs {
    /// Job settings TOML file.
    #[arg(long)]
    settings: PathBuf,

    /// Scene context TOML file.
    #[arg(long)]
    scene: PathBuf,

    /// Print a human-readable command listing instead of JSON.
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    bfs_core::logging::init_tracing("info");

    let cli = Cli::parse();
    match cli.cmd {
        Command::Compile(args) => cmd_compile(args),
    }
}

fn cmd_compile(args: CompileArgs) -> anyhow::Result<()> {
    let settings = load_settings(&args.settings)
        .with_context(|| format!("load settings '{}'", args.settings.display()))?;
    let scene = load_scene(&args.scene)
        .with_context(|| format!("load scene context '{}'", args.scene.display()))?;

    let job = compile(&settings, &scene)?;

    if args.pretty {
        print_pretty(&job);
    } else {
        println!("{}", serde_json::to_string_pretty(&job)?);
    }
    Ok(())
}

fn print_pretty(job: &CompiledJob) {
    println!("job:       {}", job.job_name);
    println!("output:    {}", job.output.file_template);
    println!("directory: {}", job.output.directory.display());
    println!("tasks:     {}", job.tasks.len());
    for task in &job.tasks {
        println!();
        println!("[{}] ({} frames)", task.name, task.frame_count);
        print!("{} \\\n{}", task.command.executable, format_tokens_pretty(&task.command.args));
    }
}
