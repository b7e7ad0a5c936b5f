mod script;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use editor::config::EditorConfig;
use editor::engine::EditorContext;
use editor::export;
use editor::persist::{PersistError, ScenePayload};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: std::io::Error },
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("invalid scene: {0}")]
    Scene(#[from] PersistError),
}

#[derive(Parser, Debug)]
#[command(name = "vectorflow", about = "Headless VectorFlow scene editor")]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    /// Log filter used when `RUST_LOG` is unset.
    #[arg(long, env = "VECTORFLOW_LOG", default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct ConfigArgs {
    #[arg(long, env = "VECTORFLOW_HISTORY_DEPTH", default_value_t = editor::consts::HISTORY_DEPTH, global = true)]
    history_depth: usize,

    #[arg(long, env = "VECTORFLOW_BACKGROUND", default_value = editor::consts::DEFAULT_BACKGROUND, global = true)]
    background: String,

    #[arg(long, env = "VECTORFLOW_FILL", default_value = editor::consts::DEFAULT_FILL, global = true)]
    fill: String,
}

impl ConfigArgs {
    fn editor_config(&self) -> EditorConfig {
        EditorConfig { history_depth: self.history_depth, background: self.background.clone(), fill: self.fill.clone() }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay an event script and optionally save or export the result.
    Replay(ReplayArgs),
    /// Render a saved scene as SVG.
    Export(ExportArgs),
}

#[derive(Args, Debug)]
struct ReplayArgs {
    /// JSON array of events and panel operations.
    #[arg(long)]
    script: PathBuf,
    /// Saved scene to start from.
    #[arg(long)]
    load: Option<PathBuf>,
    /// Where to write the resulting scene.
    #[arg(long)]
    save: Option<PathBuf>,
    /// Where to write an SVG of the resulting scene.
    #[arg(long)]
    svg: Option<PathBuf>,
    #[command(flatten)]
    size: SizeArgs,
}

#[derive(Args, Debug)]
struct ExportArgs {
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    output: PathBuf,
    #[command(flatten)]
    size: SizeArgs,
}

#[derive(Args, Debug)]
struct SizeArgs {
    #[arg(long, default_value_t = 1280.0)]
    width: f64,
    #[arg(long, default_value_t = 800.0)]
    height: f64,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let config = cli.config.editor_config();
    match cli.command {
        Command::Replay(args) => run_replay(&config, &args),
        Command::Export(args) => run_export(&config, &args),
    }
}

fn run_replay(config: &EditorConfig, args: &ReplayArgs) -> Result<(), CliError> {
    let mut ctx = EditorContext::new(config);
    if let Some(path) = &args.load {
        ctx.load_json(&read(path)?)?;
    }
    let steps = script::read(&args.script)?;
    info!(steps = steps.len(), script = %args.script.display(), "replaying");
    let report = script::replay(&mut ctx, steps);
    info!(commits = report.commits, elements = report.elements, "replay finished");

    if let Some(path) = &args.save {
        write(path, &ctx.save()?)?;
    }
    if let Some(path) = &args.svg {
        write(path, &ctx.export_svg(args.size.width, args.size.height))?;
    }
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_export(config: &EditorConfig, args: &ExportArgs) -> Result<(), CliError> {
    let scene = ScenePayload::from_json(&read(&args.input)?)?.to_scene()?;
    let background = scene.background.as_deref().unwrap_or(&config.background);
    let svg = export::to_svg(&scene.elements, background, args.size.width, args.size.height);
    write(&args.output, &svg)?;
    info!(elements = scene.elements.len(), output = %args.output.display(), "exported");
    Ok(())
}

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read { path: path.to_path_buf(), source })
}

fn write(path: &Path, contents: &str) -> Result<(), CliError> {
    fs::write(path, contents).map_err(|source| CliError::Write { path: path.to_path_buf(), source })
}
