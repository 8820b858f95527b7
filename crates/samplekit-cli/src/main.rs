mod demo;
mod logging;
mod settings;

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use samplekit_generate::output::{write_values, write_values_to_path};
use samplekit_generate::{
    GenerationError, GeneratorRegistry, OutputFormat, SamplingEngine, checked_count,
};
use serde_json::Value;
use settings::{Settings, SettingsError, load_settings};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
enum CliError {
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

#[derive(Parser, Debug)]
#[command(name = "samplekit", version, about = "Synthetic test data sampler")]
struct Cli {
    /// Settings file; defaults to ./samplekit.toml when present.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Append JSON logs to this file instead of writing to stderr.
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print registered generator ids.
    List,
    /// Run one generator.
    Generate(GenerateArgs),
    /// Print a batch from every generator.
    Demo(DemoArgs),
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::List => "list",
            Command::Generate(_) => "generate",
            Command::Demo(_) => "demo",
        }
    }
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Generator id, see `samplekit list`.
    #[arg(value_name = "ID")]
    generator: String,
    /// Number of values; defaults to `default_count` from settings.
    #[arg(long, allow_negative_numbers = true)]
    count: Option<i64>,
    /// Generator parameters as a JSON object.
    #[arg(long, value_name = "JSON")]
    params: Option<String>,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Output format: text, json or csv.
    #[arg(long)]
    format: Option<OutputFormat>,
    /// Write to a file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct DemoArgs {
    /// Values per section; defaults to `default_count` from settings.
    #[arg(long, allow_negative_numbers = true)]
    count: Option<i64>,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;
    logging::init_logging(&settings.log_level, cli.log_file.as_deref())?;

    let run_id = Uuid::new_v4().to_string();
    tracing::info!(event = "run_started", run_id = %run_id, command = cli.command.name());
    let timer = Instant::now();

    let result = match cli.command {
        Command::List => run_list(),
        Command::Generate(args) => run_generate(args, &settings),
        Command::Demo(args) => run_demo(args, &settings),
    };

    let duration_ms = timer.elapsed().as_millis();
    match &result {
        Ok(()) => {
            tracing::info!(event = "run_finished", status = "success", duration_ms = duration_ms);
        }
        Err(err) => {
            tracing::error!(
                event = "run_finished",
                status = "failed",
                duration_ms = duration_ms,
                error = %err
            );
        }
    }
    result
}

fn run_list() -> Result<(), CliError> {
    let registry = GeneratorRegistry::new();
    let mut stdout = io::stdout().lock();
    for id in registry.generator_ids() {
        writeln!(stdout, "{id}")?;
    }
    stdout.flush()?;
    Ok(())
}

fn run_generate(args: GenerateArgs, settings: &Settings) -> Result<(), CliError> {
    let GenerateArgs {
        generator,
        count,
        params,
        seed,
        format,
        out,
    } = args;

    let count = resolve_count(count, settings)?;
    let params = params
        .as_deref()
        .map(serde_json::from_str::<Value>)
        .transpose()
        .map_err(|err| CliError::InvalidArgument(format!("--params is not valid JSON: {err}")))?;
    let format = format.unwrap_or(settings.format);

    let registry = GeneratorRegistry::new();
    let mut engine = build_engine(seed.or(settings.seed));
    tracing::info!(event = "generation_started", generator_id = %generator, count);

    let values = engine.generate(&registry, &generator, count, params.as_ref())?;
    let bytes = match &out {
        Some(path) => write_values_to_path(path, &values, format)?,
        None => write_values(io::stdout().lock(), &values, format)?,
    };

    tracing::info!(
        event = "values_written",
        generator_id = %generator,
        count = values.len(),
        format = %format,
        bytes,
        path = ?out
    );
    Ok(())
}

fn run_demo(args: DemoArgs, settings: &Settings) -> Result<(), CliError> {
    let count = resolve_count(args.count, settings)?;
    let mut engine = build_engine(args.seed.or(settings.seed));
    let now = chrono::Local::now().naive_local();

    let mut stdout = io::stdout().lock();
    demo::run_demo(&mut stdout, &mut engine, count, now)?;
    stdout.flush()?;
    Ok(())
}

fn resolve_count(count: Option<i64>, settings: &Settings) -> Result<usize, CliError> {
    match count {
        Some(count) => Ok(checked_count(count)?),
        None => Ok(settings.default_count),
    }
}

fn build_engine(seed: Option<u64>) -> SamplingEngine {
    match seed {
        Some(seed) => {
            tracing::info!(event = "engine_seeded", seed);
            SamplingEngine::seeded(seed)
        }
        None => SamplingEngine::from_entropy(),
    }
}
