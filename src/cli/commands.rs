//! CLI command definitions for taskforge.
//!
//! This module provides the command-line front end over the task generator:
//! generating task descriptions for a theme and inspecting the vocabulary
//! mined from the reference dataset.

use std::io::{self, Write};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::dataset::{Dataset, VocabularyCategory};
use crate::domains::Domain;
use crate::generator::{AnswerEnvelope, GeneratorConfig, TaskGenerator, TaskRecord, DEFAULT_DATASET_PATH};

/// Synthetic research task generator.
#[derive(Parser)]
#[command(name = "taskforge")]
#[command(about = "Generate research task descriptions (topic, criteria, deadline) from a theme")]
#[command(version)]
#[command(
    long_about = "taskforge classifies a theme into a subject domain and fills topic templates with vocabulary mined from a reference dataset.\n\nExample usage:\n  taskforge generate \"Диплом по искусственному интеллекту\" --dataset ./dataset.json"
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,
}

/// Available CLI subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Generate task descriptions for a theme.
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Show how the reference dataset was split across domains.
    Inspect(InspectArgs),
}

/// Output format for generated records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

/// Arguments for `taskforge generate`.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Free-text theme of the task.
    pub theme: String,

    /// Path to the reference dataset.
    #[arg(short = 'd', long, env = "TASKFORGE_DATASET", default_value = DEFAULT_DATASET_PATH)]
    pub dataset: String,

    /// Number of tasks to generate.
    #[arg(short = 'n', long, default_value = "1")]
    pub count: usize,

    /// Seed for reproducible output.
    #[arg(short = 's', long)]
    pub seed: Option<u64>,

    /// Output format.
    #[arg(short = 'f', long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Wrap each record in an {"answer": "<json>"} envelope.
    #[arg(long, conflicts_with = "format")]
    pub envelope: bool,
}

/// Arguments for `taskforge inspect`.
#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Path to the reference dataset.
    #[arg(short = 'd', long, env = "TASKFORGE_DATASET", default_value = DEFAULT_DATASET_PATH)]
    pub dataset: String,
}

/// Parse CLI arguments and return the Cli struct.
///
/// This allows main.rs to access CLI arguments (like log_level) before running commands.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Run the CLI by parsing arguments and executing the command.
pub fn run() -> anyhow::Result<()> {
    run_with_cli(parse_cli())
}

/// Run the CLI with the parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate(args) => run_generate_command(args),
        Commands::Inspect(args) => run_inspect_command(args),
    }
}

fn run_generate_command(args: GenerateArgs) -> anyhow::Result<()> {
    let mut config = GeneratorConfig::new(&args.dataset);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let generator = TaskGenerator::from_config(&config)
        .with_context(|| format!("Failed to initialize generator from '{}'", args.dataset))?;

    let seed = generator.seed().unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    info!(theme = %args.theme, count = args.count, seed, "Generating tasks");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for _ in 0..args.count {
        let record = generator.generate_with_rng(&args.theme, &mut rng);
        writeln!(out, "{}", render_record(&record, args.format, args.envelope)?)?;
    }

    Ok(())
}

fn render_record(record: &TaskRecord, format: OutputFormat, envelope: bool) -> anyhow::Result<String> {
    if envelope {
        let envelope = AnswerEnvelope::from_record(record)?;
        return Ok(serde_json::to_string_pretty(&envelope)?);
    }

    let rendered = match format {
        OutputFormat::Json => record.to_json_pretty()?,
        OutputFormat::Yaml => record.to_yaml()?,
    };
    Ok(rendered)
}

fn run_inspect_command(args: InspectArgs) -> anyhow::Result<()> {
    let dataset = Dataset::load(&args.dataset)
        .with_context(|| format!("Failed to load dataset '{}'", args.dataset))?;
    let generator = TaskGenerator::new(&dataset);
    let index = generator.index();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Dataset: {} ({} examples)", args.dataset, dataset.len())?;

    for domain in Domain::all() {
        writeln!(
            out,
            "\n{} [{}]: {} examples",
            domain.display_name(),
            domain,
            index.example_count(domain)
        )?;

        let Some(vocabulary) = index.get(domain) else {
            continue;
        };

        for category in VocabularyCategory::all() {
            writeln!(out, "  {:<12} {}", category.as_str(), vocabulary.count(category))?;
        }
    }

    Ok(())
}
