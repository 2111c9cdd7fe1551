//! noderef — generate the logic node reference from annotated node docstrings.
//!
//! Reads the node registry (categories, nodes, docstrings) as JSON and writes
//! a single markdown reference page:
//!
//! - **stdin mode**: `noderef < registry.json > reference.md`
//! - **file mode**: `noderef registry.json -o reference.md -c noderef.toml`

mod builder;
mod config;
mod document;
mod links;
mod model;
mod parser;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(
    name = "noderef",
    about = "Generate the logic node reference page from node docstrings"
)]
struct Cli {
    /// Registry JSON file. If omitted, reads from stdin.
    registry: Option<PathBuf>,

    /// Output file. If omitted, writes to stdout.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// TOML config file overriding titles, base URLs and link labels
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Output format: markdown (default), json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// Version string for the "built for" line; overrides the registry's
    #[arg(long)]
    arm_version: Option<String>,

    /// Log every node and skipped tag
    #[arg(short = 'v', long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_logging(&cli)?;
    run(&cli)
}

fn initialize_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let config = match cli.config {
        Some(ref path) => config::Config::load(path)?,
        None => config::Config::default(),
    };

    let input = match cli.registry {
        Some(ref path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read registry: {}", path.display()))?,
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            input
        }
    };
    let registry = model::Registry::from_json(&input)?;

    let version = cli
        .arm_version
        .as_deref()
        .or(registry.version.as_deref())
        .unwrap_or("unknown");

    info!(categories = registry.categories.len(), version, "generating documentation");
    let doc = builder::build(&config, &registry, version);

    let renderer = render::create_renderer(&cli.format)?;
    let output = renderer.render(&doc)?;

    match cli.output {
        Some(ref path) => write_atomic(path, &output)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .context("failed to write stdout")?;
        }
    }
    Ok(())
}

/// Write `contents` to a temp file next to `path`, then move it into place,
/// so a failed run never leaves a truncated reference behind.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
    tmp.write_all(contents.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;
    tmp.persist(path)
        .with_context(|| format!("failed to write {}", path.display()))?;

    info!(path = %path.display(), "wrote reference");
    Ok(())
}
