//! xdr-idlc: compile a parsed IDL document into Rust XDR codecs and dispatch tables.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use xdr_idl::{Compiler, GenConfig, MapPolicy, model};

#[derive(Parser, Debug)]
#[command(
    name = "xdr-idlc",
    version,
    about = "Generate XDR codecs and ONC RPC dispatch tables from an IDL document"
)]
struct Cli {
    /// Parsed IDL document (JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Directory the generated tree is written to
    #[arg(short, long, required_unless_present = "check")]
    output: Option<PathBuf>,

    /// Generator configuration (JSON); flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Rust path the generated tree is mounted under
    #[arg(long)]
    root_path: Option<String>,

    /// Runtime crate name generated code refers to
    #[arg(long)]
    runtime_crate: Option<String>,

    #[arg(long)]
    max_array_elems: Option<u32>,

    #[arg(long, value_parser = parse_u32)]
    base_program: Option<u32>,

    /// Treat map types as a generation error
    #[arg(long)]
    reject_maps: bool,

    /// Validate the document without writing anything
    #[arg(long)]
    check: bool,
}

/// Decimal or `0x`-prefixed hex.
fn parse_u32(s: &str) -> Result<u32, std::num::ParseIntError> {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(&hex.replace('_', ""), 16),
        None => s.replace('_', "").parse(),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_config(cli: &Cli) -> Result<GenConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("cannot read config {}", path.display()))?;
            GenConfig::from_json(&text)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => GenConfig::default(),
    };
    if let Some(root_path) = &cli.root_path {
        config.root_path = root_path.clone();
    }
    if let Some(runtime_crate) = &cli.runtime_crate {
        config.runtime_crate = runtime_crate.clone();
    }
    if let Some(max) = cli.max_array_elems {
        config.max_array_elems = max;
    }
    if let Some(base) = cli.base_program {
        config.base_program = base;
    }
    if cli.reject_maps {
        config.map_policy = MapPolicy::Reject;
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let text = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("cannot read {}", cli.input.display()))?;
    let doc: model::Document = serde_json::from_str(&text)
        .with_context(|| format!("invalid IDL document {}", cli.input.display()))?;

    let units = Compiler::new(config)
        .compile(&doc)
        .context("generation failed")?;
    if cli.check {
        tracing::info!(units = units.len(), "document is valid");
        return Ok(());
    }

    let Some(out_dir) = &cli.output else {
        anyhow::bail!("--output is required unless --check is given");
    };
    let written = xdr_idl::output::write_units(out_dir, &units)
        .with_context(|| format!("cannot write to {}", out_dir.display()))?;
    tracing::info!(files = written, dir = %out_dir.display(), "done");
    Ok(())
}

fn main() {
    init_tracing();
    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
