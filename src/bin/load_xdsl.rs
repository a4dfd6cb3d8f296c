//! CLI: Load a Bayesian network from a GeNIe .xdsl file.
//!
//! Parses the file, ingests every node (building potentials), weaves the network
//! and prints a short summary. Optionally exports the node store as JSON.
//!
//! Usage: `load_xdsl [OPTIONS] <path-to-xdsl-file>`
//! Example: load_xdsl tests/fixtures/party.xdsl
//!
//! Set RUST_LOG=bayesnet_weave=trace for TRACE-level span enter/exit and events.

use bayesnet_weave::{IngestOptions, load_network, store_io};
use clap::Parser;
use std::env;
use std::path::PathBuf;
use std::process;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

/// Load a Bayesian network from a .xdsl file.
#[derive(Parser, Debug)]
#[command(name = "load_xdsl")]
#[command(
  after_help = r#"Environment variables (override the flags when set):
  BNWEAVE_STRICT   1/true: fail on the first malformed potential instead of skipping it.
  BNWEAVE_EXPORT   Write the ingested node store as JSON to this path.

Examples:
  load_xdsl tests/fixtures/party.xdsl
  load_xdsl --strict --export /tmp/party.json tests/fixtures/party.xdsl"#
)]
struct Args {
  /// Fail on the first malformed potential. Overridden by BNWEAVE_STRICT if set.
  #[arg(long)]
  strict: bool,

  /// Export the node store as JSON. Overridden by BNWEAVE_EXPORT if set.
  #[arg(long, value_name = "FILE")]
  export: Option<PathBuf>,

  /// Path to the .xdsl network file
  #[arg(value_name = "path-to-xdsl-file")]
  xdsl_path: PathBuf,
}

fn env_flag(key: &str) -> Option<bool> {
  env::var(key)
    .ok()
    .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();

  let strict = env_flag("BNWEAVE_STRICT").unwrap_or(args.strict);
  let export = env::var("BNWEAVE_EXPORT")
    .ok()
    .map(PathBuf::from)
    .or(args.export);
  info!(strict, export = ?export, "options (env or flags)");

  let path = &args.xdsl_path;
  let (network, skipped) = match load_network(path, IngestOptions { strict }) {
    Ok(r) => r,
    Err(e) => {
      eprintln!("Error loading {}: {}", path.display(), e);
      process::exit(1);
    }
  };
  for e in &skipped {
    warn!(error = %e, "potential skipped");
  }

  println!("Network loaded.");
  println!("  Nodes: {}", network.store().len());
  for record in network.store().iter() {
    let axes = record
      .potential
      .as_ref()
      .map(|p| p.axis_order().join(", "))
      .unwrap_or_else(|| "-".to_string());
    println!(
      "    {} [{}] states={:?} potential=[{}]",
      record.id, record.kind, record.states, axes
    );
  }
  println!("  Edges: {}", network.edges().len());
  for e in network.edges() {
    println!("    {} -> {}", e.parent, e.child);
  }
  println!("  Order: {:?}", network.node_order());
  for (id, (x, y)) in network.node_centers() {
    println!("    center {id}: ({x}, {y})");
  }
  println!("  Skipped potentials: {}", skipped.len());

  if let Some(out) = export {
    if let Err(e) = store_io::save_store(&out, network.store()) {
      eprintln!("Error writing {}: {}", out.display(), e);
      process::exit(1);
    }
    info!(path = %out.display(), "store exported");
  }
}
