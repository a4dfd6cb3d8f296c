//! Ingestion pipeline: parsed elements → frozen node store.
//!
//! Stages run in a fixed order, each with a narrow write contract:
//!
//! 1. record nodes: kind, parents, states of every node
//! 2. check that every parent id resolves
//! 3. build potentials (node-local failures are recorded, not fatal)
//! 4. attach positions from the extensions
//! 5. validate the finished store

use tracing::{info, instrument};

use crate::error::{BnError, Result};
use crate::stages::{attach_positions, build_potentials, record_nodes};
use crate::types::{NodeStore, ParsedNetwork};

/// Options for [ingest].
#[derive(Debug, Clone, Copy, Default)]
pub struct IngestOptions {
  /// Fail on the first malformed potential instead of skipping it.
  pub strict: bool,
}

/// Result of [ingest]: the frozen store and the potentials that were skipped.
#[derive(Debug)]
pub struct Ingested {
  pub store: NodeStore,
  /// One entry per node left without a potential, in declaration order.
  pub skipped: Vec<BnError>,
}

/// Runs every ingestion stage over `parsed` and returns the frozen store.
#[instrument(level = "trace", skip(parsed))]
pub fn ingest(parsed: &ParsedNetwork, options: IngestOptions) -> Result<Ingested> {
  let mut store = NodeStore::new();
  record_nodes::record_nodes(&parsed.nodes, &mut store)?;
  store.check_references()?;
  let skipped = build_potentials::build_potentials(&parsed.nodes, &mut store, options.strict)?;
  attach_positions::attach_positions(&parsed.extensions, &mut store)?;
  store.validate()?;
  info!(
    nodes = store.len(),
    skipped = skipped.len(),
    "ingestion complete"
  );
  Ok(Ingested { store, skipped })
}
