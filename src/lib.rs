//! # bayesnet-weave
//!
//! Builds an in-memory Bayesian network / influence diagram from a declarative
//! description: a node store whose chance and utility nodes carry named-axis
//! potentials, and a directed graph woven from the parent lists.
//!
//! ## Architecture
//!
//! source file → [xdsl_parser] → [ParsedNetwork] → [ingest()] → [NodeStore]
//! → [BayesNetwork::build] (edges, graph, children-first node order).
//!
//! A potential for node `X` with parents `P1..Pk` has axes `[X, P1, .., Pk]` and
//! is filled row-major from the flat value list, so `Pk` varies fastest.

pub mod error;
pub mod ingest;
pub mod stages;
pub mod store_io;
#[cfg(test)]
mod store_io_test;
pub mod types;
pub mod xdsl_parser;

pub use error::{BnError, Result};
pub use ingest::{IngestOptions, Ingested, ingest};
pub use stages::weave;
pub use types::{
  BayesNetwork, Edge, ExtensionElement, NodeElement, NodeKind, NodeRecord, NodeStore,
  ParsedNetwork, Position, Potential, UTILITY_STATE,
};

/// Reads an `.xdsl` file, ingests it and weaves the network.
///
/// Returns the network plus the node-local errors of potentials that were skipped.
pub fn load_network(
  path: &std::path::Path,
  options: IngestOptions,
) -> Result<(BayesNetwork, Vec<BnError>)> {
  let parsed = xdsl_parser::read_xdsl(path)?;
  let Ingested { store, skipped } = ingest(&parsed, options)?;
  Ok((BayesNetwork::build(store)?, skipped))
}
