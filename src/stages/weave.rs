//! Derive the network's arcs from the parent lists.

use tracing::{instrument, trace};

use crate::error::{BnError, Result};
use crate::types::{Edge, NodeStore};

/// One `parent -> child` edge per parent entry, in store order then parent order.
#[instrument(level = "trace", skip(store))]
pub fn weave(store: &NodeStore) -> Result<Vec<Edge>> {
  let mut edges = Vec::new();
  for record in store.iter() {
    for parent in &record.parents {
      if !store.contains(parent) {
        return Err(BnError::DanglingReference {
          from: record.id.clone(),
          missing: parent.clone(),
        });
      }
      edges.push(Edge::new(parent.clone(), record.id.clone()));
    }
  }
  trace!(count = edges.len(), "edges woven");
  Ok(edges)
}
