//! First ingestion stage: record kind, parents and states of every node.
//!
//! Writes `kind`, `parents` and `states`. Never touches potentials or positions.

use tracing::{debug, instrument};

use super::lists::split_ids;
use crate::error::{BnError, Result};
use crate::types::{NodeElement, NodeKind, NodeRecord, NodeStore, UTILITY_STATE};

/// Builds the record for one element, without potential or position.
#[instrument(level = "trace", skip(element), fields(id = %element.id))]
pub(crate) fn record_for(element: &NodeElement) -> Result<NodeRecord> {
  let kind = NodeKind::from_tag(&element.tag).ok_or_else(|| BnError::UnsupportedKind {
    id: element.id.clone(),
    tag: element.tag.clone(),
  })?;
  let parents = split_ids(element.parents.as_deref());
  let states = match kind {
    NodeKind::Chance | NodeKind::Decision => element.states.clone(),
    NodeKind::Utility => vec![UTILITY_STATE.to_string()],
  };
  Ok(NodeRecord::new(element.id.clone(), kind, parents, states))
}

/// Records every element into `store`, in declaration order.
#[instrument(level = "trace", skip_all)]
pub(crate) fn record_nodes(elements: &[NodeElement], store: &mut NodeStore) -> Result<()> {
  for element in elements {
    let record = record_for(element)?;
    debug!(
      id = %record.id,
      kind = %record.kind,
      parents = record.parents.len(),
      states = record.states.len(),
      "recorded node"
    );
    store.insert(record)?;
  }
  Ok(())
}
