//! Second ingestion stage: build the potential of every chance and utility node.
//!
//! Writes `potential` only. Reads the states of the node and its parents from the
//! store, which already holds every node's states.

use tracing::{instrument, warn};

use super::lists::parse_values;
use crate::error::{BnError, Result};
use crate::types::{NodeElement, NodeKind, NodeStore, Potential};

/// Axis names `[node, parents...]` and their state counts for `id`.
pub(crate) fn axes_for(store: &NodeStore, id: &str) -> Result<(Vec<String>, Vec<usize>)> {
  let parents = store.get_parents(id)?;
  let mut names = Vec::with_capacity(parents.len() + 1);
  names.push(id.to_string());
  names.extend(parents.iter().cloned());
  let lengths = names
    .iter()
    .map(|name| {
      store.state_count(name).map_err(|_| BnError::DanglingReference {
        from: id.to_string(),
        missing: name.clone(),
      })
    })
    .collect::<Result<Vec<_>>>()?;
  Ok((names, lengths))
}

/// Builds the potential for one element from its flat value text.
#[instrument(level = "trace", skip(store, element), fields(id = %element.id))]
pub(crate) fn potential_for(store: &NodeStore, element: &NodeElement) -> Result<Option<Potential>> {
  let kind = store.get(&element.id)?.kind;
  let Some(text) = element.values.as_deref() else {
    return Ok(None);
  };
  let field = match kind {
    NodeKind::Chance => "probabilities",
    NodeKind::Utility => "utilities",
    NodeKind::Decision => return Ok(None),
  };
  let values = parse_values(&element.id, field, text)?;
  let (names, lengths) = axes_for(store, &element.id)?;
  Potential::build(values, &lengths, &names).map(Some)
}

/// Builds potentials in declaration order.
///
/// Node-local failures (a bad token, a count that does not fit the axes, a
/// parent named twice) leave
/// that node without a potential and are returned; with `strict` the first one
/// aborts the stage instead.
#[instrument(level = "trace", skip_all)]
pub(crate) fn build_potentials(
  elements: &[NodeElement],
  store: &mut NodeStore,
  strict: bool,
) -> Result<Vec<BnError>> {
  let mut skipped = Vec::new();
  for element in elements {
    match potential_for(store, element) {
      Ok(Some(potential)) => store.set_potential(&element.id, potential)?,
      Ok(None) => {}
      Err(e) if e.is_node_local() && !strict => {
        warn!(id = %element.id, error = %e, "skipping potential");
        skipped.push(e);
      }
      Err(e) => return Err(e),
    }
  }
  Ok(skipped)
}
