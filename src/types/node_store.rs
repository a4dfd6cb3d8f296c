//! Ordered store of node records, keyed by node id.
//!
//! Iteration follows declaration order. Mutation is crate-private and only
//! happens while ingesting; callers only ever see a frozen store.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{NodeRecord, Position, Potential};
use super::potential::table_size;
use crate::error::{BnError, Result};

/// Mapping from node id to its record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<NodeRecord>", into = "Vec<NodeRecord>")]
pub struct NodeStore {
  records: IndexMap<String, NodeRecord>,
}

impl NodeStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.records.len()
  }

  pub fn is_empty(&self) -> bool {
    self.records.is_empty()
  }

  pub fn contains(&self, id: &str) -> bool {
    self.records.contains_key(id)
  }

  pub fn ids(&self) -> impl Iterator<Item = &str> {
    self.records.keys().map(String::as_str)
  }

  pub fn iter(&self) -> impl Iterator<Item = &NodeRecord> {
    self.records.values()
  }

  pub fn get(&self, id: &str) -> Result<&NodeRecord> {
    self.records.get(id).ok_or_else(|| BnError::NotFound {
      id: id.to_string(),
      what: "node",
    })
  }

  pub fn get_parents(&self, id: &str) -> Result<&[String]> {
    self.get(id).map(|r| r.parents.as_slice())
  }

  pub fn get_states(&self, id: &str) -> Result<&[String]> {
    self.get(id).map(|r| r.states.as_slice())
  }

  pub fn state_count(&self, id: &str) -> Result<usize> {
    self.get(id).map(NodeRecord::state_count)
  }

  /// Fails with `NotFound` if the node is unknown or carries no potential.
  pub fn get_potential(&self, id: &str) -> Result<&Potential> {
    self.get(id)?.potential.as_ref().ok_or_else(|| BnError::NotFound {
      id: id.to_string(),
      what: "potential",
    })
  }

  /// Centers of every node that has a layout box, in store order.
  pub fn node_centers(&self) -> IndexMap<String, (f64, f64)> {
    self
      .records
      .values()
      .filter_map(|r| r.position.map(|p| (r.id.clone(), p.center())))
      .collect()
  }

  /// Checks that every parent resolves and every potential is labeled
  /// `[node, parents...]` with lengths equal to the named nodes' state counts.
  #[instrument(level = "trace", skip(self))]
  pub fn validate(&self) -> Result<()> {
    self.check_references()?;
    for record in self.records.values() {
      let Some(potential) = &record.potential else {
        continue;
      };
      let mut expected_names = Vec::with_capacity(record.parents.len() + 1);
      expected_names.push(record.id.as_str());
      expected_names.extend(record.parents.iter().map(String::as_str));
      let expected_lengths = expected_names
        .iter()
        .map(|name| self.state_count(name))
        .collect::<Result<Vec<_>>>()?;
      let labeled_right = potential.axis_order() == expected_names
        && potential.shape().values().copied().eq(expected_lengths.iter().copied());
      if !labeled_right {
        return Err(BnError::ShapeMismatch {
          node: record.id.clone(),
          expected: table_size(&expected_lengths),
          actual: potential.len(),
          axes: expected_names.iter().map(|s| s.to_string()).collect(),
        });
      }
    }
    Ok(())
  }

  /// First parent reference that does not resolve, in store order.
  pub(crate) fn check_references(&self) -> Result<()> {
    for record in self.records.values() {
      if let Some(missing) = record.parents.iter().find(|p| !self.contains(p)) {
        return Err(BnError::DanglingReference {
          from: record.id.clone(),
          missing: missing.clone(),
        });
      }
    }
    Ok(())
  }

  pub(crate) fn insert(&mut self, record: NodeRecord) -> Result<()> {
    if self.records.contains_key(&record.id) {
      return Err(BnError::DuplicateNode { id: record.id });
    }
    self.records.insert(record.id.clone(), record);
    Ok(())
  }

  pub(crate) fn set_potential(&mut self, id: &str, potential: Potential) -> Result<()> {
    self.get_mut(id)?.potential = Some(potential);
    Ok(())
  }

  pub(crate) fn set_position(&mut self, id: &str, position: Position) -> Result<()> {
    self.get_mut(id)?.position = Some(position);
    Ok(())
  }

  fn get_mut(&mut self, id: &str) -> Result<&mut NodeRecord> {
    self.records.get_mut(id).ok_or_else(|| BnError::NotFound {
      id: id.to_string(),
      what: "node",
    })
  }
}

impl FromIterator<NodeRecord> for NodeStore {
  /// Later records with an already-seen id replace earlier ones.
  fn from_iter<I: IntoIterator<Item = NodeRecord>>(iter: I) -> Self {
    Self {
      records: iter.into_iter().map(|r| (r.id.clone(), r)).collect(),
    }
  }
}

impl TryFrom<Vec<NodeRecord>> for NodeStore {
  type Error = BnError;

  fn try_from(records: Vec<NodeRecord>) -> Result<Self> {
    let mut store = NodeStore::new();
    for record in records {
      store.insert(record)?;
    }
    Ok(store)
  }
}

impl From<NodeStore> for Vec<NodeRecord> {
  fn from(store: NodeStore) -> Self {
    store.records.into_values().collect()
  }
}
