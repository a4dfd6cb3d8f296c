//! A node of the network: kind, parents, states, potential and layout box.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Potential;

/// State label given to the single value axis of a utility node.
pub const UTILITY_STATE: &str = "utility";

/// Node kind, derived from the element tag of the source description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
  Chance,
  Decision,
  Utility,
}

impl NodeKind {
  /// Maps a GeNIe element tag (`cpt`, `decision`, `utility`) to a kind.
  pub fn from_tag(tag: &str) -> Option<Self> {
    match tag {
      "cpt" | "chance" => Some(NodeKind::Chance),
      "decision" => Some(NodeKind::Decision),
      "utility" => Some(NodeKind::Utility),
      _ => None,
    }
  }

  /// Chance and decision nodes declare their own outcome labels.
  pub fn has_declared_states(self) -> bool {
    matches!(self, NodeKind::Chance | NodeKind::Decision)
  }

  pub fn has_potential(self) -> bool {
    matches!(self, NodeKind::Chance | NodeKind::Utility)
  }
}

impl fmt::Display for NodeKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      NodeKind::Chance => write!(f, "chance"),
      NodeKind::Decision => write!(f, "decision"),
      NodeKind::Utility => write!(f, "utility"),
    }
  }
}

/// Layout bounding box `[left, top, right, bottom]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position(pub [i32; 4]);

impl Position {
  pub fn left(&self) -> i32 {
    self.0[0]
  }

  pub fn top(&self) -> i32 {
    self.0[1]
  }

  pub fn right(&self) -> i32 {
    self.0[2]
  }

  pub fn bottom(&self) -> i32 {
    self.0[3]
  }

  /// Box center with the y axis flipped so that "up" is positive.
  pub fn center(&self) -> (f64, f64) {
    let x = (f64::from(self.left()) + f64::from(self.right())) / 2.0;
    let y = -(f64::from(self.top()) + f64::from(self.bottom())) / 2.0;
    (x, y)
  }
}

/// A node in the network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
  pub id: String,
  pub kind: NodeKind,
  /// Order fixes the potential's axes 1..k.
  pub parents: Vec<String>,
  pub states: Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub potential: Option<Potential>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub position: Option<Position>,
}

impl NodeRecord {
  /// A record with no potential and no position yet.
  pub fn new(
    id: impl Into<String>,
    kind: NodeKind,
    parents: Vec<String>,
    states: Vec<String>,
  ) -> Self {
    Self {
      id: id.into(),
      kind,
      parents,
      states,
      potential: None,
      position: None,
    }
  }

  pub fn state_count(&self) -> usize {
    self.states.len()
  }
}
