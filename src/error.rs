//! Error taxonomy for ingestion, potential construction and network weaving.

use thiserror::Error;

/// Errors raised while building or querying a network.
#[derive(Debug, Error)]
pub enum BnError {
  /// The flat value count does not match the product of the declared axis lengths.
  #[error("potential for '{node}' expects {expected} values over axes {axes:?}, got {actual}")]
  ShapeMismatch {
    node: String,
    expected: usize,
    actual: usize,
    axes: Vec<String>,
  },
  /// A parent list or an extension names a node that is not in the store.
  #[error("'{from}' refers to unknown node '{missing}'")]
  DanglingReference { from: String, missing: String },
  /// Query for a node or a node field that does not exist.
  #[error("no {what} for node '{id}'")]
  NotFound { id: String, what: &'static str },
  /// A whitespace-separated numeric list failed to parse element-wise.
  #[error("malformed {field} list for '{node}': cannot parse '{token}'")]
  MalformedList {
    node: String,
    field: &'static str,
    token: String,
  },
  #[error("{names} axis names given for {lengths} axis lengths")]
  AxisCountMismatch { names: usize, lengths: usize },
  #[error("axis '{name}' appears more than once")]
  DuplicateAxis { name: String },
  #[error("node '{id}' is declared more than once")]
  DuplicateNode { id: String },
  #[error("node '{id}' has unsupported kind '{tag}'")]
  UnsupportedKind { id: String, tag: String },
  /// The parent relation is not acyclic.
  #[error("network has a cycle through '{node}'")]
  Cycle { node: String },
  #[error("xdsl: {0}")]
  Xml(String),
  #[error(transparent)]
  Io(#[from] std::io::Error),
  #[error(transparent)]
  Json(#[from] serde_json::Error),
}

impl BnError {
  /// Whether a single node's potential can be dropped without aborting ingestion.
  ///
  /// A repeated or self-referencing parent only breaks that node's table.
  pub fn is_node_local(&self) -> bool {
    matches!(
      self,
      BnError::ShapeMismatch { .. }
        | BnError::MalformedList { .. }
        | BnError::DuplicateAxis { .. }
    )
  }
}

pub type Result<T> = std::result::Result<T, BnError>;
