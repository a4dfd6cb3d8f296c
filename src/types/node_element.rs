//! Format-agnostic node and extension elements handed over by a source parser.

/// One declared node, before any list has been parsed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeElement {
  pub id: String,
  /// Element tag, e.g. `cpt`, `decision` or `utility`.
  pub tag: String,
  /// Whitespace-separated parent ids.
  pub parents: Option<String>,
  pub states: Vec<String>,
  /// Whitespace-separated probabilities or utilities, row-major.
  pub values: Option<String>,
}

/// Layout extension for a node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtensionElement {
  pub id: String,
  /// Four whitespace-separated integers.
  pub position: Option<String>,
}

/// Everything a source parser extracts from one network description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedNetwork {
  pub nodes: Vec<NodeElement>,
  pub extensions: Vec<ExtensionElement>,
}
