//! Woven network: the frozen node store plus the directed graph derived from
//! its parent lists.

use indexmap::IndexMap;
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::{info, instrument};

use super::{NodeStore, Potential};
use crate::error::{BnError, Result};
use crate::stages::weave;

/// A directed arc `parent -> child`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
  pub parent: String,
  pub child: String,
}

impl Edge {
  pub fn new(parent: impl Into<String>, child: impl Into<String>) -> Self {
    Self {
      parent: parent.into(),
      child: child.into(),
    }
  }
}

/// Edge topology over node ids. Holds no node data beyond the ids.
#[derive(Debug, Clone, Default)]
pub struct NetworkGraph {
  graph: DiGraph<String, ()>,
  index: IndexMap<String, NodeIndex>,
}

impl NetworkGraph {
  /// One graph node per id, in the given order, then one arc per edge.
  pub(crate) fn from_edges<'a>(
    ids: impl IntoIterator<Item = &'a str>,
    edges: &[Edge],
  ) -> Result<Self> {
    let mut g = Self::default();
    for id in ids {
      let ix = g.graph.add_node(id.to_string());
      g.index.insert(id.to_string(), ix);
    }
    for e in edges {
      let from = g.node_index(&e.child, &e.parent)?;
      let to = g.node_index(&e.parent, &e.child)?;
      g.graph.add_edge(from, to, ());
    }
    Ok(g)
  }

  fn node_index(&self, from: &str, id: &str) -> Result<NodeIndex> {
    self
      .index
      .get(id)
      .copied()
      .ok_or_else(|| BnError::DanglingReference {
        from: from.to_string(),
        missing: id.to_string(),
      })
  }

  fn lookup(&self, id: &str) -> Result<NodeIndex> {
    self.index.get(id).copied().ok_or_else(|| BnError::NotFound {
      id: id.to_string(),
      what: "graph node",
    })
  }

  fn adjacent(&self, id: &str, dir: Direction) -> Result<Vec<&str>> {
    let ix = self.lookup(id)?;
    let mut out: Vec<NodeIndex> = self.graph.neighbors_directed(ix, dir).collect();
    // petgraph yields most recently added arcs first
    out.reverse();
    Ok(out.into_iter().map(|n| self.graph[n].as_str()).collect())
  }

  /// Children of `id`, in edge order.
  pub fn neighbors(&self, id: &str) -> Result<Vec<&str>> {
    self.adjacent(id, Direction::Outgoing)
  }

  pub fn children(&self, id: &str) -> Result<Vec<&str>> {
    self.adjacent(id, Direction::Outgoing)
  }

  pub fn parents(&self, id: &str) -> Result<Vec<&str>> {
    self.adjacent(id, Direction::Incoming)
  }

  pub fn node_count(&self) -> usize {
    self.graph.node_count()
  }

  pub fn edge_count(&self) -> usize {
    self.graph.edge_count()
  }

  /// Every node placed before all of its parents (children first).
  ///
  /// Fails with `Cycle` if the parent relation is not acyclic.
  pub(crate) fn reverse_topological_order(&self) -> Result<Vec<String>> {
    let mut order = petgraph::algo::toposort(&self.graph, None).map_err(|cycle| {
      BnError::Cycle {
        node: self.graph[cycle.node_id()].clone(),
      }
    })?;
    order.reverse();
    Ok(order.into_iter().map(|ix| self.graph[ix].clone()).collect())
  }
}

/// Frozen store, its edge list, graph and processing order.
#[derive(Debug, Clone)]
pub struct BayesNetwork {
  store: NodeStore,
  edges: Vec<Edge>,
  graph: NetworkGraph,
  /// Reverse topological order: children before parents.
  node_order: Vec<String>,
}

impl BayesNetwork {
  /// Weaves the store into a graph and checks that it is acyclic.
  #[instrument(level = "trace", skip(store))]
  pub fn build(store: NodeStore) -> Result<Self> {
    let edges = weave::weave(&store)?;
    let graph = NetworkGraph::from_edges(store.ids(), &edges)?;
    let node_order = graph.reverse_topological_order()?;
    info!(
      nodes = store.len(),
      edges = edges.len(),
      "network woven"
    );
    Ok(Self {
      store,
      edges,
      graph,
      node_order,
    })
  }

  pub fn store(&self) -> &NodeStore {
    &self.store
  }

  pub fn edges(&self) -> &[Edge] {
    &self.edges
  }

  pub fn graph(&self) -> &NetworkGraph {
    &self.graph
  }

  /// Every node appears before all of its parents.
  pub fn node_order(&self) -> &[String] {
    &self.node_order
  }

  pub fn potential(&self, id: &str) -> Result<&Potential> {
    self.store.get_potential(id)
  }

  pub fn node_centers(&self) -> IndexMap<String, (f64, f64)> {
    self.store.node_centers()
  }

  pub fn into_store(self) -> NodeStore {
    self.store
  }
}
