//! Network data model: potentials, node records, the node store and the woven network.

mod network;
mod node_element;
mod node_record;
mod node_store;
#[cfg(test)]
mod node_store_test;
mod potential;

pub use network::{BayesNetwork, Edge, NetworkGraph};
pub use node_element::{ExtensionElement, NodeElement, ParsedNetwork};
pub use node_record::{NodeKind, NodeRecord, Position, UTILITY_STATE};
pub use node_store::NodeStore;
pub use potential::Potential;
