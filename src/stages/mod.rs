//! Ingestion and weaving stages. Each stage states which record fields it writes.

pub(crate) mod attach_positions;
pub(crate) mod build_potentials;
pub(crate) mod lists;
pub(crate) mod record_nodes;
pub mod weave;

pub use weave::weave;
