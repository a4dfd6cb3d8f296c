//! Node store save/load (JSON).

use crate::error::Result;
use crate::types::NodeStore;
use std::path::Path;
use tracing::instrument;

/// Default filename for an exported store.
pub const STORE_FILENAME: &str = "network.json";

/// Saves `store` to `path` as JSON, creating the parent directory if needed.
#[instrument(level = "trace", skip(path, store))]
pub fn save_store(path: &Path, store: &NodeStore) -> Result<()> {
  let json = serde_json::to_string_pretty(store)?;
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent)?;
  }
  std::fs::write(path, json)?;
  Ok(())
}

/// Loads a store from `path` and validates it before handing it out.
#[instrument(level = "trace", skip(path))]
pub fn load_store(path: &Path) -> Result<NodeStore> {
  let bytes = std::fs::read(path)?;
  let store: NodeStore = serde_json::from_slice(&bytes)?;
  store.validate()?;
  Ok(store)
}
