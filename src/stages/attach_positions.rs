//! Third ingestion stage: attach layout boxes from the extension elements.
//!
//! Writes `position` only.

use tracing::instrument;

use super::lists::parse_position;
use crate::error::{BnError, Result};
use crate::types::{ExtensionElement, NodeStore};

/// Attaches each extension's position to the node with the same id.
///
/// An extension naming an unknown node fails with `DanglingReference`; nothing
/// is attached for it.
#[instrument(level = "trace", skip_all)]
pub(crate) fn attach_positions(extensions: &[ExtensionElement], store: &mut NodeStore) -> Result<()> {
  for ext in extensions {
    if !store.contains(&ext.id) {
      return Err(BnError::DanglingReference {
        from: "extensions".to_string(),
        missing: ext.id.clone(),
      });
    }
    if let Some(text) = ext.position.as_deref() {
      let position = parse_position(&ext.id, text)?;
      store.set_position(&ext.id, position)?;
    }
  }
  Ok(())
}
