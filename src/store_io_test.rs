//! Tests for node store save/load.

use crate::error::BnError;
use crate::ingest::{IngestOptions, ingest};
use crate::store_io::{STORE_FILENAME, load_store, save_store};
use crate::types::{ExtensionElement, NodeElement, ParsedNetwork};

fn sample() -> ParsedNetwork {
  ParsedNetwork {
    nodes: vec![
      NodeElement {
        id: "X".to_string(),
        tag: "cpt".to_string(),
        states: vec!["x0".to_string(), "x1".to_string()],
        values: Some("0.3 0.7".to_string()),
        ..NodeElement::default()
      },
      NodeElement {
        id: "U".to_string(),
        tag: "utility".to_string(),
        parents: Some("X".to_string()),
        values: Some("10 -5".to_string()),
        ..NodeElement::default()
      },
    ],
    extensions: vec![ExtensionElement {
      id: "X".to_string(),
      position: Some("0 0 4 4".to_string()),
    }],
  }
}

#[test]
fn roundtrip_save_load() {
  let store = ingest(&sample(), IngestOptions::default()).unwrap().store;
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("out").join(STORE_FILENAME);
  save_store(&path, &store).unwrap();
  assert!(path.exists());
  let loaded = load_store(&path).unwrap();
  assert_eq!(loaded, store);
  assert_eq!(
    loaded.get_potential("U").unwrap().axis_order(),
    vec!["U", "X"]
  );
}

#[test]
fn load_missing_file_returns_error() {
  let dir = tempfile::tempdir().unwrap();
  let r = load_store(&dir.path().join("nonexistent.json"));
  assert!(matches!(r, Err(BnError::Io(_))));
}

#[test]
fn load_rejects_dangling_parent() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join(STORE_FILENAME);
  std::fs::write(
    &path,
    r#"[{"id":"Y","kind":"chance","parents":["X"],"states":["a","b"]}]"#,
  )
  .unwrap();
  let r = load_store(&path);
  assert!(matches!(r, Err(BnError::DanglingReference { .. })));
}

#[test]
fn load_rejects_potential_sized_for_other_states() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join(STORE_FILENAME);
  std::fs::write(
    &path,
    r#"[{"id":"X","kind":"chance","parents":[],"states":["a","b","c"],
        "potential":{"axes":[["X",2]],"values":[0.5,0.5]}}]"#,
  )
  .unwrap();
  let r = load_store(&path);
  assert!(matches!(r, Err(BnError::ShapeMismatch { .. })));
}

#[test]
fn load_rejects_invalid_json() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join(STORE_FILENAME);
  std::fs::write(&path, "not json").unwrap();
  assert!(matches!(load_store(&path), Err(BnError::Json(_))));
}
