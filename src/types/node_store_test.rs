//! Tests for `NodeStore`.

use super::{NodeKind, NodeRecord, NodeStore, Position, Potential};
use crate::error::BnError;

fn states(labels: &[&str]) -> Vec<String> {
  labels.iter().map(|s| s.to_string()).collect()
}

fn chance(id: &str, parents: &[&str], labels: &[&str]) -> NodeRecord {
  NodeRecord::new(id, NodeKind::Chance, states(parents), states(labels))
}

fn two_node_store() -> NodeStore {
  let mut store = NodeStore::new();
  store.insert(chance("X", &[], &["x0", "x1"])).unwrap();
  store.insert(chance("Y", &["X"], &["y0", "y1", "y2"])).unwrap();
  store
}

#[test]
fn queries_follow_records() {
  let store = two_node_store();
  assert_eq!(store.len(), 2);
  assert_eq!(store.get_parents("Y").unwrap(), ["X".to_string()]);
  assert_eq!(store.get_states("X").unwrap(), ["x0", "x1"]);
  assert_eq!(store.state_count("Y").unwrap(), 3);
  assert_eq!(store.ids().collect::<Vec<_>>(), vec!["X", "Y"]);
}

#[test]
fn unknown_id_is_not_found() {
  let store = two_node_store();
  let err = store.get_states("Q").unwrap_err();
  assert!(matches!(err, BnError::NotFound { id, what: "node" } if id == "Q"));
}

#[test]
fn missing_potential_is_not_found() {
  let store = two_node_store();
  let err = store.get_potential("X").unwrap_err();
  assert!(matches!(err, BnError::NotFound { what: "potential", .. }));
}

#[test]
fn duplicate_insert_rejected() {
  let mut store = two_node_store();
  let err = store.insert(chance("X", &[], &["a"])).unwrap_err();
  assert!(matches!(err, BnError::DuplicateNode { id } if id == "X"));
}

#[test]
fn set_potential_and_read_back() {
  let mut store = two_node_store();
  let p = Potential::build(vec![0.5, 0.5], &[2], &["X".to_string()]).unwrap();
  store.set_potential("X", p.clone()).unwrap();
  assert_eq!(store.get_potential("X").unwrap(), &p);
}

#[test]
fn centers_only_for_positioned_nodes() {
  let mut store = two_node_store();
  store.set_position("Y", Position([0, 0, 10, 20])).unwrap();
  let centers = store.node_centers();
  assert_eq!(centers.len(), 1);
  assert_eq!(centers["Y"], (5.0, -10.0));
}

#[test]
fn set_position_on_unknown_node_fails() {
  let mut store = two_node_store();
  assert!(store.set_position("Q", Position([0, 0, 1, 1])).is_err());
}

#[test]
fn validate_finds_dangling_parent() {
  let mut store = two_node_store();
  store.insert(chance("Z", &["Y", "W"], &["z"])).unwrap();
  let err = store.validate().unwrap_err();
  assert!(matches!(err, BnError::DanglingReference { from, missing } if from == "Z" && missing == "W"));
}

#[test]
fn validate_rejects_misnamed_potential() {
  let mut store = two_node_store();
  // axes in the wrong order for Y
  let p = Potential::build(vec![0.0; 6], &[2, 3], &["X".to_string(), "Y".to_string()]).unwrap();
  store.set_potential("Y", p).unwrap();
  let err = store.validate().unwrap_err();
  assert!(matches!(err, BnError::ShapeMismatch { node, expected: 6, .. } if node == "Y"));
}

#[test]
fn validate_accepts_well_labeled_potential() {
  let mut store = two_node_store();
  let p = Potential::build(vec![0.0; 6], &[3, 2], &["Y".to_string(), "X".to_string()]).unwrap();
  store.set_potential("Y", p).unwrap();
  assert!(store.validate().is_ok());
}

#[test]
fn json_is_a_list_of_records() {
  let store = two_node_store();
  let json = serde_json::to_value(&store).unwrap();
  assert_eq!(json[0]["id"], "X");
  assert_eq!(json[1]["parents"], serde_json::json!(["X"]));
  assert!(json[0].get("potential").is_none());
}

#[test]
fn json_with_duplicate_ids_rejected() {
  let json = r#"[
    {"id":"X","kind":"chance","parents":[],"states":["a"]},
    {"id":"X","kind":"chance","parents":[],"states":["b"]}
  ]"#;
  let r: Result<NodeStore, _> = serde_json::from_str(json);
  assert!(r.unwrap_err().to_string().contains("more than once"));
}
