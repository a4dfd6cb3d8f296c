//! Property tests for potential construction and network weaving.

use bayesnet_weave::{
  BayesNetwork, IngestOptions, NodeElement, ParsedNetwork, Potential, ingest, weave,
};
use proptest::prelude::*;

/// Axis lengths 1..=4 over 1..=4 axes, with a value list of exactly the right size.
fn shaped_values() -> impl Strategy<Value = (Vec<usize>, Vec<f64>)> {
  prop::collection::vec(1usize..=4, 1..=4).prop_flat_map(|lengths| {
    let n: usize = lengths.iter().product();
    (Just(lengths), prop::collection::vec(-1e6f64..1e6, n))
  })
}

/// A random DAG: node `i` may only take parents among nodes `0..i`.
fn dag_network() -> impl Strategy<Value = ParsedNetwork> {
  (1usize..8).prop_flat_map(|n| {
    let parents = (0..n)
      .map(|i| prop::collection::vec(any::<bool>(), i))
      .collect::<Vec<_>>();
    let states = prop::collection::vec(1usize..=3, n);
    (parents, states).prop_map(|(parents, states)| {
      let nodes = parents
        .iter()
        .enumerate()
        .map(|(i, mask)| {
          let ps: Vec<usize> = mask
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(|(j, _)| j)
            .collect();
          let count: usize = states[i] * ps.iter().map(|p| states[*p]).product::<usize>();
          NodeElement {
            id: format!("n{i}"),
            tag: "cpt".to_string(),
            parents: Some(ps.iter().map(|p| format!("n{p}")).collect::<Vec<_>>().join(" ")),
            states: (0..states[i]).map(|s| format!("s{s}")).collect(),
            values: Some(vec!["0.5"; count].join(" ")),
          }
        })
        .rev()
        .collect();
      ParsedNetwork {
        nodes,
        extensions: vec![],
      }
    })
  })
}

proptest! {
  #[test]
  fn flatten_reproduces_input((lengths, values) in shaped_values()) {
    let names: Vec<String> = (0..lengths.len()).map(|i| format!("a{i}")).collect();
    let p = Potential::build(values.clone(), &lengths, &names).unwrap();
    prop_assert_eq!(p.len(), lengths.iter().product::<usize>());
    prop_assert_eq!(p.ndim(), lengths.len());
    prop_assert_eq!(p.to_flat_vec(), values);
  }

  #[test]
  fn wrong_count_always_rejected((lengths, mut values) in shaped_values(), extra in 1usize..3) {
    let names: Vec<String> = (0..lengths.len()).map(|i| format!("a{i}")).collect();
    values.extend(std::iter::repeat_n(0.0, extra));
    prop_assert!(Potential::build(values, &lengths, &names).is_err());
  }

  #[test]
  fn potentials_are_labeled_node_then_parents(parsed in dag_network()) {
    let out = ingest(&parsed, IngestOptions::default()).unwrap();
    prop_assert!(out.skipped.is_empty());
    for record in out.store.iter() {
      let p = out.store.get_potential(&record.id).unwrap();
      let order = p.axis_order();
      prop_assert_eq!(order.len(), 1 + record.parents.len());
      prop_assert_eq!(order[0], record.id.as_str());
      prop_assert!(order[1..].iter().zip(&record.parents).all(|(a, b)| *a == b.as_str()));
      for name in &order {
        prop_assert_eq!(p.axis_length(name), Some(out.store.state_count(name).unwrap()));
      }
    }
  }

  #[test]
  fn weave_emits_one_resolvable_edge_per_parent(parsed in dag_network()) {
    let store = ingest(&parsed, IngestOptions::default()).unwrap().store;
    let edges = weave(&store).unwrap();
    let parent_entries: usize = store.iter().map(|r| r.parents.len()).sum();
    prop_assert_eq!(edges.len(), parent_entries);
    for e in &edges {
      prop_assert!(store.contains(&e.parent));
      prop_assert!(store.contains(&e.child));
    }
  }

  #[test]
  fn node_order_is_children_first(parsed in dag_network()) {
    let store = ingest(&parsed, IngestOptions::default()).unwrap().store;
    let net = BayesNetwork::build(store).unwrap();
    let order = net.node_order();
    prop_assert_eq!(order.len(), net.store().len());
    let rank = |id: &str| order.iter().position(|n| n == id).unwrap();
    for e in net.edges() {
      prop_assert!(rank(&e.child) < rank(&e.parent));
    }
  }
}
