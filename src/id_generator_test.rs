//! Tests for `NodeIdGenerator`.

use std::collections::HashSet;

use crate::id_generator::NodeIdGenerator;
use crate::types::NodeKind;

#[test]
fn first_id_starts_at_one() {
  let mut ids = NodeIdGenerator::new();
  assert_eq!(ids.next_id(NodeKind::Input), "input-1");
}

#[test]
fn counter_is_shared_across_kinds() {
  let mut ids = NodeIdGenerator::new();
  assert_eq!(ids.next_id(NodeKind::Input), "input-1");
  assert_eq!(ids.next_id(NodeKind::Text), "text-2");
  assert_eq!(ids.next_id(NodeKind::Input), "input-3");
  assert_eq!(ids.next_id(NodeKind::Llm), "llm-4");
  assert_eq!(ids.issued(), 4);
}

#[test]
fn ids_never_repeat_in_a_session() {
  let mut ids = NodeIdGenerator::new();
  let mut seen = HashSet::new();
  for i in 0..200 {
    let kind = NodeKind::ALL[i % NodeKind::ALL.len()];
    assert!(seen.insert(ids.next_id(kind)));
  }
}

#[test]
fn reset_restarts_the_session() {
  let mut ids = NodeIdGenerator::new();
  ids.next_id(NodeKind::Output);
  ids.next_id(NodeKind::Output);
  ids.reset();
  assert_eq!(ids.issued(), 0);
  assert_eq!(ids.next_id(NodeKind::Output), "output-1");
}
