//! Tests for drop placement.

use std::collections::HashSet;

use serde_json::json;

use crate::canvas::{CanvasProjection, ScreenPoint, Viewport};
use crate::placement::on_drop;
use crate::store::GraphStore;
use crate::types::{NodeKind, Position};

/// Projection that subtracts a fixed offset from both axes.
struct Shifted(f64);

impl CanvasProjection for Shifted {
  fn project(&self, point: ScreenPoint) -> Position {
    Position::new(point.x - self.0, point.y - self.0)
  }
}

#[test]
fn drop_creates_node_at_projected_position() {
  let mut store = GraphStore::new();
  let viewport = Viewport::new(ScreenPoint::new(100.0, 50.0), ScreenPoint::new(10.0, 10.0), 2.0);
  let id = on_drop(
    &mut store,
    &viewport,
    ScreenPoint::new(310.0, 260.0),
    Some(r#"{"nodeType":"llm"}"#),
  )
  .unwrap();

  assert_eq!(id, "llm-1");
  let node = store.node(&id).unwrap();
  assert_eq!(node.kind(), NodeKind::Llm);
  assert_eq!(node.position(), Position::new(100.0, 100.0));
}

#[test]
fn dropped_node_has_initial_data_only() {
  let mut store = GraphStore::new();
  let id = on_drop(
    &mut store,
    &Shifted(0.0),
    ScreenPoint::new(1.0, 2.0),
    Some(r#"{"nodeType":"customInput"}"#),
  )
  .unwrap();
  let v = serde_json::to_value(store.node(&id).unwrap()).unwrap();
  assert_eq!(v["type"], "input");
  assert_eq!(v["data"], json!({"id": "input-1", "nodeType": "input"}));
}

#[test]
fn malformed_drops_are_no_ops() {
  let mut store = GraphStore::new();
  let rx = store.subscribe();
  for payload in [
    None,
    Some(""),
    Some("not json"),
    Some("{}"),
    Some(r#"{"nodeType":null}"#),
    Some(r#"{"nodeType":"shader"}"#),
  ] {
    assert!(on_drop(&mut store, &Shifted(0.0), ScreenPoint::default(), payload).is_none());
  }
  assert!(store.nodes().is_empty());
  assert_eq!(*rx.borrow(), 0);
  // No ids were consumed by rejected drops.
  assert_eq!(store.get_node_id(NodeKind::Text), "text-1");
}

#[test]
fn drop_ids_are_unique_among_existing_nodes() {
  let mut store = GraphStore::new();
  let kinds = ["input", "text", "output", "llm", "text", "input"];
  for kind in kinds {
    let before: HashSet<String> = store.nodes().iter().map(|n| n.id().to_string()).collect();
    let payload = format!(r#"{{"nodeType":"{kind}"}}"#);
    let id = on_drop(&mut store, &Shifted(5.0), ScreenPoint::default(), Some(&payload)).unwrap();
    assert!(!before.contains(&id));
  }
  let ids: HashSet<&str> = store.nodes().iter().map(|n| n.id()).collect();
  assert_eq!(ids.len(), store.nodes().len());
}
