//! A point in graph space.

use serde::{Deserialize, Serialize};

/// A 2D coordinate in graph space (after pan/zoom has been undone).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
  pub x: f64,
  pub y: f64,
}

impl Position {
  pub fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }
}
