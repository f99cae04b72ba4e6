//! Screen-to-graph coordinate projection consumed from the canvas widget.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Smallest zoom factor the canvas allows.
pub const MIN_ZOOM: f64 = 0.5;
/// Largest zoom factor the canvas allows.
pub const MAX_ZOOM: f64 = 2.0;

/// A point in client (screen) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
  pub x: f64,
  pub y: f64,
}

impl ScreenPoint {
  pub fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }
}

/// Converts screen points to graph positions using the canvas's current pan/zoom.
pub trait CanvasProjection {
  fn project(&self, point: ScreenPoint) -> Position;
}

/// Pan/zoom state of the canvas.
///
/// `origin` is the canvas element's top-left corner in client pixels and
/// `translate` the pan offset in canvas pixels, so
/// `graph = (screen - origin - translate) / zoom`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
  origin: ScreenPoint,
  translate: ScreenPoint,
  zoom: f64,
}

impl Default for Viewport {
  fn default() -> Self {
    Self {
      origin: ScreenPoint::default(),
      translate: ScreenPoint::default(),
      zoom: 1.0,
    }
  }
}

impl Viewport {
  /// Zoom is clamped to `[MIN_ZOOM, MAX_ZOOM]`; a non-finite zoom falls back to 1.
  pub fn new(origin: ScreenPoint, translate: ScreenPoint, zoom: f64) -> Self {
    let zoom = if zoom.is_finite() {
      zoom.clamp(MIN_ZOOM, MAX_ZOOM)
    } else {
      1.0
    };
    Self {
      origin,
      translate,
      zoom,
    }
  }

  pub fn zoom(&self) -> f64 {
    self.zoom
  }

  /// Inverse of [CanvasProjection::project].
  pub fn to_screen(&self, position: Position) -> ScreenPoint {
    ScreenPoint {
      x: position.x * self.zoom + self.translate.x + self.origin.x,
      y: position.y * self.zoom + self.translate.y + self.origin.y,
    }
  }
}

impl CanvasProjection for Viewport {
  fn project(&self, point: ScreenPoint) -> Position {
    Position {
      x: (point.x - self.origin.x - self.translate.x) / self.zoom,
      y: (point.y - self.origin.y - self.translate.y) / self.zoom,
    }
  }
}
