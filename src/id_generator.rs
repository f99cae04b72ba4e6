//! Session-scoped node id generation.

use tracing::instrument;

use crate::types::NodeKind;

/// Issues `"<kind>-<counter>"` ids.
///
/// The counter is shared by all kinds so ids stay unique across mixed-kind
/// drops. It only restarts when the editing session is reset.
#[derive(Debug, Default, Clone)]
pub struct NodeIdGenerator {
  counter: u64,
}

impl NodeIdGenerator {
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns the next id for `kind`. Never repeats within a session.
  #[instrument(level = "trace", skip(self))]
  pub fn next_id(&mut self, kind: NodeKind) -> String {
    self.counter += 1;
    format!("{}-{}", kind.as_str(), self.counter)
  }

  /// Number of ids issued since the session started.
  pub fn issued(&self) -> u64 {
    self.counter
  }

  pub fn reset(&mut self) {
    self.counter = 0;
  }
}
