//! Reading a pipeline (`{nodes, edges}` JSON) from disk for submission.

use std::path::Path;

use tracing::instrument;

use crate::types::PipelinePayload;

/// Loads a pipeline from `path`. Returns an error if the file is missing or not a valid pipeline.
#[instrument(level = "trace", skip(path))]
pub fn load_payload(path: &Path) -> Result<PipelinePayload, std::io::Error> {
  let bytes = std::fs::read(path)?;
  serde_json::from_slice(&bytes)
    .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}
