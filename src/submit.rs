//! Submission of the pipeline graph to the remote validator.
//!
//! The validator decides acyclicity; this side only encodes the graph,
//! decodes the answer and reports failures. Each call issues exactly one
//! request: there is no retry, deduplication or cancellation.

use async_trait::async_trait;
use reqwest::Url;
use tracing::{info, instrument, warn};

use crate::config::ClientConfig;
use crate::error::SubmitError;
use crate::types::{HealthStatus, PipelineEdge, PipelineNode, PipelinePayload, PipelineSummary};

/// Path of the parse endpoint, relative to the validator base URL.
pub const PARSE_PATH: &str = "pipelines/parse";

/// Something that can judge a submitted pipeline.
#[async_trait]
pub trait PipelineValidator: Send + Sync {
  /// Sends `payload` and returns the validator's summary.
  async fn parse_pipeline(&self, payload: &PipelinePayload) -> Result<PipelineSummary, SubmitError>;

  /// Encodes `nodes` and `edges` verbatim and submits them.
  async fn submit(
    &self,
    nodes: &[PipelineNode],
    edges: &[PipelineEdge],
  ) -> Result<PipelineSummary, SubmitError> {
    let payload = PipelinePayload::from_slices(nodes, edges);
    self.parse_pipeline(&payload).await
  }
}

/// HTTP client for the validator service.
#[derive(Debug, Clone)]
pub struct HttpPipelineClient {
  http: reqwest::Client,
  base_url: Url,
}

impl HttpPipelineClient {
  pub fn new(config: &ClientConfig) -> Result<Self, SubmitError> {
    let base_url = parse_base_url(&config.base_url)?;
    let http = reqwest::Client::builder().timeout(config.timeout).build()?;
    Ok(Self { http, base_url })
  }

  pub fn base_url(&self) -> &Url {
    &self.base_url
  }

  /// `GET /` on the validator.
  #[instrument(level = "trace", skip(self))]
  pub async fn health(&self) -> Result<HealthStatus, SubmitError> {
    let res = self.http.get(self.base_url.clone()).send().await?;
    decode_response(res).await
  }

  fn endpoint(&self, path: &str) -> Result<Url, SubmitError> {
    self.base_url.join(path).map_err(|e| SubmitError::InvalidUrl {
      url: format!("{}{}", self.base_url, path),
      reason: e.to_string(),
    })
  }
}

#[async_trait]
impl PipelineValidator for HttpPipelineClient {
  #[instrument(level = "trace", skip(self, payload))]
  async fn parse_pipeline(&self, payload: &PipelinePayload) -> Result<PipelineSummary, SubmitError> {
    let url = self.endpoint(PARSE_PATH)?;
    info!(
      url = %url,
      nodes = payload.nodes.len(),
      edges = payload.edges.len(),
      "submitting pipeline"
    );
    let res = self.http.post(url).json(payload).send().await?;
    let summary: PipelineSummary = decode_response(res).await?;
    info!(
      num_nodes = summary.num_nodes,
      num_edges = summary.num_edges,
      is_dag = summary.is_dag,
      "pipeline parsed"
    );
    Ok(summary)
  }
}

/// Base URL with a trailing slash so relative joins append instead of replacing the last segment.
fn parse_base_url(raw: &str) -> Result<Url, SubmitError> {
  let normalized = if raw.ends_with('/') {
    raw.to_string()
  } else {
    format!("{raw}/")
  };
  let url = Url::parse(&normalized).map_err(|e| SubmitError::InvalidUrl {
    url: raw.to_string(),
    reason: e.to_string(),
  })?;
  if url.cannot_be_a_base() {
    return Err(SubmitError::InvalidUrl {
      url: raw.to_string(),
      reason: "not a base URL".to_string(),
    });
  }
  Ok(url)
}

/// Non-2xx → [SubmitError::Status]; unparseable 2xx body → [SubmitError::Decode].
async fn decode_response<T: serde::de::DeserializeOwned>(
  res: reqwest::Response,
) -> Result<T, SubmitError> {
  let status = res.status();
  let body = res.text().await?;
  if !status.is_success() {
    warn!(status = status.as_u16(), body = %body, "validator returned an error");
    return Err(SubmitError::Status {
      status: status.as_u16(),
      body,
    });
  }
  serde_json::from_str(&body).map_err(|source| SubmitError::Decode { source, body })
}
