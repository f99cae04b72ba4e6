//! CLI: submit a saved pipeline (`{nodes, edges}` JSON) to the validator.
//!
//! Usage: `submit_pipeline [OPTIONS] <path-to-pipeline-json>`
//! Example: submit_pipeline --api-url http://localhost:8000 pipeline.json
//!
//! Set RUST_LOG=pipeline_builder=trace for TRACE-level span enter/exit and events.

use clap::Parser;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use pipeline_builder::config::{DEFAULT_API_URL, DEFAULT_TIMEOUT};
use pipeline_builder::{ClientConfig, HttpPipelineClient, PipelineValidator, pipeline_io};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

/// Submit a pipeline JSON file to the DAG validator.
#[derive(Parser, Debug)]
#[command(name = "submit_pipeline")]
#[command(
  after_help = r#"Environment variables (override --api-url and --timeout-secs when set):
  PIPELINE_API_URL            Base URL of the validator service.
  PIPELINE_API_TIMEOUT_SECS   Request timeout in seconds.

Examples:
  submit_pipeline pipeline.json
  submit_pipeline --check-health --api-url http://localhost:8000 pipeline.json"#
)]
struct Args {
  /// Base URL of the validator. Overridden by PIPELINE_API_URL if set.
  #[arg(long, value_name = "URL", default_value = DEFAULT_API_URL)]
  api_url: String,

  /// Request timeout in seconds. Overridden by PIPELINE_API_TIMEOUT_SECS if set.
  #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
  timeout_secs: u64,

  /// Query the validator's health endpoint before submitting.
  #[arg(long)]
  check_health: bool,

  /// Path to the pipeline JSON file
  #[arg(value_name = "path-to-pipeline-json")]
  pipeline_path: PathBuf,
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
    .init();

  let args = Args::parse();

  // Env vars override flags.
  let config = ClientConfig::default()
    .with_base_url(args.api_url.clone())
    .with_timeout(Duration::from_secs(args.timeout_secs))
    .with_overrides(|key| std::env::var(key).ok());
  info!(api_url = %config.base_url, timeout = ?config.timeout, "options (env or flags)");

  let path = &args.pipeline_path;
  let payload = match pipeline_io::load_payload(path) {
    Ok(p) => p,
    Err(e) => {
      eprintln!("Error reading {}: {}", path.display(), e);
      process::exit(1);
    }
  };

  let client = match HttpPipelineClient::new(&config) {
    Ok(c) => c,
    Err(e) => {
      eprintln!("Invalid configuration: {}", e);
      process::exit(1);
    }
  };

  if args.check_health {
    match client.health().await {
      Ok(h) => info!(status = %h.status, message = %h.message, "validator healthy"),
      Err(e) => {
        eprintln!("Validator health check failed: {}", e);
        process::exit(1);
      }
    }
  }

  match client.parse_pipeline(&payload).await {
    Ok(summary) => println!("{}", summary.report()),
    Err(e) => {
      eprintln!("Submit failed: {}", e);
      process::exit(1);
    }
  }
}
