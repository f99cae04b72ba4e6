//! End-to-end scenarios: palette drops, wiring, template edits and submission
//! against an in-process validator, plus the `submit_pipeline` CLI.

use std::process::Command;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use pipeline_builder::canvas::{ScreenPoint, Viewport};
use pipeline_builder::palette::DragPayload;
use pipeline_builder::store::ConnectOutcome;
use pipeline_builder::types::{Connection, NodeChange, NodeData};
use pipeline_builder::{
  ClientConfig, GraphStore, HttpPipelineClient, NodeKind, PipelineValidator, on_drop,
};
use serde_json::Value;

#[derive(Clone)]
struct Validator {
  status: StatusCode,
  body: &'static str,
  hits: Arc<AtomicUsize>,
  requests: Arc<Mutex<Vec<Value>>>,
}

async fn parse(State(v): State<Validator>, Json(body): Json<Value>) -> (StatusCode, String) {
  v.hits.fetch_add(1, Ordering::SeqCst);
  v.requests.lock().unwrap().push(body);
  (v.status, v.body.to_string())
}

async fn start_validator(status: StatusCode, body: &'static str) -> (String, Validator) {
  let v = Validator {
    status,
    body,
    hits: Arc::new(AtomicUsize::new(0)),
    requests: Arc::new(Mutex::new(Vec::new())),
  };
  let app = Router::new()
    .route("/pipelines/parse", post(parse))
    .with_state(v.clone());
  let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  tokio::spawn(async move {
    axum::serve(listener, app).await.unwrap();
  });
  (format!("http://{addr}"), v)
}

fn drop_kind(store: &mut GraphStore, viewport: &Viewport, x: f64, y: f64, kind: NodeKind) -> String {
  let payload = DragPayload::for_kind(kind).to_json();
  on_drop(store, viewport, ScreenPoint::new(x, y), Some(&payload)).expect("drop creates a node")
}

/// Input node → text node `"Hello {{name}}"`, wired through `var-name`.
fn hello_pipeline() -> (GraphStore, String, String) {
  let mut store = GraphStore::new();
  let viewport = Viewport::new(ScreenPoint::new(150.0, 60.0), ScreenPoint::new(0.0, 0.0), 1.0);
  let input = drop_kind(&mut store, &viewport, 250.0, 160.0, NodeKind::Input);
  let text = drop_kind(&mut store, &viewport, 550.0, 160.0, NodeKind::Text);
  store
    .update_node_data(&text, NodeData::text("Hello {{name}}"))
    .unwrap();
  let outcome = store.on_connect(Connection::new(
    &input,
    format!("{input}-output"),
    &text,
    "var-name",
  ));
  assert!(matches!(outcome, ConnectOutcome::Created(_)));
  (store, input, text)
}

#[tokio::test]
async fn drop_wire_and_submit() {
  let (url, validator) =
    start_validator(StatusCode::OK, r#"{"num_nodes": 2, "num_edges": 1, "is_dag": true}"#).await;
  let (store, input, _) = hello_pipeline();
  assert_eq!(store.node(&input).unwrap().position().x, 100.0);

  let client = HttpPipelineClient::new(&ClientConfig::default().with_base_url(url)).unwrap();
  let summary = client.submit(store.nodes(), store.edges()).await.unwrap();

  assert_eq!((summary.num_nodes, summary.num_edges, summary.is_dag), (2, 1, true));
  let requests = validator.requests.lock().unwrap();
  assert_eq!(requests.len(), 1);
  assert_eq!(requests[0]["nodes"].as_array().unwrap().len(), 2);
  assert_eq!(requests[0]["edges"].as_array().unwrap().len(), 1);
  assert_eq!(requests[0]["edges"][0]["targetHandle"], "var-name");
  assert_eq!(requests[0]["nodes"][1]["data"]["text"], "Hello {{name}}");
}

#[tokio::test]
async fn server_error_surfaces_once() {
  let (url, validator) = start_validator(StatusCode::INTERNAL_SERVER_ERROR, "parser crashed").await;
  let (store, _, _) = hello_pipeline();
  let client = HttpPipelineClient::new(&ClientConfig::default().with_base_url(url)).unwrap();

  let err = client.submit(store.nodes(), store.edges()).await.unwrap_err();

  assert_eq!(err.to_string(), "Server error 500: parser crashed");
  assert_eq!(validator.hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn edits_after_snapshot_do_not_change_the_request() {
  let (url, validator) =
    start_validator(StatusCode::OK, r#"{"num_nodes": 2, "num_edges": 1, "is_dag": true}"#).await;
  let (mut store, input, _) = hello_pipeline();
  let client = HttpPipelineClient::new(&ClientConfig::default().with_base_url(url)).unwrap();

  let snapshot = store.snapshot();
  store.apply_node_changes(vec![NodeChange::Remove { id: input }]);
  client.parse_pipeline(&snapshot).await.unwrap();

  assert!(store.edges().is_empty());
  let requests = validator.requests.lock().unwrap();
  assert_eq!(requests[0]["edges"].as_array().unwrap().len(), 1);
}

#[test]
fn template_edit_prunes_only_removed_variable() {
  let mut store = GraphStore::new();
  let viewport = Viewport::default();
  let x_src = drop_kind(&mut store, &viewport, 0.0, 0.0, NodeKind::Input);
  let y_src = drop_kind(&mut store, &viewport, 0.0, 100.0, NodeKind::Input);
  let text = drop_kind(&mut store, &viewport, 300.0, 50.0, NodeKind::Text);
  store
    .update_node_data(&text, NodeData::text("{{x}} and {{y}}"))
    .unwrap();
  store.on_connect(Connection::new(&x_src, format!("{x_src}-output"), &text, "var-x"));
  store.on_connect(Connection::new(&y_src, format!("{y_src}-output"), &text, "var-y"));

  store.update_node_data(&text, NodeData::text("{{x}}")).unwrap();

  let handles: Vec<&str> = store.edges().iter().map(|e| e.target_handle.as_str()).collect();
  assert_eq!(handles, vec!["var-x"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn cli_submits_pipeline_file() {
  let (url, validator) =
    start_validator(StatusCode::OK, r#"{"num_nodes": 2, "num_edges": 1, "is_dag": true}"#).await;
  let (store, _, _) = hello_pipeline();
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("pipeline.json");
  std::fs::write(&path, serde_json::to_vec_pretty(&store.snapshot()).unwrap()).unwrap();

  let out = tokio::task::spawn_blocking(move || {
    Command::new(env!("CARGO_BIN_EXE_submit_pipeline"))
      .arg("--api-url")
      .arg(&url)
      .arg(&path)
      .env_remove("PIPELINE_API_URL")
      .env_remove("PIPELINE_API_TIMEOUT_SECS")
      .output()
      .expect("run submit_pipeline")
  })
  .await
  .unwrap();

  assert!(out.status.success(), "stderr={}", String::from_utf8_lossy(&out.stderr));
  let stdout = String::from_utf8_lossy(&out.stdout);
  assert!(stdout.contains("Nodes: 2"));
  assert!(stdout.contains("Edges: 1"));
  assert!(stdout.contains("Is DAG: Yes"));
  assert_eq!(validator.hits.load(Ordering::SeqCst), 1);
}

#[test]
fn cli_fails_on_missing_file() {
  let out = Command::new(env!("CARGO_BIN_EXE_submit_pipeline"))
    .arg("/definitely/not/here.json")
    .output()
    .expect("run submit_pipeline");
  assert!(!out.status.success());
  assert!(String::from_utf8_lossy(&out.stderr).contains("Error reading"));
}
