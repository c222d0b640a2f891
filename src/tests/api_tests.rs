use crate::api::router;
use crate::config::AppConfig;
use crate::events::{Event, EventHub};
use crate::AppState;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app_with(config: AppConfig) -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(config, EventHub::new(16)));
    (router(Arc::clone(&state)), state)
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Value {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.map(|b| b.to_string()).unwrap_or_default()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn edit(app: &Router, body: Value) -> Value {
    call(app, Method::POST, "/api/form/edit", Some(body)).await
}

#[tokio::test]
async fn test_status_reports_version_and_session() {
    let (app, state) = app_with(AppConfig::default());
    let resp = call(&app, Method::GET, "/api/status", None).await;

    assert_eq!(resp["success"], true);
    assert_eq!(resp["data"]["version"], env!("CARGO_PKG_VERSION"));
    let session_id = state.form.read().await.session_id.to_string();
    assert_eq!(resp["data"]["session_id"], session_id);
    assert_eq!(resp["data"]["revision"], 0);
}

#[tokio::test]
async fn test_edit_flow_reconciles_fields() {
    let (app, _state) = app_with(AppConfig::default());

    edit(&app, json!({"action": "set_space", "field": "total", "text": "1000"})).await;
    let resp = edit(&app, json!({"action": "set_space", "field": "free", "text": "100"})).await;
    assert_eq!(resp["success"], true);
    assert_eq!(resp["data"]["used"]["text"], "900.00");
    assert_eq!(resp["data"]["used"]["unit"], "GB");

    let resp = edit(&app, json!({"action": "set_target", "text": "20"})).await;
    assert_eq!(resp["data"]["results"]["kind"], "summary");
    assert_eq!(resp["data"]["results"]["target"]["status"], "need_to_add");
    assert_eq!(resp["data"]["results"]["target"]["additional_gb"], 125);
    assert_eq!(
        resp["data"]["results_text"],
        "Current Free Space: 10.00%\nCurrent Used Space: 90.00%\n\
         You need to add 125 GB to reach 20.00% free space."
    );

    let resp = call(&app, Method::GET, "/api/form", None).await;
    assert_eq!(resp["data"]["revision"], 3);
}

#[tokio::test]
async fn test_bad_unit_is_reported_and_state_kept() {
    let (app, state) = app_with(AppConfig::default());
    edit(&app, json!({"action": "set_space", "field": "total", "text": "1000"})).await;
    let mut events = state.event_hub.subscribe();

    let resp = edit(&app, json!({"action": "set_unit", "field": "total", "unit": "PB"})).await;
    assert_eq!(resp["success"], false);
    assert!(resp["error"].as_str().unwrap().contains("bad unit"));
    assert_eq!(state.form.read().await.revision, 1);
    assert!(matches!(events.recv().await.unwrap(), Event::InputRejected { .. }));
}

#[tokio::test]
async fn test_inline_error_is_a_successful_edit() {
    let (app, _state) = app_with(AppConfig::default());
    edit(&app, json!({"action": "set_space", "field": "total", "text": "100"})).await;
    let resp = edit(&app, json!({"action": "set_space", "field": "free", "text": "150"})).await;

    assert_eq!(resp["success"], true);
    assert_eq!(resp["data"]["results"]["kind"], "error");
    assert_eq!(resp["data"]["results_text"], "Error: Free space cannot exceed Total Disk Space.");
}

#[tokio::test]
async fn test_clear_starts_new_session() {
    let (app, state) = app_with(AppConfig::default());
    edit(&app, json!({"action": "set_space", "field": "total", "text": "1000"})).await;
    let old_session = state.form.read().await.session_id;
    let mut events = state.event_hub.subscribe();

    let resp = call(&app, Method::POST, "/api/form/clear", None).await;
    assert_eq!(resp["success"], true);
    assert_eq!(resp["data"]["total"]["text"], "");
    assert_eq!(resp["data"]["results"]["kind"], "empty");

    let new_session = state.form.read().await.session_id;
    assert_ne!(new_session, old_session);
    match events.recv().await.unwrap() {
        Event::FormCleared { session_id } => assert_eq!(session_id, new_session),
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test]
async fn test_email_requires_filled_form() {
    let (app, _state) = app_with(AppConfig::default());
    let resp = call(
        &app,
        Method::POST,
        "/api/email",
        Some(json!({"server_name": "SRV01", "volume_name": "D:", "client_abbreviation": "ACME"})),
    )
    .await;
    assert_eq!(resp["success"], false);
    assert_eq!(resp["error"], "Please fill in all fields before generating the email.");
}

#[tokio::test]
async fn test_email_draft() {
    let config = AppConfig {
        mail_to: "ops@example.com".to_string(),
        client_abbreviation: "ACME".to_string(),
        ..AppConfig::default()
    };
    let (app, _state) = app_with(config);
    edit(&app, json!({"action": "set_space", "field": "total", "text": "1000"})).await;
    edit(&app, json!({"action": "set_space", "field": "free", "text": "100"})).await;
    edit(&app, json!({"action": "set_target", "text": "20"})).await;

    let resp = call(
        &app,
        Method::POST,
        "/api/email",
        Some(json!({"server_name": "SRV01", "volume_name": "D:", "cleanup_ran": true})),
    )
    .await;

    assert_eq!(resp["success"], true);
    assert_eq!(resp["data"]["subject"], "[ACME] Low Disk Space Alert on SRV01 Volume D:");
    let url = resp["data"]["mailto_url"].as_str().unwrap();
    assert!(url.starts_with("mailto:ops@example.com?subject=%5BACME%5D"));
    let body = resp["data"]["body"].as_str().unwrap();
    assert!(body.contains("After running cleanup tools"));
    assert!(body.contains("Adding or Clearing 125 GB"));
}

#[tokio::test]
async fn test_probe_rejects_relative_path() {
    let (app, _state) = app_with(AppConfig::default());
    let resp =
        call(&app, Method::POST, "/api/form/probe", Some(json!({"path": "relative"}))).await;
    assert_eq!(resp["success"], false);
    assert!(resp["error"].as_str().unwrap().contains("path must be absolute"));
}

#[tokio::test]
async fn test_probe_disabled() {
    let (app, _state) = app_with(AppConfig { allow_probe: false, ..AppConfig::default() });
    let resp = call(&app, Method::POST, "/api/form/probe", Some(json!({"path": "/"}))).await;
    assert_eq!(resp["success"], false);
    assert!(resp["error"].as_str().unwrap().contains("disabled"));
}

#[cfg(unix)]
#[tokio::test]
async fn test_probe_loads_root_volume() {
    let (app, state) = app_with(AppConfig::default());
    let resp = call(&app, Method::POST, "/api/form/probe", Some(json!({"path": "/"}))).await;
    assert_eq!(resp["success"], true);
    assert_eq!(resp["data"]["volume"]["path"], "/");

    let form = state.form.read().await;
    assert_eq!(form.revision, 1);
    assert_eq!(form.total.base, Some(resp["data"]["volume"]["total_gb"].as_f64().unwrap()));
}

#[tokio::test]
async fn test_settings_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("ids.cfg");
    let config = AppConfig {
        config_path: config_path.to_string_lossy().into_owned(),
        ..AppConfig::default()
    };
    let (app, _state) = app_with(config);

    let resp = call(&app, Method::GET, "/api/settings", None).await;
    assert_eq!(resp["data"]["default_unit"], "GB");

    let resp = call(
        &app,
        Method::POST,
        "/api/settings",
        Some(json!({"default_unit": "TB", "default_target_percent": 20.0})),
    )
    .await;
    assert_eq!(resp["success"], true);
    let saved = std::fs::read_to_string(&config_path).unwrap();
    assert!(saved.contains("DEFAULT_UNIT=\"TB\""));
    assert!(saved.contains("DEFAULT_TARGET_PERCENT=\"20\""));

    let resp = call(
        &app,
        Method::POST,
        "/api/settings",
        Some(json!({"default_target_percent": 100.0})),
    )
    .await;
    assert_eq!(resp["success"], false);
    assert!(resp["error"].as_str().unwrap().contains("default_target_percent"));
}

#[tokio::test]
async fn test_load_volume_edit_over_total_keeps_model() {
    let (app, state) = app_with(AppConfig::default());
    let resp = edit(&app, json!({"action": "load_volume", "total": 100.0, "free": 150.0})).await;
    assert_eq!(resp["success"], true);
    assert_eq!(resp["data"]["results_text"], "Error: Free space cannot exceed Total Disk Space.");
    assert!(state.form.read().await.model.total_space.abs() < f64::EPSILON);

    let resp = edit(&app, json!({"action": "load_volume", "total": -10.0, "free": -20.0})).await;
    assert_eq!(resp["success"], false);
    assert_eq!(state.form.read().await.revision, 1);
}
