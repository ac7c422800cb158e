//! Integration tests for the HTTP settings service adapter.
//!
//! # Purpose
//!
//! These tests run [`HttpSettingsService`] against a local `wiremock` server
//! and drive it through the public API, both directly and wrapped in a
//! [`BackupPathStore`].  They verify:
//!
//! - The exact method and path of each endpoint.
//! - How success bodies (including missing fields) reach the cache.
//! - How non-success statuses and malformed bodies surface as
//!   [`RemoteFetchError`] while the cache keeps its previous value.

use std::sync::Arc;

use amber_settings::application::backup_history::BackupHistory;
use amber_settings::application::backup_path_store::{BackupPathStore, SettingsService};
use amber_settings::application::error::RemoteFetchError;
use amber_settings::domain::ClientConfig;
use amber_settings::infrastructure::http::HttpSettingsService;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn service_for(server: &MockServer) -> Arc<HttpSettingsService> {
    let cfg = ClientConfig::new(server.uri());
    Arc::new(HttpSettingsService::new(&cfg).expect("build client"))
}

async fn mount_get_path(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/settings/backup/path"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

// ── Load ──────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_load_scenario_local_override_then_remote_value() {
    // Arrange
    let server = MockServer::start().await;
    mount_get_path(&server, json!({ "backup_path": "/data/backups" })).await;
    let store = BackupPathStore::new(service_for(&server));
    assert_eq!(store.backup_path(), "");

    // Act
    store.set_backup_path("/tmp/a");
    assert_eq!(store.backup_path(), "/tmp/a");
    let returned = store.load_backup_path().await.expect("load");

    // Assert
    assert_eq!(returned, "/data/backups");
    assert_eq!(store.backup_path(), "/data/backups");
}

#[tokio::test]
async fn test_set_backup_path_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let store = BackupPathStore::new(service_for(&server));

    store.set_backup_path("/local/only");

    assert_eq!(store.backup_path(), "/local/only");
    // `expect(0)` is verified when the server is dropped.
}

#[tokio::test]
async fn test_load_with_missing_field_caches_empty_path() {
    let server = MockServer::start().await;
    mount_get_path(&server, json!({})).await;
    let store = BackupPathStore::new(service_for(&server));
    store.set_backup_path("/stale");

    let returned = store.load_backup_path().await.expect("load");

    assert_eq!(returned, "");
    assert_eq!(store.backup_path(), "");
}

#[tokio::test]
async fn test_load_twice_is_idempotent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/settings/backup/path"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "backup_path": "D:/Backups" })),
        )
        .expect(2)
        .mount(&server)
        .await;
    let store = BackupPathStore::new(service_for(&server));

    let first = store.load_backup_path().await.expect("first load");
    let second = store.load_backup_path().await.expect("second load");

    assert_eq!(first, "D:/Backups");
    assert_eq!(first, second);
    assert_eq!(store.backup_path(), "D:/Backups");
}

#[tokio::test]
async fn test_load_server_error_keeps_cache_and_reports_status() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/settings/backup/path"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "detail": "settings file unreadable" })),
        )
        .mount(&server)
        .await;
    let store = BackupPathStore::new(service_for(&server));
    store.set_backup_path("/kept");

    // Act
    let err = store.load_backup_path().await.unwrap_err();

    // Assert
    match &err {
        RemoteFetchError::Status { status, detail, url } => {
            assert_eq!(*status, 500);
            assert_eq!(detail.as_deref(), Some("settings file unreadable"));
            assert!(url.ends_with("/settings/backup/path"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
    assert_eq!(store.backup_path(), "/kept");
}

#[tokio::test]
async fn test_load_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/settings/backup/path"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;
    let store = BackupPathStore::new(service_for(&server));
    store.set_backup_path("/kept");

    let err = store.load_backup_path().await.unwrap_err();

    assert!(matches!(err, RemoteFetchError::Decode { .. }), "got {err:?}");
    assert_eq!(store.backup_path(), "/kept");
}

// ── Select ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_select_posts_and_caches_choice() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/settings/backup/path/select"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "backup_path": "/mnt/nas/amber" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    let store = BackupPathStore::new(service_for(&server));

    let returned = store.select_backup_path().await.expect("select");

    assert_eq!(returned, "/mnt/nas/amber");
    assert_eq!(store.backup_path(), "/mnt/nas/amber");
}

#[tokio::test]
async fn test_select_cancelled_caches_empty_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/settings/backup/path/select"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "backup_path": "" })))
        .mount(&server)
        .await;
    let store = BackupPathStore::new(service_for(&server));
    store.set_backup_path("/before");

    let returned = store.select_backup_path().await.expect("select");

    assert_eq!(returned, "");
    assert_eq!(store.backup_path(), "");
}

#[tokio::test]
async fn test_select_window_not_ready_surfaces_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/settings/backup/path/select"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(json!({ "detail": "window not ready" })),
        )
        .mount(&server)
        .await;
    let service = service_for(&server);

    let err = service.select_backup_path().await.unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert!(err.to_string().ends_with("HTTP 503: window not ready"), "got {err}");
}

#[tokio::test]
async fn test_trailing_slash_in_base_url_is_tolerated() {
    let server = MockServer::start().await;
    mount_get_path(&server, json!({ "backup_path": "/x" })).await;
    let cfg = ClientConfig::new(format!("{}/", server.uri()));
    let service = HttpSettingsService::new(&cfg).unwrap();

    let resp = service.fetch_backup_path().await.expect("fetch");

    assert_eq!(resp.into_path(), "/x");
}

// ── Backup history ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_backup_history_lists_all_records() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/backups/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 12, "file_anchor_id": 3, "file_anchor_name": "thesis.pdf",
                "file_anchor_path": "/home/u/thesis.pdf",
                "backup_path": "/data/backups/3/thesis-1733000100.pdf",
                "backup_time": "2025-11-30T21:35:00+00:00"
            },
            {
                "id": 11, "file_anchor_id": 3, "file_anchor_name": "thesis.pdf",
                "file_anchor_path": "/home/u/thesis.pdf",
                "backup_path": "/data/backups/3/thesis-1733000000.pdf",
                "backup_time": ""
            }
        ])))
        .mount(&server)
        .await;
    let history = BackupHistory::new(service_for(&server));

    // Act
    let records = history.all().await.expect("list");

    // Assert
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, 12);
    assert_eq!(records[0].file_name, "thesis-1733000100.pdf");
    assert_eq!(records[1].backup_time, "");
}

#[tokio::test]
async fn test_backup_history_for_unknown_anchor_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/backups/by-anchor/99"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    let history = BackupHistory::new(service_for(&server));

    let records = history.for_anchor(99).await.expect("list");

    assert!(records.is_empty());
}
