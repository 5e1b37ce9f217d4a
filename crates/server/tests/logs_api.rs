mod support;

use axum::http::StatusCode;
use chrono::Utc;
use common::utils::db_log::LogRecord;
use sea_orm::ConnectionTrait;
use service::logs_service::LogsService;

use support::{app_for, seeded_db, send_json};

#[tokio::test]
async fn returns_persisted_entries_in_order() -> anyhow::Result<()> {
    let db = seeded_db().await?;
    let logs = LogsService::new(db.clone());
    for msg in ["disk almost full", "publisher rejected"] {
        logs.record(LogRecord { level: "WARN".into(), message: msg.into(), timestamp: Utc::now() }).await?;
    }
    let app = app_for(db);
    let (status, body) = send_json(&app, "GET", "/api/logs/get-all-logs-from-db", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["message"], "disk almost full");
    assert_eq!(body[1]["message"], "publisher rejected");
    assert_eq!(body[1]["level"], "WARN");
    Ok(())
}

#[tokio::test]
async fn storage_failure_is_flattened_to_fixed_message() -> anyhow::Result<()> {
    let db = seeded_db().await?;
    db.execute_unprepared("DROP TABLE logs").await?;
    let app = app_for(db);
    let (status, body) = send_json(&app, "GET", "/api/logs/get-all-logs-from-db", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Could not load logs from the database");
    Ok(())
}

#[tokio::test]
async fn health_and_openapi_are_served() -> anyhow::Result<()> {
    let app = app_for(seeded_db().await?);
    let (status, body) = send_json(&app, "GET", "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, doc) = send_json(&app, "GET", "/api-docs/openapi.json", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/publishers"].is_object());
    Ok(())
}
