#![allow(dead_code)]
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use migration::MigratorTrait;
use models::publisher;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde_json::Value;
use tower::Service;

use server::{routes, state::AppState};

fn cors() -> tower_http::cors::CorsLayer { tower_http::cors::CorsLayer::very_permissive() }

/// Fresh in-memory database, migrated, holding "Publisher 1".."Publisher 6" with ids 1..6.
pub async fn seeded_db() -> anyhow::Result<DatabaseConnection> {
    let db = models::db::connect_in_memory().await?;
    migration::Migrator::up(&db, None).await?;
    for i in 1..=6 {
        publisher::ActiveModel { id: Set(i), name: Set(format!("Publisher {}", i)) }
            .insert(&db)
            .await?;
    }
    Ok(db)
}

pub fn app_for(db: DatabaseConnection) -> Router {
    routes::build_router(AppState::new(db), cors())
}

pub async fn build_app() -> anyhow::Result<Router> {
    Ok(app_for(seeded_db().await?))
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<Response> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))?,
        None => builder.body(Body::empty())?,
    };
    let resp = app.clone().call(req).await?;
    Ok(resp)
}

/// Status plus the body parsed as JSON (`Value::Null` for an empty body).
pub async fn send_json(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let resp = send(app, method, uri, body).await?;
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await?;
    let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, json))
}
