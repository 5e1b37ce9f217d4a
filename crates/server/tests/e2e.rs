mod support;

use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let app = support::build_app().await?;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_publisher_roundtrip_over_http() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = reqwest::Client::new();

    let res = client.get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = client
        .post(format!("{}/api/publishers", app.base_url))
        .json(&json!({ "name": "Gollancz" }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created: Value = res.json().await?;
    let id = created["id"].as_i64().unwrap_or_default();

    let res = client
        .get(format!("{}/api/publishers?searchString=gollancz", app.base_url))
        .send()
        .await?;
    let found: Value = res.json().await?;
    assert_eq!(found, json!([{ "id": id, "name": "Gollancz" }]));

    let res = client.delete(format!("{}/api/publishers/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let res = client.delete(format!("{}/api/publishers/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    Ok(())
}
