mod support;

use axum::http::StatusCode;
use serde_json::json;

use support::{build_app, send_json};

#[tokio::test]
async fn list_returns_first_page_sorted_descending() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send_json(&app, "GET", "/api/publishers?sortBy=name_desc&searchString=Publisher&pageIndex=1", None).await?;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().cloned().unwrap_or_default();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0]["name"], "Publisher 6");
    assert_eq!(rows[0]["id"], 6);
    Ok(())
}

#[tokio::test]
async fn second_page_holds_the_remaining_publisher() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send_json(&app, "GET", "/api/publishers?sortBy=name_desc&searchString=Publisher&pageIndex=2", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "id": 1, "name": "Publisher 1" }]));
    Ok(())
}

#[tokio::test]
async fn get_by_id_found_and_missing() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send_json(&app, "GET", "/api/publishers/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Publisher 1");

    let (status, body) = send_json(&app, "GET", "/api/publishers/99", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_null());
    Ok(())
}

#[tokio::test]
async fn create_rejects_leading_digit() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send_json(&app, "POST", "/api/publishers", Some(json!({ "name": "123 New Publisher" }))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Name cannot start with a number");

    let (_, page) = send_json(&app, "GET", "/api/publishers?searchString=New", None).await?;
    assert_eq!(page, json!([]));
    Ok(())
}

#[tokio::test]
async fn create_valid_publisher() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send_json(&app, "POST", "/api/publishers", Some(json!({ "name": "New Publisher" }))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "New Publisher");
    assert_eq!(body["id"], 7);
    Ok(())
}

#[tokio::test]
async fn delete_existing_then_missing() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send_json(&app, "DELETE", "/api/publishers/6", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());

    let (status, body) = send_json(&app, "DELETE", "/api/publishers/6", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "The publisher with id: 6 does not exist");
    Ok(())
}

#[tokio::test]
async fn books_with_authors_view() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (_, author) = send_json(&app, "POST", "/api/authors", Some(json!({ "first_name": "Jane", "last_name": "Austen" }))).await?;
    let author_id = author["id"].clone();
    let book = json!({ "title": "Emma", "genre": "Novel", "publisher_id": 2, "author_ids": [author_id] });
    let (status, _) = send_json(&app, "POST", "/api/books", Some(book)).await?;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send_json(&app, "GET", "/api/publishers/2/books-with-authors", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "name": "Publisher 2", "book_authors": [{ "book_name": "Emma", "book_authors": ["Jane Austen"] }] })
    );

    let (status, _) = send_json(&app, "GET", "/api/publishers/42/books-with-authors", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn page_index_past_any_table_is_empty() -> anyhow::Result<()> {
    let app = build_app().await?;
    for uri in ["/api/publishers?pageIndex=18446744073709551615", "/api/books?pageIndex=18446744073709551615"] {
        let (status, body) = send_json(&app, "GET", uri, None).await?;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, json!([]), "{uri}");
    }
    Ok(())
}

#[tokio::test]
async fn malformed_input_is_a_json_bad_request() -> anyhow::Result<()> {
    let app = build_app().await?;
    let cases = [
        ("POST", "/api/publishers", Some(json!({}))),
        ("POST", "/api/publishers", Some(json!({ "name": 5 }))),
        ("POST", "/api/publishers", None),
        ("GET", "/api/publishers/abc", None),
        ("DELETE", "/api/publishers/abc", None),
        ("GET", "/api/publishers?pageIndex=abc", None),
        ("GET", "/api/publishers?pageIndex=-1", None),
    ];
    for (method, uri, body) in cases {
        let (status, body) = send_json(&app, method, uri, body).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method} {uri}");
        assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()), "{method} {uri}: {body}");
    }

    let (_, page) = send_json(&app, "GET", "/api/publishers?pageIndex=2", None).await?;
    assert_eq!(page, json!([{ "id": 6, "name": "Publisher 6" }]));
    Ok(())
}
