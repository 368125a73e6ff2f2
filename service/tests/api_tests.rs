//! End-to-end route tests against a real data directory.
//!
//! Each test writes dataset files into a temp dir, builds the router
//! the same way `main` does, and drives it with `tower::ServiceExt`.

use std::path::Path;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    extract::Extension,
    http::{Request, StatusCode},
    Router,
};
use poliscope_api::{
    http::router,
    store::{DataStore, FsDataStore},
};
use tower::ServiceExt;

const PARTIES: &str = r##"[
    {"id":"p1","name":"Progressive Alliance","color":"#4287f5","supportRate":42,"opposeRate":23,
     "totalVotes":18000,"members":88,"keyPolicies":["Education reform","Green energy"],
     "description":"Center-left coalition focused on social programs."},
    {"id":"p2","name":"National Unity","color":"#f54242","supportRate":38,"opposeRate":29,
     "totalVotes":15000,"members":74,"keyPolicies":["Fiscal discipline"],
     "description":"Center-right party focused on economic growth."}
]"##;

const POLITICIANS: &str = r##"[
    {"id":"x1","name":"Aiko Tanaka","position":"Member of the House","age":52,
     "party":{"id":"p1","name":"Progressive Alliance","color":"#4287f5","supportRate":42,"opposeRate":23,
              "totalVotes":18000,"members":88,"keyPolicies":["Education reform","Green energy"],
              "description":"Center-left coalition focused on social programs."},
     "supportRate":61,"opposeRate":22,"totalVotes":5400,"activity":77,
     "image":"https://example.com/aiko.png","trending":"up",
     "recentActivity":"Proposed an education funding bill."},
    {"id":"x2","name":"Jiro Sato","position":"Senator","age":60,
     "party":{"id":"p2","name":"National Unity","color":"#f54242","supportRate":38,"opposeRate":29,
              "totalVotes":15000,"members":74,"keyPolicies":["Fiscal discipline"],
              "description":"Center-right party focused on economic growth."},
     "supportRate":48,"opposeRate":35,"totalVotes":4100,"activity":52,
     "image":"https://example.com/jiro.png","trending":"down",
     "recentActivity":"Held a town hall on tax policy."},
    {"id":"x3","name":"Hana Mori","position":"Member of the House","age":41,
     "party":{"id":"p1","name":"Progressive Alliance","color":"#4287f5","supportRate":42,"opposeRate":23,
              "totalVotes":18000,"members":88,"keyPolicies":["Education reform","Green energy"],
              "description":"Center-left coalition focused on social programs."},
     "supportRate":70,"opposeRate":12,"totalVotes":3200,"activity":91,
     "image":"https://example.com/hana.png","trending":"up",
     "recentActivity":"Introduced a renewable energy amendment."}
]"##;

const COMMENTS: &str = r#"{"comments":[
    {"id":"c1","type":"support","text":"Strong legislative record.","user":"taro88","likes":14,
     "date":"3 days ago","isParentComment":true,"politicianId":"x1"},
    {"id":"c2","type":"oppose","text":"I disagree with the funding plan.","user":"hana_k","likes":3,
     "date":"2 days ago","isParentComment":false,"politicianId":"x1",
     "parentId":"c1","replyToId":"c1","replyToUser":"taro88"},
    {"id":"c3","type":"support","text":"Promising energy policy.","user":"midori","likes":8,
     "date":"1 day ago","isParentComment":true,"politicianId":"x3"}
]}"#;

fn write_datasets(dir: &Path) {
    std::fs::write(dir.join("parties.json"), PARTIES).expect("write parties");
    std::fs::write(dir.join("politicians.json"), POLITICIANS).expect("write politicians");
    std::fs::write(dir.join("comments.json"), COMMENTS).expect("write comments");
}

fn app(dir: &Path) -> Router {
    let store: Arc<dyn DataStore> = Arc::new(FsDataStore::new(dir));
    router().layer(Extension(store))
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request builder")
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body bytes");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn health_and_welcome_routes_respond() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_datasets(dir.path());
    let app = app(dir.path());

    let health = app
        .clone()
        .oneshot(get_request("/health"))
        .await
        .expect("response");
    assert_eq!(health.status(), StatusCode::OK);

    let root = app.oneshot(get_request("/")).await.expect("response");
    assert_eq!(root.status(), StatusCode::OK);
}

#[tokio::test]
async fn list_politicians_preserves_file_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_datasets(dir.path());

    let response = app(dir.path())
        .oneshot(get_request("/politicians"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = body_json(response).await;
    let ids: Vec<&str> = payload["politicians"]
        .as_array()
        .expect("politicians array")
        .iter()
        .map(|p| p["id"].as_str().expect("id"))
        .collect();
    assert_eq!(ids, ["x1", "x2", "x3"]);
}

#[tokio::test]
async fn get_politician_by_id_round_trips_wire_fields() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_datasets(dir.path());

    let response = app(dir.path())
        .oneshot(get_request("/politicians/x2"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = body_json(response).await;
    assert_eq!(payload["name"], "Jiro Sato");
    assert_eq!(payload["supportRate"], 48);
    assert_eq!(payload["recentActivity"], "Held a town hall on tax policy.");
    assert_eq!(payload["party"]["id"], "p2");
}

#[tokio::test]
async fn get_politician_unknown_id_is_404() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_datasets(dir.path());

    let response = app(dir.path())
        .oneshot(get_request("/politicians/nonexistent"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let payload = body_json(response).await;
    assert_eq!(payload["error"], "Politician not found");
}

#[tokio::test]
async fn padded_politician_id_does_not_resolve() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_datasets(dir.path());

    // " x1" is a different identifier from "x1"; no trimming happens.
    let response = app(dir.path())
        .oneshot(get_request("/politicians/%20x1"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let payload = body_json(response).await;
    assert_eq!(payload["error"], "Politician not found");
}

#[tokio::test]
async fn duplicate_politician_id_first_occurrence_wins_over_the_wire() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_datasets(dir.path());
    // Two records share the id "dup"; the file's first one must win.
    let duplicated = POLITICIANS
        .replace("\"id\":\"x1\"", "\"id\":\"dup\"")
        .replace("\"id\":\"x3\"", "\"id\":\"dup\"");
    std::fs::write(dir.path().join("politicians.json"), duplicated).expect("write politicians");

    let response = app(dir.path())
        .oneshot(get_request("/politicians/dup"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = body_json(response).await;
    assert_eq!(payload["name"], "Aiko Tanaka");
}

#[tokio::test]
async fn list_parties_returns_wrapped_collection() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_datasets(dir.path());

    let response = app(dir.path())
        .oneshot(get_request("/parties"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = body_json(response).await;
    assert_eq!(payload["parties"].as_array().expect("array").len(), 2);
}

#[tokio::test]
async fn party_with_members_joins_in_file_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_datasets(dir.path());

    let response = app(dir.path())
        .oneshot(get_request("/parties/p1"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = body_json(response).await;
    assert_eq!(payload["party"]["name"], "Progressive Alliance");
    let member_ids: Vec<&str> = payload["members"]
        .as_array()
        .expect("members array")
        .iter()
        .map(|m| m["id"].as_str().expect("id"))
        .collect();
    assert_eq!(member_ids, ["x1", "x3"]);
}

#[tokio::test]
async fn party_with_no_members_is_200_with_empty_list() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_datasets(dir.path());
    std::fs::write(dir.path().join("politicians.json"), "[]").expect("write politicians");

    let response = app(dir.path())
        .oneshot(get_request("/parties/p1"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = body_json(response).await;
    assert!(payload["members"].as_array().expect("array").is_empty());
}

#[tokio::test]
async fn unknown_party_is_404() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_datasets(dir.path());

    let response = app(dir.path())
        .oneshot(get_request("/parties/p99"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let payload = body_json(response).await;
    assert_eq!(payload["error"], "Party not found");
}

#[tokio::test]
async fn comments_come_back_as_stored() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_datasets(dir.path());

    let response = app(dir.path())
        .oneshot(get_request("/comments"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = body_json(response).await;
    let comments = payload["comments"].as_array().expect("comments array");
    assert_eq!(comments.len(), 3);
    assert_eq!(comments[1]["parentId"], "c1");
    // Parent comments serialize without reply-linkage fields
    assert!(comments[0].get("parentId").is_none());
}

#[tokio::test]
async fn missing_dataset_file_is_500_without_path_leak() {
    let dir = tempfile::tempdir().expect("tempdir");
    // No files written at all

    let response = app(dir.path())
        .oneshot(get_request("/politicians"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body bytes");
    let body = String::from_utf8(bytes.to_vec()).expect("utf8");
    assert!(body.contains("Failed to load politician data"));
    assert!(!body.contains("politicians.json"));
    assert!(!body.contains(dir.path().to_str().expect("utf8 path")));
}

#[tokio::test]
async fn truncated_dataset_is_500_without_parse_detail() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_datasets(dir.path());
    std::fs::write(dir.path().join("comments.json"), "{\"comments\": [").expect("write comments");

    let response = app(dir.path())
        .oneshot(get_request("/comments"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body bytes");
    let body = String::from_utf8(bytes.to_vec()).expect("utf8");
    assert!(body.contains("Failed to parse comment data"));
    assert!(!body.contains("EOF"));
    assert!(!body.contains("column"));
}

#[tokio::test]
async fn repeated_requests_return_byte_identical_payloads() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_datasets(dir.path());
    let app = app(dir.path());

    let first = app
        .clone()
        .oneshot(get_request("/parties/p1"))
        .await
        .expect("response");
    let second = app
        .oneshot(get_request("/parties/p1"))
        .await
        .expect("response");

    let a = to_bytes(first.into_body(), 1024 * 1024).await.expect("body");
    let b = to_bytes(second.into_body(), 1024 * 1024)
        .await
        .expect("body");
    assert_eq!(a, b);
}
