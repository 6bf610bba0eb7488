//! Integration tests for the reply drafting HTTP API.
//!
//! Each test spins up an Axum server on a random port and exercises the
//! real REST contract with reqwest.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::time::timeout;

use reply_drafter::api::reply_routes;
use reply_drafter::pipeline::ReplyProcessor;
use reply_drafter::pipeline::responses::generate_response;
use reply_drafter::templates::{Category, TemplateStore};

/// Maximum time any test is allowed to run before we consider it hung.
const TEST_TIMEOUT: Duration = Duration::from_secs(5);

const PRICING: &str =
    "Subject: Pricing\nHi, I am wondering if your product supports X.\nRegards,\nJane Doe";

/// Start an Axum server on a random port, return the port.
async fn start_server() -> u16 {
    let processor = Arc::new(ReplyProcessor::new(
        Arc::new(TemplateStore::builtin()),
        "Your Name",
    ));
    let app = reply_routes(processor);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give the server a moment to start accepting connections.
    tokio::time::sleep(Duration::from_millis(50)).await;

    port
}

async fn post_json(port: u16, path: &str, body: Value) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("http://127.0.0.1:{port}{path}"))
        .json(&body)
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn health_endpoint() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server().await;

        let resp = reqwest::get(format!("http://127.0.0.1:{port}/health"))
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);

        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "reply-drafter");
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn templates_listed_in_priority_order() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server().await;

        let resp = reqwest::get(format!("http://127.0.0.1:{port}/api/templates"))
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);

        let body: Vec<Value> = resp.json().await.unwrap();
        let labels: Vec<&str> = body
            .iter()
            .map(|t| t["category"].as_str().unwrap())
            .collect();
        let expected: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, expected);
        assert!(body[8]["keywords"].as_array().unwrap().is_empty());
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn classify_endpoint() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server().await;

        let resp = post_json(port, "/api/classify", json!({"text": "I have a COMPLAINT"})).await;
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["category"], "Complaint");

        let resp = post_json(port, "/api/classify", json!({"text": ""})).await;
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["category"], "Unknown");
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn reply_endpoint_classifies_and_drafts() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server().await;

        let resp = post_json(port, "/api/reply", json!({"text": PRICING})).await;
        assert_eq!(resp.status(), 200);

        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["category"], "Inquiry");
        assert_eq!(body["forced"], false);
        assert_eq!(body["sender"], "Jane Doe");
        assert_eq!(body["topic"], "Pricing");

        let reply = body["reply"].as_str().unwrap();
        assert!(reply.starts_with("Dear Jane Doe,"));
        assert!(reply.contains("your inquiry about Pricing."));
        assert!(reply.contains(generate_response(PRICING, Category::Inquiry)));
        assert!(reply.ends_with("Your Name"));
        assert!(body["id"].as_str().is_some());
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn reply_endpoint_honours_forced_category() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server().await;

        let resp = post_json(
            port,
            "/api/reply",
            json!({"text": PRICING, "category": "meeting_request"}),
        )
        .await;
        assert_eq!(resp.status(), 200);

        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["category"], "Meeting Request");
        assert_eq!(body["forced"], true);
        assert!(body["reply"]
            .as_str()
            .unwrap()
            .contains("schedule a meeting to discuss Pricing."));
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn reply_endpoint_rejects_unknown_category() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server().await;

        let resp = post_json(
            port,
            "/api/reply",
            json!({"text": PRICING, "category": "Spam"}),
        )
        .await;
        assert_eq!(resp.status(), 400);

        let body: Value = resp.json().await.unwrap();
        assert!(body["error"].as_str().unwrap().contains("Spam"));
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn reply_endpoint_rejects_blank_text() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server().await;

        let resp = post_json(port, "/api/reply", json!({"text": "   \n"})).await;
        assert_eq!(resp.status(), 400);

        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["error"], "Email text is empty");
    })
    .await
    .expect("test timed out");
}
