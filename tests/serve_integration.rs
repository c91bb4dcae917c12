//! Integration tests against a running recap server.
//!
//! These tests require `recap serve` running locally with real
//! credentials exported. Skip with: cargo test --test serve_integration -- --ignored

const BASE_URL: &str = "http://127.0.0.1:7227";

#[tokio::test]
#[ignore] // Requires a running recap server
async fn test_service_info() {
    let body: serde_json::Value = reqwest::get(BASE_URL)
        .await
        .expect("Failed to reach server")
        .json()
        .await
        .expect("Invalid JSON");

    assert_eq!(body["service"], "recap");
    assert_eq!(body["status"], "running");
}

#[tokio::test]
#[ignore] // Requires a running recap server and a GROQ_API_KEY
async fn test_summarize_round_trip() {
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{BASE_URL}/api/summarize"))
        .json(&serde_json::json!({
            "transcript": "Alice: we ship Friday. Bob: I'll update the changelog.",
            "instruction": "Extract all action items.",
        }))
        .send()
        .await
        .expect("Failed to reach server");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Invalid JSON");
    assert!(!body["summary"].as_str().unwrap_or_default().is_empty());
}
