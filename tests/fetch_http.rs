// tests/fetch_http.rs
//
// Data fetcher against a real in-process HTTP server standing in for the
// summarization backend.
//
// Covered:
// - 200 with a dataset            -> Success
// - 503 "data not ready"          -> Failure with status + body prefix
// - 200 with malformed JSON       -> Decode failure
// - nothing listening             -> Network failure
// - POST trigger_processing       -> server message

use axum::{
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    routing::{get, post},
    Router,
};
use lean_brief::{DigestSource, FetchError, FetchResult, SummaryClient};

const PATH: &str = "/api/summarize_news";

const DATASET: &str = r#"{
  "Finance & Economy": {
    "landingSummary": "Rates steady; bonds rally.",
    "topics": [
      {
        "name": "Fed holds rates",
        "one_sentence_description": "The Fed left rates unchanged.",
        "summary": "Para one.\n\nPara two.",
        "sources": [{"name": "Reuters"}],
        "urls": ["https://example.com/fed", "https://example.com/fed-2"],
        "importance": 1.4
      }
    ]
  },
  "Politics & Government": { "landingSummary": "Not rendered.", "topics": [] }
}"#;

const NOT_READY: &str =
    r#"{"error": "Data not ready. Please wait for processing to complete or trigger it manually."}"#;

/// Bind on an ephemeral port and return the base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn success_decodes_dataset_and_sends_json_content_type() {
    let app = Router::new().route(
        PATH,
        get(|headers: HeaderMap| async move {
            let ct = headers
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            if ct != "application/json" {
                return (StatusCode::BAD_REQUEST, "missing content-type".to_string());
            }
            (StatusCode::OK, DATASET.to_string())
        }),
    );
    let base = serve(app).await;
    let client = SummaryClient::new(format!("{base}{PATH}"));

    let ds = match client.fetch().await {
        FetchResult::Success(ds) => ds,
        other => panic!("expected success, got {other:?}"),
    };
    assert_eq!(ds.len(), 2);
    let topic = &ds["Finance & Economy"].topics[0];
    assert_eq!(topic.importance, 1);
    assert_eq!(topic.urls.len(), 2);
}

#[tokio::test]
async fn non_2xx_embeds_status_and_body_prefix() {
    let app = Router::new().route(
        PATH,
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, NOT_READY) }),
    );
    let base = serve(app).await;
    let client = SummaryClient::new(format!("{base}{PATH}"));

    let expected_prefix: String = NOT_READY.chars().take(100).collect();
    match client.fetch().await {
        FetchResult::Failure(msg) => {
            assert_eq!(msg, format!("Backend Error: 503 - {expected_prefix}..."));
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_decode_failure() {
    let app = Router::new().route(PATH, get(|| async { "{\"Finance & Economy\": [" }));
    let base = serve(app).await;
    let client = SummaryClient::new(format!("{base}{PATH}"));

    let err = client.fetch_dataset().await.expect_err("malformed json");
    assert!(matches!(err, FetchError::Decode(_)), "got {err:?}");
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn unreachable_backend_is_network_failure() {
    // Grab a free port, then close it so nothing listens there.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = SummaryClient::new(format!("http://{addr}{PATH}")).with_timeout(5);
    let err = client.fetch_dataset().await.expect_err("connection refused");
    assert!(matches!(err, FetchError::Network(_)), "got {err:?}");

    match client.fetch().await {
        FetchResult::Failure(msg) => assert!(!msg.is_empty()),
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn trigger_processing_returns_server_message() {
    let app = Router::new().route(
        "/api/trigger_processing",
        post(|| async {
            (
                StatusCode::ACCEPTED,
                r#"{"message": "News processing pipeline triggered. Data will be updated shortly."}"#,
            )
        }),
    );
    let base = serve(app).await;
    let client = SummaryClient::new(format!("{base}{PATH}"))
        .with_trigger_endpoint(format!("{base}/api/trigger_processing"));

    let msg = client.trigger_processing().await.expect("trigger ok");
    assert_eq!(
        msg,
        "News processing pipeline triggered. Data will be updated shortly."
    );
}

#[tokio::test]
async fn rejected_trigger_is_backend_error() {
    let app = Router::new().route(
        "/api/trigger_processing",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, r#"{"error": "boom"}"#) }),
    );
    let base = serve(app).await;
    let client = SummaryClient::new(format!("{base}{PATH}"))
        .with_trigger_endpoint(format!("{base}/api/trigger_processing"));

    let err = client.trigger_processing().await.expect_err("500");
    assert_eq!(
        err,
        FetchError::Backend {
            status: 500,
            body_preview: r#"{"error": "boom"}"#.to_string()
        }
    );
}
