use super::*;
use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;

use crate::client::mock::sample_result;

fn sample_docs() -> (Document, Document) {
    (
        Document::new("A.pdf", b"alpha bytes".to_vec()),
        Document::new("B.pdf", b"beta bytes".to_vec()),
    )
}

async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn client_for(url: &str) -> HttpComparisonClient {
    HttpComparisonClient::new(url, Duration::from_secs(5)).unwrap()
}

/// Stub that checks the multipart request shape before answering, so a
/// malformed outbound request surfaces as a test failure.
async fn checked_compare(mut multipart: Multipart) -> (StatusCode, Json<serde_json::Value>) {
    let mut files = Vec::new();
    let mut weight = None;

    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file1" | "file2" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                files.push((name, file_name, field.bytes().await.unwrap().len()));
            }
            "weight_text" => weight = Some(field.text().await.unwrap()),
            _ => {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": format!("unexpected field {name}")})),
                );
            }
        }
    }

    let shape_ok = files
        == vec![
            ("file1".to_string(), "A.pdf".to_string(), 11),
            ("file2".to_string(), "B.pdf".to_string(), 10),
        ]
        && weight.as_deref() == Some("0.3");
    if !shape_ok {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "unexpected request shape"})),
        );
    }

    (
        StatusCode::OK,
        Json(serde_json::to_value(sample_result("A.pdf", "B.pdf")).unwrap()),
    )
}

#[tokio::test]
async fn success_returns_validated_result() {
    let url = spawn_stub(Router::new().route("/compare", post(checked_compare))).await;
    let (a, b) = sample_docs();

    let result = client_for(&url).compare(&a, &b, 0.3).await.unwrap();
    assert_eq!(result.similarity_index, 0.85);
    assert_eq!(result.report_url, "/reports/A.pdf-vs-B.pdf");
}

#[tokio::test]
async fn remote_error_message_comes_from_body() {
    let url = spawn_stub(Router::new().route(
        "/compare",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "engine overloaded"})),
            )
        }),
    ))
    .await;
    let (a, b) = sample_docs();

    let err = client_for(&url).compare(&a, &b, 0.5).await.unwrap_err();
    assert!(matches!(err, CompareError::Remote { .. }));
    assert_eq!(err.to_string(), "engine overloaded");
}

#[tokio::test]
async fn remote_error_without_body_uses_generic_message() {
    let url = spawn_stub(Router::new().route(
        "/compare",
        post(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    ))
    .await;
    let (a, b) = sample_docs();

    let err = client_for(&url).compare(&a, &b, 0.5).await.unwrap_err();
    assert_eq!(err.to_string(), "Comparison failed");
}

#[tokio::test]
async fn schema_violation_is_a_failure_not_a_success() {
    let url = spawn_stub(Router::new().route(
        "/compare",
        post(|| async {
            let mut body = serde_json::to_value(sample_result("A.pdf", "B.pdf")).unwrap();
            body.as_object_mut().unwrap().remove("similarity_index");
            Json(body)
        }),
    ))
    .await;
    let (a, b) = sample_docs();

    let err = client_for(&url).compare(&a, &b, 0.5).await.unwrap_err();
    match err {
        CompareError::Schema(message) => assert!(message.contains("similarity_index")),
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_engine_is_a_transport_error() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let (a, b) = sample_docs();
    let err = client_for(&format!("http://{addr}"))
        .compare(&a, &b, 0.5)
        .await
        .unwrap_err();
    assert!(matches!(err, CompareError::Transport(_)));
}

#[test]
fn compare_url_tolerates_trailing_slash() {
    let client = HttpComparisonClient::new("http://localhost:5001/", Duration::from_secs(1));
    assert_eq!(client.unwrap().compare_url(), "http://localhost:5001/compare");
}
