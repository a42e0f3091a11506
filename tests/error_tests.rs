//! Integration tests for error categorization across the transport and
//! operations layers.

use partner_center::{
    AccessToken, ApiEndpoint, ApiError, HttpError, Partner, PartnerConfig,
    PartnerRelationshipType,
};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn partner_for(server: &MockServer) -> Partner {
    let config = PartnerConfig::builder()
        .access_token(AccessToken::new("test-token").unwrap())
        .endpoint(ApiEndpoint::new(server.uri()).unwrap())
        .build()
        .unwrap();
    Partner::new(config)
}

async fn get_relationships(server: &MockServer) -> Result<usize, ApiError> {
    partner_for(server)
        .relationships()
        .get(PartnerRelationshipType::IsIndirectResellerOf)
        .await
        .map(|collection| collection.len())
}

// ==== HTTP error categorization ====

#[tokio::test]
async fn server_error_is_categorized_and_retryable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/relationships"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "code": 1000,
            "description": "internal failure"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let error = get_relationships(&server).await.unwrap_err();

    match &error {
        ApiError::Http(HttpError::Response(e)) => {
            assert_eq!(e.code, 500);
            assert!(e.message.contains("internal failure"));
        }
        other => panic!("expected response error, got {other:?}"),
    }
    assert!(error.is_retryable());
}

#[tokio::test]
async fn unauthorized_is_its_own_category_and_not_retryable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/relationships"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "token expired"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let error = get_relationships(&server).await.unwrap_err();

    assert!(matches!(
        error,
        ApiError::Http(HttpError::Unauthorized { code: 401, .. })
    ));
    assert!(!error.is_retryable());
}

#[tokio::test]
async fn throttling_is_retryable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/relationships"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({"error": "slow down"})))
        .expect(1)
        .mount(&server)
        .await;

    let error = get_relationships(&server).await.unwrap_err();
    assert!(error.is_retryable());
}

#[tokio::test]
async fn not_found_is_not_retryable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/relationships"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"error": "no such resource"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let error = get_relationships(&server).await.unwrap_err();
    assert!(matches!(error, ApiError::Http(HttpError::Response(ref e)) if e.code == 404));
    assert!(!error.is_retryable());
}

#[tokio::test]
async fn error_reference_carries_the_request_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/relationships"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({"error": "boom"}))
                .insert_header("MS-RequestId", "req-correlate-1"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let error = get_relationships(&server).await.unwrap_err();

    match error {
        ApiError::Http(HttpError::Response(e)) => {
            assert_eq!(e.error_reference.as_deref(), Some("req-correlate-1"));
            assert!(e.message.contains("req-correlate-1"));
        }
        other => panic!("expected response error, got {other:?}"),
    }
}

// ==== Response contract mismatches ====

#[tokio::test]
async fn malformed_body_is_a_parsing_error_not_a_panic() {
    let server = MockServer::start().await;

    // `items` must be an array.
    Mock::given(method("GET"))
        .and(path("/v1/relationships"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": 5})))
        .expect(1)
        .mount(&server)
        .await;

    let error = get_relationships(&server).await.unwrap_err();
    assert!(matches!(error, ApiError::ResponseParsing(_)));
    assert!(!error.is_retryable());
}
