use httpmock::prelude::*;
use rating_predictor::core::Predictor;
use rating_predictor::domain::model::PredictionSource;
use rating_predictor::{PredictorError, RemotePredictor};
use std::time::Duration;
use tokio_test::{assert_err, assert_ok};

fn predictor_for(server: &MockServer) -> RemotePredictor {
    RemotePredictor::new(server.url("/predict"), Duration::from_secs(5))
}

#[tokio::test]
async fn test_predict_posts_text_and_reads_result() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/predict")
            .json_body(serde_json::json!({"text": "Arrived quickly and works great"}));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "rating": 5,
                "confidence": 93.27,
                "sentiment": "Highly Positive"
            }));
    });

    let result = assert_ok!(
        predictor_for(&server)
            .predict("Arrived quickly and works great")
            .await
    );

    api_mock.assert();
    assert_eq!(result.rating, 5.0);
    assert_eq!(result.confidence, 93.27);
    assert_eq!(result.sentiment, "Highly Positive");
    assert_eq!(result.source, PredictionSource::Remote);
}

#[tokio::test]
async fn test_partial_response_is_normalized() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/predict");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"rating": "4.5", "sentiment": null}));
    });

    let result = assert_ok!(predictor_for(&server).predict("Mostly fine, some issues").await);

    api_mock.assert();
    assert_eq!(result.rating, 4.5);
    assert_eq!(result.confidence, 75.0);
    assert_eq!(result.sentiment, "Neutral");
}

#[tokio::test]
async fn test_server_error_is_reported_as_status() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/predict");
        then.status(500);
    });

    let err = assert_err!(predictor_for(&server).predict("Anything at all here").await);

    api_mock.assert();
    assert!(matches!(err, PredictorError::UnexpectedStatus { status: 500 }));
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_non_json_body_is_a_transport_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/predict");
        then.status(200).body("<html>gateway</html>");
    });

    let err = assert_err!(predictor_for(&server).predict("Anything at all here").await);
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_null_body_is_malformed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/predict");
        then.status(200)
            .header("Content-Type", "application/json")
            .body("null");
    });

    let err = assert_err!(predictor_for(&server).predict("Anything at all here").await);
    assert!(matches!(err, PredictorError::MalformedResponse { .. }));
}

#[tokio::test]
async fn test_slow_service_times_out() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/predict");
        then.status(200)
            .delay(Duration::from_millis(800))
            .json_body(serde_json::json!({"rating": 4}));
    });

    let predictor = RemotePredictor::new(server.url("/predict"), Duration::from_millis(100));
    let err = assert_err!(predictor.predict("Anything at all here").await);

    match err {
        PredictorError::Timeout { after } => assert_eq!(after, Duration::from_millis(100)),
        other => panic!("expected timeout, got {:?}", other),
    }
}

#[tokio::test]
async fn test_health_check_reads_service_root() {
    let server = MockServer::start();
    let health_mock = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).json_body(serde_json::json!({
            "message": "AI Rating Predictor API is running!",
            "status": "healthy",
            "model_loaded": false
        }));
    });

    let health = assert_ok!(predictor_for(&server).health().await);

    health_mock.assert();
    assert_eq!(health.status, "healthy");
    assert!(!health.model_loaded);
}
