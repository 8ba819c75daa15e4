use httpmock::prelude::*;
use rating_predictor::core::orchestrator::FALLBACK_NOTICE;
use rating_predictor::core::view::ToastKind;
use rating_predictor::domain::model::PredictionSource;
use rating_predictor::domain::ports::ScriptedSource;
use rating_predictor::{Completion, Orchestrator, PresentationState, RemotePredictor};
use std::time::Duration;

fn orchestrator_for(endpoint: String) -> Orchestrator<RemotePredictor, ScriptedSource> {
    let predictor = RemotePredictor::new(endpoint, Duration::from_secs(2));
    // confidence draw, then a perturbation draw that leaves the rating alone
    Orchestrator::new(predictor, ScriptedSource::new(vec![0.5, 0.5]))
}

#[tokio::test]
async fn test_remote_result_drives_modal() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/predict")
            .json_body(serde_json::json!({"text": "Solid build, fair price"}));
        then.status(200).json_body(serde_json::json!({
            "rating": 3,
            "confidence": 61.2,
            "sentiment": "Neutral"
        }));
    });

    let mut orch = orchestrator_for(server.url("/predict"));
    orch.set_input("   Solid build, fair price   ");
    let completion = orch.predict().await.unwrap();

    api_mock.assert();
    assert!(matches!(completion, Completion::Displayed(ref r) if r.source == PredictionSource::Remote));
    assert_eq!(orch.state(), PresentationState::Displaying);
    assert!(orch.view().toast.is_none());

    let modal = orch.view().modal.as_ref().unwrap();
    assert_eq!(modal.badge_style().icon, "fas fa-meh");
    let settled = modal.frame_at(modal.schedule.duration());
    assert_eq!(settled.filled_stars(), 3);
    assert_eq!(settled.rating_text, "3");
    assert_eq!(settled.confidence_text, "61%");
}

#[tokio::test]
async fn test_backend_failure_shows_demo_result() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/predict");
        then.status(503);
    });

    let mut orch = orchestrator_for(server.url("/predict"));
    orch.set_input("This product is absolutely great and amazing, best purchase ever");
    let completion = orch.predict().await.unwrap();

    api_mock.assert();
    let result = match completion {
        Completion::Displayed(result) => result,
        other => panic!("expected a displayed result, got {:?}", other),
    };
    assert_eq!(result.source, PredictionSource::Heuristic);
    assert_eq!(result.rating, 5.0);
    assert_eq!(result.sentiment, "Highly Positive");
    assert_eq!(result.confidence, 93.0);

    let toast = orch.view().toast.as_ref().unwrap();
    assert_eq!(toast.kind, ToastKind::Fallback);
    assert_eq!(toast.message, FALLBACK_NOTICE);
    assert!(!orch.view().button.busy);
}

#[tokio::test]
async fn test_unreachable_backend_falls_back() {
    // nothing listens on the discard port
    let mut orch = orchestrator_for("http://127.0.0.1:9/predict".to_string());
    orch.set_input("Terrible awful waste of money, worst purchase");

    let completion = orch.predict().await.unwrap();

    match completion {
        Completion::Displayed(result) => {
            assert_eq!(result.source, PredictionSource::Heuristic);
            assert_eq!(result.rating, 2.0);
            assert_eq!(result.sentiment, "Negative");
            assert!(result.confidence >= 70.0 && result.confidence < 85.0);
        }
        other => panic!("expected a displayed result, got {:?}", other),
    }
    assert_eq!(orch.view().modal.as_ref().unwrap().badge_style().border_color, "#ef4444");
}

#[tokio::test]
async fn test_short_feedback_never_reaches_backend() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/predict");
        then.status(200).json_body(serde_json::json!({"rating": 4}));
    });

    let mut orch = orchestrator_for(server.url("/predict"));
    orch.set_input("short");
    let err = orch.predict().await.unwrap_err();

    assert!(err.is_validation());
    api_mock.assert_hits(0);
    assert_eq!(orch.state(), PresentationState::Idle);
    assert_eq!(orch.view().toast.as_ref().unwrap().kind, ToastKind::Validation);
}
