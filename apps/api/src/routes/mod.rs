pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::interview::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/generate-remote-question",
            get(handlers::handle_generate_remote_question),
        )
        .route("/get-profile", get(handlers::handle_get_profile))
        .route("/initiate-call", post(handlers::handle_initiate_call))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        fake_state, profile, FakeCalls, FakeDelivery, FakeGenerator, FakeProfiles,
    };
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    const QUESTION: &str = "What backend frameworks have you used?";

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn call_body() -> Value {
        json!({
            "phone_number": "+15550100",
            "job_description": "Backend engineer",
            "job_resume": "5 years Go"
        })
    }

    #[tokio::test]
    async fn test_health() {
        let (state, _) = fake_state(
            FakeProfiles::Fail { status: 500 },
            FakeGenerator::answering(QUESTION),
            FakeDelivery::answering(200, ""),
            FakeCalls::MissingId("sid"),
        );
        let (status, body) = send(build_router(state), get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_initiate_call_then_get_profile() {
        let (state, _) = fake_state(
            FakeProfiles::Fail { status: 500 },
            FakeGenerator::answering(QUESTION),
            FakeDelivery::answering(200, ""),
            FakeCalls::Mint("CA5".to_string()),
        );
        let router = build_router(state);

        let (status, body) = send(router.clone(), post_json("/initiate-call", call_body())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["session_id"], "CA5");
        assert!(body["message"].is_string());

        let (_, body) = send(router, get_request("/get-profile?session_id=CA5")).await;
        assert_eq!(
            body,
            json!({ "job_description": "Backend engineer", "job_resume": "5 years Go" })
        );
    }

    #[tokio::test]
    async fn test_get_profile_unknown_session_is_200_error() {
        let (state, _) = fake_state(
            FakeProfiles::Fail { status: 500 },
            FakeGenerator::answering(QUESTION),
            FakeDelivery::answering(200, ""),
            FakeCalls::MissingId("sid"),
        );
        let (status, body) =
            send(build_router(state), get_request("/get-profile?session_id=nope")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "error": "Session not found" }));
    }

    #[tokio::test]
    async fn test_initiate_call_upstream_failure_is_200_error() {
        let (state, store) = fake_state(
            FakeProfiles::Fail { status: 500 },
            FakeGenerator::answering(QUESTION),
            FakeDelivery::answering(200, ""),
            FakeCalls::Fail {
                status: 500,
                body: "boom".to_string(),
            },
        );
        let (status, body) = send(build_router(state), post_json("/initiate-call", call_body())).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["error"].as_str().unwrap().contains("boom"));
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_initiate_call_missing_sid_is_200_error() {
        let (state, _) = fake_state(
            FakeProfiles::Fail { status: 500 },
            FakeGenerator::answering(QUESTION),
            FakeDelivery::answering(200, ""),
            FakeCalls::MissingId("sid"),
        );
        let (status, body) = send(build_router(state), post_json("/initiate-call", call_body())).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["error"].as_str().unwrap().contains("sid"));
    }

    #[tokio::test]
    async fn test_missing_query_param_is_200_error() {
        let (state, _) = fake_state(
            FakeProfiles::Fail { status: 500 },
            FakeGenerator::answering(QUESTION),
            FakeDelivery::answering(200, ""),
            FakeCalls::MissingId("sid"),
        );
        let (status, body) = send(build_router(state), get_request("/get-profile")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid request"));
    }

    #[tokio::test]
    async fn test_malformed_call_body_is_200_error() {
        let (state, _) = fake_state(
            FakeProfiles::Fail { status: 500 },
            FakeGenerator::answering(QUESTION),
            FakeDelivery::answering(200, ""),
            FakeCalls::Mint("CA5".to_string()),
        );
        let (status, body) = send(
            build_router(state),
            post_json("/initiate-call", json!({ "phone_number": "+15550100" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_generate_remote_question_delivered() {
        let (state, _) = fake_state(
            FakeProfiles::Serve(profile("Backend engineer", "5 years Go")),
            FakeGenerator::answering(QUESTION),
            FakeDelivery::answering(200, "ok"),
            FakeCalls::MissingId("sid"),
        );
        let (status, body) = send(
            build_router(state),
            get_request("/generate-remote-question?session_id=CA1"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "first_question": QUESTION, "laptop_c_status": "delivered" })
        );
    }

    #[tokio::test]
    async fn test_generate_remote_question_incomplete_profile() {
        let (state, _) = fake_state(
            FakeProfiles::Serve(profile("", "X")),
            FakeGenerator::answering(QUESTION),
            FakeDelivery::answering(200, "ok"),
            FakeCalls::MissingId("sid"),
        );
        let (status, body) = send(
            build_router(state),
            get_request("/generate-remote-question?session_id=CA1"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "error": "Incomplete profile data" }));
    }
}
