pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::blueprint::handlers as blueprint;
use crate::onboarding::handlers as onboarding;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Career blueprint intake
        .route(
            "/api/v1/career-blueprint/validate",
            post(blueprint::handle_validate),
        )
        .route(
            "/api/v1/career-blueprint/options",
            get(blueprint::handle_options),
        )
        // Onboarding form defaults
        .route(
            "/api/v1/onboarding/empty-state",
            get(onboarding::handle_empty_state),
        )
        .route(
            "/api/v1/onboarding/empty-state/:section",
            get(onboarding::handle_empty_section),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::blueprint::validator::tests::valid_submission;
    use crate::blueprint::OptionCatalog;

    fn app() -> Router {
        build_router(AppState::new(OptionCatalog::builtin()))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["catalog_version"], OptionCatalog::builtin().version);
    }

    #[tokio::test]
    async fn test_validate_accepts_valid_submission() {
        let (status, body) = send(post_json(
            "/api/v1/career-blueprint/validate",
            &valid_submission(),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
        assert_eq!(body["data"], valid_submission());
    }

    #[tokio::test]
    async fn test_validate_rejects_with_all_errors() {
        let mut submission = valid_submission();
        submission["goals"]["clarity_on_overcoming_obstacle"] = json!(6);
        submission["work_style"]["accountability_methods"] = json!([]);

        let (status, body) =
            send(post_json("/api/v1/career-blueprint/validate", &submission)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["ok"], false);
        assert_eq!(
            body["errors"],
            json!([
                {
                    "path": "goals.clarity_on_overcoming_obstacle",
                    "message": "Clarity on overcoming obstacle must be between 1 and 5",
                    "kind": "range"
                },
                {
                    "path": "work_style.accountability_methods",
                    "message": "At least one accountability method is required",
                    "kind": "required"
                }
            ])
        );
    }

    #[tokio::test]
    async fn test_options_served() {
        let (status, body) = send(get_request("/api/v1/career-blueprint/options")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::to_value(OptionCatalog::builtin()).unwrap());
    }

    #[tokio::test]
    async fn test_empty_state() {
        let (status, body) = send(get_request("/api/v1/onboarding/empty-state")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["resume"]["skills_information"]["top_skills"], json!([]));
        assert_eq!(body["career_blueprint"]["goals"]["no_goals"], "");
    }

    #[tokio::test]
    async fn test_empty_section_state() {
        let (status, body) = send(get_request("/api/v1/onboarding/empty-state/resume")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["job_information"]["current_company"], "");
    }

    #[tokio::test]
    async fn test_unknown_section_is_not_found() {
        let (status, body) = send(get_request("/api/v1/onboarding/empty-state/payroll")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
