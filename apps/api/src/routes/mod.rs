pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Keyword analysis API
        .route("/api/v1/keywords/extract", post(handlers::handle_extract))
        .route(
            "/api/v1/keywords/analysis",
            post(handlers::handle_analysis_scan),
        )
        .route(
            "/api/v1/keywords/dictionaries",
            get(handlers::handle_list_dictionaries),
        )
        .route(
            "/api/v1/keywords/dictionaries/:industry",
            get(handlers::handle_industry_dictionary),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::matching::matcher::KeywordMatcher;

    fn test_app(strict_dictionary_keys: bool) -> Router {
        let config = Config {
            port: 0,
            rust_log: "info".to_string(),
            strict_dictionary_keys,
        };
        build_router(AppState {
            config,
            matcher: Arc::new(KeywordMatcher::default()),
        })
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let response = test_app(false)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_extract_returns_found_keywords() {
        let request = post_json(
            "/api/v1/keywords/extract",
            json!({
                "analysis_text": "Built microservices with python on aws",
                "target_industry": "technology",
                "target_role": "Senior"
            }),
        );
        let response = test_app(false).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let found = body["keywords"]["found"].as_array().unwrap();
        assert!(found.contains(&json!("python")));
        assert!(found.contains(&json!("aws")));
        assert!(found.contains(&json!("microservices")));
        assert_eq!(body["resolved_industry"], "technology");
        assert_eq!(body["resolved_role"], "Senior");
    }

    #[tokio::test]
    async fn test_extract_defaults_industry_and_role() {
        let request = post_json(
            "/api/v1/keywords/extract",
            json!({ "analysis_text": "led a senior team" }),
        );
        let response = test_app(false).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["resolved_industry"], "technology");
        assert_eq!(body["resolved_role"], "Senior");
    }

    #[tokio::test]
    async fn test_extract_unknown_industry_falls_back_when_not_strict() {
        let request = post_json(
            "/api/v1/keywords/extract",
            json!({
                "analysis_text": "deployed docker containers",
                "target_industry": "aerospace"
            }),
        );
        let response = test_app(false).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["resolved_industry"], "technology");
        let found = body["keywords"]["found"].as_array().unwrap();
        assert!(found.contains(&json!("docker")));
    }

    #[tokio::test]
    async fn test_extract_unknown_industry_rejected_when_strict() {
        let request = post_json(
            "/api/v1/keywords/extract",
            json!({
                "analysis_text": "deployed docker containers",
                "target_industry": "aerospace"
            }),
        );
        let response = test_app(true).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_analysis_scan_endpoint() {
        let request = post_json(
            "/api/v1/keywords/analysis",
            json!({ "keyword_analysis": "Mentions Python. Missing kubernetes skills" }),
        );
        let response = test_app(false).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert!(body["found"].as_array().unwrap().contains(&json!("python")));
        assert!(body["missing"]
            .as_array()
            .unwrap()
            .contains(&json!("kubernetes")));
    }

    #[tokio::test]
    async fn test_dictionary_listing() {
        let response = test_app(false)
            .oneshot(
                Request::builder()
                    .uri("/api/v1/keywords/dictionaries")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert!(body["industries"]
            .as_array()
            .unwrap()
            .contains(&json!("finance")));
        assert!(body["roles"].as_array().unwrap().contains(&json!("C-Level")));
        assert_eq!(body["action_verb_count"], 24);
    }

    #[tokio::test]
    async fn test_industry_dictionary_lookup_and_404() {
        let app = test_app(false);
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/keywords/dictionaries/healthcare")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["keywords"]
            .as_array()
            .unwrap()
            .contains(&json!("patient care")));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/keywords/dictionaries/aerospace")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
