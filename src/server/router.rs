use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// Create the API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api", get(handlers::name_range))
        .route("/api/name", get(handlers::random_name))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod test {
    use super::*;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::core::NameStore;
    use crate::query::NameQueryService;

    const SAMPLE: &str = "Nombre,Apellido\nAna,Garcia\nLuis,Martinez\n";

    fn router_for(csv: &str) -> Router {
        let store = NameStore::from_reader(csv.as_bytes(), "test");
        let service = NameQueryService::new(store, StdRng::seed_from_u64(1));
        create_router(AppState::new(service))
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn range_returns_names_in_order() {
        let (status, body) = get_json(router_for(SAMPLE), "/api?from=1&to=2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                {"nombre": "Ana", "apellido": "Garcia"},
                {"nombre": "Luis", "apellido": "Martinez"}
            ])
        );
    }

    #[tokio::test]
    async fn single_element_range() {
        let (status, body) = get_json(router_for(SAMPLE), "/api?from=2&to=2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([{"nombre": "Luis", "apellido": "Martinez"}]));
    }

    #[tokio::test]
    async fn range_past_end_is_a_client_error() {
        let (status, body) = get_json(router_for(SAMPLE), "/api?from=1&to=3").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Rango inválido."}));
    }

    #[tokio::test]
    async fn inverted_and_zero_ranges_are_rejected() {
        for uri in ["/api?from=2&to=1", "/api?from=0&to=1", "/api?from=-4&to=1"] {
            let (status, body) = get_json(router_for(SAMPLE), uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
            assert_eq!(body, json!({"error": "Rango inválido."}));
        }
    }

    #[tokio::test]
    async fn missing_or_malformed_params_are_rejected() {
        for uri in ["/api", "/api?from=1", "/api?from=one&to=2"] {
            let (status, body) = get_json(router_for(SAMPLE), uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
            assert!(body["error"].is_string());
        }
    }

    #[tokio::test]
    async fn random_name_comes_from_the_store() {
        let (status, body) = get_json(router_for(SAMPLE), "/api/name").await;
        assert_eq!(status, StatusCode::OK);
        assert!(
            body == json!({"nombre": "Ana", "apellido": "Garcia"})
                || body == json!({"nombre": "Luis", "apellido": "Martinez"})
        );
    }

    #[tokio::test]
    async fn empty_store_reports_no_names() {
        let (status, body) = get_json(router_for("Nombre,Apellido\n"), "/api/name").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"error": "No hay nombres disponibles."}));

        let (status, _) = get_json(router_for("Nombre,Apellido\n"), "/api?from=1&to=1").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn health_check() {
        let response = router_for(SAMPLE)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
