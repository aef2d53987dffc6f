//! HTTP endpoints serving browser-facing site settings
//!
//! - GET /api/site-config - Public configuration needed by the page (maps key)

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};

use super::config::Config;
use super::map::{PublicSiteConfig, SITE_CONFIG_PATH};

/// Shared state for the site API
#[derive(Clone)]
pub struct SiteState {
    pub config: Arc<Config>,
}

impl SiteState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Create the site API router
pub fn site_router(state: SiteState) -> Router {
    Router::new()
        .route(SITE_CONFIG_PATH, get(get_site_config))
        .with_state(state)
}

/// GET /api/site-config
async fn get_site_config(State(state): State<SiteState>) -> Json<PublicSiteConfig> {
    let public = state.config.public();
    tracing::debug!(maps_key = public.maps_api_key.is_some(), "Serving site config");
    Json(public)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn fetch(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_site_config_returns_key() {
        let router = site_router(SiteState::new(Config::from_values(Some(
            "browser-key".to_string(),
        ))));

        let (status, body) = fetch(router, SITE_CONFIG_PATH).await;

        assert_eq!(status, StatusCode::OK);
        let config: PublicSiteConfig = serde_json::from_slice(&body).unwrap();
        assert_eq!(config.maps_api_key.as_deref(), Some("browser-key"));
    }

    #[tokio::test]
    async fn test_site_config_without_key_serialises_null() {
        let router = site_router(SiteState::new(Config::from_values(None)));

        let (status, body) = fetch(router, SITE_CONFIG_PATH).await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["maps_api_key"].is_null());
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let router = site_router(SiteState::new(Config::from_values(None)));

        let (status, _) = fetch(router, "/api/unknown").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
