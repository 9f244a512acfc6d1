//! REST API exposure
//!
//! Consumes the shared [`AppState`] and produces an Axum `Router` with the
//! liveness, health and order routes.

use crate::orders::AppState;
use crate::server::router::build_order_routes;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

/// Plaintext body of `GET /`
pub const LIVENESS_MESSAGE: &str = "order-desk server running. . .";

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router
    ///
    /// # Arguments
    ///
    /// * `state` - Shared handler state holding the order store
    /// * `custom_routes` - Additional custom routes to merge
    pub fn build_router(state: AppState, custom_routes: Vec<Router>) -> Router {
        let mut app = Self::health_routes().merge(build_order_routes(state));

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        app
    }

    /// Build liveness and health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/", get(Self::liveness))
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    async fn liveness() -> &'static str {
        LIVENESS_MESSAGE
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "order-desk"
        }))
    }
}
