// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides liveness and readiness endpoints for monitoring infrastructure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physique Labs

//! Health check routes for service monitoring
//!
//! Liveness is unconditional; readiness checks the profile store and reports
//! whether the vision service is configured. An unconfigured vision service
//! never fails readiness because the analysis endpoint degrades gracefully.

use crate::resources::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use physique_core::errors::AppError;
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/health/ready", get(Self::handle_ready))
            .with_state(resources)
    }

    /// Handle liveness probe
    async fn handle_health() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "healthy",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    /// Handle readiness probe
    async fn handle_ready(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        resources.store.health_check().await?;

        let vision = if resources.vision.is_some() {
            "configured"
        } else {
            "unconfigured"
        };

        Ok((
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "ready",
                "service": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
                "timestamp": chrono::Utc::now().to_rfc3339(),
                "checks": {
                    "store": "ok",
                    "vision": vision
                }
            })),
        )
            .into_response())
    }
}
