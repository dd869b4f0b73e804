// ABOUTME: Router assembly, middleware stack, and the HTTP serve loop
// ABOUTME: Merges per-domain route groups and wires tracing, CORS, limits, and request ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physique Labs

//! HTTP server assembly
//!
//! [`PhysiqueServer::router`] builds the full application router so tests can
//! drive it without binding a socket; [`PhysiqueServer::run`] binds the
//! configured address and serves until the process stops.

use crate::config::ServerConfig;
use crate::resources::ServerResources;
use crate::routes::{AnalyzeRoutes, HealthRoutes, ReportRoutes, SessionRoutes};
use anyhow::{Context, Result};
use axum::Router;
use http::{header::HeaderName, HeaderValue, Method};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// The assembled physique report server
pub struct PhysiqueServer {
    resources: Arc<ServerResources>,
}

impl PhysiqueServer {
    /// Create a server around shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the application router with the full middleware stack
    ///
    /// Layer calls apply inside-out: the last `.layer(...)` runs first on a
    /// request, so the nosniff header and CORS wrap everything, request ids
    /// are assigned before tracing, and the timeout and body limit sit
    /// closest to the handlers.
    #[must_use]
    pub fn router(&self) -> Router {
        let x_request_id = HeaderName::from_static("x-request-id");

        Router::new()
            .merge(HealthRoutes::routes(self.resources.clone()))
            .merge(ReportRoutes::routes())
            .merge(SessionRoutes::routes(self.resources.clone()))
            .merge(AnalyzeRoutes::routes(self.resources.clone()))
            .layer(RequestBodyLimitLayer::new(
                self.resources.config.max_body_bytes,
            ))
            .layer(TimeoutLayer::new(Duration::from_secs(
                self.resources.config.request_timeout_secs,
            )))
            .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid))
            .layer(setup_cors(&self.resources.config))
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("x-content-type-options"),
                HeaderValue::from_static("nosniff"),
            ))
    }

    /// Bind the configured address and serve until shutdown
    ///
    /// # Errors
    ///
    /// Returns an error when the address cannot be bound or the server loop
    /// fails.
    pub async fn run(&self) -> Result<()> {
        let addr = self.resources.config.socket_addr()?;
        let app = self.router();

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        info!("Physique report server listening on {addr}");

        axum::serve(listener, app)
            .await
            .context("HTTP server terminated")?;

        Ok(())
    }
}

/// Configure CORS settings for the HTTP API
///
/// Configures cross-origin requests based on the `CORS_ALLOWED_ORIGINS`
/// setting. Supports both wildcard ("*") for development and specific origin
/// lists for production.
///
/// ```bash
/// # Allow all origins (development)
/// export CORS_ALLOWED_ORIGINS="*"
///
/// # Allow specific origins (production)
/// export CORS_ALLOWED_ORIGINS="https://app.example.com,https://admin.example.com"
/// ```
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    // Parse allowed origins from configuration
    let allow_origin =
        if config.cors_allowed_origins.is_empty() || config.cors_allowed_origins == "*" {
            // Development mode: allow any origin
            AllowOrigin::any()
        } else {
            // Production mode: parse comma-separated origin list
            let origins: Vec<HeaderValue> = config
                .cors_allowed_origins
                .split(',')
                .filter_map(|s| {
                    let trimmed = s.trim();
                    if trimmed.is_empty() {
                        None
                    } else {
                        HeaderValue::from_str(trimmed).ok()
                    }
                })
                .collect();

            if origins.is_empty() {
                // Fallback to any if parsing failed
                AllowOrigin::any()
            } else {
                AllowOrigin::list(origins)
            }
        };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static("x-request-id"),
        ])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
}
