// ABOUTME: Photo analysis relay route with graceful degradation
// ABOUTME: Validates the capture payload and collapses every upstream failure to unavailable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physique Labs

//! Photo analysis relay
//!
//! The analysis is strictly display-only, so the route never lets upstream
//! trouble surface as a client error: no API key, connection failures, rate
//! limits, and malformed completions all collapse to an `unavailable`
//! response. Only a bad request payload produces an error status.

use crate::resources::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use physique_core::errors::AppError;
use physique_core::models::{AnalyzeRequest, VisionAnalysis};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, warn};

/// Relay outcome reported to the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyzeStatus {
    /// The upstream returned a valid analysis
    Ok,
    /// The upstream is unconfigured or failed; no analysis available
    Unavailable,
}

/// Analysis relay response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    /// Relay outcome
    pub status: AnalyzeStatus,
    /// The analysis, present only on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<VisionAnalysis>,
}

impl AnalyzeResponse {
    /// Successful relay
    #[must_use]
    pub const fn ok(analysis: VisionAnalysis) -> Self {
        Self {
            status: AnalyzeStatus::Ok,
            analysis: Some(analysis),
        }
    }

    /// Degraded relay
    #[must_use]
    pub const fn unavailable() -> Self {
        Self {
            status: AnalyzeStatus::Unavailable,
            analysis: None,
        }
    }
}

/// Photo analysis routes
pub struct AnalyzeRoutes;

impl AnalyzeRoutes {
    /// Create the analysis relay route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/analyze", post(Self::handle_analyze))
            .with_state(resources)
    }

    /// Handle one analysis relay
    async fn handle_analyze(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<AnalyzeRequest>,
    ) -> Result<Response, AppError> {
        request.validate()?;

        let Some(vision) = resources.vision.as_ref() else {
            warn!("photo analysis requested but no vision API key is configured");
            return Ok((StatusCode::OK, Json(AnalyzeResponse::unavailable())).into_response());
        };

        match vision.analyze(&request).await {
            Ok(analysis) => {
                Ok((StatusCode::OK, Json(AnalyzeResponse::ok(analysis))).into_response())
            }
            Err(error) => {
                error!(
                    code = ?error.code,
                    error = %error,
                    "vision analysis failed, degrading to unavailable"
                );
                Ok((StatusCode::OK, Json(AnalyzeResponse::unavailable())).into_response())
            }
        }
    }
}
