// ABOUTME: Stateless one-shot report evaluation route
// ABOUTME: Validates the survey and runs the deterministic report engine in one request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physique Labs

//! One-shot report evaluation
//!
//! Skips the session flow entirely: clients that already hold the gender and
//! survey answers post them here and get the full report back. Nothing is
//! stored.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use physique_core::errors::AppError;
use physique_core::models::{Gender, SurveyAnswers};
use physique_intelligence::report;
use serde::Deserialize;

/// One-shot report request payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    /// Report audience
    pub gender: Gender,
    /// Survey answers to evaluate
    pub survey: SurveyAnswers,
}

/// One-shot report routes
pub struct ReportRoutes;

impl ReportRoutes {
    /// Create the report evaluation route
    pub fn routes() -> Router {
        Router::new().route("/api/report", post(Self::handle_evaluate))
    }

    /// Handle stateless report evaluation
    async fn handle_evaluate(Json(request): Json<ReportRequest>) -> Result<Response, AppError> {
        request.survey.validate()?;

        let report = report::evaluate(request.gender, &request.survey);

        Ok((StatusCode::OK, Json(report)).into_response())
    }
}
