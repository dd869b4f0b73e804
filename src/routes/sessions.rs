// ABOUTME: Profile-session lifecycle routes covering the full capture flow
// ABOUTME: Create, inspect, fill slots, evaluate the gated report, and start over
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physique Labs

//! Profile-session routes
//!
//! The session flow mirrors the product's capture pages: pick a gender,
//! upload three photos, answer the survey, then read the report. The report
//! endpoint is gated on all slots being filled; everything else is writable
//! in any order and any number of times.

use crate::resources::ServerResources;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use physique_core::errors::AppError;
use physique_core::models::{Gender, PhotoSlot, ProfileRecord, SurveyAnswers};
use physique_intelligence::report;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Response for session creation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    /// The server-issued session id
    pub session_id: Uuid,
}

/// Gender selection payload
#[derive(Debug, Clone, Deserialize)]
struct GenderUpdate {
    gender: Gender,
}

/// Photo upload payload, a data-URL string
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PhotoUpload {
    image_data: String,
}

/// Profile-session routes
pub struct SessionRoutes;

impl SessionRoutes {
    /// Create all profile-session routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/sessions", post(Self::handle_create))
            .route("/api/sessions/:id", get(Self::handle_status))
            .route("/api/sessions/:id", delete(Self::handle_clear))
            .route("/api/sessions/:id/gender", put(Self::handle_set_gender))
            .route(
                "/api/sessions/:id/photos/:slot",
                put(Self::handle_set_photo),
            )
            .route("/api/sessions/:id/survey", put(Self::handle_set_survey))
            .route("/api/sessions/:id/report", get(Self::handle_report))
            .with_state(resources)
    }

    /// Handle session creation
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let session_id = resources.store.create_session().await?;

        Ok((
            StatusCode::CREATED,
            Json(CreateSessionResponse { session_id }),
        )
            .into_response())
    }

    /// Handle the progress summary
    async fn handle_status(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let record = Self::fetch_record(&resources, session_id).await?;

        Ok((StatusCode::OK, Json(record.status())).into_response())
    }

    /// Handle gender selection
    async fn handle_set_gender(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<Uuid>,
        Json(update): Json<GenderUpdate>,
    ) -> Result<Response, AppError> {
        let record = resources.store.set_gender(session_id, update.gender).await?;

        Ok((StatusCode::OK, Json(record.status())).into_response())
    }

    /// Handle a photo upload into one of the three fixed slots
    async fn handle_set_photo(
        State(resources): State<Arc<ServerResources>>,
        Path((session_id, slot)): Path<(Uuid, String)>,
        Json(upload): Json<PhotoUpload>,
    ) -> Result<Response, AppError> {
        let slot = PhotoSlot::from_str_opt(&slot).ok_or_else(|| {
            AppError::invalid_input(format!(
                "unknown photo slot: {slot} (expected front_upper, back_upper, or lower_body)"
            ))
        })?;

        if upload.image_data.trim().is_empty() {
            return Err(AppError::missing_field("imageData"));
        }

        let record = resources
            .store
            .set_photo(session_id, slot, upload.image_data)
            .await?;

        Ok((StatusCode::OK, Json(record.status())).into_response())
    }

    /// Handle the survey submission
    async fn handle_set_survey(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<Uuid>,
        Json(survey): Json<SurveyAnswers>,
    ) -> Result<Response, AppError> {
        survey.validate()?;

        let record = resources.store.set_survey(session_id, survey).await?;

        Ok((StatusCode::OK, Json(record.status())).into_response())
    }

    /// Handle the gated report evaluation
    async fn handle_report(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let record = Self::fetch_record(&resources, session_id).await?;

        if !record.report_ready() {
            return Err(AppError::profile_incomplete(format!(
                "profile is missing: {}",
                Self::missing_slots(&record).join(", ")
            )));
        }

        let (Some(gender), Some(survey)) = (record.gender, record.survey.as_ref()) else {
            return Err(AppError::profile_incomplete(
                "gender and survey must be set before a report",
            ));
        };

        let report = report::evaluate(gender, survey);

        Ok((StatusCode::OK, Json(report)).into_response())
    }

    /// Handle the start-over flow
    async fn handle_clear(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        resources.store.clear(session_id).await?;

        Ok((
            StatusCode::OK,
            Json(serde_json::json!({ "status": "cleared" })),
        )
            .into_response())
    }

    /// Fetch a record or produce the standard not-found error
    async fn fetch_record(
        resources: &Arc<ServerResources>,
        session_id: Uuid,
    ) -> Result<ProfileRecord, AppError> {
        resources
            .store
            .fetch(session_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("profile session {session_id}")))
    }

    /// Names of the slots still empty, for the 409 message
    fn missing_slots(record: &ProfileRecord) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if record.gender.is_none() {
            missing.push("gender");
        }
        for slot in PhotoSlot::ALL {
            if record.photo(slot).is_none() {
                missing.push(slot.as_str());
            }
        }
        if record.survey.is_none() {
            missing.push("survey");
        }
        missing
    }
}
