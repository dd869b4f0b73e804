// ABOUTME: Wire types for the external vision-language analysis boundary
// ABOUTME: Request payload sent by clients and the strict response shape expected back
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physique Labs

use super::{Gender, Goal};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Client request for a visual physique analysis
///
/// Carries everything the vision prompt needs in one shot; nothing here
/// touches the profile store. Height and weight are optional context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// Report audience
    pub gender: Gender,
    /// Training goal, gives the model pacing context
    pub goal: Goal,
    /// Height in centimeters, if volunteered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Weight in kilograms, if volunteered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// The three capture angles as data-URL strings
    pub images: PhotoSet,
}

/// The three capture angles sent for analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoSet {
    /// Upper body, front view
    pub front_upper: String,
    /// Upper body, back view
    pub back_upper: String,
    /// Lower body
    pub lower_body: String,
}

impl AnalyzeRequest {
    /// Reject requests with blank images or non-positive measurements
    ///
    /// # Errors
    ///
    /// Returns a 400-class [`AppError`] naming the offending field.
    pub fn validate(&self) -> AppResult<()> {
        if self.images.front_upper.trim().is_empty() {
            return Err(AppError::missing_field("images.frontUpper"));
        }
        if self.images.back_upper.trim().is_empty() {
            return Err(AppError::missing_field("images.backUpper"));
        }
        if self.images.lower_body.trim().is_empty() {
            return Err(AppError::missing_field("images.lowerBody"));
        }
        if self.height_cm.is_some_and(|h| h <= 0.0) {
            return Err(AppError::invalid_input("heightCm must be positive"));
        }
        if self.weight_kg.is_some_and(|w| w <= 0.0) {
            return Err(AppError::invalid_input("weightKg must be positive"));
        }
        Ok(())
    }
}

/// Structured analysis returned by the vision service
///
/// Display-only: nothing in here ever feeds classification. The shape is
/// validated structurally after the completion is parsed so a model that
/// drifts off contract is caught at the boundary, not in a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisionAnalysis {
    /// One observation per capture angle
    pub visual_summary: VisualSummary,
    /// At least two suggested focus areas with reasons
    pub estimated_focus_points: Vec<FocusPointEstimate>,
    /// Suggested styling direction
    pub style_direction: StyleDirection,
    /// Blanket safety caveat the UI must show
    pub safety_note: String,
}

/// Per-angle visual observations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualSummary {
    /// Upper body, front view
    pub upper_front: String,
    /// Upper body, back view
    pub upper_back: String,
    /// Lower body
    pub lower_body: String,
}

/// A focus area the model suggests working on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusPointEstimate {
    /// Body area
    pub area: String,
    /// Why the model flagged it
    pub why: String,
}

/// Styling direction hint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDirection {
    /// One of the five body-type category names
    pub type_hint: String,
    /// Free-form note accompanying the hint
    pub note: String,
}

impl VisionAnalysis {
    /// Structural checks on a parsed completion
    ///
    /// # Errors
    ///
    /// Returns an external-service [`AppError`] when the model response is
    /// missing observations or suggests fewer than two focus points.
    pub fn validate(&self) -> AppResult<()> {
        if self.visual_summary.upper_front.trim().is_empty()
            || self.visual_summary.upper_back.trim().is_empty()
            || self.visual_summary.lower_body.trim().is_empty()
        {
            return Err(AppError::external_service(
                "vision",
                "analysis is missing per-angle observations",
            ));
        }
        if self.estimated_focus_points.len() < 2 {
            return Err(AppError::external_service(
                "vision",
                format!(
                    "analysis returned {} focus points, need at least 2",
                    self.estimated_focus_points.len()
                ),
            ));
        }
        if self.style_direction.type_hint.trim().is_empty() {
            return Err(AppError::external_service(
                "vision",
                "analysis is missing a style direction hint",
            ));
        }
        Ok(())
    }
}
