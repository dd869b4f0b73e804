// ABOUTME: BMI-derived target weight window and pacing guidance per gender and goal
// ABOUTME: Stores unrounded values; only the comparison sentence rounds to one decimal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physique Labs

//! Weight guidance.
//!
//! Converts the (gender, goal) BMI band from [`crate::physiology`] into a
//! target weight window for the given height, states where the current
//! weight sits relative to that window, and attaches the recommended weekly
//! pacing. Numeric fields keep full precision; rounding happens only when
//! the difference is rendered into the comparison sentence.

use crate::physiology;
use physique_core::models::{Gender, Goal};
use serde::{Deserialize, Serialize};

/// BMI-derived weight guidance block of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BmiGuidance {
    /// Lower bound of the target weight window (kg, unrounded)
    pub target_weight_min_kg: f64,
    /// Upper bound of the target weight window (kg, unrounded)
    pub target_weight_max_kg: f64,
    /// Current BMI (kg/m², unrounded)
    pub current_bmi: f64,
    /// Where the current weight sits relative to the window
    pub current_vs_target_text: String,
    /// Recommended weekly weight-change pacing for the goal
    pub change_rate_text: String,
    /// Reference-range disclaimer, always attached
    pub disclaimer: String,
}

/// Computes weight guidance for positive height and weight values.
///
/// Callers gate on both measurements being present and positive; see
/// `SurveyAnswers::bmi_inputs`.
#[must_use]
pub fn bmi_guidance(gender: Gender, goal: Goal, height_cm: f64, weight_kg: f64) -> BmiGuidance {
    let band = physiology::bmi_band(gender, goal);
    let height_m = height_cm / 100.0;
    let height_sq = height_m * height_m;

    let target_weight_min_kg = band.min * height_sq;
    let target_weight_max_kg = band.max * height_sq;
    let current_bmi = weight_kg / height_sq;

    let current_vs_target_text = if weight_kg < target_weight_min_kg {
        let diff = target_weight_min_kg - weight_kg;
        format!("below target range by {diff:.1} kg")
    } else if weight_kg > target_weight_max_kg {
        let diff = weight_kg - target_weight_max_kg;
        format!("above target range by {diff:.1} kg")
    } else {
        "within target range".to_owned()
    };

    BmiGuidance {
        target_weight_min_kg,
        target_weight_max_kg,
        current_bmi,
        current_vs_target_text,
        change_rate_text: physiology::weekly_change_text(gender, goal).to_owned(),
        disclaimer: physiology::BMI_DISCLAIMER.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn male_cut_above_range_reports_the_excess() {
        let guidance = bmi_guidance(Gender::Male, Goal::Cut, 175.0, 90.0);
        assert!((guidance.target_weight_min_kg - 62.781_25).abs() < 1e-9);
        assert!((guidance.target_weight_max_kg - 73.5).abs() < 1e-9);
        assert!((guidance.current_bmi - 29.387_755_102_040_817).abs() < 1e-9);
        assert_eq!(guidance.current_vs_target_text, "above target range by 16.5 kg");
        assert_eq!(guidance.change_rate_text, "-0.25 to -0.75 kg/week");
    }

    #[test]
    fn weight_inside_the_window_reads_within_range() {
        // 180 cm at 75 kg sits inside the male balance band of 21.5-25.5.
        let guidance = bmi_guidance(Gender::Male, Goal::Balance, 180.0, 75.0);
        assert_eq!(guidance.current_vs_target_text, "within target range");
    }

    #[test]
    fn weight_below_the_window_reports_the_shortfall() {
        // 160 cm at 45 kg: the female cut band floor is 19.0 * 2.56 = 48.64.
        let guidance = bmi_guidance(Gender::Female, Goal::Cut, 160.0, 45.0);
        assert_eq!(guidance.current_vs_target_text, "below target range by 3.6 kg");
    }

    #[test]
    fn window_bounds_keep_full_precision() {
        let guidance = bmi_guidance(Gender::Male, Goal::Cut, 175.0, 90.0);
        // Not rounded to 62.8; the raw product of band and height squared.
        assert!((guidance.target_weight_min_kg - 62.8).abs() > 1e-3);
    }

    #[test]
    fn boundary_weight_counts_as_within_range() {
        let guidance = bmi_guidance(Gender::Male, Goal::Cut, 175.0, 73.5);
        assert_eq!(guidance.current_vs_target_text, "within target range");
    }

    #[test]
    fn disclaimer_is_always_attached() {
        let guidance = bmi_guidance(Gender::Female, Goal::Bulk, 165.0, 55.0);
        assert_eq!(guidance.disclaimer, physiology::BMI_DISCLAIMER);
    }

    #[test]
    fn guidance_serializes_in_camel_case() {
        let guidance = bmi_guidance(Gender::Female, Goal::Balance, 165.0, 58.0);
        let json = serde_json::to_value(&guidance).unwrap();
        assert!(json.get("targetWeightMinKg").is_some());
        assert!(json.get("targetWeightMaxKg").is_some());
        assert!(json.get("currentBmi").is_some());
        assert!(json.get("currentVsTargetText").is_some());
        assert!(json.get("changeRateText").is_some());
    }
}
