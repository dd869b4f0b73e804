// ABOUTME: Assembles the full deterministic report from the individual rule modules
// ABOUTME: BMI guidance joins the report only when both measurements were supplied
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physique Labs

use crate::body_type::{self, BodyTypeAssessment};
use crate::exercise_catalog::{self, ExerciseRecommendation};
use crate::focus_points::{self, FocusPoint};
use crate::plan_summary::{self, PlanSummary};
use crate::weight_guidance::{self, BmiGuidance};
use physique_core::models::{Gender, SurveyAnswers};
use serde::{Deserialize, Serialize};

/// Complete assessment produced by [`evaluate`]. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Body-type classification with display copy
    pub body_type: BodyTypeAssessment,
    /// The two focus points to lead with, in rank order
    pub top2_points: [FocusPoint; 2],
    /// Fixed per-gender recommendation table, six rows
    pub exercise_recommendations: Vec<ExerciseRecommendation>,
    /// Eight-week route summary
    pub eight_week_summary: PlanSummary,
    /// Weight guidance; `None` when height or weight was not supplied
    pub bmi_guidance: Option<BmiGuidance>,
}

/// Evaluates a survey into a full report.
///
/// Pure and total: any well-typed survey yields a report, and the same
/// input always yields the same output. Only the BMI block is conditional,
/// on both measurements being present and positive.
#[must_use]
pub fn evaluate(gender: Gender, survey: &SurveyAnswers) -> Report {
    let bmi_guidance = survey.bmi_inputs().map(|(height_cm, weight_kg)| {
        weight_guidance::bmi_guidance(gender, survey.goal, height_cm, weight_kg)
    });

    let report = Report {
        body_type: body_type::classify_body_type(gender, survey),
        top2_points: focus_points::select_top2_points(gender, survey),
        exercise_recommendations: exercise_catalog::recommend_exercises(gender),
        eight_week_summary: plan_summary::summarize_eight_weeks(gender, survey),
        bmi_guidance,
    };
    tracing::debug!(
        gender = gender.display_name(),
        body_type = ?report.body_type.key,
        has_bmi = report.bmi_guidance.is_some(),
        "assembled report"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body_type::BodyTypeKey;
    use physique_core::models::{
        BodyPart, Experience, Goal, ResultPreference, TrainingFrequency, TrainingStyle,
    };

    fn full_survey() -> SurveyAnswers {
        SurveyAnswers {
            goal: Goal::Cut,
            experience: Experience::Intermediate,
            frequency_per_week: TrainingFrequency::Mid,
            weak_parts: vec![BodyPart::Shoulder, BodyPart::Core],
            training_style: TrainingStyle::Mixed,
            result_preference: ResultPreference::Silhouette,
            height_cm: Some(175.0),
            weight_kg: Some(90.0),
        }
    }

    #[test]
    fn evaluation_is_deterministic() {
        let answers = full_survey();
        let first = evaluate(Gender::Male, &answers);
        let second = evaluate(Gender::Male, &answers);
        assert_eq!(first, second);
    }

    #[test]
    fn full_survey_produces_every_section() {
        let report = evaluate(Gender::Male, &full_survey());
        assert_eq!(report.body_type.key, BodyTypeKey::Frame);
        assert_eq!(report.exercise_recommendations.len(), 6);
        assert_eq!(report.eight_week_summary.bullets.len(), 4);
        assert!(report.bmi_guidance.is_some());
    }

    #[test]
    fn missing_measurements_drop_only_the_bmi_block() {
        let mut answers = full_survey();
        answers.height_cm = None;
        let report = evaluate(Gender::Female, &answers);
        assert!(report.bmi_guidance.is_none());
        assert_eq!(report.exercise_recommendations.len(), 6);
    }

    #[test]
    fn report_serializes_with_camel_case_sections() {
        let report = evaluate(Gender::Male, &full_survey());
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("bodyType").is_some());
        assert!(json.get("top2Points").is_some());
        assert!(json.get("exerciseRecommendations").is_some());
        assert!(json.get("eightWeekSummary").is_some());
        assert!(json.get("bmiGuidance").is_some());
        assert_eq!(json["top2Points"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn absent_bmi_serializes_as_null() {
        let mut answers = full_survey();
        answers.weight_kg = None;
        let report = evaluate(Gender::Male, &answers);
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["bmiGuidance"].is_null());
    }

    #[test]
    fn report_round_trips_through_json() {
        let report = evaluate(Gender::Female, &full_survey());
        let encoded = serde_json::to_string(&report).unwrap();
        let decoded: Report = serde_json::from_str(&encoded).unwrap();
        assert_eq!(report, decoded);
    }
}
