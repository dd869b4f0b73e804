// ABOUTME: Survey answer record and its enumerated answer domains
// ABOUTME: Carries boundary validation so the report engine only sees well-formed input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physique Labs

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Training goal declared in the survey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Build mass
    Bulk,
    /// Reduce body fat
    Cut,
    /// Hold weight while recomposing
    Balance,
}

impl Goal {
    /// Human-readable goal name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Bulk => "bulk",
            Self::Cut => "cut",
            Self::Balance => "balance",
        }
    }
}

/// Self-reported training history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Experience {
    /// 0-6 months of training
    Novice,
    /// 6-24 months of training
    Intermediate,
    /// 2+ years of training
    Veteran,
}

/// Planned sessions per week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingFrequency {
    /// 1-2 sessions per week
    Low,
    /// 3-4 sessions per week
    Mid,
    /// 5+ sessions per week
    High,
}

/// Canonical body regions used across weak-part declarations, focus points,
/// and the exercise tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyPart {
    /// Deltoids
    Shoulder,
    /// Lats and scapular region
    Back,
    /// Pectorals
    Chest,
    /// Biceps and triceps
    Arm,
    /// Quads, hamstrings, and glutes
    Leg,
    /// Abdominals and stabilizers
    Core,
}

impl BodyPart {
    /// Human-readable region name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Shoulder => "shoulders",
            Self::Back => "back",
            Self::Chest => "chest",
            Self::Arm => "arms",
            Self::Leg => "lower body",
            Self::Core => "core",
        }
    }
}

/// Preferred equipment style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingStyle {
    /// Machine-guided training
    Machine,
    /// Barbell and dumbbell work
    #[serde(rename = "freeweight")]
    FreeWeight,
    /// A mix of machines and free weights
    Mixed,
}

/// What the user most wants out of the program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultPreference {
    /// Visible muscle volume
    Volume,
    /// Muscle definition
    Definition,
    /// Overall silhouette change
    Silhouette,
}

/// The validated survey record consumed by the report engine
///
/// `height_cm`/`weight_kg` follow both-or-neither semantics: BMI guidance is
/// produced only when both are present and positive. A lone value is legal
/// input but never enables guidance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyAnswers {
    /// Training goal
    pub goal: Goal,
    /// Training history band
    pub experience: Experience,
    /// Planned weekly session band
    pub frequency_per_week: TrainingFrequency,
    /// Self-reported under-developed regions; order-irrelevant, no duplicates
    #[serde(default)]
    pub weak_parts: Vec<BodyPart>,
    /// Preferred equipment style
    pub training_style: TrainingStyle,
    /// Desired outcome emphasis
    pub result_preference: ResultPreference,
    /// Height in centimeters, if volunteered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Weight in kilograms, if volunteered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
}

impl SurveyAnswers {
    /// Check the contract invariants that serde alone cannot enforce
    ///
    /// Unrecognized enum values and wrong types are already rejected at
    /// deserialization. This covers the rest: duplicate weak-part entries and
    /// non-positive height/weight values are contract violations from the
    /// survey-collection layer and are rejected rather than silently fixed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::invalid_input`] naming the offending field.
    pub fn validate(&self) -> AppResult<()> {
        for (idx, part) in self.weak_parts.iter().enumerate() {
            if self.weak_parts[idx + 1..].contains(part) {
                return Err(AppError::invalid_input(format!(
                    "weakParts contains duplicate entry: {}",
                    part.display_name()
                )));
            }
        }

        if self.height_cm.is_some_and(|h| h <= 0.0) {
            return Err(AppError::invalid_input("heightCm must be positive"));
        }
        if self.weight_kg.is_some_and(|w| w <= 0.0) {
            return Err(AppError::invalid_input("weightKg must be positive"));
        }

        Ok(())
    }

    /// Height/weight pair when BMI guidance is enabled
    ///
    /// Returns `Some` only when both values are present and positive, which
    /// is the sole gate for the optional BMI section of a report.
    #[must_use]
    pub fn bmi_inputs(&self) -> Option<(f64, f64)> {
        match (self.height_cm, self.weight_kg) {
            (Some(height), Some(weight)) if height > 0.0 && weight > 0.0 => {
                Some((height, weight))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn survey() -> SurveyAnswers {
        SurveyAnswers {
            goal: Goal::Balance,
            experience: Experience::Novice,
            frequency_per_week: TrainingFrequency::Mid,
            weak_parts: vec![BodyPart::Back, BodyPart::Core],
            training_style: TrainingStyle::Mixed,
            result_preference: ResultPreference::Definition,
            height_cm: None,
            weight_kg: None,
        }
    }

    #[test]
    fn test_valid_survey_passes() {
        assert!(survey().validate().is_ok());
    }

    #[test]
    fn test_duplicate_weak_parts_rejected() {
        let mut answers = survey();
        answers.weak_parts = vec![BodyPart::Back, BodyPart::Core, BodyPart::Back];
        let error = answers.validate().unwrap_err();
        assert!(error.message.contains("duplicate"));
    }

    #[test]
    fn test_non_positive_height_rejected() {
        let mut answers = survey();
        answers.height_cm = Some(0.0);
        answers.weight_kg = Some(80.0);
        assert!(answers.validate().is_err());
    }

    #[test]
    fn test_lone_weight_is_legal_but_disables_bmi() {
        let mut answers = survey();
        answers.weight_kg = Some(80.0);
        assert!(answers.validate().is_ok());
        assert_eq!(answers.bmi_inputs(), None);
    }

    #[test]
    fn test_bmi_inputs_require_both_positive() {
        let mut answers = survey();
        answers.height_cm = Some(175.0);
        answers.weight_kg = Some(90.0);
        assert_eq!(answers.bmi_inputs(), Some((175.0, 90.0)));
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let json = serde_json::to_value(survey()).unwrap();
        assert!(json.get("frequencyPerWeek").is_some());
        assert!(json.get("resultPreference").is_some());
        assert_eq!(json["weakParts"][0], "back");
    }

    #[test]
    fn test_unknown_enum_value_rejected() {
        let json = r#"{
            "goal": "tone",
            "experience": "novice",
            "frequencyPerWeek": "mid",
            "weakParts": [],
            "trainingStyle": "mixed",
            "resultPreference": "volume"
        }"#;
        assert!(serde_json::from_str::<SurveyAnswers>(json).is_err());
    }

    #[test]
    fn test_freeweight_wire_name() {
        let parsed: TrainingStyle = serde_json::from_str("\"freeweight\"").unwrap();
        assert_eq!(parsed, TrainingStyle::FreeWeight);
    }
}
