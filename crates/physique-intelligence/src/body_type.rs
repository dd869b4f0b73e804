// ABOUTME: Ordered body-type classification over goal, result preference, and weak parts
// ABOUTME: First matching rule wins; the balance fallback keeps the classifier total
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physique Labs

//! Body-type classification.
//!
//! The rules are not mutually exclusive by data, so evaluation order is the
//! tie-break. A survey that satisfies both the frame and volume conditions
//! classifies as frame because that rule runs first. The final balance arm
//! has no condition, so every valid survey classifies to exactly one type.

use physique_core::models::{BodyPart, Experience, Gender, Goal, ResultPreference, SurveyAnswers};
use serde::{Deserialize, Serialize};

/// Stable identifier for a body-type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BodyTypeKey {
    /// Shoulder/back frame growth changes the silhouette fastest
    Frame,
    /// Muscle responds well to volume and load work
    Volume,
    /// Definition and proportion beat chasing mass
    Line,
    /// Lower body and core already lead; upper body is the gap
    LowerStrong,
    /// Even development, best served by a consistent routine
    Balance,
}

impl BodyTypeKey {
    /// Short display title shown at the top of the report.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Frame => "Frame type",
            Self::Volume => "Volume type",
            Self::Line => "Line type",
            Self::LowerStrong => "Lower-body strong type",
            Self::Balance => "Balance type",
        }
    }

    /// One-sentence description, worded per gender.
    #[must_use]
    pub const fn description(self, gender: Gender) -> &'static str {
        match (self, gender) {
            (Self::Frame, Gender::Male) => {
                "Growing the shoulder and back frame changes your silhouette fastest."
            }
            (Self::Frame, Gender::Female) => {
                "Bringing up the shoulder and back line changes your silhouette quickly."
            }
            (Self::Volume, Gender::Male) => {
                "Muscle comes on relatively easily, so a volume- and load-based route fits well."
            }
            (Self::Volume, Gender::Female) => {
                "Muscle responds well, so a route centered on volume and load suits you."
            }
            (Self::Line, Gender::Male) => {
                "Definition and proportion are your strengths, so a balance-and-separation route beats chasing bulk."
            }
            (Self::Line, Gender::Female) => {
                "Definition and proportion are your strengths, so a balance-and-separation route fits well."
            }
            (Self::LowerStrong, Gender::Male) => {
                "Lower body and core are already strong; rounding out the upper-body frame completes the look."
            }
            (Self::LowerStrong, Gender::Female) => {
                "Lower body and core are already strong; filling in the upper-body line improves balance."
            }
            (Self::Balance, Gender::Male) => {
                "You grow evenly across the board and respond best to a consistent routine."
            }
            (Self::Balance, Gender::Female) => {
                "Everything develops evenly, so a steady routine gives the best response."
            }
        }
    }
}

/// Body-type classification with the display copy rendered for the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyTypeAssessment {
    /// Stable key for clients that brand each type
    pub key: BodyTypeKey,
    /// Short display title
    pub title: String,
    /// One-sentence description worded per gender
    pub description: String,
}

impl BodyTypeAssessment {
    fn new(key: BodyTypeKey, gender: Gender) -> Self {
        Self {
            key,
            title: key.title().to_owned(),
            description: key.description(gender).to_owned(),
        }
    }
}

/// Classifies a survey into exactly one body type.
///
/// Rules run top to bottom and the first match wins:
/// 1. silhouette preference with a declared shoulder or back weakness → frame
/// 2. bulk goal with a volume preference or veteran experience → volume
/// 3. definition preference → line
/// 4. no declared leg weakness, and either a core weakness or at most two
///    declared weak parts → lower-body strong
/// 5. otherwise → balance
#[must_use]
pub fn classify_body_type(gender: Gender, survey: &SurveyAnswers) -> BodyTypeAssessment {
    let weak = &survey.weak_parts;

    if survey.result_preference == ResultPreference::Silhouette
        && (weak.contains(&BodyPart::Shoulder) || weak.contains(&BodyPart::Back))
    {
        return BodyTypeAssessment::new(BodyTypeKey::Frame, gender);
    }
    if survey.goal == Goal::Bulk
        && (survey.result_preference == ResultPreference::Volume
            || survey.experience == Experience::Veteran)
    {
        return BodyTypeAssessment::new(BodyTypeKey::Volume, gender);
    }
    if survey.result_preference == ResultPreference::Definition {
        return BodyTypeAssessment::new(BodyTypeKey::Line, gender);
    }
    if !weak.contains(&BodyPart::Leg) && (weak.contains(&BodyPart::Core) || weak.len() <= 2) {
        return BodyTypeAssessment::new(BodyTypeKey::LowerStrong, gender);
    }
    BodyTypeAssessment::new(BodyTypeKey::Balance, gender)
}
