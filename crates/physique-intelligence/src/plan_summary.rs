// ABOUTME: Eight-week training route summary with gender-specific weekly milestones
// ABOUTME: Takes the survey for future tailoring but currently branches on gender only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physique Labs

use physique_core::models::{Gender, SurveyAnswers};
use serde::{Deserialize, Serialize};

/// Eight-week route summary shown at the bottom of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Plan title naming the assumed weekly session band
    pub title: String,
    /// Four milestones, one per two-week block
    pub bullets: Vec<String>,
}

const TITLE: &str = "8-week route summary (at 3-4 sessions per week)";

const MALE_BULLETS: [&str; 4] = [
    "Weeks 1-2: learn each area around the big muscle groups (back, chest, lower body)",
    "Weeks 3-4: settle into a split routine, raise loads gradually",
    "Weeks 5-6: add one set for weak parts, hold overall volume",
    "Weeks 7-8: adjust intensity and sets, consolidate what worked",
];

const FEMALE_BULLETS: [&str; 4] = [
    "Weeks 1-2: groove the movements around lower body, glutes, and core",
    "Weeks 3-4: add upper-body proportion work (shoulders, back), fix the routine",
    "Weeks 5-6: reinforce weak parts, tune reps and sets",
    "Weeks 7-8: finish by matching line and proportion",
];

/// Builds the eight-week summary for a gender.
///
/// The title always names the 3-4 sessions/week band; `frequencyPerWeek`
/// and the goal do not change the plan yet.
#[must_use]
pub fn summarize_eight_weeks(gender: Gender, _survey: &SurveyAnswers) -> PlanSummary {
    let bullets = match gender {
        Gender::Male => &MALE_BULLETS,
        Gender::Female => &FEMALE_BULLETS,
    };
    PlanSummary {
        title: TITLE.to_owned(),
        bullets: bullets.iter().map(|&line| line.to_owned()).collect(),
    }
}
