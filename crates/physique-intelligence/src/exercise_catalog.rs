// ABOUTME: Fixed per-gender exercise recommendation tables covering all six body parts
// ABOUTME: Pure lookup keyed on gender only; survey answers never change the rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physique Labs

//! Exercise recommendations.
//!
//! Two fixed tables, one per gender, each listing three exercises and a
//! rationale for every body part. The presentation order differs by gender
//! (men lead with shoulders, women with the lower body) and never depends on
//! the survey, so the same gender always gets an identical table.

use physique_core::models::{BodyPart, Gender};
use serde::{Deserialize, Serialize};

/// Recommended exercises for one body part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseRecommendation {
    /// Body part the row targets
    pub part: BodyPart,
    /// Three exercise names, lead movement first
    pub exercises: Vec<String>,
    /// Why this row earns a slot in the route
    pub reason: String,
}

struct CatalogRow {
    part: BodyPart,
    exercises: [&'static str; 3],
    reason: &'static str,
}

const MALE_CATALOG: [CatalogRow; 6] = [
    CatalogRow {
        part: BodyPart::Shoulder,
        exercises: ["Overhead Press", "Lateral Raise", "Face Pull"],
        reason: "Builds upper-body width and balance.",
    },
    CatalogRow {
        part: BodyPart::Back,
        exercises: ["Lat Pulldown", "Barbell Row", "Pull-Up"],
        reason: "Grows the lat and scapular line that shapes the silhouette.",
    },
    CatalogRow {
        part: BodyPart::Chest,
        exercises: ["Bench Press", "Incline Dumbbell Press", "Cable Fly"],
        reason: "Adds chest thickness and upper-torso proportion.",
    },
    CatalogRow {
        part: BodyPart::Arm,
        exercises: ["Triceps Pushdown", "Barbell Curl", "Hammer Curl"],
        reason: "Thickens and cleans up the arm line.",
    },
    CatalogRow {
        part: BodyPart::Leg,
        exercises: ["Squat", "Romanian Deadlift", "Leg Press"],
        reason: "Develops lower-body proportion and core stability.",
    },
    CatalogRow {
        part: BodyPart::Core,
        exercises: ["Plank", "Dead Bug", "Pallof Press"],
        reason: "Supports posture and lower-back stability.",
    },
];

const FEMALE_CATALOG: [CatalogRow; 6] = [
    CatalogRow {
        part: BodyPart::Leg,
        exercises: ["Hip Thrust", "Squat", "Romanian Deadlift"],
        reason: "Shapes the lower-body silhouette through glute and hamstring proportion.",
    },
    CatalogRow {
        part: BodyPart::Shoulder,
        exercises: ["Lateral Raise", "Overhead Press", "Rear Delt Fly"],
        reason: "Lifts the upper-body line to balance proportions.",
    },
    CatalogRow {
        part: BodyPart::Back,
        exercises: ["Lat Pulldown", "Cable Row", "Pull-Up"],
        reason: "Improves the back line and posture.",
    },
    CatalogRow {
        part: BodyPart::Core,
        exercises: ["Dead Bug", "Plank", "Bird Dog"],
        reason: "Aids core stability and protects the lower back.",
    },
    CatalogRow {
        part: BodyPart::Chest,
        exercises: ["Push-Up", "Dumbbell Press", "Cable Fly"],
        reason: "Helps chest proportion and the upper line.",
    },
    CatalogRow {
        part: BodyPart::Arm,
        exercises: ["Triceps Extension", "Dumbbell Curl", "Reverse Curl"],
        reason: "Cleans up the arm line.",
    },
];

/// Full recommendation table for a gender, in presentation order.
#[must_use]
pub fn recommend_exercises(gender: Gender) -> Vec<ExerciseRecommendation> {
    let rows: &[CatalogRow; 6] = match gender {
        Gender::Male => &MALE_CATALOG,
        Gender::Female => &FEMALE_CATALOG,
    };
    rows.iter()
        .map(|row| ExerciseRecommendation {
            part: row.part,
            exercises: row.exercises.iter().map(|&name| name.to_owned()).collect(),
            reason: row.reason.to_owned(),
        })
        .collect()
}
