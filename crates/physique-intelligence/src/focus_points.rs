// ABOUTME: Per-gender body-part priority ranking and top-2 focus point selection
// ABOUTME: Declared weak parts map onto the ranking; missing slots pad from ranks 0 and 1
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physique Labs

//! Top-2 focus point selection.
//!
//! Each gender carries a fixed priority ranking of the six body parts plus a
//! catalogue blurb per rank. Declared weak parts are taken in rank order
//! (declaration order is irrelevant). With fewer than two declared parts the
//! result pads from fixed slots: an empty declaration yields ranks 0 and 1,
//! and a single declared part keeps rank 1 as its partner even when the
//! declared part itself sits at rank 1, so the pair can repeat.

use physique_core::models::{BodyPart, Gender, SurveyAnswers};
use serde::{Deserialize, Serialize};

/// One focus point: a body part and why it moves the silhouette first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusPoint {
    /// Body part this focus point targets
    pub part: BodyPart,
    /// Why training this part changes the look fastest
    pub point: String,
}

const MALE_RANK: [BodyPart; 6] = [
    BodyPart::Shoulder,
    BodyPart::Back,
    BodyPart::Chest,
    BodyPart::Arm,
    BodyPart::Leg,
    BodyPart::Core,
];

const FEMALE_RANK: [BodyPart; 6] = [
    BodyPart::Leg,
    BodyPart::Back,
    BodyPart::Shoulder,
    BodyPart::Core,
    BodyPart::Chest,
    BodyPart::Arm,
];

// Catalogue blurbs, one per rank position of the matching rank table.
const MALE_POINTS: [&str; 6] = [
    "Raising side-delt proportion makes the upper body read wider.",
    "Growing the lat and scapular line transforms the silhouette.",
    "Raising upper-chest proportion brings back the sense of volume.",
    "Balancing triceps and biceps cleans up the arm line.",
    "Quad-to-hamstring balance decides lower-body proportion.",
    "Ab work locks in the waist line.",
];

const FEMALE_POINTS: [&str; 6] = [
    "Glute and hamstring proportion makes the lower-body silhouette.",
    "Lat and scapular work tidies the whole back line.",
    "Bringing up the side delts flatters the upper-body line.",
    "Core stability tidies the waist and midline.",
    "Upper-chest proportion restores fullness up top.",
    "Triceps and shoulder line make the arms read longer.",
];

const fn rank_table(gender: Gender) -> &'static [BodyPart; 6] {
    match gender {
        Gender::Male => &MALE_RANK,
        Gender::Female => &FEMALE_RANK,
    }
}

fn catalogue_entry(gender: Gender, rank: usize) -> FocusPoint {
    let (parts, points) = match gender {
        Gender::Male => (&MALE_RANK, &MALE_POINTS),
        Gender::Female => (&FEMALE_RANK, &FEMALE_POINTS),
    };
    FocusPoint {
        part: parts[rank],
        point: points[rank].to_owned(),
    }
}

/// Selects the two focus points to lead the report with.
///
/// Always returns exactly two entries in rank order. The second entry falls
/// back to rank 1 whenever fewer than two weak parts were declared, which
/// repeats the first entry when the single declared part is itself rank 1.
#[must_use]
pub fn select_top2_points(gender: Gender, survey: &SurveyAnswers) -> [FocusPoint; 2] {
    let order = rank_table(gender);
    let mut declared = order
        .iter()
        .enumerate()
        .filter(|(_, part)| survey.weak_parts.contains(part))
        .map(|(rank, _)| rank);
    let first = declared.next().unwrap_or(0);
    let second = declared.next().unwrap_or(1);
    [
        catalogue_entry(gender, first),
        catalogue_entry(gender, second),
    ]
}
