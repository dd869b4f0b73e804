// ABOUTME: Integration tests for the deterministic report engine
// ABOUTME: Tests classification precedence, focus selection, and the guidance math
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physique Labs

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use physique_core::models::{
    BodyPart, Experience, Gender, Goal, ResultPreference, SurveyAnswers, TrainingFrequency,
    TrainingStyle,
};
use physique_intelligence::body_type::{classify_body_type, BodyTypeKey};
use physique_intelligence::focus_points::select_top2_points;
use physique_intelligence::plan_summary::summarize_eight_weeks;
use physique_intelligence::report;

fn survey(
    goal: Goal,
    experience: Experience,
    weak_parts: &[BodyPart],
    result_preference: ResultPreference,
) -> SurveyAnswers {
    SurveyAnswers {
        goal,
        experience,
        frequency_per_week: TrainingFrequency::Mid,
        weak_parts: weak_parts.to_vec(),
        training_style: TrainingStyle::Mixed,
        result_preference,
        height_cm: None,
        weight_kg: None,
    }
}

// ============================================================================
// Full-Report Tests
// ============================================================================

#[test]
fn test_evaluation_is_deterministic() {
    let mut answers = survey(
        Goal::Cut,
        Experience::Veteran,
        &[BodyPart::Back, BodyPart::Leg],
        ResultPreference::Definition,
    );
    answers.height_cm = Some(181.5);
    answers.weight_kg = Some(88.2);

    let first = report::evaluate(Gender::Male, &answers);
    let second = report::evaluate(Gender::Male, &answers);

    assert_eq!(first, second);
}

#[test]
fn test_guidance_vector_male_cut() {
    let mut answers = survey(
        Goal::Cut,
        Experience::Intermediate,
        &[],
        ResultPreference::Definition,
    );
    answers.height_cm = Some(175.0);
    answers.weight_kg = Some(90.0);

    let result = report::evaluate(Gender::Male, &answers);
    let guidance = result.bmi_guidance.expect("guidance block missing");

    assert!((guidance.target_weight_min_kg - 62.781_25).abs() < 1e-9);
    assert!((guidance.target_weight_max_kg - 73.5).abs() < 1e-9);
    assert!((guidance.current_bmi - 29.387_755_102_040_817).abs() < 1e-9);
    assert_eq!(
        guidance.current_vs_target_text,
        "above target range by 16.5 kg"
    );
    assert_eq!(guidance.change_rate_text, "-0.25 to -0.75 kg/week");
    assert!(!guidance.disclaimer.is_empty());
}

#[test]
fn test_guidance_pacing_differs_by_gender() {
    let mut answers = survey(
        Goal::Bulk,
        Experience::Novice,
        &[],
        ResultPreference::Volume,
    );
    answers.height_cm = Some(165.0);
    answers.weight_kg = Some(58.0);

    let male = report::evaluate(Gender::Male, &answers)
        .bmi_guidance
        .unwrap();
    let female = report::evaluate(Gender::Female, &answers)
        .bmi_guidance
        .unwrap();

    assert_eq!(male.change_rate_text, "+0.25 to +0.5 kg/week");
    assert_eq!(female.change_rate_text, "+0.1 to +0.3 kg/week");
}

#[test]
fn test_report_without_measurements_has_no_guidance() {
    let answers = survey(
        Goal::Balance,
        Experience::Novice,
        &[],
        ResultPreference::Silhouette,
    );

    let result = report::evaluate(Gender::Female, &answers);
    assert!(result.bmi_guidance.is_none());
}

// ============================================================================
// Classification Precedence Tests
// ============================================================================

#[test]
fn test_silhouette_with_frame_weakness_wins_over_bulk() {
    // Rule order matters: the frame rule fires before the volume rule even
    // when the volume conditions also hold
    let answers = survey(
        Goal::Bulk,
        Experience::Veteran,
        &[BodyPart::Shoulder],
        ResultPreference::Silhouette,
    );

    let assessment = classify_body_type(Gender::Male, &answers);
    assert_eq!(assessment.key, BodyTypeKey::Frame);
}

#[test]
fn test_bulk_veteran_classifies_as_volume() {
    let answers = survey(
        Goal::Bulk,
        Experience::Veteran,
        &[BodyPart::Chest],
        ResultPreference::Silhouette,
    );

    let assessment = classify_body_type(Gender::Male, &answers);
    assert_eq!(assessment.key, BodyTypeKey::Volume);
}

#[test]
fn test_definition_preference_classifies_as_line() {
    let answers = survey(
        Goal::Cut,
        Experience::Novice,
        &[BodyPart::Leg, BodyPart::Core, BodyPart::Arm],
        ResultPreference::Definition,
    );

    let assessment = classify_body_type(Gender::Female, &answers);
    assert_eq!(assessment.key, BodyTypeKey::Line);
}

#[test]
fn test_no_leg_weakness_classifies_as_lower_strong() {
    let answers = survey(
        Goal::Cut,
        Experience::Intermediate,
        &[BodyPart::Arm],
        ResultPreference::Volume,
    );

    let assessment = classify_body_type(Gender::Female, &answers);
    assert_eq!(assessment.key, BodyTypeKey::LowerStrong);
}

#[test]
fn test_leg_weakness_with_broad_list_falls_back_to_balance() {
    let answers = survey(
        Goal::Cut,
        Experience::Intermediate,
        &[BodyPart::Leg, BodyPart::Chest, BodyPart::Arm],
        ResultPreference::Volume,
    );

    let assessment = classify_body_type(Gender::Male, &answers);
    assert_eq!(assessment.key, BodyTypeKey::Balance);
}

#[test]
fn test_assessment_carries_title_and_description() {
    let answers = survey(
        Goal::Bulk,
        Experience::Veteran,
        &[],
        ResultPreference::Volume,
    );

    let assessment = classify_body_type(Gender::Male, &answers);
    assert_eq!(assessment.title, "Volume type");
    assert!(!assessment.description.is_empty());
}

// ============================================================================
// Focus Selection Tests
// ============================================================================

#[test]
fn test_no_weak_parts_defaults_to_top_two_ranks() {
    let answers = survey(
        Goal::Balance,
        Experience::Novice,
        &[],
        ResultPreference::Volume,
    );

    let male = select_top2_points(Gender::Male, &answers);
    assert_eq!(male[0].part, BodyPart::Shoulder);
    assert_eq!(male[1].part, BodyPart::Back);

    let female = select_top2_points(Gender::Female, &answers);
    assert_eq!(female[0].part, BodyPart::Leg);
    assert_eq!(female[1].part, BodyPart::Back);
}

#[test]
fn test_declared_parts_come_back_in_rank_order() {
    // Male rank order: shoulder, back, chest, arm, leg, core. Declaring in
    // reverse order still yields the rank order.
    let answers = survey(
        Goal::Balance,
        Experience::Novice,
        &[BodyPart::Core, BodyPart::Chest],
        ResultPreference::Volume,
    );

    let points = select_top2_points(Gender::Male, &answers);
    assert_eq!(points[0].part, BodyPart::Chest);
    assert_eq!(points[1].part, BodyPart::Core);
}

#[test]
fn test_rank_tables_differ_by_gender() {
    // Female rank order: leg, back, shoulder, core, chest, arm. The same
    // declared pair comes back flipped relative to the male table.
    let answers = survey(
        Goal::Balance,
        Experience::Novice,
        &[BodyPart::Shoulder, BodyPart::Back],
        ResultPreference::Volume,
    );

    let male = select_top2_points(Gender::Male, &answers);
    assert_eq!(male[0].part, BodyPart::Shoulder);
    assert_eq!(male[1].part, BodyPart::Back);

    let female = select_top2_points(Gender::Female, &answers);
    assert_eq!(female[0].part, BodyPart::Back);
    assert_eq!(female[1].part, BodyPart::Shoulder);
}

#[test]
fn test_single_declared_part_pads_with_rank_two() {
    let answers = survey(
        Goal::Balance,
        Experience::Novice,
        &[BodyPart::Arm],
        ResultPreference::Volume,
    );

    let points = select_top2_points(Gender::Male, &answers);
    assert_eq!(points[0].part, BodyPart::Arm);
    assert_eq!(points[1].part, BodyPart::Back);
}

#[test]
fn test_single_declared_back_repeats_in_both_slots() {
    // The pad slot is pinned to rank two, so declaring exactly that part
    // repeats it. Kept for output compatibility.
    let answers = survey(
        Goal::Balance,
        Experience::Novice,
        &[BodyPart::Back],
        ResultPreference::Volume,
    );

    let points = select_top2_points(Gender::Male, &answers);
    assert_eq!(points[0].part, BodyPart::Back);
    assert_eq!(points[1].part, BodyPart::Back);
    assert_eq!(points[0].point, points[1].point);
}

#[test]
fn test_every_point_carries_a_blurb() {
    let answers = survey(
        Goal::Balance,
        Experience::Novice,
        &[BodyPart::Leg, BodyPart::Core],
        ResultPreference::Volume,
    );

    for gender in [Gender::Male, Gender::Female] {
        let points = select_top2_points(gender, &answers);
        assert!(!points[0].point.is_empty());
        assert!(!points[1].point.is_empty());
    }
}

// ============================================================================
// Plan Summary Tests
// ============================================================================

#[test]
fn test_plan_summary_depends_only_on_gender() {
    let sparse = survey(
        Goal::Cut,
        Experience::Novice,
        &[],
        ResultPreference::Definition,
    );
    let busy = survey(
        Goal::Bulk,
        Experience::Veteran,
        &[BodyPart::Back, BodyPart::Leg, BodyPart::Core],
        ResultPreference::Volume,
    );

    assert_eq!(
        summarize_eight_weeks(Gender::Male, &sparse),
        summarize_eight_weeks(Gender::Male, &busy)
    );
    assert_ne!(
        summarize_eight_weeks(Gender::Male, &sparse),
        summarize_eight_weeks(Gender::Female, &sparse)
    );
}

#[test]
fn test_plan_summary_shape() {
    let answers = survey(
        Goal::Balance,
        Experience::Intermediate,
        &[],
        ResultPreference::Silhouette,
    );

    let summary = summarize_eight_weeks(Gender::Female, &answers);
    assert!(summary.title.contains("8-week"));
    assert_eq!(summary.bullets.len(), 4);
    assert!(summary.bullets[0].starts_with("Weeks 1-2"));
    assert!(summary.bullets[3].starts_with("Weeks 7-8"));
}

// ============================================================================
// Report Assembly Tests
// ============================================================================

#[test]
fn test_report_recommends_for_all_six_parts() {
    let answers = survey(
        Goal::Balance,
        Experience::Intermediate,
        &[],
        ResultPreference::Silhouette,
    );

    let result = report::evaluate(Gender::Male, &answers);

    assert_eq!(result.exercise_recommendations.len(), 6);
    for row in &result.exercise_recommendations {
        assert_eq!(row.exercises.len(), 3);
        assert!(!row.reason.is_empty());
    }
}

#[test]
fn test_male_and_female_reports_differ_in_presentation_order() {
    let answers = survey(
        Goal::Balance,
        Experience::Intermediate,
        &[],
        ResultPreference::Silhouette,
    );

    let male = report::evaluate(Gender::Male, &answers);
    let female = report::evaluate(Gender::Female, &answers);

    assert_eq!(male.exercise_recommendations[0].part, BodyPart::Shoulder);
    assert_eq!(female.exercise_recommendations[0].part, BodyPart::Leg);
}
