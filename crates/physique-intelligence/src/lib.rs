// ABOUTME: Deterministic physique assessment engine driven by gender and survey answers
// ABOUTME: Pure rule core with no I/O so every report is reproducible and unit-testable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physique Labs

#![deny(unsafe_code)]

//! # Physique Intelligence
//!
//! The deterministic assessment engine behind the physique report. Every
//! function here is pure: the same gender and survey answers always produce
//! the same [`report::Report`], with no clock, randomness, or network access.
//! Photo analysis never feeds into these rules, which keeps report
//! generation available even when the vision service is down.
//!
//! - **Body type**: ordered classification rules over goal, preference, and
//!   weak parts ([`body_type`])
//! - **Focus points**: top-2 selection against a per-gender priority ranking
//!   ([`focus_points`])
//! - **Exercise catalog**: fixed per-gender recommendation tables
//!   ([`exercise_catalog`])
//! - **Plans and guidance**: eight-week route summary ([`plan_summary`]) and
//!   BMI-derived weight guidance ([`weight_guidance`])
//!
//! [`report::evaluate`] assembles all of the above into one report.

/// Ordered body-type classification rules
pub mod body_type;
/// Fixed per-gender exercise recommendation tables
pub mod exercise_catalog;
/// Per-gender focus-point ranking and top-2 selection
pub mod focus_points;
/// Shared physiological constants: BMI bands and weekly change rates
pub mod physiology;
/// Eight-week training route summaries
pub mod plan_summary;
/// Report assembly entry point
pub mod report;
/// BMI-based target weight guidance
pub mod weight_guidance;
