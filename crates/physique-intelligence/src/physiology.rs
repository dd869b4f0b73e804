// ABOUTME: Physiological lookup tables keyed by gender and training goal
// ABOUTME: BMI target bands, weekly weight-change pacing, and the guidance disclaimer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physique Labs

//! Physiological constants used by the weight guidance calculator.
//!
//! The bands are coaching targets, not clinical classifications: each
//! (gender, goal) pairing steers toward a BMI window that leaves room for
//! the goal's body-composition change. All lookups are exhaustive matches
//! over the enum domains, so adding a goal or gender variant fails to
//! compile until every table is extended.

use physique_core::models::{Gender, Goal};

/// Inclusive BMI window (kg/m²) that a training goal steers toward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiBand {
    /// Lower bound of the window
    pub min: f64,
    /// Upper bound of the window
    pub max: f64,
}

/// Target BMI bands per gender and goal.
pub mod bmi_bands {
    use super::BmiBand;

    /// Male cutting target band
    pub const MALE_CUT: BmiBand = BmiBand {
        min: 20.5,
        max: 24.0,
    };
    /// Male recomposition target band
    pub const MALE_BALANCE: BmiBand = BmiBand {
        min: 21.5,
        max: 25.5,
    };
    /// Male bulking target band
    pub const MALE_BULK: BmiBand = BmiBand {
        min: 23.0,
        max: 28.0,
    };
    /// Female cutting target band
    pub const FEMALE_CUT: BmiBand = BmiBand {
        min: 19.0,
        max: 22.0,
    };
    /// Female recomposition target band
    pub const FEMALE_BALANCE: BmiBand = BmiBand {
        min: 19.5,
        max: 23.0,
    };
    /// Female bulking target band
    pub const FEMALE_BULK: BmiBand = BmiBand {
        min: 20.5,
        max: 24.0,
    };
}

/// Disclaimer attached to every piece of weight guidance.
pub const BMI_DISCLAIMER: &str = "These figures are reference ranges, not a medical diagnosis. \
     Individual targets shift with body-fat percentage, muscle mass, and overall health.";

/// Target BMI band for a gender and goal pairing.
#[must_use]
pub const fn bmi_band(gender: Gender, goal: Goal) -> BmiBand {
    match (gender, goal) {
        (Gender::Male, Goal::Cut) => bmi_bands::MALE_CUT,
        (Gender::Male, Goal::Balance) => bmi_bands::MALE_BALANCE,
        (Gender::Male, Goal::Bulk) => bmi_bands::MALE_BULK,
        (Gender::Female, Goal::Cut) => bmi_bands::FEMALE_CUT,
        (Gender::Female, Goal::Balance) => bmi_bands::FEMALE_BALANCE,
        (Gender::Female, Goal::Bulk) => bmi_bands::FEMALE_BULK,
    }
}

/// Sustainable weekly weight-change pacing for a gender and goal pairing.
#[must_use]
pub const fn weekly_change_text(gender: Gender, goal: Goal) -> &'static str {
    match (gender, goal) {
        (Gender::Male, Goal::Cut) => "-0.25 to -0.75 kg/week",
        (Gender::Male, Goal::Balance) => "±0 to 0.25 kg/week",
        (Gender::Male, Goal::Bulk) => "+0.25 to +0.5 kg/week",
        (Gender::Female, Goal::Cut) => "-0.2 to -0.5 kg/week",
        (Gender::Female, Goal::Balance) => "±0 to 0.2 kg/week",
        (Gender::Female, Goal::Bulk) => "+0.1 to +0.3 kg/week",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_widen_from_cut_to_bulk() {
        for gender in [Gender::Male, Gender::Female] {
            let cut = bmi_band(gender, Goal::Cut);
            let bulk = bmi_band(gender, Goal::Bulk);
            assert!(cut.min < bulk.min);
            assert!(cut.max < bulk.max);
            assert!(cut.min < cut.max);
            assert!(bulk.min < bulk.max);
        }
    }

    #[test]
    fn male_cut_band_matches_table() {
        let band = bmi_band(Gender::Male, Goal::Cut);
        assert!((band.min - 20.5).abs() < f64::EPSILON);
        assert!((band.max - 24.0).abs() < f64::EPSILON);
    }

    #[test]
    fn change_pacing_is_goal_directional() {
        assert!(weekly_change_text(Gender::Male, Goal::Cut).starts_with('-'));
        assert!(weekly_change_text(Gender::Female, Goal::Bulk).starts_with('+'));
        assert_eq!(
            weekly_change_text(Gender::Female, Goal::Balance),
            "±0 to 0.2 kg/week"
        );
    }
}
