// ABOUTME: Gender enumeration selecting classification texts and guidance tables
// ABOUTME: Supplied once per session and treated as immutable afterwards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physique Labs

use serde::{Deserialize, Serialize};

/// Report audience
///
/// Every gendered table in the engine (classification texts, focus-point
/// catalogue, exercise tables, BMI ranges) is keyed by this enum, so adding a
/// variant forces every table to be extended at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male guidance tables
    Male,
    /// Female guidance tables
    Female,
}

impl Gender {
    /// Human-readable name used in prompts and logs
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}
