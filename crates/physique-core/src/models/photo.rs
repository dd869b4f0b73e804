// ABOUTME: Photo slot enumeration for the three-angle physique upload flow
// ABOUTME: Slots mirror the fixed storage identifiers for front/back/lower captures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physique Labs

use serde::{Deserialize, Serialize};

/// One of the three fixed capture angles a profile session collects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhotoSlot {
    /// Upper body, front view
    FrontUpper,
    /// Upper body, back view
    BackUpper,
    /// Lower body
    LowerBody,
}

impl PhotoSlot {
    /// All slots, in upload order
    pub const ALL: [Self; 3] = [Self::FrontUpper, Self::BackUpper, Self::LowerBody];

    /// Stable identifier used in URLs and storage
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FrontUpper => "front_upper",
            Self::BackUpper => "back_upper",
            Self::LowerBody => "lower_body",
        }
    }

    /// Parse a slot from its stable identifier
    #[must_use]
    pub fn from_str_opt(value: &str) -> Option<Self> {
        match value {
            "front_upper" => Some(Self::FrontUpper),
            "back_upper" => Some(Self::BackUpper),
            "lower_body" => Some(Self::LowerBody),
            _ => None,
        }
    }
}
