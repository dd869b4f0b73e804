// ABOUTME: Per-session profile record holding gender, photo, and survey slots
// ABOUTME: Provides the completeness check that gates report access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physique Labs

use super::{Gender, PhotoSlot, SurveyAnswers};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Everything a profile session has collected so far
///
/// Each slot is independently writable; the record carries no behavior beyond
/// slot access and the completeness rule. Photos are opaque data-URL strings:
/// the service relays them to the vision boundary but never decodes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Session identifier
    pub id: Uuid,
    /// Report audience, once chosen
    pub gender: Option<Gender>,
    /// Upper-body front capture
    pub front_upper: Option<String>,
    /// Upper-body back capture
    pub back_upper: Option<String>,
    /// Lower-body capture
    pub lower_body: Option<String>,
    /// Survey answers, once submitted
    pub survey: Option<SurveyAnswers>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last slot write
    pub updated_at: DateTime<Utc>,
}

impl ProfileRecord {
    /// Create an empty record for a new session
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id,
            gender: None,
            front_upper: None,
            back_upper: None,
            lower_body: None,
            survey: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Read a photo slot
    #[must_use]
    pub fn photo(&self, slot: PhotoSlot) -> Option<&str> {
        match slot {
            PhotoSlot::FrontUpper => self.front_upper.as_deref(),
            PhotoSlot::BackUpper => self.back_upper.as_deref(),
            PhotoSlot::LowerBody => self.lower_body.as_deref(),
        }
    }

    /// Write a photo slot
    pub fn set_photo(&mut self, slot: PhotoSlot, image_data: String) {
        let target = match slot {
            PhotoSlot::FrontUpper => &mut self.front_upper,
            PhotoSlot::BackUpper => &mut self.back_upper,
            PhotoSlot::LowerBody => &mut self.lower_body,
        };
        *target = Some(image_data);
        self.updated_at = Utc::now();
    }

    /// Write the gender slot
    pub fn set_gender(&mut self, gender: Gender) {
        self.gender = Some(gender);
        self.updated_at = Utc::now();
    }

    /// Write the survey slot
    pub fn set_survey(&mut self, survey: SurveyAnswers) {
        self.survey = Some(survey);
        self.updated_at = Utc::now();
    }

    /// Whether every slot required for a report has been filled
    ///
    /// A report needs the gender, all three photos, and the survey. Photos do
    /// not feed the engine, but the product gates the report page on the full
    /// capture flow, so the rule lives here in one place.
    #[must_use]
    pub fn report_ready(&self) -> bool {
        self.gender.is_some()
            && PhotoSlot::ALL.iter().all(|slot| self.photo(*slot).is_some())
            && self.survey.is_some()
    }

    /// Progress snapshot for the status endpoint
    #[must_use]
    pub fn status(&self) -> ProfileStatus {
        ProfileStatus {
            session_id: self.id,
            gender: self.gender,
            photos: PhotoChecklist {
                front_upper: self.front_upper.is_some(),
                back_upper: self.back_upper.is_some(),
                lower_body: self.lower_body.is_some(),
            },
            survey_complete: self.survey.is_some(),
            report_ready: self.report_ready(),
        }
    }
}

/// Which photo slots have been uploaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoChecklist {
    /// Upper-body front capture present
    pub front_upper: bool,
    /// Upper-body back capture present
    pub back_upper: bool,
    /// Lower-body capture present
    pub lower_body: bool,
}

/// Progress summary returned by the session status endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStatus {
    /// Session identifier
    pub session_id: Uuid,
    /// Chosen gender, if any
    pub gender: Option<Gender>,
    /// Per-slot upload state
    pub photos: PhotoChecklist,
    /// Survey submitted
    pub survey_complete: bool,
    /// All report prerequisites met
    pub report_ready: bool,
}
