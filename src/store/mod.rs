// ABOUTME: Profile-session store abstraction with pluggable backend support
// ABOUTME: Defines the ProfileStore trait the session routes program against
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physique Labs

//! Profile-session storage behind a swappable trait
//!
//! Sessions are keyed by server-issued UUIDs and hold the slots a report
//! needs: gender, the three photo captures, and the survey answers. The
//! in-memory backend is the only one shipped; the trait keeps route code
//! independent of where records actually live.

/// In-memory store implementation
pub mod memory;

pub use memory::InMemoryProfileStore;

use physique_core::errors::AppResult;
use physique_core::models::{Gender, PhotoSlot, ProfileRecord, SurveyAnswers};
use uuid::Uuid;

/// Store trait for profile-session persistence
///
/// Every mutating call returns the updated record so callers can report the
/// refreshed progress snapshot without a second round trip.
#[async_trait::async_trait]
pub trait ProfileStore: Send + Sync {
    /// Create a new empty session and return its id
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to persist the record
    async fn create_session(&self) -> AppResult<Uuid>;

    /// Fetch a session record, `None` when the id is unknown
    ///
    /// # Errors
    ///
    /// Returns an error if the backend lookup fails
    async fn fetch(&self, session_id: Uuid) -> AppResult<Option<ProfileRecord>>;

    /// Set the gender slot
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the session does not exist
    async fn set_gender(&self, session_id: Uuid, gender: Gender) -> AppResult<ProfileRecord>;

    /// Set one photo slot; a second write to the same slot replaces it
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the session does not exist
    async fn set_photo(
        &self,
        session_id: Uuid,
        slot: PhotoSlot,
        image_data: String,
    ) -> AppResult<ProfileRecord>;

    /// Set the survey slot; answers are validated before they reach the store
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the session does not exist
    async fn set_survey(
        &self,
        session_id: Uuid,
        survey: SurveyAnswers,
    ) -> AppResult<ProfileRecord>;

    /// Delete a session and everything it holds
    ///
    /// Clearing an unknown or already-cleared session succeeds; deletion is
    /// idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to delete the record
    async fn clear(&self, session_id: Uuid) -> AppResult<()>;

    /// Verify the backend is reachable, used by the readiness probe
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot serve requests
    async fn health_check(&self) -> AppResult<()>;
}
