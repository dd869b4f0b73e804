// ABOUTME: In-memory profile store backed by a sharded concurrent map
// ABOUTME: The default backend; sessions vanish on restart by design
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physique Labs

//! In-memory [`ProfileStore`] implementation
//!
//! Uses `DashMap` for fine-grained locking instead of a global `Mutex` so
//! concurrent sessions never contend with each other.

use super::ProfileStore;
use dashmap::DashMap;
use physique_core::errors::{AppError, AppResult};
use physique_core::models::{Gender, PhotoSlot, ProfileRecord, SurveyAnswers};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// In-memory profile-session store
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
    /// `DashMap` provides lock-free reads and sharded write operations
    sessions: Arc<DashMap<Uuid, ProfileRecord>>,
}

impl InMemoryProfileStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
        }
    }

    /// Number of live sessions, used by tests and debug logging
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the store holds no sessions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Run a mutation against an existing record and return the updated copy
    fn update_record(
        &self,
        session_id: Uuid,
        mutate: impl FnOnce(&mut ProfileRecord),
    ) -> AppResult<ProfileRecord> {
        let mut entry = self
            .sessions
            .get_mut(&session_id)
            .ok_or_else(|| AppError::not_found(format!("profile session {session_id}")))?;
        mutate(entry.value_mut());
        Ok(entry.value().clone())
    }
}

#[async_trait::async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn create_session(&self) -> AppResult<Uuid> {
        let session_id = Uuid::new_v4();
        self.sessions
            .insert(session_id, ProfileRecord::new(session_id));
        debug!(session_id = %session_id, "created profile session");
        Ok(session_id)
    }

    async fn fetch(&self, session_id: Uuid) -> AppResult<Option<ProfileRecord>> {
        Ok(self
            .sessions
            .get(&session_id)
            .map(|entry| entry.value().clone()))
    }

    async fn set_gender(&self, session_id: Uuid, gender: Gender) -> AppResult<ProfileRecord> {
        self.update_record(session_id, |record| record.set_gender(gender))
    }

    async fn set_photo(
        &self,
        session_id: Uuid,
        slot: PhotoSlot,
        image_data: String,
    ) -> AppResult<ProfileRecord> {
        self.update_record(session_id, |record| record.set_photo(slot, image_data))
    }

    async fn set_survey(
        &self,
        session_id: Uuid,
        survey: SurveyAnswers,
    ) -> AppResult<ProfileRecord> {
        self.update_record(session_id, |record| record.set_survey(survey))
    }

    async fn clear(&self, session_id: Uuid) -> AppResult<()> {
        // Idempotent: clearing a missing session is not an error
        let removed = self.sessions.remove(&session_id).is_some();
        debug!(session_id = %session_id, removed, "cleared profile session");
        Ok(())
    }

    async fn health_check(&self) -> AppResult<()> {
        Ok(())
    }
}
