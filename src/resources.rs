// ABOUTME: Shared server resources container passed to every route group
// ABOUTME: Holds the configuration, the profile store, and the optional vision client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physique Labs

//! Centralized resource container for dependency injection
//!
//! Resources are created once at startup and shared across all route groups
//! via `Arc`, so handlers never construct clients or stores themselves.

use crate::config::ServerConfig;
use crate::store::ProfileStore;
use crate::vision::VisionClient;
use std::sync::Arc;

/// Container for all shared server resources
#[derive(Clone)]
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Profile-session store
    pub store: Arc<dyn ProfileStore>,
    /// Vision service client; `None` when no API key is configured
    pub vision: Option<Arc<VisionClient>>,
}

impl ServerResources {
    /// Create a new resource container
    #[must_use]
    pub fn new(
        config: ServerConfig,
        store: Arc<dyn ProfileStore>,
        vision: Option<VisionClient>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            store,
            vision: vision.map(Arc::new),
        }
    }
}
