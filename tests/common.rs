// ABOUTME: Shared test fixtures for integration tests
// ABOUTME: Builds server resources on the in-memory store with vision disabled
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physique Labs

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared test setup for `physique_server`
//!
//! Every fixture here builds its configuration directly instead of reading
//! the environment, so route tests stay independent of the shell they run in.

use physique_server::config::{ServerConfig, VisionSettings};
use physique_server::resources::ServerResources;
use physique_server::server::PhysiqueServer;
use physique_server::store::InMemoryProfileStore;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG turns test logging up when debugging a failure
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Server configuration for tests; never reads the environment
pub fn create_test_config() -> ServerConfig {
    ServerConfig {
        http_port: 8080,
        host: "127.0.0.1".to_owned(),
        cors_allowed_origins: "*".to_owned(),
        max_body_bytes: 1024 * 1024,
        request_timeout_secs: 5,
        vision: VisionSettings {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_owned(),
            model: "gpt-4o-mini".to_owned(),
            connect_timeout_secs: 1,
            request_timeout_secs: 2,
        },
    }
}

/// Build server resources backed by a fresh in-memory store, vision disabled
pub fn create_test_resources() -> Arc<ServerResources> {
    init_test_logging();
    let store = Arc::new(InMemoryProfileStore::new());
    Arc::new(ServerResources::new(create_test_config(), store, None))
}

/// Build the fully layered application router
pub fn create_test_router() -> axum::Router {
    PhysiqueServer::new(create_test_resources()).router()
}
