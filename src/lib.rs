// ABOUTME: Main library entry point for the physique report service
// ABOUTME: Wires configuration, profile storage, the report engine, and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physique Labs

#![deny(unsafe_code)]

//! # Physique Report Server
//!
//! An HTTP service that turns a short survey plus three physique photos into
//! a deterministic training report: a body-type classification, the two focus
//! points to prioritize, fixed exercise tables, an eight-week plan summary,
//! and optional BMI-based weight guidance.
//!
//! ## Features
//!
//! - **Deterministic reports**: the same gender and survey always produce the
//!   same report; classification never depends on photos or external services
//! - **Profile sessions**: gender, photos, and survey answers are collected
//!   slot by slot against a server-issued session id
//! - **Vision relay**: an optional, display-only photo analysis relayed to an
//!   `OpenAI`-compatible vision service; the endpoint degrades gracefully when
//!   the upstream is not configured or unavailable
//! - **Stateless evaluation**: a one-shot report endpoint that skips the
//!   session flow entirely
//!
//! ## Architecture
//!
//! The server follows a modular architecture:
//! - **Config**: environment-driven configuration with a no-secrets summary
//! - **Store**: the profile-session store behind a swappable trait
//! - **Vision**: the `OpenAI`-compatible vision service client and prompts
//! - **Routes**: axum route groups for health, sessions, reports, analysis
//! - **Server**: router assembly, middleware stack, and the serve loop
//!
//! The report rules themselves live in the `physique-intelligence` crate and
//! the shared data types in `physique-core`.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use physique_server::config::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     // Load configuration
//!     let config = ServerConfig::from_env()?;
//!
//!     println!(
//!         "Physique report server configured with port: HTTP={}",
//!         config.http_port
//!     );
//!
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by the binary crate (src/bin/) and integration
// tests (tests/). They must remain `pub` so external consumers can access
// them.

/// Configuration management from environment variables
pub mod config;

/// Logging configuration and structured logging setup
pub mod logging;

/// Shared server resources container for dependency injection
pub mod resources;

/// `HTTP` route handlers grouped by concern
pub mod routes;

/// Router assembly, middleware stack, and the serve loop
pub mod server;

/// Profile-session store abstraction with pluggable backends
pub mod store;

/// `OpenAI`-compatible vision service client and prompt construction
pub mod vision;
