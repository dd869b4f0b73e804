// ABOUTME: Route module organization for the physique report service HTTP endpoints
// ABOUTME: Provides centralized route definitions organized by domain with clean separation of concerns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physique Labs

//! Route modules for the physique report service
//!
//! Routes are organized by domain; each module contains route definitions and
//! thin handler functions that delegate to the store, the report engine, or
//! the vision client.

/// Photo analysis relay route
pub mod analyze;
/// Health check and readiness routes
pub mod health;
/// Stateless one-shot report evaluation route
pub mod report;
/// Profile-session lifecycle routes
pub mod sessions;

// Re-export the route handlers and their payload types

/// Photo analysis route handlers
pub use analyze::AnalyzeRoutes;
/// Analysis relay response envelope
pub use analyze::{AnalyzeResponse, AnalyzeStatus};
/// Health check route handlers
pub use health::HealthRoutes;
/// One-shot report route handlers
pub use report::ReportRoutes;
/// One-shot report request payload
pub use report::ReportRequest;
/// Profile-session route handlers
pub use sessions::SessionRoutes;
/// Session creation response payload
pub use sessions::CreateSessionResponse;
