// ABOUTME: Core types for the physique report service
// ABOUTME: Foundation crate with error types, survey/profile models, and vision wire types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physique Labs

#![deny(unsafe_code)]

//! # Physique Core
//!
//! Foundation crate for the physique report service. Holds the types shared
//! between the report engine and the HTTP service:
//!
//! - **Errors**: unified [`errors::AppError`] with standard error codes and
//!   HTTP response formatting (behind the `http-response` feature)
//! - **Models**: gender, survey answers with validation, photo slots, the
//!   per-session profile record, and the vision-service wire types
//!
//! This crate performs no I/O; everything here is plain data plus the
//! validation rules that guard the service boundary.

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Common data models for surveys, profiles, and vision analysis payloads
pub mod models;
