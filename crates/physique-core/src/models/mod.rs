// ABOUTME: Core data models for the physique report service
// ABOUTME: Re-exports Gender, SurveyAnswers, PhotoSlot, ProfileRecord and vision wire types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physique Labs

//! # Data Models
//!
//! Core data structures shared by the report engine and the HTTP service.
//!
//! ## Design Principles
//!
//! - **Plain values**: the engine only ever sees deserialized records, never
//!   storage keys or request plumbing
//! - **Fail fast**: enums reject unrecognized values at deserialization;
//!   [`SurveyAnswers::validate`] rejects contract violations before any
//!   evaluation happens
//! - **Serializable**: every model maps 1:1 onto the JSON API payloads
//!
//! ## Core Models
//!
//! - [`Gender`]: report audience, selects texts and guidance tables
//! - [`SurveyAnswers`]: the validated survey record driving classification
//! - [`PhotoSlot`] / [`ProfileRecord`]: per-session upload and survey state
//! - [`VisionAnalysis`]: the external vision service response shape

// Domain modules
mod gender;
mod photo;
mod session;
mod survey;
mod vision;

// Re-export all public types for convenience
// Survey domain
pub use survey::{
    BodyPart, Experience, Goal, ResultPreference, SurveyAnswers, TrainingFrequency, TrainingStyle,
};

// Audience
pub use gender::Gender;

// Profile session domain
pub use photo::PhotoSlot;
pub use session::{PhotoChecklist, ProfileRecord, ProfileStatus};

// Vision service wire types
pub use vision::{
    AnalyzeRequest, FocusPointEstimate, PhotoSet, StyleDirection, VisionAnalysis, VisualSummary,
};
