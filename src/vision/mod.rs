// ABOUTME: Vision service integration for the display-only photo analysis
// ABOUTME: Splits prompt construction from the OpenAI-compatible HTTP client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physique Labs

//! `OpenAI`-compatible vision service integration
//!
//! The analysis is a relay: the service forwards the three captures with a
//! strict JSON-schema prompt, validates the shape that comes back, and hands
//! it to the client untouched. Nothing here ever influences report
//! classification, which stays fully deterministic.

/// HTTP client for the chat-completions vision endpoint
pub mod client;

/// Prompt text and user-message construction
pub mod prompts;

pub use client::VisionClient;
