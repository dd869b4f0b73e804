// ABOUTME: Shared test helpers for integration tests
// ABOUTME: Exports the Axum request builder the route tests drive requests with
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physique Labs

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod axum_test;
