// ABOUTME: Environment-driven server configuration with validation and a no-secrets summary
// ABOUTME: Covers the HTTP listener, request limits, CORS, and the vision service settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physique Labs

//! Server configuration loaded from environment variables
//!
//! Every knob has a default that works for local development; production
//! deployments override through the environment. [`ServerConfig::summary`]
//! renders the effective configuration without leaking the vision API key.

use anyhow::{Context, Result};
use std::env;
use std::net::{IpAddr, SocketAddr};
use tracing::{info, warn};

/// Default HTTP listen port
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Default request body cap; data-URL photo uploads are large
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Settings for the `OpenAI`-compatible vision service
#[derive(Debug, Clone)]
pub struct VisionSettings {
    /// API key; the relay endpoint reports itself unavailable without one
    pub api_key: Option<String>,
    /// Base URL of the chat-completions API
    pub base_url: String,
    /// Model identifier sent with every completion request
    pub model: String,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
    /// Full request timeout in seconds; vision completions run long
    pub request_timeout_secs: u64,
}

impl VisionSettings {
    /// Whether enough is configured to call the vision service
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Listen host, an IP address or "localhost"
    pub host: String,
    /// Comma-separated CORS origins, or "*" for any
    pub cors_allowed_origins: String,
    /// Request body cap in bytes
    pub max_body_bytes: usize,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Vision service settings
    pub vision: VisionSettings,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is set to an unparseable value or
    /// when [`Self::validate`] rejects the combination.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_port: env_var_or("HTTP_PORT", &DEFAULT_HTTP_PORT.to_string())?
                .parse()
                .context("Invalid HTTP_PORT value")?,
            host: env_var_or("HOST", "127.0.0.1")?,
            cors_allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*")?,
            max_body_bytes: env_var_or("MAX_BODY_BYTES", &DEFAULT_MAX_BODY_BYTES.to_string())?
                .parse()
                .context("Invalid MAX_BODY_BYTES value")?,
            request_timeout_secs: env_var_or(
                "REQUEST_TIMEOUT_SECS",
                &DEFAULT_REQUEST_TIMEOUT_SECS.to_string(),
            )?
            .parse()
            .context("Invalid REQUEST_TIMEOUT_SECS value")?,
            vision: VisionSettings {
                api_key: env::var("OPENAI_API_KEY").ok(),
                base_url: env_var_or("VISION_BASE_URL", "https://api.openai.com/v1")?,
                model: env_var_or("VISION_MODEL", "gpt-4o-mini")?,
                connect_timeout_secs: env_var_or("VISION_CONNECT_TIMEOUT_SECS", "10")?
                    .parse()
                    .context("Invalid VISION_CONNECT_TIMEOUT_SECS value")?,
                request_timeout_secs: env_var_or("VISION_REQUEST_TIMEOUT_SECS", "60")?
                    .parse()
                    .context("Invalid VISION_REQUEST_TIMEOUT_SECS value")?,
            },
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error for values that cannot produce a working server.
    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            return Err(anyhow::anyhow!("HTTP_PORT cannot be 0"));
        }

        if self.max_body_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_BODY_BYTES cannot be 0"));
        }

        if self.request_timeout_secs == 0 {
            return Err(anyhow::anyhow!("REQUEST_TIMEOUT_SECS cannot be 0"));
        }

        if self.vision.base_url.trim().is_empty() {
            return Err(anyhow::anyhow!("VISION_BASE_URL cannot be empty"));
        }

        if self.vision.api_key.is_none() {
            warn!("OPENAI_API_KEY is not set; photo analysis will report itself unavailable");
        }

        Ok(())
    }

    /// Resolve the listen address
    ///
    /// # Errors
    ///
    /// Returns an error when the host is neither "localhost" nor an IP
    /// address literal.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.http_port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .with_context(|| format!("Invalid HOST value: {}", self.host))?;

        Ok(SocketAddr::new(ip, self.http_port))
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Physique Report Server Configuration:\n\
             - HTTP Port: {}\n\
             - Host: {}\n\
             - CORS Origins: {}\n\
             - Max Body Size: {} bytes\n\
             - Request Timeout: {}s\n\
             - Vision Service: {}\n\
             - Vision Model: {}\n\
             - Vision Base URL: {}",
            self.http_port,
            self.host,
            self.cors_allowed_origins,
            self.max_body_bytes,
            self.request_timeout_secs,
            if self.vision.is_configured() {
                "Enabled"
            } else {
                "Disabled"
            },
            self.vision.model,
            self.vision.base_url,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> Result<String> {
    Ok(env::var(key).unwrap_or_else(|_| default.to_owned()))
}
