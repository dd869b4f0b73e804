// ABOUTME: Server binary for the physique report service
// ABOUTME: Loads configuration, wires resources, and runs the HTTP server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physique Labs

//! # Physique Report Server Binary
//!
//! Starts the HTTP service that collects profile sessions, evaluates the
//! deterministic training report, and relays photo analysis to the vision
//! service when one is configured.

use anyhow::Result;
use clap::Parser;
use physique_server::{
    config::ServerConfig,
    logging,
    resources::ServerResources,
    server::PhysiqueServer,
    store::InMemoryProfileStore,
    vision::VisionClient,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "physique-server")]
#[command(about = "Physique report service - body-type classification and training guidance")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override listen host
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Handle container environments where clap may not work properly
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument parsing failed: {e}");
            eprintln!("Using default configuration");
            Args {
                http_port: None,
                host: None,
            }
        }
    };

    // Initialize production logging
    logging::init_from_env()?;

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    // Apply CLI overrides
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }

    info!("Starting Physique Report Server");
    info!("{}", config.summary());

    // Build the vision client when an API key is configured
    let vision = VisionClient::from_settings(&config.vision)?;
    if vision.is_some() {
        info!("Vision analysis enabled with model {}", config.vision.model);
    } else {
        info!("Vision analysis disabled (no OPENAI_API_KEY); /api/analyze will degrade");
    }

    // Create server resources and server
    let store = Arc::new(InMemoryProfileStore::new());
    let resources = Arc::new(ServerResources::new(config.clone(), store, vision));
    let server = PhysiqueServer::new(resources);

    info!("Server starting on port {}", config.http_port);

    // Display all available API endpoints
    display_available_endpoints(&config);

    info!("Ready to serve physique reports!");

    // Run the server (includes all routes)
    if let Err(e) = server.run().await {
        error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints with their ports
fn display_available_endpoints(config: &ServerConfig) {
    let host = &config.host;
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    display_health_endpoints(host, port);
    display_report_endpoints(host, port);
    display_session_endpoints(host, port);
    display_analyze_endpoints(host, port);
    info!("=== End of Endpoint List ===");
}

#[allow(clippy::cognitive_complexity)]
fn display_health_endpoints(host: &str, port: u16) {
    info!("Health:");
    info!("   Liveness:          GET  http://{host}:{port}/health");
    info!("   Readiness:         GET  http://{host}:{port}/health/ready");
}

#[allow(clippy::cognitive_complexity)]
fn display_report_endpoints(host: &str, port: u16) {
    info!("Reports:");
    info!("   One-shot Report:   POST http://{host}:{port}/api/report");
}

#[allow(clippy::cognitive_complexity)]
fn display_session_endpoints(host: &str, port: u16) {
    info!("Profile Sessions:");
    info!("   Create Session:    POST http://{host}:{port}/api/sessions");
    info!("   Session Status:    GET  http://{host}:{port}/api/sessions/{{id}}");
    info!("   Set Gender:        PUT  http://{host}:{port}/api/sessions/{{id}}/gender");
    info!("   Upload Photo:      PUT  http://{host}:{port}/api/sessions/{{id}}/photos/{{slot}}");
    info!("   Submit Survey:     PUT  http://{host}:{port}/api/sessions/{{id}}/survey");
    info!("   Session Report:    GET  http://{host}:{port}/api/sessions/{{id}}/report");
    info!("   Clear Session:     DELETE http://{host}:{port}/api/sessions/{{id}}");
}

#[allow(clippy::cognitive_complexity)]
fn display_analyze_endpoints(host: &str, port: u16) {
    info!("Photo Analysis:");
    info!("   Analyze Photos:    POST http://{host}:{port}/api/analyze");
}
