// ABOUTME: OpenAI-compatible chat-completions client for photo analysis
// ABOUTME: Builds the three-message completion request and validates the JSON coming back
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physique Labs

//! Vision service HTTP client
//!
//! Speaks the `OpenAI` chat-completions wire format in JSON-object mode. The
//! client exists only when an API key is configured; callers treat `None` as
//! "analysis unavailable" rather than an error.

use crate::config::VisionSettings;
use crate::vision::prompts;
use physique_core::errors::{AppError, AppResult, ErrorCode};
use physique_core::models::{AnalyzeRequest, VisionAnalysis};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Chat-completions request body
#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    response_format: ResponseFormat,
    messages: Vec<ChatMessage>,
}

/// Completion response format selector
#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

/// One chat message; system messages carry plain text, the user message
/// carries text plus image parts
#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: MessageContent,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

/// Chat-completions response body, reduced to the fields we read
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

/// Error envelope returned by `OpenAI`-compatible APIs
#[derive(Debug, Deserialize)]
struct UpstreamErrorResponse {
    error: UpstreamErrorDetail,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
}

/// HTTP client for the vision analysis upstream
pub struct VisionClient {
    client: Client,
    settings: VisionSettings,
}

impl VisionClient {
    /// Create a client from vision settings
    ///
    /// Returns `Ok(None)` when no API key is configured, which downgrades the
    /// analysis endpoint to its unavailable response instead of failing
    /// startup.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn from_settings(settings: &VisionSettings) -> AppResult<Option<Self>> {
        if !settings.is_configured() {
            return Ok(None);
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .map_err(|e| AppError::config(format!("Failed to create vision HTTP client: {e}")))?;

        Ok(Some(Self {
            client,
            settings: settings.clone(),
        }))
    }

    /// Build the API URL for a given endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.settings.base_url.trim_end_matches('/'),
            endpoint
        )
    }

    fn add_auth_header(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(ref api_key) = self.settings.api_key {
            request.header("Authorization", format!("Bearer {api_key}"))
        } else {
            request
        }
    }

    /// Assemble the completion request: persona prompt, schema prompt, then
    /// the user text with the three captures attached in fixed order
    fn build_request(&self, request: &AnalyzeRequest) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.settings.model.clone(),
            response_format: ResponseFormat {
                format_type: "json_object",
            },
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: MessageContent::Text(prompts::SYSTEM_PROMPT.to_owned()),
                },
                ChatMessage {
                    role: "system",
                    content: MessageContent::Text(prompts::SCHEMA_PROMPT.to_owned()),
                },
                ChatMessage {
                    role: "user",
                    content: MessageContent::Parts(vec![
                        ContentPart::Text {
                            text: prompts::user_text(request),
                        },
                        ContentPart::ImageUrl {
                            image_url: ImageUrl {
                                url: request.images.front_upper.clone(),
                            },
                        },
                        ContentPart::ImageUrl {
                            image_url: ImageUrl {
                                url: request.images.back_upper.clone(),
                            },
                        },
                        ContentPart::ImageUrl {
                            image_url: ImageUrl {
                                url: request.images.lower_body.clone(),
                            },
                        },
                    ]),
                },
            ],
        }
    }

    /// Parse error response from the API
    fn parse_error_response(status: reqwest::StatusCode, body: &str) -> AppError {
        if let Ok(error_response) = serde_json::from_str::<UpstreamErrorResponse>(body) {
            let error_type = error_response
                .error
                .error_type
                .unwrap_or_else(|| "unknown".to_owned());

            match status.as_u16() {
                401 => AppError::new(
                    ErrorCode::ExternalAuthFailed,
                    format!(
                        "vision API authentication failed: {}",
                        error_response.error.message
                    ),
                ),
                429 => AppError::new(
                    ErrorCode::ExternalRateLimited,
                    format!(
                        "vision API rate limit exceeded: {}",
                        error_response.error.message
                    ),
                ),
                _ => AppError::external_service(
                    "vision",
                    format!("{} - {}", error_type, error_response.error.message),
                ),
            }
        } else {
            // Handle non-JSON error responses
            match status.as_u16() {
                502..=504 => AppError::external_unavailable(
                    "vision",
                    format!("upstream is not responding ({status})"),
                ),
                _ => AppError::external_service(
                    "vision",
                    format!(
                        "API error ({}): {}",
                        status,
                        body.chars().take(200).collect::<String>()
                    ),
                ),
            }
        }
    }

    /// Run one photo analysis
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails, the completion is empty, or
    /// the returned JSON does not match the analysis contract.
    #[instrument(skip(self, request), fields(model = %self.settings.model))]
    pub async fn analyze(&self, request: &AnalyzeRequest) -> AppResult<VisionAnalysis> {
        let completion_request = self.build_request(request);

        let http_request = self
            .client
            .post(self.api_url("chat/completions"))
            .header("Content-Type", "application/json")
            .json(&completion_request);

        let response = self
            .add_auth_header(http_request)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to vision service: {e}");
                if e.is_connect() {
                    AppError::external_unavailable(
                        "vision",
                        format!("cannot connect to {}", self.settings.base_url),
                    )
                } else {
                    AppError::external_service("vision", format!("failed to send request: {e}"))
                }
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read vision service response: {e}");
            AppError::external_service("vision", format!("failed to read response: {e}"))
        })?;

        if !status.is_success() {
            return Err(Self::parse_error_response(status, &body));
        }

        let completion: ChatCompletionResponse = serde_json::from_str(&body).map_err(|e| {
            error!(
                "Failed to parse vision service response: {e} - body: {}",
                body.chars().take(500).collect::<String>()
            );
            AppError::external_service("vision", format!("failed to parse response: {e}"))
        })?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::external_service("vision", "completion returned no choices"))?;

        let content = choice
            .message
            .content
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| {
                AppError::external_service("vision", "completion returned empty content")
            })?;

        let analysis: VisionAnalysis = serde_json::from_str(&content).map_err(|e| {
            error!("Vision completion is not valid analysis JSON: {e}");
            AppError::external_service(
                "vision",
                format!("completion did not match the analysis schema: {e}"),
            )
        })?;

        analysis.validate()?;

        debug!(
            focus_points = analysis.estimated_focus_points.len(),
            "vision analysis parsed"
        );

        Ok(analysis)
    }
}
