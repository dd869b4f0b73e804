// ABOUTME: Prompt text for the vision analysis relay
// ABOUTME: Persona and schema prompts plus the per-request user message builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physique Labs

//! Prompts sent with every vision analysis request
//!
//! Two system messages pin the model down: a persona prompt and a schema
//! prompt that spells out the exact JSON shape. The completion runs in
//! JSON-object mode, so the schema prompt is what actually constrains the
//! field names the parser expects.

use physique_core::models::AnalyzeRequest;

/// Persona system prompt
pub const SYSTEM_PROMPT: &str = "\
You are an expert assistant for physique and style analysis.
Based on three images (upper body front, upper body back, lower body), you
summarize the visible characteristics and describe body balance and a style
direction in clear English.
Return JSON only; every sentence of explanation must live inside the JSON.";

/// Schema system prompt constraining the completion shape
pub const SCHEMA_PROMPT: &str = r#"Requirements:

1. Return JSON that follows this schema exactly. Never include any other text
(explanations, sentences, code blocks, markdown).

{
  "visualSummary": {
    "upperFront": string,
    "upperBack": string,
    "lowerBody": string
  },
  "estimatedFocusPoints": [
    { "area": string, "why": string },
    { "area": string, "why": string }
  ],
  "styleDirection": {
    "typeHint": "Frame type" | "Volume type" | "Line type" | "Lower-body strong type" | "Balance type",
    "note": string
  },
  "safetyNote": string
}

2. Write every string in natural English.
3. The "estimatedFocusPoints" array must contain at least 2 entries.
4. "safetyNote" must briefly cover health, posture, and training intensity cautions.
5. Put no whitespace, newlines, comments, or explanations outside the JSON."#;

/// Build the user message text for one analysis request
///
/// Height and weight lines appear only when the request carries them; the
/// image ordering note always matches the order the parts are attached in.
#[must_use]
pub fn user_text(request: &AnalyzeRequest) -> String {
    let mut text = format!(
        "User profile:\n- gender: {}\n- goal: {}\n",
        request.gender.display_name(),
        request.goal.display_name()
    );

    if let Some(height_cm) = request.height_cm {
        text.push_str(&format!("- height: {height_cm}cm\n"));
    }
    if let Some(weight_kg) = request.weight_kg {
        text.push_str(&format!("- weight: {weight_kg}kg\n"));
    }

    text.push_str(
        "\nThe images are attached in this order:\n\
         - upper body, front view\n\
         - upper body, back view\n\
         - lower body",
    );

    text
}
