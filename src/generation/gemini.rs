// SPDX-License-Identifier: MPL-2.0
//! Gemini adapter for the generation port.
//!
//! Talks to the `models/{model}:generateContent` REST endpoint. The request
//! carries every style reference as an `inlineData` part in upload order,
//! the optional content reference, and finally the prompt text; the response
//! is searched for the first returned `inlineData` image part.
//!
//! Credentials come from `GEMINI_API_KEY` (or `GOOGLE_API_KEY`); endpoint and
//! model can be overridden in the `[generation]` config section.

use super::port::{GeneratedIcon, GenerationError, GenerationService, IconRequest};
use crate::config::{GenerationSection, DEFAULT_API_BASE, DEFAULT_MODEL};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::env;

const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "GOOGLE_API_KEY"];

/// Builds an `inlineData` content part carrying a base64-encoded image.
fn inline_data_part(mime: &str, data: &str) -> Value {
    json!({ "inlineData": { "mimeType": mime, "data": data } })
}

pub struct GeminiClient {
    http: reqwest::Client,
    api_base: String,
    model: String,
}

impl GeminiClient {
    /// Builds a client from the `[generation]` config section, applying the
    /// crate defaults for unset fields.
    #[must_use]
    pub fn new(config: &GenerationSection) -> Self {
        let api_base = config
            .api_base
            .as_deref()
            .map(|base| base.trim_end_matches('/').to_string())
            .filter(|base| !base.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let model = config
            .model
            .clone()
            .filter(|model| !model.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Self {
            http: reqwest::Client::new(),
            api_base,
            model,
        }
    }

    fn api_key() -> Option<String> {
        API_KEY_VARS.iter().find_map(|var| {
            env::var(var)
                .ok()
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        })
    }

    fn endpoint(&self) -> String {
        let trimmed = self.model.trim();
        let model_path = if trimmed.starts_with("models/") {
            trimmed.to_string()
        } else {
            format!("models/{trimmed}")
        };
        format!("{}/{}:generateContent", self.api_base, model_path)
    }

    /// Assembles the content parts: style references in order, the optional
    /// subject reference, and the prompt text last.
    fn build_parts(request: &IconRequest) -> Vec<Value> {
        let mut parts = Vec::with_capacity(request.style_images.len() + 2);
        for image in &request.style_images {
            parts.push(inline_data_part(&image.mime, &image.data));
        }
        if let Some(content) = &request.content_image {
            parts.push(inline_data_part(&content.mime, &content.data));
        }
        parts.push(json!({ "text": request.prompt }));
        parts
    }

    fn build_payload(request: &IconRequest) -> Value {
        json!({
            "contents": [{ "parts": Self::build_parts(request) }],
            "generationConfig": { "responseModalities": ["TEXT", "IMAGE"] },
        })
    }

    /// Finds the first image part among the candidates. Accepts both the
    /// camelCase and snake_case field spellings the API has used.
    fn extract_icon(payload: &Value) -> Result<GeneratedIcon, GenerationError> {
        let candidates = payload
            .get("candidates")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        for candidate in candidates {
            let parts = candidate
                .get("content")
                .and_then(|content| content.get("parts"))
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default();
            for part in parts {
                let Some(inline) = part
                    .get("inlineData")
                    .or_else(|| part.get("inline_data"))
                    .and_then(Value::as_object)
                else {
                    continue;
                };
                let data = inline
                    .get("data")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                if data.is_empty() {
                    continue;
                }
                let bytes = BASE64
                    .decode(data.as_bytes())
                    .map_err(|err| GenerationError::Malformed(format!("base64 decode: {err}")))?;
                let mime = inline
                    .get("mimeType")
                    .or_else(|| inline.get("mime_type"))
                    .and_then(Value::as_str)
                    .unwrap_or("image/png");
                return Ok(GeneratedIcon::new(bytes, mime));
            }
        }

        Err(GenerationError::NoImage)
    }

    /// Maps a non-success HTTP response to a classified error, preferring the
    /// service's own message when the body carries one.
    fn error_from_response(status: StatusCode, body: &str) -> GenerationError {
        let service_message = serde_json::from_str::<Value>(body).ok().and_then(|value| {
            value
                .get("error")
                .and_then(|error| error.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string)
        });

        if let Some(message) = service_message {
            return GenerationError::from_message(&message);
        }

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                GenerationError::Auth(format!("service returned HTTP {status}"))
            }
            StatusCode::TOO_MANY_REQUESTS => {
                GenerationError::RateLimited(format!("service returned HTTP {status}"))
            }
            _ => GenerationError::Other(format!("service returned HTTP {status}")),
        }
    }
}

#[async_trait]
impl GenerationService for GeminiClient {
    fn name(&self) -> &'static str {
        "Gemini"
    }

    async fn generate_icon(&self, request: IconRequest) -> Result<GeneratedIcon, GenerationError> {
        let Some(api_key) = Self::api_key() else {
            return Err(GenerationError::MissingCredentials);
        };

        log::info!(
            "generating icon with {} ({} style refs, content ref: {})",
            self.model,
            request.style_images.len(),
            request.content_image.is_some()
        );

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&Self::build_payload(&request))
            .send()
            .await
            .map_err(|err| GenerationError::Network(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| GenerationError::Network(err.to_string()))?;

        if !status.is_success() {
            let error = Self::error_from_response(status, &body);
            log::error!("generation request failed: {error}");
            return Err(error);
        }

        let payload: Value = serde_json::from_str(&body)
            .map_err(|err| GenerationError::Malformed(err.to_string()))?;
        let icon = Self::extract_icon(&payload)?;
        log::info!("received {} icon ({} bytes)", icon.mime, icon.bytes.len());
        Ok(icon)
    }
}
