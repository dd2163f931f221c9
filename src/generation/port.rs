// SPDX-License-Identifier: MPL-2.0
//! Generation service port definition.
//!
//! This module defines the [`GenerationService`] trait the application
//! dispatches icon requests through, together with the request/response types
//! and the [`GenerationError`] taxonomy.
//!
//! # Design Notes
//!
//! - The trait is async and object-safe; the app holds an `Arc<dyn ...>`
//! - Raw service messages are classified into specific variants so the UI can
//!   show a localized, friendly message while keeping the raw text as details
//! - Request construction lives in the studio state holder, which knows the
//!   readiness rules

use crate::reference::image::encode_data_url;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use std::fmt;

// =============================================================================
// Request / response types
// =============================================================================

/// One image of the request payload: MIME type plus base64-encoded bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub mime: String,
    pub data: String,
}

/// Everything the generation service needs to synthesize an icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRequest {
    /// Style references, in upload order.
    pub style_images: Vec<ImagePayload>,
    /// Optional subject/content reference.
    pub content_image: Option<ImagePayload>,
    pub prompt: String,
}

/// The synthesized icon as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub bytes: Vec<u8>,
    pub mime: String,
}

impl GeneratedIcon {
    #[must_use]
    pub fn new(bytes: Vec<u8>, mime: impl Into<String>) -> Self {
        Self {
            bytes,
            mime: mime.into(),
        }
    }

    /// Data URL of the icon, for display or clipboard-style embedding.
    #[must_use]
    pub fn data_url(&self) -> String {
        encode_data_url(&self.mime, &BASE64.encode(&self.bytes))
    }

    /// File extension matching the MIME type.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self.mime.as_str() {
            "image/jpeg" => "jpg",
            "image/webp" => "webp",
            "image/gif" => "gif",
            _ => "png",
        }
    }

    /// Default file name offered by the save dialog.
    #[must_use]
    pub fn suggested_file_name(&self) -> String {
        format!("generated-icon.{}", self.extension())
    }
}

// =============================================================================
// GenerationError
// =============================================================================

/// Errors that can occur while requesting an icon.
///
/// Used to provide user-friendly, localized error messages while retaining
/// the raw service text for the details panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// No API key available in the environment.
    MissingCredentials,

    /// The service throttled the request.
    RateLimited(String),

    /// The account's quota is exhausted.
    QuotaExceeded(String),

    /// The key was rejected or lacks permission.
    Auth(String),

    /// The request was refused by a content policy.
    Blocked(String),

    /// The request never completed (DNS, TLS, connect, timeout).
    Network(String),

    /// The service answered successfully but returned no image part.
    NoImage,

    /// The response could not be parsed.
    Malformed(String),

    /// Generic failure with raw message.
    Other(String),
}

impl GenerationError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            GenerationError::MissingCredentials => "error-generate-missing-key",
            GenerationError::RateLimited(_) => "error-generate-rate-limited",
            GenerationError::QuotaExceeded(_) => "error-generate-quota",
            GenerationError::Auth(_) => "error-generate-auth",
            GenerationError::Blocked(_) => "error-generate-blocked",
            GenerationError::Network(_) => "error-generate-network",
            GenerationError::NoImage => "error-generate-no-image",
            GenerationError::Malformed(_) => "error-generate-malformed",
            GenerationError::Other(_) => "error-generate-general",
        }
    }

    /// Attempts to parse a raw service message into a specific error type.
    /// This is used to categorize errors from the generation backend.
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        // Quota before rate limiting: quota messages often mention both.
        if msg_lower.contains("quota") || msg_lower.contains("exhausted") {
            return GenerationError::QuotaExceeded(msg.to_string());
        }

        if msg_lower.contains("rate limit")
            || msg_lower.contains("rate-limit")
            || msg_lower.contains("too many requests")
            || msg_lower.contains("429")
        {
            return GenerationError::RateLimited(msg.to_string());
        }

        if msg_lower.contains("api key")
            || msg_lower.contains("unauthorized")
            || msg_lower.contains("unauthenticated")
            || msg_lower.contains("permission denied")
            || msg_lower.contains("401")
            || msg_lower.contains("403")
        {
            return GenerationError::Auth(msg.to_string());
        }

        if msg_lower.contains("safety")
            || msg_lower.contains("blocked")
            || msg_lower.contains("prohibited")
        {
            return GenerationError::Blocked(msg.to_string());
        }

        if msg_lower.contains("network")
            || msg_lower.contains("connect")
            || msg_lower.contains("timed out")
            || msg_lower.contains("timeout")
            || msg_lower.contains("dns")
            || msg_lower.contains("tls")
        {
            return GenerationError::Network(msg.to_string());
        }

        GenerationError::Other(msg.to_string())
    }
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::MissingCredentials => {
                write!(f, "No API key found in the environment")
            }
            GenerationError::RateLimited(msg) => write!(f, "Rate limited: {}", msg),
            GenerationError::QuotaExceeded(msg) => write!(f, "Quota exceeded: {}", msg),
            GenerationError::Auth(msg) => write!(f, "Authentication failed: {}", msg),
            GenerationError::Blocked(msg) => write!(f, "Request blocked: {}", msg),
            GenerationError::Network(msg) => write!(f, "Network error: {}", msg),
            GenerationError::NoImage => write!(f, "The service returned no image"),
            GenerationError::Malformed(msg) => write!(f, "Malformed response: {}", msg),
            GenerationError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for GenerationError {}

// =============================================================================
// GenerationService trait
// =============================================================================

/// Port for icon synthesis.
///
/// Adapters implement this over a concrete backend; see
/// [`crate::generation::gemini::GeminiClient`]. Implementations must be
/// `Send + Sync` so the app can share one instance across dispatched tasks.
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Human-readable adapter name, for logging.
    fn name(&self) -> &'static str;

    /// Performs a single generation attempt.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerationError`] describing why no icon was produced;
    /// the caller never retries automatically.
    async fn generate_icon(&self, request: IconRequest) -> Result<GeneratedIcon, GenerationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_error_display() {
        let err = GenerationError::MissingCredentials;
        assert_eq!(format!("{err}"), "No API key found in the environment");

        let err = GenerationError::RateLimited("rate limited".to_string());
        assert!(format!("{err}").contains("rate limited"));

        let err = GenerationError::Other("backend hiccup".to_string());
        assert_eq!(format!("{err}"), "backend hiccup");
    }

    #[test]
    fn from_message_quota() {
        let err = GenerationError::from_message("Resource has been exhausted (e.g. check quota)");
        assert!(matches!(err, GenerationError::QuotaExceeded(_)));
    }

    #[test]
    fn from_message_rate_limited() {
        let err = GenerationError::from_message("429 Too Many Requests");
        assert!(matches!(err, GenerationError::RateLimited(_)));
    }

    #[test]
    fn from_message_auth() {
        let err = GenerationError::from_message("API key not valid. Please pass a valid API key.");
        assert!(matches!(err, GenerationError::Auth(_)));
    }

    #[test]
    fn from_message_blocked() {
        let err = GenerationError::from_message("Response blocked by safety settings");
        assert!(matches!(err, GenerationError::Blocked(_)));
    }

    #[test]
    fn from_message_network() {
        let err = GenerationError::from_message("connection timed out");
        assert!(matches!(err, GenerationError::Network(_)));
    }

    #[test]
    fn from_message_fallback() {
        let err = GenerationError::from_message("something odd happened");
        assert!(matches!(err, GenerationError::Other(_)));
    }

    #[test]
    fn i18n_keys_are_distinct_per_category() {
        assert_eq!(
            GenerationError::MissingCredentials.i18n_key(),
            "error-generate-missing-key"
        );
        assert_eq!(
            GenerationError::RateLimited(String::new()).i18n_key(),
            "error-generate-rate-limited"
        );
        assert_eq!(GenerationError::NoImage.i18n_key(), "error-generate-no-image");
        assert_eq!(
            GenerationError::Other(String::new()).i18n_key(),
            "error-generate-general"
        );
    }

    #[test]
    fn generated_icon_file_names_follow_mime() {
        let png = GeneratedIcon::new(vec![1, 2, 3], "image/png");
        assert_eq!(png.suggested_file_name(), "generated-icon.png");

        let webp = GeneratedIcon::new(vec![1, 2, 3], "image/webp");
        assert_eq!(webp.suggested_file_name(), "generated-icon.webp");
    }

    #[test]
    fn generated_icon_data_url_embeds_payload() {
        let icon = GeneratedIcon::new(b"ABC".to_vec(), "image/png");
        assert_eq!(icon.data_url(), "data:image/png;base64,QUJD");
    }

    // Mock implementation for testing the trait object shape.
    struct MockService {
        succeed: bool,
    }

    #[async_trait]
    impl GenerationService for MockService {
        fn name(&self) -> &'static str {
            "Mock Service"
        }

        async fn generate_icon(
            &self,
            _request: IconRequest,
        ) -> Result<GeneratedIcon, GenerationError> {
            if self.succeed {
                Ok(GeneratedIcon::new(vec![1], "image/png"))
            } else {
                Err(GenerationError::from_message("rate limited"))
            }
        }
    }

    #[tokio::test]
    async fn mock_service_success() {
        let service: std::sync::Arc<dyn GenerationService> =
            std::sync::Arc::new(MockService { succeed: true });
        let request = IconRequest {
            style_images: vec![],
            content_image: None,
            prompt: "a sun icon".to_string(),
        };
        let icon = service.generate_icon(request).await.expect("should succeed");
        assert_eq!(icon.mime, "image/png");
    }

    #[tokio::test]
    async fn mock_service_failure_classifies_message() {
        let service = MockService { succeed: false };
        let request = IconRequest {
            style_images: vec![],
            content_image: None,
            prompt: String::new(),
        };
        let err = service.generate_icon(request).await.expect_err("should fail");
        assert!(matches!(err, GenerationError::RateLimited(_)));
    }
}
