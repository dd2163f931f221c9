// SPDX-License-Identifier: MPL-2.0
//! Generation service boundary: the port consumed by the application and the
//! Gemini adapter implementing it.

pub mod gemini;
pub mod port;

pub use gemini::GeminiClient;
pub use port::{GeneratedIcon, GenerationError, GenerationService, IconRequest, ImagePayload};
