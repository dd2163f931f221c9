// SPDX-License-Identifier: MPL-2.0
//! Default values shared between the config file and the generation client.

/// Model used when `[generation] model` is unset.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image-preview";

/// API base used when `[generation] api_base` is unset.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Interval of the UI tick driving the spinner and toast auto-dismiss.
pub const TICK_INTERVAL_MS: u64 = 100;

/// Radians the busy spinner advances per tick.
pub const SPINNER_STEP: f32 = 0.18;
