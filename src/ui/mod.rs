// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern: panels
//! are pure view functions over studio snapshots, emitting messages the
//! application root translates into state changes and tasks.
//!
//! # Panels
//!
//! - [`header`] - Branding bar
//! - [`uploader`] - Style-set drop zone and thumbnail grid
//! - [`prompt_controls`] - Subject reference, prompt text, generate action
//! - [`icon_display`] - Result panel (spinner / error / icon / placeholder)
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (error display)
//! - [`widgets`] - Custom Iced widgets (animated spinner)
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - Embedded SVG icon loading
//! - [`theming`] - Light/Dark/System theme mode management

pub mod components;
pub mod design_tokens;
pub mod header;
pub mod icon_display;
pub mod icons;
pub mod notifications;
pub mod prompt_controls;
pub mod styles;
pub mod theming;
pub mod uploader;
pub mod widgets;
