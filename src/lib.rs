// SPDX-License-Identifier: MPL-2.0
//! `iconsmith` is a desktop icon generator built with the Iced GUI framework.
//!
//! The user collects a handful of style-reference illustrations, optionally a
//! subject image, and a text prompt; the application asks a generative-image
//! backend to synthesize an icon in that style and displays (or saves) the
//! result. The crate demonstrates internationalization with Fluent, user
//! preference management, and modular UI design.

pub mod app;
pub mod config;
pub mod error;
pub mod generation;
pub mod i18n;
pub mod logger;
pub mod reference;
pub mod studio;
pub mod ui;
