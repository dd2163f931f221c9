// SPDX-License-Identifier: MPL-2.0
//! Internationalization via Fluent.

pub mod fluent;

pub use fluent::I18n;
