// SPDX-License-Identifier: MPL-2.0
//! Reference-image ingestion: async file reads, decode validation, and
//! base64 data-URL construction for the generation payload.

pub mod batch;
pub mod image;

pub use batch::{load_batch, BatchOutcome};
pub use image::{LoadError, ReferenceImage};
