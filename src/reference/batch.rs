// SPDX-License-Identifier: MPL-2.0
//! Batched loading of several reference images.
//!
//! All reads run concurrently and are joined before anything is surfaced:
//! the caller receives one [`BatchOutcome`] covering the whole selection,
//! never a partially-delivered batch.

use super::image::{LoadError, ReferenceImage};
use futures_util::future::join_all;
use std::path::PathBuf;

/// Result of loading a batch: readable files in selection order, plus a
/// record for every file that failed.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub loaded: Vec<ReferenceImage>,
    pub failed: Vec<LoadError>,
}

impl BatchOutcome {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty() && self.failed.is_empty()
    }
}

/// Reads every file in the selection concurrently and joins the results.
///
/// Order of `loaded` matches the order of the surviving paths in `paths`;
/// unreadable or undecodable files land in `failed` instead of aborting the
/// batch.
pub async fn load_batch(paths: Vec<PathBuf>) -> BatchOutcome {
    let results = join_all(paths.into_iter().map(ReferenceImage::load)).await;

    let mut outcome = BatchOutcome::default();
    for result in results {
        match result {
            Ok(image) => outcome.loaded.push(image),
            Err(err) => outcome.failed.push(err),
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_fixture(dir: &std::path::Path, name: &str, shade: u8) -> PathBuf {
        let img = image_rs::RgbaImage::from_pixel(2, 2, image_rs::Rgba([shade, shade, shade, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
            .expect("encode fixture");
        let path = dir.join(name);
        std::fs::write(&path, bytes).expect("write fixture");
        path
    }

    #[tokio::test]
    async fn batch_preserves_selection_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let a = png_fixture(dir.path(), "a.png", 1);
        let b = png_fixture(dir.path(), "b.png", 2);
        let c = png_fixture(dir.path(), "c.png", 3);

        let outcome = load_batch(vec![a.clone(), b.clone(), c.clone()]).await;

        assert!(outcome.failed.is_empty());
        let names: Vec<String> = outcome.loaded.iter().map(ReferenceImage::file_name).collect();
        assert_eq!(names, ["a.png", "b.png", "c.png"]);
    }

    #[tokio::test]
    async fn batch_with_bad_file_is_partial_success() {
        let dir = tempfile::tempdir().expect("tempdir");
        let good = png_fixture(dir.path(), "good.png", 7);
        let bad = dir.path().join("bad.png");
        std::fs::write(&bad, b"definitely not an image").expect("write junk");
        let missing = dir.path().join("missing.png");

        let outcome = load_batch(vec![good, bad, missing]).await;

        assert_eq!(outcome.loaded.len(), 1);
        assert_eq!(outcome.loaded[0].file_name(), "good.png");
        assert_eq!(outcome.failed.len(), 2);
        assert_eq!(outcome.failed[0].file_name(), "bad.png");
        assert_eq!(outcome.failed[1].file_name(), "missing.png");
    }

    #[tokio::test]
    async fn empty_selection_yields_empty_outcome() {
        let outcome = load_batch(Vec::new()).await;
        assert!(outcome.is_empty());
    }
}
