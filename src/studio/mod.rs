// SPDX-License-Identifier: MPL-2.0
//! Central studio state: the style set, the optional subject image, the
//! prompt, and the generation outcome.
//!
//! Owned by the application root; views receive read-only snapshots and all
//! mutation goes through the operations here, so every update is a
//! whole-value replace on the event loop.

pub mod outcome;

pub use outcome::{Outcome, RequestTicket, Tracker};

use crate::generation::port::{GeneratedIcon, GenerationError, IconRequest, ImagePayload};
use crate::reference::ReferenceImage;

#[derive(Debug, Default)]
pub struct State {
    styles: Vec<ReferenceImage>,
    content: Option<ReferenceImage>,
    prompt: String,
    tracker: Tracker,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- snapshots -------------------------------------------------------

    pub fn styles(&self) -> &[ReferenceImage] {
        &self.styles
    }

    pub fn content(&self) -> Option<&ReferenceImage> {
        self.content.as_ref()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn outcome(&self) -> &Outcome {
        self.tracker.outcome()
    }

    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.tracker.is_in_flight()
    }

    /// Ready iff the prompt is non-empty AND at least one style reference is
    /// loaded. The subject image is never required.
    #[must_use]
    pub fn is_ready_to_generate(&self) -> bool {
        !self.prompt.is_empty() && !self.styles.is_empty()
    }

    // --- uploads ---------------------------------------------------------

    /// Appends a completed batch to the style set in one update, preserving
    /// the selection order.
    pub fn push_styles(&mut self, images: Vec<ReferenceImage>) {
        self.styles.extend(images);
    }

    /// Removes exactly the entry at `index`; remaining entries keep their
    /// relative order.
    pub fn remove_style(&mut self, index: usize) -> Option<ReferenceImage> {
        if index < self.styles.len() {
            Some(self.styles.remove(index))
        } else {
            None
        }
    }

    /// Sets the subject image, discarding any previous one.
    pub fn set_content(&mut self, image: ReferenceImage) {
        self.content = Some(image);
    }

    pub fn clear_content(&mut self) {
        self.content = None;
    }

    pub fn set_prompt(&mut self, prompt: String) {
        self.prompt = prompt;
    }

    // --- generation ------------------------------------------------------

    /// Starts a generation attempt: mints a ticket and builds the request
    /// from the current inputs.
    ///
    /// Returns `None` — with no state change and nothing dispatched — when
    /// the readiness predicate does not hold or a request is already in
    /// flight.
    pub fn begin_generation(&mut self) -> Option<(RequestTicket, IconRequest)> {
        if !self.is_ready_to_generate() {
            return None;
        }
        let ticket = self.tracker.begin()?;
        Some((ticket, self.icon_request()))
    }

    /// Applies a completed generation. Returns `false` for stale tickets.
    pub fn resolve_generation(
        &mut self,
        ticket: RequestTicket,
        result: Result<GeneratedIcon, GenerationError>,
    ) -> bool {
        self.tracker.resolve(ticket, result)
    }

    /// Clears every input and returns the outcome to idle. A response still
    /// in flight will be discarded when it arrives.
    pub fn reset(&mut self) {
        self.styles.clear();
        self.content = None;
        self.prompt.clear();
        self.tracker.reset();
    }

    fn icon_request(&self) -> IconRequest {
        IconRequest {
            style_images: self.styles.iter().map(payload_of).collect(),
            content_image: self.content.as_ref().map(payload_of),
            prompt: self.prompt.clone(),
        }
    }
}

fn payload_of(image: &ReferenceImage) -> ImagePayload {
    ImagePayload {
        mime: image.mime().to_string(),
        data: image.base64_data().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::port::{GeneratedIcon, GenerationError};
    use crate::reference::image::test_png_bytes as png_bytes;
    use std::path::PathBuf;

    fn reference(name: &str) -> ReferenceImage {
        ReferenceImage::from_bytes(PathBuf::from(name), png_bytes()).expect("fixture image")
    }

    #[test]
    fn removals_do_not_reorder_survivors() {
        let mut state = State::new();
        state.push_styles(vec![reference("a.png"), reference("b.png")]);
        state.push_styles(vec![reference("c.png"), reference("d.png")]);

        state.remove_style(1);
        let names: Vec<String> = state.styles().iter().map(ReferenceImage::file_name).collect();
        assert_eq!(names, ["a.png", "c.png", "d.png"]);

        state.remove_style(0);
        let names: Vec<String> = state.styles().iter().map(ReferenceImage::file_name).collect();
        assert_eq!(names, ["c.png", "d.png"]);
    }

    #[test]
    fn remove_out_of_range_is_a_no_op() {
        let mut state = State::new();
        state.push_styles(vec![reference("a.png")]);
        assert!(state.remove_style(5).is_none());
        assert_eq!(state.styles().len(), 1);
    }

    #[test]
    fn readiness_requires_prompt_and_styles() {
        let mut state = State::new();
        assert!(!state.is_ready_to_generate());

        state.set_prompt("a sun icon".to_string());
        assert!(!state.is_ready_to_generate());

        state.push_styles(vec![reference("a.png")]);
        assert!(state.is_ready_to_generate());

        state.set_prompt(String::new());
        assert!(!state.is_ready_to_generate());
    }

    #[test]
    fn content_image_never_affects_readiness() {
        let mut state = State::new();
        state.set_content(reference("subject.png"));
        assert!(!state.is_ready_to_generate());

        state.set_prompt("a sun icon".to_string());
        state.push_styles(vec![reference("a.png")]);
        state.clear_content();
        assert!(state.is_ready_to_generate());
    }

    #[test]
    fn begin_generation_refuses_when_not_ready() {
        let mut state = State::new();
        state.set_prompt("a sun icon".to_string());
        assert!(state.begin_generation().is_none());
        assert!(matches!(state.outcome(), Outcome::Idle));
    }

    #[test]
    fn begin_generation_refuses_while_in_flight() {
        let mut state = State::new();
        state.set_prompt("a sun icon".to_string());
        state.push_styles(vec![reference("a.png")]);

        assert!(state.begin_generation().is_some());
        assert!(state.begin_generation().is_none());
    }

    #[test]
    fn request_carries_styles_in_order_and_prompt() {
        let mut state = State::new();
        state.set_prompt("a sun icon".to_string());
        state.push_styles(vec![reference("a.png"), reference("b.png")]);

        let (_, request) = state.begin_generation().expect("ready");
        assert_eq!(request.style_images.len(), 2);
        assert_eq!(request.prompt, "a sun icon");
        assert!(request.content_image.is_none());
    }

    #[test]
    fn cleared_content_is_omitted_from_request() {
        let mut state = State::new();
        state.set_prompt("a robot cat".to_string());
        state.push_styles(vec![reference("a.png")]);
        state.set_content(reference("subject.png"));
        state.clear_content();

        let (_, request) = state.begin_generation().expect("ready");
        assert!(request.content_image.is_none());
    }

    #[test]
    fn replacing_content_discards_the_prior_one() {
        let mut state = State::new();
        state.set_content(reference("first.png"));
        state.set_content(reference("second.png"));
        assert_eq!(state.content().expect("content").file_name(), "second.png");
    }

    #[test]
    fn successful_generation_reaches_ready() {
        let mut state = State::new();
        state.set_prompt("a sun icon".to_string());
        state.push_styles(vec![reference("a.png"), reference("b.png")]);

        let (ticket, _) = state.begin_generation().expect("ready");
        let icon = GeneratedIcon::new(vec![9, 9, 9], "image/png");
        assert!(state.resolve_generation(ticket, Ok(icon.clone())));

        match state.outcome() {
            Outcome::Ready { icon: stored, .. } => assert_eq!(stored, &icon),
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[test]
    fn failed_generation_keeps_message() {
        let mut state = State::new();
        state.set_prompt("a sun icon".to_string());
        state.push_styles(vec![reference("a.png")]);

        let (ticket, _) = state.begin_generation().expect("ready");
        state.resolve_generation(ticket, Err(GenerationError::from_message("rate limited")));

        match state.outcome() {
            Outcome::Failed(error) => assert!(format!("{error}").contains("rate limited")),
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn reset_clears_everything_from_any_state() {
        let mut state = State::new();
        state.set_prompt("a sun icon".to_string());
        state.push_styles(vec![reference("a.png")]);
        state.set_content(reference("subject.png"));
        let (ticket, _) = state.begin_generation().expect("ready");

        state.reset();

        assert!(state.styles().is_empty());
        assert!(state.content().is_none());
        assert!(state.prompt().is_empty());
        assert!(matches!(state.outcome(), Outcome::Idle));

        // The in-flight response is now stale and must be discarded.
        assert!(!state.resolve_generation(ticket, Ok(GeneratedIcon::new(vec![1], "image/png"))));
        assert!(matches!(state.outcome(), Outcome::Idle));
    }
}
