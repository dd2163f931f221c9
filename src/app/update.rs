// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application root.
//!
//! Each handler mutates state and/or returns a `Task` whose completion
//! re-enters `App::update` as another message. All failures are converted to
//! toasts or display state here; nothing propagates past this boundary.

use super::{App, Message};
use crate::config::defaults::SPINNER_STEP;
use crate::generation::port::{GeneratedIcon, GenerationError};
use crate::reference::{self, image::LoadError, BatchOutcome, ReferenceImage};
use crate::studio::{Outcome, RequestTicket};
use crate::ui::icon_display;
use crate::ui::notifications::Notification;
use crate::ui::prompt_controls;
use crate::ui::uploader;
use iced::Task;
use std::path::PathBuf;
use std::sync::Arc;

/// Extensions offered by the image pickers; matches the formats
/// [`ReferenceImage`] accepts.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp", "ico"];

// ---------------------------------------------------------------------------
// Style set
// ---------------------------------------------------------------------------

pub(super) fn handle_uploader_message(app: &mut App, message: uploader::Message) -> Task<Message> {
    match message {
        uploader::Message::PickFiles => open_style_dialog(),
        uploader::Message::Remove(index) => {
            app.studio.remove_style(index);
            Task::none()
        }
    }
}

fn open_style_dialog() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .add_filter("Images", IMAGE_EXTENSIONS)
                .pick_files()
                .await
                .map(|handles| {
                    handles
                        .iter()
                        .map(|handle| handle.path().to_path_buf())
                        .collect()
                })
        },
        Message::StyleFilesChosen,
    )
}

pub(super) fn handle_style_files_chosen(paths: Option<Vec<PathBuf>>) -> Task<Message> {
    let Some(paths) = paths else {
        // User cancelled the dialog.
        return Task::none();
    };
    if paths.is_empty() {
        return Task::none();
    }
    Task::perform(reference::load_batch(paths), Message::StyleBatchLoaded)
}

pub(super) fn handle_style_batch_loaded(app: &mut App, outcome: BatchOutcome) -> Task<Message> {
    for failure in &outcome.failed {
        log::warn!("skipping unreadable style reference: {failure}");
        app.notifications.push(
            Notification::warning("notification-style-read-failed")
                .with_arg("file", failure.file_name()),
        );
    }
    // One batched append after every read completed; partial batches are
    // never surfaced incrementally.
    app.studio.push_styles(outcome.loaded);
    Task::none()
}

/// Dropped files join the style set through the same batch path as the
/// picker; the window delivers drops one file at a time.
pub(super) fn handle_file_dropped(path: PathBuf) -> Task<Message> {
    Task::perform(reference::load_batch(vec![path]), Message::StyleBatchLoaded)
}

// ---------------------------------------------------------------------------
// Subject reference
// ---------------------------------------------------------------------------

pub(super) fn handle_prompt_message(
    app: &mut App,
    message: prompt_controls::Message,
) -> Task<Message> {
    match message {
        prompt_controls::Message::PickContentFile => open_content_dialog(),
        prompt_controls::Message::ClearContent => {
            app.studio.clear_content();
            Task::none()
        }
        prompt_controls::Message::PromptChanged(prompt) => {
            app.studio.set_prompt(prompt);
            Task::none()
        }
        prompt_controls::Message::GenerateRequested => handle_generate_requested(app),
    }
}

fn open_content_dialog() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .add_filter("Images", IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::ContentFileChosen,
    )
}

pub(super) fn handle_content_file_chosen(path: Option<PathBuf>) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };
    Task::perform(ReferenceImage::load(path), Message::ContentLoaded)
}

pub(super) fn handle_content_loaded(
    app: &mut App,
    result: Result<ReferenceImage, LoadError>,
) -> Task<Message> {
    match result {
        Ok(image) => app.studio.set_content(image),
        Err(failure) => {
            log::warn!("failed to read subject reference: {failure}");
            app.notifications.push(
                Notification::warning("notification-content-read-failed")
                    .with_arg("file", failure.file_name()),
            );
        }
    }
    Task::none()
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

fn handle_generate_requested(app: &mut App) -> Task<Message> {
    if app.studio.is_generating() {
        // Serialized: a second dispatch while one is in flight is ignored.
        return Task::none();
    }
    if !app.studio.is_ready_to_generate() {
        // Validation failures never touch the outcome machine.
        app.notifications
            .push(Notification::warning("notification-validation-missing-inputs"));
        return Task::none();
    }

    let Some((ticket, request)) = app.studio.begin_generation() else {
        return Task::none();
    };
    app.error_details_visible = false;
    app.spinner_rotation = 0.0;

    let service = Arc::clone(&app.service);
    log::info!("dispatching generation request via {}", service.name());
    Task::perform(
        async move { service.generate_icon(request).await },
        move |result| Message::GenerationCompleted { ticket, result },
    )
}

pub(super) fn handle_generation_completed(
    app: &mut App,
    ticket: RequestTicket,
    result: Result<GeneratedIcon, GenerationError>,
) -> Task<Message> {
    if let Err(error) = &result {
        log::error!("generation failed: {error}");
    }
    if !app.studio.resolve_generation(ticket, result) {
        // A reset happened while the request was out; drop the response.
        log::debug!("discarding late generation response for a stale request");
    }
    Task::none()
}

// ---------------------------------------------------------------------------
// Result actions
// ---------------------------------------------------------------------------

pub(super) fn handle_display_message(
    app: &mut App,
    message: icon_display::Message,
) -> Task<Message> {
    match message {
        icon_display::Message::SaveRequested => open_save_dialog(app),
        icon_display::Message::ResetRequested => handle_reset(app),
        icon_display::Message::ToggleErrorDetails => {
            app.error_details_visible = !app.error_details_visible;
            Task::none()
        }
    }
}

fn open_save_dialog(app: &App) -> Task<Message> {
    let Outcome::Ready { icon, .. } = app.studio.outcome() else {
        return Task::none();
    };
    let file_name = icon.suggested_file_name();
    let extension = icon.extension();
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_file_name(&file_name)
                .add_filter("Image", &[extension])
                .save_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::SaveDialogResult,
    )
}

pub(super) fn handle_save_dialog_result(app: &mut App, path: Option<PathBuf>) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };
    // Re-read the outcome: a reset may have raced the dialog.
    let Outcome::Ready { icon, .. } = app.studio.outcome() else {
        return Task::none();
    };
    let bytes = icon.bytes.clone();
    Task::perform(
        async move {
            tokio::fs::write(&path, bytes)
                .await
                .map(|()| path)
                .map_err(|err| err.to_string())
        },
        Message::IconSaved,
    )
}

pub(super) fn handle_icon_saved(
    app: &mut App,
    result: Result<PathBuf, String>,
) -> Task<Message> {
    match result {
        Ok(path) => {
            log::info!("icon saved to {}", path.display());
            app.notifications
                .push(Notification::success("notification-icon-saved"));
        }
        Err(error) => {
            log::error!("failed to save icon: {error}");
            app.notifications
                .push(Notification::error("notification-icon-save-failed"));
        }
    }
    Task::none()
}

fn handle_reset(app: &mut App) -> Task<Message> {
    app.studio.reset();
    app.error_details_visible = false;
    app.spinner_rotation = 0.0;
    Task::none()
}

// ---------------------------------------------------------------------------
// Tick
// ---------------------------------------------------------------------------

pub(super) fn handle_tick(app: &mut App) -> Task<Message> {
    if app.studio.is_generating() {
        app.spinner_rotation += SPINNER_STEP;
    }
    app.notifications.tick();
    Task::none()
}
