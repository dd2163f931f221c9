// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::generation::port::{GeneratedIcon, GenerationError};
use crate::reference::{image::LoadError, BatchOutcome, ReferenceImage};
use crate::studio::RequestTicket;
use crate::ui::icon_display;
use crate::ui::notifications;
use crate::ui::prompt_controls;
use crate::ui::uploader;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// panel messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Uploader(uploader::Message),
    PromptControls(prompt_controls::Message),
    IconDisplay(icon_display::Message),
    Notification(notifications::Message),
    /// Result of the multi-file style picker (`None` = cancelled).
    StyleFilesChosen(Option<Vec<PathBuf>>),
    /// A whole style batch finished reading.
    StyleBatchLoaded(BatchOutcome),
    /// Result of the single-file subject picker (`None` = cancelled).
    ContentFileChosen(Option<PathBuf>),
    /// The subject reference finished reading.
    ContentLoaded(Result<ReferenceImage, LoadError>),
    /// A generation request completed; stale tickets are discarded.
    GenerationCompleted {
        ticket: RequestTicket,
        result: Result<GeneratedIcon, GenerationError>,
    },
    /// Result of the save dialog (`None` = cancelled).
    SaveDialogResult(Option<PathBuf>),
    /// The generated icon was written to disk (or not).
    IconSaved(Result<PathBuf, String>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Periodic tick for the spinner and toast auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
}
