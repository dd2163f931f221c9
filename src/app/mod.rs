// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the studio state, localization, toasts, and the
//! generation service together, and translates messages into side effects
//! like file dialogs, batched reads, and generation requests. Policy
//! decisions (window sizing, which service adapter to use, reset semantics)
//! stay close to the main update loop so user-facing behavior is easy to
//! audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::generation::{GeminiClient, GenerationService};
use crate::i18n::I18n;
use crate::studio;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 680;
pub const MIN_WINDOW_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    pub(crate) studio: studio::State,
    pub(crate) notifications: notifications::Manager,
    pub(crate) service: Arc<dyn GenerationService>,
    pub(crate) theme_mode: ThemeMode,
    /// Spinner angle, advanced on ticks while a request is in flight.
    pub(crate) spinner_rotation: f32,
    pub(crate) error_details_visible: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("style_count", &self.studio.styles().len())
            .field("outcome", &self.studio.outcome())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(|state: &App| state.title())
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, &config);
        let service: Arc<dyn GenerationService> =
            Arc::new(GeminiClient::new(&config.generation));

        let app = App {
            i18n,
            studio: studio::State::new(),
            notifications: notifications::Manager::new(),
            service,
            theme_mode: config.general.theme_mode,
            spinner_rotation: 0.0,
            error_details_visible: false,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.resolve()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create(self)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Uploader(msg) => update::handle_uploader_message(self, msg),
            Message::PromptControls(msg) => update::handle_prompt_message(self, msg),
            Message::IconDisplay(msg) => update::handle_display_message(self, msg),
            Message::Notification(msg) => {
                self.notifications.handle_message(&msg);
                Task::none()
            }
            Message::StyleFilesChosen(paths) => update::handle_style_files_chosen(paths),
            Message::StyleBatchLoaded(outcome) => update::handle_style_batch_loaded(self, outcome),
            Message::ContentFileChosen(path) => update::handle_content_file_chosen(path),
            Message::ContentLoaded(result) => update::handle_content_loaded(self, result),
            Message::GenerationCompleted { ticket, result } => {
                update::handle_generation_completed(self, ticket, result)
            }
            Message::SaveDialogResult(path) => update::handle_save_dialog_result(self, path),
            Message::IconSaved(result) => update::handle_icon_saved(self, result),
            Message::FileDropped(path) => update::handle_file_dropped(path),
            Message::Tick(_) => update::handle_tick(self),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            studio: &self.studio,
            notifications: &self.notifications,
            spinner_rotation: self.spinner_rotation,
            error_details_visible: self.error_details_visible,
        })
    }
}
