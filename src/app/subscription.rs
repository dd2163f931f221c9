// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native window file drops feed the style set, and a periodic tick runs
//! only while something needs it (spinner animation, toast auto-dismiss).

use super::{App, Message};
use crate::config::defaults::TICK_INTERVAL_MS;
use iced::{event, time, Subscription};
use std::time::Duration;

pub(super) fn create(app: &App) -> Subscription<Message> {
    let drops = event::listen_with(|event, _status, _window| {
        if let event::Event::Window(iced::window::Event::FileDropped(path)) = event {
            return Some(Message::FileDropped(path));
        }
        None
    });

    let tick = if app.studio.is_generating() || app.notifications.has_notifications() {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    };

    Subscription::batch([drops, tick])
}
