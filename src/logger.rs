// SPDX-License-Identifier: MPL-2.0
//! Console logger behind the `log` facade.
//!
//! Formats records as `HH:MM:SS.mmm LEVEL target message` with the level
//! colorized. The minimum level defaults to `info` and can be overridden
//! with the `ICONSMITH_LOG` environment variable (`trace` .. `error`).

use colored::Colorize;
use log::{Level, LevelFilter, Metadata, Record};
use once_cell::sync::Lazy;

static LOGGER: Lazy<ConsoleLogger> = Lazy::new(ConsoleLogger::default);

const LEVEL_ENV_VAR: &str = "ICONSMITH_LOG";

/// Installs the console logger. Safe to call more than once; only the first
/// call takes effect.
pub fn init() {
    if log::set_logger(&*LOGGER).is_ok() {
        log::set_max_level(level_from_env());
    }
}

fn level_from_env() -> LevelFilter {
    match std::env::var(LEVEL_ENV_VAR) {
        Ok(value) => parse_level(&value),
        Err(_) => LevelFilter::Info,
    }
}

fn parse_level(value: &str) -> LevelFilter {
    match value.trim().to_ascii_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

#[derive(Default)]
struct ConsoleLogger;

impl ConsoleLogger {
    fn level_label(level: Level) -> colored::ColoredString {
        match level {
            Level::Trace => "TRACE".cyan(),
            Level::Debug => "DEBUG".blue(),
            Level::Info => " INFO".green(),
            Level::Warn => " WARN".yellow(),
            Level::Error => "ERROR".red(),
        }
    }
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
        eprintln!(
            "{} {} {} {}",
            timestamp.to_string().dimmed(),
            Self::level_label(record.level()),
            record.target().dimmed(),
            record.args()
        );
    }

    fn flush(&self) {}
}
