//! Console Logger
//!
//! A `log` backend for the browser. Each record goes to the devtools
//! console at the matching level, prefixed with a UTC timestamp and the
//! record's target.
//!
//! Off wasm32 the records go to stderr instead, which keeps the logger
//! usable from host-side unit tests.

use std::sync::OnceLock;

use chrono::{SecondsFormat, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        write_console(record.level(), &format_line(record, &timestamp));
    }

    fn flush(&self) {}
}

fn format_line(record: &Record, timestamp: &str) -> String {
    format!("{} {:<5} [{}] {}", timestamp, record.level(), record.target(), record.args())
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, message: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(message);
    match level {
        Level::Error => console::error_1(&value),
        Level::Warn => console::warn_1(&value),
        Level::Info => console::info_1(&value),
        Level::Debug | Level::Trace => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, message: &str) {
    eprintln!("{}", message);
}

/// Install the global logger. Only the first call has any effect.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level));
    log::set_logger(logger)?;
    log::set_max_level(logger.level);
    Ok(())
}
