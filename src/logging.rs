//! Console Logger
//!
//! `log` backend writing to the browser console. The most recent lines are
//! kept in a small ring so they can be dumped from devtools after the fact.

use std::collections::VecDeque;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

const RING_CAPACITY: usize = 200;

struct ConsoleLogger {
    recent: Mutex<VecDeque<String>>,
}

static LOGGER: ConsoleLogger = ConsoleLogger {
    recent: Mutex::new(VecDeque::new()),
};

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), record.target(), &record.args().to_string());

        let js_line = wasm_bindgen::JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&js_line),
            Level::Warn => web_sys::console::warn_1(&js_line),
            Level::Info => web_sys::console::info_1(&js_line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&js_line),
        }

        if let Ok(mut recent) = self.recent.lock() {
            push_bounded(&mut recent, line, RING_CAPACITY);
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Safe to call more than once.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Snapshot of the most recent log lines, oldest first
pub fn recent_lines() -> Vec<String> {
    LOGGER
        .recent
        .lock()
        .map(|recent| recent.iter().cloned().collect())
        .unwrap_or_default()
}

fn format_line(level: Level, target: &str, message: &str) -> String {
    // Module path minus the crate name keeps the prefix short: [api::http]
    let short = target.split_once("::").map(|(_, rest)| rest).unwrap_or(target);
    format!("{:<5} [{}] {}", level, short, message)
}

fn push_bounded(ring: &mut VecDeque<String>, line: String, capacity: usize) {
    if ring.len() == capacity {
        ring.pop_front();
    }
    ring.push_back(line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_strips_crate_name() {
        let line = format_line(Level::Warn, "storefront_admin::api::http", "timeout");
        assert_eq!(line, "WARN  [api::http] timeout");
        let line = format_line(Level::Info, "main", "ready");
        assert_eq!(line, "INFO  [main] ready");
    }

    #[test]
    fn test_ring_drops_oldest() {
        let mut ring = VecDeque::new();
        for i in 0..5 {
            push_bounded(&mut ring, i.to_string(), 3);
        }
        assert_eq!(ring, VecDeque::from(vec!["2".to_string(), "3".into(), "4".into()]));
    }
}
