//! Browser Logging
//!
//! Routes the `log` facade through `rolling-logger` into the browser console.

use log::{Level, LevelFilter};
use rolling_logger::{LogLine, RollingLogger};

/// Lines kept in memory for `recent()`
pub const LOG_BUFFER_LINES: usize = 200;

pub fn init(level: LevelFilter) -> Option<&'static RollingLogger> {
    RollingLogger::new(LOG_BUFFER_LINES, level)
        .with_sink(write_console)
        .install()
        .ok()
}

#[cfg(target_arch = "wasm32")]
fn write_console(line: &LogLine) {
    use web_sys::console;

    let text = wasm_bindgen::JsValue::from_str(&line.to_string());
    match line.level {
        Level::Error => console::error_1(&text),
        Level::Warn => console::warn_1(&text),
        Level::Info => console::info_1(&text),
        Level::Debug | Level::Trace => console::debug_1(&text),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(line: &LogLine) {
    if line.level <= Level::Warn {
        eprintln!("{}", line);
    }
}
