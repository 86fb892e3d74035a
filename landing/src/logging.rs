//! Browser console logging.
//!
//! `tracing` events are formatted by `tracing-subscriber` and written through
//! [`ConsoleMakeWriter`], which hands each finished line to the console
//! method matching the event level.

use std::io;

use solae_core::content::{LoggingConfig, SiteContent};
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;
use web_sys::console;

/// Console method a line is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Debug,
}

impl ConsoleMethod {
    fn for_level(level: Level) -> Self {
        if level == Level::ERROR {
            Self::Error
        } else if level == Level::WARN {
            Self::Warn
        } else if level == Level::INFO {
            Self::Info
        } else {
            Self::Debug
        }
    }

    fn emit(self, line: &str) {
        let msg = JsValue::from_str(line);
        match self {
            Self::Error => console::error_1(&msg),
            Self::Warn => console::warn_1(&msg),
            Self::Info => console::info_1(&msg),
            Self::Debug => console::debug_1(&msg),
        }
    }
}

/// Buffers one formatted event and flushes it to the console on drop.
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buffer: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buffer);
        let line = text.trim_end();
        if !line.is_empty() {
            self.method.emit(line);
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            method: ConsoleMethod::Info,
            buffer: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            method: ConsoleMethod::for_level(*meta.level()),
            buffer: Vec::new(),
        }
    }
}

/// Install the global subscriber. Safe to call twice; the second call warns.
pub fn init(config: &LoggingConfig) {
    let level = config.max_level().unwrap_or(Level::INFO);
    let installed = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .try_init();

    if let Err(err) = installed {
        ConsoleMethod::Warn.emit(&format!("[solae][warn] logging already initialised: {err}"));
    }
}

/// Styled greeting for anyone who opens the dev tools.
pub fn print_banner(content: &SiteContent) {
    let gold = "color: #E6C15B; font-family: serif; font-size: 16px;";
    let dim = "color: #888; font-size: 11px;";

    console::log_2(
        &JsValue::from_str(&format!("%c  ◯ {}", content.site.brand)),
        &JsValue::from_str(gold),
    );
    console::log_2(
        &JsValue::from_str(&format!("%c  Curious how this is built? {}", content.site.contact_email)),
        &JsValue::from_str(dim),
    );
}
