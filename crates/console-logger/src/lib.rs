//! Console Logger
//!
//! `tracing` subscriber for the browser. Each formatted event becomes one
//! `console.error`/`console.warn`/`console.log` call, picked by level, so the
//! devtools filters work. Off wasm32 the lines go to stderr.

use std::fmt;
use std::io::{self, Write};

use tracing::Level;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Errors from logger setup
#[derive(Debug)]
pub enum LoggerError {
    InvalidDirective(String),
    AlreadyInitialized(String),
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerError::InvalidDirective(msg) => write!(f, "Invalid log directive: {}", msg),
            LoggerError::AlreadyInitialized(msg) => write!(f, "Logger already initialized: {}", msg),
        }
    }
}

impl std::error::Error for LoggerError {}

/// Install the global subscriber
///
/// `directive` uses `EnvFilter` syntax, e.g. `info,todo_sync=debug`.
pub fn init_logger(app_name: &str, directive: &str) -> Result<(), LoggerError> {
    let filter = EnvFilter::try_new(directive).map_err(|e| LoggerError::InvalidDirective(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_timer(LocalClock)
        .with_writer(ConsoleWriter)
        .try_init()
        .map_err(|e| LoggerError::AlreadyInitialized(e.to_string()))?;

    tracing::info!("{} logger initialized ({})", app_name, directive);
    Ok(())
}

/// Wall-clock timestamps via chrono, which reads the JS clock on wasm32
struct LocalClock;

impl FormatTime for LocalClock {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

/// `MakeWriter` handing out one buffered line per event
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleWriter;

impl<'a> MakeWriter<'a> for ConsoleWriter {
    type Writer = ConsoleLine;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleLine::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &tracing::Metadata<'_>) -> Self::Writer {
        ConsoleLine::new(*meta.level())
    }
}

/// Buffers one formatted event and emits it on drop
pub struct ConsoleLine {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleLine {
    fn new(level: Level) -> Self {
        Self { level, buf: Vec::new() }
    }
}

impl Write for ConsoleLine {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleLine {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if !line.is_empty() {
            emit(console_method(self.level), line);
        }
    }
}

/// Console method a level is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Log,
    Debug,
}

pub fn console_method(level: Level) -> ConsoleMethod {
    match level {
        Level::ERROR => ConsoleMethod::Error,
        Level::WARN => ConsoleMethod::Warn,
        Level::INFO => ConsoleMethod::Log,
        _ => ConsoleMethod::Debug,
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(method: ConsoleMethod, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match method {
        ConsoleMethod::Error => web_sys::console::error_1(&value),
        ConsoleMethod::Warn => web_sys::console::warn_1(&value),
        ConsoleMethod::Log => web_sys::console::log_1(&value),
        ConsoleMethod::Debug => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_method: ConsoleMethod, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_map_to_console_methods() {
        assert_eq!(console_method(Level::ERROR), ConsoleMethod::Error);
        assert_eq!(console_method(Level::WARN), ConsoleMethod::Warn);
        assert_eq!(console_method(Level::INFO), ConsoleMethod::Log);
        assert_eq!(console_method(Level::DEBUG), ConsoleMethod::Debug);
        assert_eq!(console_method(Level::TRACE), ConsoleMethod::Debug);
    }

    #[test]
    fn test_line_buffers_writes() {
        let mut line = ConsoleWriter.make_writer();
        line.write_all(b"hello ").unwrap();
        line.write_all(b"world\n").unwrap();
        assert_eq!(line.buf, b"hello world\n");
        assert_eq!(line.level, Level::INFO);
    }

    #[test]
    fn test_invalid_directive_is_rejected() {
        let err = init_logger("Test", "todo_sync=loud").unwrap_err();
        assert!(matches!(err, LoggerError::InvalidDirective(_)));
    }
}
