//! Structured console output.
//!
//! Provides a unified interface for outputting messages in different modes:
//! - Human: Colored symbol-prefixed output for terminal display
//! - Json: One JSON event per line for programmatic consumption
//! - Quiet: Only errors (and input prompts) are emitted
//!
//! The Output struct auto-detects TTY for color support and can be injected
//! with a custom writer for test capture.

use colored::Colorize;
use serde_json::json;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crate::ui::colors;

/// Output mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable colored output
    Human,
    /// JSON-formatted structured output
    Json,
    /// Silent mode - only errors
    Quiet,
}

impl OutputMode {
    /// Pick a mode from command-line flags. `--json` wins over `--quiet`.
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if json {
            OutputMode::Json
        } else if quiet || crate::ui::is_quiet() {
            OutputMode::Quiet
        } else {
            OutputMode::Human
        }
    }
}

/// Output abstraction with mode-aware formatting
#[derive(Clone)]
pub struct Output {
    mode: OutputMode,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
    is_tty: bool,
}

impl Output {
    /// Create a new Output writing to stdout
    pub fn new(mode: OutputMode) -> Self {
        let is_tty = atty::is(atty::Stream::Stdout);
        Self {
            mode,
            writer: Arc::new(Mutex::new(Box::new(io::stdout()))),
            is_tty,
        }
    }

    /// Create an Output with a custom writer (for testing)
    pub fn with_writer(mode: OutputMode, writer: Box<dyn Write + Send>) -> Self {
        Self {
            mode,
            writer: Arc::new(Mutex::new(writer)),
            is_tty: false,
        }
    }

    /// Output a section heading, preceded by a blank line
    pub fn heading(&self, msg: &str) {
        match self.mode {
            OutputMode::Human => {
                let text = if self.is_tty {
                    colors::heading(msg).to_string()
                } else {
                    msg.to_string()
                };
                self.write_line("");
                self.write_line(&text);
            }
            OutputMode::Json => self.write_json("heading", msg),
            OutputMode::Quiet => {}
        }
    }

    /// Output a step message: "→ {msg}" in cyan
    pub fn step(&self, msg: &str) {
        self.prefixed("→", msg, "step", |p| p.cyan().to_string());
    }

    /// Output a success message: "✓ {msg}" in green
    pub fn success(&self, msg: &str) {
        self.prefixed("✓", msg, "success", |p| colors::success(p).to_string());
    }

    /// Output a warning message: "⚠ {msg}" in yellow
    pub fn warn(&self, msg: &str) {
        self.prefixed("⚠", msg, "warning", |p| colors::warning(p).to_string());
    }

    /// Output an error message: "✗ {msg}" in red
    pub fn error(&self, msg: &str) {
        match self.mode {
            OutputMode::Human => {
                let prefix = if self.is_tty {
                    colors::error("✗").to_string()
                } else {
                    "✗".to_string()
                };
                self.write_line(&format!("{} {}", prefix, msg));
            }
            OutputMode::Json => self.write_json("error", msg),
            OutputMode::Quiet => {
                // Errors always output, even in quiet mode
                self.write_line(&format!("✗ {}", msg));
            }
        }
    }

    /// Output plain info text (no prefix)
    pub fn info(&self, msg: &str) {
        match self.mode {
            OutputMode::Human => self.write_line(msg),
            OutputMode::Json => self.write_json("info", msg),
            OutputMode::Quiet => {}
        }
    }

    /// Output detail text (indented, for subordinate info)
    pub fn detail(&self, msg: &str) {
        match self.mode {
            OutputMode::Human => self.write_line(&format!("  {}", msg)),
            OutputMode::Json => self.write_json("detail", msg),
            OutputMode::Quiet => {}
        }
    }

    /// Write an input prompt without a trailing newline.
    ///
    /// Prompts are shown in quiet mode too, since the user still has to
    /// answer them.
    pub fn prompt(&self, msg: &str) {
        match self.mode {
            OutputMode::Human | OutputMode::Quiet => {
                if let Ok(mut writer) = self.writer.lock() {
                    let _ = write!(writer, "{}: ", msg);
                    let _ = writer.flush();
                }
            }
            OutputMode::Json => self.write_json("prompt", msg),
        }
    }

    /// Output a structured JSON event
    pub fn json(&self, value: &serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", value);
        }
    }

    /// Get the current output mode
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    fn prefixed(&self, prefix: &str, msg: &str, level: &str, paint: impl Fn(&str) -> String) {
        match self.mode {
            OutputMode::Human => {
                let prefix = if self.is_tty {
                    paint(prefix)
                } else {
                    prefix.to_string()
                };
                self.write_line(&format!("{} {}", prefix, msg));
            }
            OutputMode::Json => self.write_json(level, msg),
            OutputMode::Quiet => {}
        }
    }

    /// Write a line to the output
    fn write_line(&self, line: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
        }
    }

    /// Write a JSON-formatted log line
    fn write_json(&self, level: &str, msg: &str) {
        self.json(&json!({
            "level": level,
            "msg": msg,
        }));
    }
}

/// Capturing writer for tests
#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    pub(crate) struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Build an Output whose text can be read back with [`contents`].
    pub(crate) fn captured(mode: OutputMode) -> (Output, Arc<Mutex<Vec<u8>>>) {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let writer = TestWriter {
            buffer: buffer.clone(),
        };
        (Output::with_writer(mode, Box::new(writer)), buffer)
    }

    pub(crate) fn contents(buffer: &Arc<Mutex<Vec<u8>>>) -> String {
        String::from_utf8(buffer.lock().unwrap().clone()).unwrap()
    }
}
