//! Colored, line-oriented terminal output.
//!
//! Every line goes through a single mutex so two callers can never interleave
//! characters of their messages, even in typewriter mode.

use crate::error::Result;
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::Write;
use std::sync::{Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
    Success,
    Debug,
    None,
}

impl Severity {
    pub fn prefix(self) -> &'static str {
        match self {
            Severity::Info => "[INFO] ",
            Severity::Warning => "[WARN] ",
            Severity::Error => "[ERROR] ",
            Severity::Success => "[SUCCESS] ",
            Severity::Debug => "[DEBUG] ",
            Severity::None => "",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Severity::Info => Color::Cyan,
            Severity::Warning => Color::Yellow,
            Severity::Error => Color::Red,
            Severity::Success => Color::Green,
            Severity::Debug => Color::Magenta,
            Severity::None => Color::White,
        }
    }
}

// `\r\n` rather than `\n` so lines start at column 0 in raw mode too.
const LINE_END: &str = "\r\n";

pub struct Logger<W: Write> {
    out: Mutex<W>,
}

impl Logger<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Logger<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Write `message` with the prefix and color of `severity`, followed by a newline.
    pub fn log(&self, message: &str, severity: Severity) -> Result<()> {
        self.log_with(message, severity, Duration::ZERO, true)
    }

    /// Like [`Logger::log`], with a per-character delay and optional trailing newline.
    ///
    /// A non-zero `char_delay` prints one character at a time. If the write
    /// fails, a plain fallback report is attempted and the original error is
    /// returned.
    pub fn log_with(
        &self,
        message: &str,
        severity: Severity,
        char_delay: Duration,
        newline: bool,
    ) -> Result<()> {
        let mut out = self.lock();

        if let Err(err) = write_line(&mut *out, message, severity, char_delay, newline) {
            let _ = queue!(
                out,
                ResetColor,
                Print(format!("Logger error:{LINE_END}{err}{LINE_END}")),
                Print(message),
                Print(LINE_END)
            );
            let _ = out.flush();
            return Err(err.into());
        }

        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    // A panic while holding the lock leaves the writer usable.
    fn lock(&self) -> MutexGuard<'_, W> {
        self.out
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn write_line<W: Write>(
    out: &mut W,
    message: &str,
    severity: Severity,
    char_delay: Duration,
    newline: bool,
) -> std::io::Result<()> {
    queue!(out, SetForegroundColor(severity.color()))?;
    write_text(out, severity.prefix(), char_delay)?;
    queue!(out, ResetColor)?;
    write_text(out, message, char_delay)?;
    queue!(out, ResetColor)?;

    if newline {
        queue!(out, Print(LINE_END))?;
    }

    out.flush()
}

fn write_text<W: Write>(out: &mut W, text: &str, char_delay: Duration) -> std::io::Result<()> {
    if char_delay.is_zero() {
        return queue!(out, Print(text));
    }

    for c in text.chars() {
        queue!(out, Print(c))?;
        out.flush()?;
        thread::sleep(char_delay);
    }
    Ok(())
}
