//! Renderer logging.
//!
//! Every subsystem reports through [`Engine::log`](crate::suburbs3d::Engine::log)
//! with a source tag such as `"suburbs3d::ShadowMap"`. The sink is a
//! [`Logger`]; [`DefaultLogger`] prints colored lines to the console and
//! hides per-frame trace output unless asked for it.

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Sink for renderer log entries.
///
/// Install one with `Engine::set_logger` to capture logs in a file, an
/// overlay console, or a test.
///
/// ```
/// use std::sync::Mutex;
/// use suburbs_3d::suburbs3d::log::{Logger, LogEntry, LogSeverity};
///
/// /// Keeps warnings and errors for an on-screen overlay
/// struct OverlayLog {
///     lines: Mutex<Vec<String>>,
/// }
///
/// impl Logger for OverlayLog {
///     fn log(&self, entry: &LogEntry) {
///         if entry.severity >= LogSeverity::Warn {
///             if let Ok(mut lines) = self.lines.lock() {
///                 lines.push(format!("{}: {}", entry.source, entry.message));
///             }
///         }
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    fn log(&self, entry: &LogEntry);
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub severity: LogSeverity,
    pub timestamp: SystemTime,
    /// Subsystem tag, `suburbs3d::<Type>`
    pub source: String,
    pub message: String,
    /// Call site, set for errors and device diagnostics
    pub file: Option<&'static str>,
    pub line: Option<u32>,
}

impl LogEntry {
    pub fn new(severity: LogSeverity, source: &str, message: String) -> Self {
        Self {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: None,
            line: None,
        }
    }

    pub fn at(mut self, file: &'static str, line: u32) -> Self {
        self.file = Some(file);
        self.line = Some(line);
        self
    }
}

/// Ordered from most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Per-frame detail: light transform, pass boundaries
    Trace,
    Debug,
    /// Startup and state changes (shadow map allocated, day/night switch)
    Info,
    /// Recoverable problems: missing uniform, scene outside the light volume
    Warn,
    /// Failed initialization and device errors
    Error,
}

impl LogSeverity {
    /// Fixed-width label used in console output
    pub fn label(self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }

    fn colored_label(self) -> ColoredString {
        let label = self.label();
        match self {
            LogSeverity::Trace => label.bright_black(),
            LogSeverity::Debug => label.cyan(),
            LogSeverity::Info => label.green(),
            LogSeverity::Warn => label.yellow(),
            LogSeverity::Error => label.red().bold(),
        }
    }
}

/// Console logger.
///
/// Prints `[time] [SEVERITY] [source] message`, with ` (file:line)`
/// appended when the entry carries a call site. Errors go to stderr.
/// Entries below `min_severity` are dropped; the default floor is `Debug`
/// so the per-frame trace stays quiet.
#[derive(Debug, Clone, Copy)]
pub struct DefaultLogger {
    pub min_severity: LogSeverity,
}

impl Default for DefaultLogger {
    fn default() -> Self {
        Self { min_severity: LogSeverity::Debug }
    }
}

impl DefaultLogger {
    pub fn with_min_severity(min_severity: LogSeverity) -> Self {
        Self { min_severity }
    }

    pub fn accepts(&self, severity: LogSeverity) -> bool {
        severity >= self.min_severity
    }

    /// Console line for `entry`, without the trailing newline
    pub fn format(&self, entry: &LogEntry) -> String {
        let time: DateTime<Local> = entry.timestamp.into();
        let mut line = format!(
            "[{}] [{}] [{}] {}",
            time.format("%H:%M:%S%.3f"),
            entry.severity.colored_label(),
            entry.source.bright_blue(),
            entry.message,
        );
        if let (Some(file), Some(at)) = (entry.file, entry.line) {
            line.push_str(&format!(" ({}:{})", file, at));
        }
        line
    }
}

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        if !self.accepts(entry.severity) {
            return;
        }
        let line = self.format(entry);
        if entry.severity == LogSeverity::Error {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

// ===== MACROS =====

/// Shared expansion of the severity macros
#[doc(hidden)]
#[macro_export]
macro_rules! __engine_log {
    ($severity:ident, $source:expr, $($arg:tt)*) => {
        $crate::suburbs3d::Engine::log(
            $crate::suburbs3d::log::LogSeverity::$severity,
            $source,
            format!($($arg)*)
        )
    };
}

#[macro_export]
macro_rules! engine_trace {
    ($source:expr, $($arg:tt)*) => { $crate::__engine_log!(Trace, $source, $($arg)*) };
}

#[macro_export]
macro_rules! engine_debug {
    ($source:expr, $($arg:tt)*) => { $crate::__engine_log!(Debug, $source, $($arg)*) };
}

/// Log at INFO under a `suburbs3d::<Type>` source tag
///
/// ```
/// use suburbs_3d::engine_info;
///
/// let resolution = 2048;
/// engine_info!("suburbs3d::ShadowMap", "Shadow map created ({}x{})", resolution, resolution);
/// ```
#[macro_export]
macro_rules! engine_info {
    ($source:expr, $($arg:tt)*) => { $crate::__engine_log!(Info, $source, $($arg)*) };
}

#[macro_export]
macro_rules! engine_warn {
    ($source:expr, $($arg:tt)*) => { $crate::__engine_log!(Warn, $source, $($arg)*) };
}

/// Log at ERROR, recording the caller's file and line
#[macro_export]
macro_rules! engine_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::suburbs3d::Engine::log_detailed(
            $crate::suburbs3d::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
