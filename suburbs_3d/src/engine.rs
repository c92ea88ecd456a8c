/// Suburbs3D Engine - process-wide logging facade and device diagnostics
///
/// Frame state is NOT global: cameras, frame contexts and pipelines are
/// owned by the caller and passed by reference. The only process-wide
/// state kept here is the logger sink.

use std::sync::{OnceLock, RwLock};
use crate::graphics_device::GraphicsDevice;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

fn logger_lock() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger::default())))
}

/// Engine facade
///
/// # Example
///
/// ```
/// use suburbs_3d::suburbs3d::Engine;
/// use suburbs_3d::suburbs3d::log::{DefaultLogger, LogSeverity};
///
/// // Show the per-frame light transform and pass boundaries
/// Engine::set_logger(DefaultLogger::with_min_severity(LogSeverity::Trace));
/// ```
pub struct Engine;

impl Engine {
    // ===== LOGGING API =====

    /// Replace the default logger with a custom implementation
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = logger_lock().write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        if let Ok(mut lock) = logger_lock().write() {
            *lock = Box::new(DefaultLogger::default());
        }
    }

    /// Internal logging method (for simple logs without file:line)
    ///
    /// Used by macros like engine_info!, engine_warn!, etc.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        if let Ok(lock) = logger_lock().read() {
            lock.log(&LogEntry::new(severity, source, message));
        }
    }

    /// Internal logging method with file:line information
    ///
    /// Used by engine_error! and device_check! to include the call site.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        if let Ok(lock) = logger_lock().read() {
            lock.log(&LogEntry::new(severity, source, message).at(file, line));
        }
    }

    // ===== DEVICE DIAGNOSTICS =====

    /// Drain every pending device error and log it with the call site.
    ///
    /// Non-fatal: rendering continues. Returns the number of errors drained.
    pub fn report_device_errors(
        device: &mut dyn GraphicsDevice,
        file: &'static str,
        line: u32,
    ) -> usize {
        let mut count = 0;
        while let Some(error) = device.poll_error() {
            Self::log_detailed(
                LogSeverity::Error,
                "suburbs3d::GraphicsDevice",
                error.to_string(),
                file,
                line,
            );
            count += 1;
        }
        count
    }
}

/// Check the device for pending errors after a state-changing call.
///
/// Logs each error with the caller's file:line and evaluates to the
/// number of errors found. Never aborts.
///
/// # Example
///
/// ```
/// use suburbs_3d::device_check;
/// use suburbs_3d::suburbs3d::device::{GraphicsDevice, RenderTargetBinding};
///
/// fn bind_window(device: &mut dyn GraphicsDevice) -> usize {
///     device.bind_render_target(RenderTargetBinding::Window);
///     device_check!(device)
/// }
/// ```
#[macro_export]
macro_rules! device_check {
    ($device:expr) => {
        $crate::suburbs3d::Engine::report_device_errors($device, file!(), line!())
    };
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
