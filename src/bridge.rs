//! # `log` facade bridge.
//!
//! [`LogBridge`] implements [`log::Log`], routing `log::info!`-style macros
//! from third-party code into a [`MessageLog`]. The facade's target becomes
//! the record tag and its level maps onto [`Severity`]; filtering stays open
//! so subscribers see everything the facade emits.
//!
//! ## Level mapping
//! ```text
//! log::Level::Error                  -> Severity::Critical
//! log::Level::Warn                   -> Severity::Warning
//! log::Level::Info / Debug / Trace   -> Severity::Info
//! ```

use log::{Level, Log, Metadata, Record};

use crate::core::MessageLog;
use crate::error::LogError;
use crate::records::Severity;

/// Routes the `log` facade into a broadcaster.
pub struct LogBridge {
    log: MessageLog,
}

impl LogBridge {
    /// Creates a bridge targeting `log`.
    #[must_use]
    pub fn new(log: MessageLog) -> Self {
        Self { log }
    }

    /// Registers this bridge as the facade's global logger.
    ///
    /// Opens the facade's level filter to `Trace`; the broadcaster has no
    /// filtering of its own. Fails with [`LogError::FacadeConflict`] when
    /// another logger is already registered.
    pub fn install(self) -> Result<(), LogError> {
        log::set_boxed_logger(Box::new(self)).map_err(|_| LogError::FacadeConflict)?;
        log::set_max_level(log::LevelFilter::Trace);
        Ok(())
    }
}

/// Maps a facade level onto a record severity.
fn severity_for(level: Level) -> Severity {
    match level {
        Level::Error => Severity::Critical,
        Level::Warn => Severity::Warning,
        Level::Info | Level::Debug | Level::Trace => Severity::Info,
    }
}

impl Log for LogBridge {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.log.log_message(
                record.args().to_string(),
                record.target(),
                severity_for(record.level()),
            );
        }
    }

    fn flush(&self) {}
}
