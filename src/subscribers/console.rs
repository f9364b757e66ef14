//! # Console subscriber.
//!
//! [`ConsoleLogger`] prints every broadcast record to stdout, one line per
//! record. Attaching registers it with the broadcaster; dropping the value
//! detaches it again.
//!
//! ## Example output
//! ```text
//! Core[INFO]: service started
//! Storage[WARNING]: disk full
//! Net[CRITICAL]: unreachable peer
//! ```
//!
//! The line layout (`<tag>[<LEVELNAME>]: <message>`, always UTF-8) is parsed
//! by downstream tooling and is kept stable, including the label collapse of
//! every non-info, non-warning severity to `CRITICAL`.

use std::io::{self, Write};
use std::sync::Arc;

use crate::core::{MessageLog, Subscription};
use crate::records::LogRecord;
use crate::subscribers::Subscribe;

/// Stdout renderer attached to a broadcaster.
///
/// The value owns its registration: keep it alive for as long as console
/// output is wanted.
pub struct ConsoleLogger {
    subscription: Subscription,
}

impl ConsoleLogger {
    /// Attaches a console renderer to `log`.
    ///
    /// Registers exactly one internal subscriber; the registration is
    /// reversed when the returned value is dropped.
    #[must_use = "dropping the ConsoleLogger detaches it from the broadcaster"]
    pub fn attach(log: &MessageLog) -> Self {
        Self {
            subscription: log.subscribe(Arc::new(ConsoleWriter)),
        }
    }

    /// Detaches now. Equivalent to dropping the value.
    pub fn detach(self) {
        self.subscription.unsubscribe();
    }
}

/// The registered subscriber: formats and writes one line per record.
struct ConsoleWriter;

impl Subscribe for ConsoleWriter {
    fn on_record(&self, record: &LogRecord) {
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{}", format_line(record));
    }

    fn name(&self) -> &'static str {
        "console"
    }
}

/// Renders the console line: `<tag>[<LEVELNAME>]: <message>`.
fn format_line(record: &LogRecord) -> String {
    format!(
        "{}[{}]: {}",
        record.tag,
        record.level.label(),
        record.message
    )
}
