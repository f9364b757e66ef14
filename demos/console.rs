//! # Example: console
//!
//! Demonstrates the console subscriber and the process-wide accessor.
//!
//! Shows how to:
//! - Build a [`MessageLog`] and attach a [`ConsoleLogger`].
//! - Submit records with different severities.
//! - Install the instance as the process-wide broadcaster and log through
//!   the free function.
//!
//! ## Flow
//! ```text
//! MessageLog ──► ConsoleLogger::attach()
//!     ├─► log_message("service started", "Core", Info)      ─► Core[INFO]: ...
//!     ├─► log_message("disk almost full", "Storage", Warning) ─► Storage[WARNING]: ...
//!     └─► install() ─► logvisor::log_message(..., Critical) ─► Net[CRITICAL]: ...
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example console
//! ```

use logvisor::{ConsoleLogger, MessageLog, Severity};

fn main() {
    let log = MessageLog::builder().without_trace().build();
    let _console = ConsoleLogger::attach(&log);

    log.log_message("service started", "Core", Severity::Info);
    log.log_message("disk almost full", "Storage", Severity::Warning);

    // Hand the instance over to the process-wide slot; call sites without a
    // handle can now use the free function.
    logvisor::install(log).expect("no global instance installed yet");
    logvisor::log_message("unreachable peer", "Net", Severity::Critical);
}
