//! # Example: fanout
//!
//! Demonstrates one broadcaster feeding several subscribers at once.
//!
//! Shows how to:
//! - Implement the [`Subscribe`] trait for a custom counter.
//! - Latch elevated records with [`ErrorIndicator`].
//! - Drain records asynchronously through [`RecordStream`].
//!
//! ## Flow
//! ```text
//! log_message ──► MessageLog ──► broadcast
//!                     ├─► Counter.on_record()          (custom subscriber)
//!                     ├─► ErrorIndicator.on_severity_flag(true)
//!                     └─► RecordStream.on_record() ──► tokio broadcast ──► drain task
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example fanout
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use logvisor::{ErrorIndicator, LogRecord, MessageLog, RecordStream, Severity, Subscribe};

/// A simple counting subscriber.
/// In real life, you could export metrics, ship records, or trigger alerts.
struct Counter {
    records: AtomicU64,
}

impl Subscribe for Counter {
    fn on_record(&self, _record: &LogRecord) {
        self.records.fetch_add(1, Ordering::Relaxed);
    }

    fn name(&self) -> &'static str {
        "counter"
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let log = MessageLog::builder().without_trace().build();

    let counter = Arc::new(Counter {
        records: AtomicU64::new(0),
    });
    let indicator = Arc::new(ErrorIndicator::new());
    let stream = RecordStream::new(64);

    let _c = log.subscribe(counter.clone());
    let _i = log.subscribe(indicator.clone());
    let _r = log.subscribe(Arc::new(stream.clone()));

    let mut rx = stream.subscribe();
    let drain = tokio::spawn(async move {
        while let Ok(record) = rx.recv().await {
            println!(
                "[stream] {}[{}]: {}",
                record.tag, record.level, record.message
            );
        }
    });

    log.log_message("service started", "Core", Severity::Info);
    log.log_message("disk almost full", "Storage", Severity::Warning);
    log.log_message("unreachable peer", "Net", Severity::Critical);

    // Close the relay channel so the drain task finishes: the registry's
    // clone goes away with the broadcaster, ours with the explicit drop.
    drop(log);
    drop(stream);
    drain.await.expect("drain task");

    println!("records seen: {}", counter.records.load(Ordering::Relaxed));
    println!("indicator raised: {}", indicator.is_raised());
}
