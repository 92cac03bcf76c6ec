//! The shared log sink all demo output flows through.
//!
//! Every observable effect of the demo script is a log line, so the sink is
//! the one shared mutable resource in the system. Each `emit` call is a
//! single atomic write: one lock acquisition covers both the diagnostic
//! output and the buffer push, so concurrent writers can interleave lines
//! but never split one.

use std::sync::{Arc, Mutex};
use tracing::info;

/// A cloneable handle to the shared line buffer.
///
/// Clones share the same underlying buffer, so a sink can be handed to the
/// scheduled timer, the fetch sequence, and the host while all of them write
/// to one ordered stream.
#[derive(Clone, Debug, Default)]
pub struct LogSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl LogSink {
    /// Creates a new, empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes one line, atomically.
    ///
    /// The line is forwarded to the `tracing` subscriber at INFO level and
    /// recorded in the shared buffer. Logging is assumed infallible.
    pub fn emit(&self, line: impl Into<String>) {
        let line = line.into();
        let mut lines = self.lines.lock().unwrap();
        info!("{line}");
        lines.push(line);
    }

    /// Snapshots every line emitted so far, in emission order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emitted_lines_are_recorded_in_order() {
        let sink = LogSink::new();
        sink.emit("first");
        sink.emit("second");
        assert_eq!(sink.lines(), vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn clones_share_one_buffer() {
        let sink = LogSink::new();
        let other = sink.clone();
        sink.emit("from original");
        other.emit("from clone");
        assert_eq!(sink.lines().len(), 2);
        assert_eq!(other.lines(), sink.lines());
    }

    #[tokio::test]
    async fn concurrent_emits_never_lose_lines() {
        let sink = LogSink::new();
        let mut handles = Vec::new();
        for task in 0..8 {
            let sink = sink.clone();
            handles.push(tokio::spawn(async move {
                for n in 0..25 {
                    sink.emit(format!("task {task} line {n}"));
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        let lines = sink.lines();
        assert_eq!(lines.len(), 8 * 25);
        // Per-writer order is preserved even when writers interleave.
        for task in 0..8 {
            let own: Vec<_> = lines
                .iter()
                .filter(|l| l.starts_with(&format!("task {task} ")))
                .collect();
            let expected: Vec<String> =
                (0..25).map(|n| format!("task {task} line {n}")).collect();
            assert_eq!(own.len(), 25);
            for (got, want) in own.iter().zip(&expected) {
                assert_eq!(*got, want);
            }
        }
    }
}
