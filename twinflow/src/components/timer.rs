//! The scheduled log emitter: a startup line now, a second line later.

use crate::sink::LogSink;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::trace;

/// Emits a startup line immediately and schedules one delayed follow-up line.
///
/// The delayed line fires exactly once, after at least `delay` has elapsed,
/// independent of anything else the script does. Its order relative to the
/// fetch sequence is unspecified; only "startup strictly before timeout" is
/// guaranteed.
pub struct ScheduledEmitter {
    runtime_id: u32,
    delay: Duration,
}

impl ScheduledEmitter {
    /// Creates an emitter for the given runtime with the given one-shot delay.
    pub fn new(runtime_id: u32, delay: Duration) -> Self {
        Self { runtime_id, delay }
    }

    /// Emits the startup line and spawns the one-shot delayed line.
    ///
    /// Returns the handle of the spawned task. The handle could be used to
    /// cancel the pending line; the demo never does, it only waits on it so
    /// no scheduled work outlives the script.
    pub fn run(&self, sink: &LogSink) -> JoinHandle<()> {
        let id = self.runtime_id;
        sink.emit(format!("Executing main module in runtime {id}"));

        trace!("runtime {id}: timer scheduled for {:?}", self.delay);
        let sink = sink.clone();
        let delay = self.delay;
        tokio::spawn(async move {
            sleep(delay).await;
            sink.emit(format!("Timeout finished in runtime {id}"));
        })
    }
}
