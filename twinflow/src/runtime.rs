//! The script runtime that hosts one execution of the demo workload.

use crate::components::fetch;
use crate::components::timer::ScheduledEmitter;
use crate::config::{DemoConfig, Variant};
use crate::sink::LogSink;
use anyhow::Context;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

/// One hosted execution of the demo script.
///
/// A runtime starts two independent concurrent activities back to back: the
/// scheduled log emitter and the fetch sequence. Their completion order is
/// unsynchronized on purpose; the runtime only guarantees that it does not
/// return while either is still pending, standing in for a host event loop
/// that keeps the script alive until scheduled work drains.
pub struct ScriptRuntime {
    id: u32,
    variant: Variant,
    endpoint: String,
    timer_delay: Duration,
    client: Client,
    sink: LogSink,
}

impl ScriptRuntime {
    /// Creates a runtime with the given identifier, drawing the variant,
    /// endpoint, and timer delay from the configuration.
    pub fn new(id: u32, config: &DemoConfig, sink: LogSink) -> Self {
        Self {
            id,
            variant: config.variant,
            endpoint: config.endpoint.clone(),
            timer_delay: config.timer_delay(config.variant),
            client: Client::new(),
            sink,
        }
    }

    /// Runs the script to completion.
    ///
    /// Emits the startup line, schedules the one-shot timer line, drives the
    /// fetch sequence in the configured notation, then waits for the timer so
    /// no scheduled work outlives this call. Fetch failures are logged and
    /// swallowed inside the sequence; the only error surfacing here is a
    /// panicked timer task.
    pub async fn execute(&self) -> anyhow::Result<()> {
        let timer = ScheduledEmitter::new(self.id, self.timer_delay).run(&self.sink);

        match self.variant {
            Variant::Classic => {
                fetch::classic(&self.client, &self.endpoint, &self.sink, self.id).await;
            }
            Variant::Sequential => {
                fetch::sequential(&self.client, &self.endpoint, &self.sink, self.id).await;
            }
        }

        timer
            .await
            .with_context(|| format!("timer task of runtime {} panicked", self.id))?;

        info!("Runtime {} terminated", self.id);
        Ok(())
    }
}
