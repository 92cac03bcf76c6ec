use anyhow::Result;
use futures_util::future::try_join_all;
use tracing::info;
use twinflow::prelude::*;
use twinflow::{DEMO_NAME, VERSION};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    // 2. Load configuration from twinflow.toml / TWINFLOW_* env vars.
    let config = DemoConfig::load()?;
    info!(
        "{} v{} running the {:?} variant across {} runtimes against {}",
        DEMO_NAME, VERSION, config.variant, config.runtime_count, config.endpoint
    );

    // 3. Run all script runtimes side by side on one cooperative thread so
    //    their timer and fetch lines interleave visibly.
    let sink = LogSink::new();
    let runtimes: Vec<ScriptRuntime> = (1..=config.runtime_count)
        .map(|id| ScriptRuntime::new(id as u32, &config, sink.clone()))
        .collect();
    try_join_all(runtimes.iter().map(ScriptRuntime::execute)).await?;

    info!("Done");
    Ok(())
}
