//! The network fetch sequence, written in two equivalent notations.
//!
//! One GET against a configured endpoint, three observable stages: issue the
//! request, log the response's arrival, log once the body has been read as
//! text. Any failure collapses the sequence into a single failure line; there
//! is no retry and no fallback. Both notations walk the same state machine
//! (`idle → requesting → awaiting_body → done`, any state `→ failed`) and
//! suspend only while awaiting the response and the body.

use crate::sink::LogSink;
use futures_util::TryFutureExt;
use reqwest::Client;
use thiserror::Error;
use tracing::trace;

/// The single failure kind of a fetch sequence.
///
/// Covers both the request-issuance and the body-read stage. It is handled
/// entirely inside the sequence: logged with its value, then swallowed.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct FetchFailure {
    #[from]
    source: reqwest::Error,
}

/// Observable states of one fetch sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchState {
    Requesting,
    AwaitingBody,
    Done,
    Failed,
}

/// Records a state transition at trace level. The INFO-level lines on the
/// sink are the user-visible view of the same transitions.
fn advance(runtime_id: u32, to: FetchState) {
    trace!("runtime {runtime_id}: fetch -> {to:?}");
}

/// The classic notation: dependent continuations chained off the request
/// future, with a single trailing failure continuation.
pub async fn classic(client: &Client, endpoint: &str, sink: &LogSink, runtime_id: u32) {
    advance(runtime_id, FetchState::Requesting);
    let arrival_sink = sink.clone();
    let done_sink = sink.clone();
    let failure_sink = sink.clone();
    client
        .get(endpoint)
        .send()
        .and_then(move |response| {
            advance(runtime_id, FetchState::AwaitingBody);
            arrival_sink.emit(format!("Fetch response in runtime {runtime_id}"));
            response.text()
        })
        .map_ok(move |_body| {
            advance(runtime_id, FetchState::Done);
            done_sink.emit(format!("Fetch stream finished in runtime {runtime_id}"));
        })
        .unwrap_or_else(move |err| {
            let err = FetchFailure::from(err);
            advance(runtime_id, FetchState::Failed);
            failure_sink.emit(format!("Fetch failed in runtime {runtime_id}: {err}"));
        })
        .await;
}

/// The sequential notation: the same stages as ordinary statements inside a
/// guarded block, with the failure handled once at the call site.
pub async fn sequential(client: &Client, endpoint: &str, sink: &LogSink, runtime_id: u32) {
    if let Err(err) = try_sequential(client, endpoint, sink, runtime_id).await {
        advance(runtime_id, FetchState::Failed);
        sink.emit(format!("Fetch failed in runtime {runtime_id}: {err}"));
    }
}

async fn try_sequential(
    client: &Client,
    endpoint: &str,
    sink: &LogSink,
    runtime_id: u32,
) -> Result<(), FetchFailure> {
    advance(runtime_id, FetchState::Requesting);
    let response = client.get(endpoint).send().await?;
    advance(runtime_id, FetchState::AwaitingBody);
    sink.emit(format!("Fetch response in runtime {runtime_id}"));
    let _body = response.text().await?;
    advance(runtime_id, FetchState::Done);
    sink.emit(format!("Fetch stream finished in runtime {runtime_id}"));
    Ok(())
}
