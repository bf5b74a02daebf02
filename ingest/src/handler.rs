//! Invocation boundary between the Lambda runtime and the ingestor

use crate::{ingestor::RecordIngestor, response::InvocationResponse, store::RecordStore};
use lamedh_runtime::{Context, Error};
use serde_json::Value;
use tracing::{info_span, Instrument};

/// Handle one direct invocation.
///
/// Never fails: validation and storage errors are already part of the
/// returned envelope.
pub async fn invoke<S>(
    ingestor: &RecordIngestor<S>,
    event: Value,
    context: Context,
) -> Result<InvocationResponse, Error>
where
    S: RecordStore,
{
    let span = info_span!("invocation", request_id = %context.request_id);
    Ok(respond(ingestor, &event).instrument(span).await)
}

/// Ingest `event` and wrap the outcome in the invocation envelope.
pub async fn respond<S>(ingestor: &RecordIngestor<S>, event: &Value) -> InvocationResponse
where
    S: RecordStore,
{
    ingestor.ingest(event).await.into()
}
