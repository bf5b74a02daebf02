//! API Gateway and ALB front for the student ingestion function.
//!
//! Proxy integrations deliver the student mapping as the JSON body of an
//! HTTP request. [`handle`] unwraps it, runs the shared
//! [`RecordIngestor`](student_ingest::RecordIngestor) and answers with the
//! response shape the originating service expects.

pub mod request;
pub mod response;

pub use crate::{
    request::{LambdaRequest, RequestOrigin},
    response::LambdaResponse,
};

use lamedh_runtime::{Context, Error};
use student_ingest::{RecordIngestor, RecordStore};
use tracing::{info_span, Instrument};

/// Handle one proxy invocation.
pub async fn handle<S>(
    ingestor: &RecordIngestor<S>,
    request: LambdaRequest,
    context: Context,
) -> Result<LambdaResponse, Error>
where
    S: RecordStore,
{
    let span = info_span!("invocation", request_id = %context.request_id);
    Ok(respond(ingestor, request).instrument(span).await)
}

/// Ingest the request body and shape the outcome for the request's origin.
pub async fn respond<S>(ingestor: &RecordIngestor<S>, request: LambdaRequest) -> LambdaResponse
where
    S: RecordStore,
{
    let origin = request.request_origin();
    let outcome = ingestor.ingest(&request.payload()).await;
    LambdaResponse::from_outcome(&origin, outcome)
}
