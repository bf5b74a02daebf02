use lamedh_runtime::{handler_fn, run, Context, Error};
use std::sync::Arc;
use student_ingest::{logging, store_from_config, Config, RecordIngestor};
use student_ingest_http::LambdaRequest;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init();

    let config = Config::from_env()?;
    info!(table = %config.table_name, backend = ?config.backend, "starting student ingestion over http");

    let ingestor = Arc::new(RecordIngestor::new(store_from_config(&config).await));

    run(handler_fn(move |request: LambdaRequest, context: Context| {
        let ingestor = Arc::clone(&ingestor);
        async move { student_ingest_http::handle(&*ingestor, request, context).await }
    }))
    .await
}
