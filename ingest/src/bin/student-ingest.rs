use lamedh_runtime::{handler_fn, run, Context, Error};
use serde_json::Value;
use std::sync::Arc;
use student_ingest::{handler, logging, store_from_config, Config, RecordIngestor};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init();

    let config = Config::from_env()?;
    info!(table = %config.table_name, backend = ?config.backend, "starting student ingestion");

    // one store client per process, shared by every invocation
    let ingestor = Arc::new(RecordIngestor::new(store_from_config(&config).await));

    run(handler_fn(move |event: Value, context: Context| {
        let ingestor = Arc::clone(&ingestor);
        async move { handler::invoke(&*ingestor, event, context).await }
    }))
    .await
}
