//! An AWS Lambda function that stores student records in DynamoDB.
//!
//! An invocation carries a flat mapping with the keys `studentid`, `name`,
//! `class` and `age`. The [`RecordIngestor`] checks that all four are present,
//! writes the record to a [`RecordStore`] keyed by `studentid`, and reports
//! back an [`InvocationResponse`]:
//!
//! ```json
//! { "statusCode": 200, "body": "\"Student data saved successfully!\"" }
//! ```
//!
//! Incomplete events get a `400` without touching the store; a failed write
//! gets a `500` carrying the store's error description.

pub mod config;
pub mod error;
pub mod handler;
pub mod ingestor;
pub mod logging;
pub mod record;
pub mod response;
pub mod store;

pub use crate::{
    config::{Backend, Config},
    error::{ConfigError, IngestError, StoreError},
    ingestor::{Outcome, RecordIngestor, Status},
    record::StudentRecord,
    response::InvocationResponse,
    store::{DynamoStore, MemoryStore, RecordStore},
};

/// Build the store selected by `config`.
pub async fn store_from_config(config: &Config) -> Box<dyn RecordStore> {
    match config.backend {
        Backend::DynamoDb => Box::new(DynamoStore::from_config(config).await),
        Backend::Memory => Box::new(MemoryStore::new()),
    }
}
