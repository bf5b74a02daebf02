//! Validate an event, write it through to the store, report the outcome

use crate::{
    error::{IngestError, Result},
    record::StudentRecord,
    store::RecordStore,
};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Message returned once a record has been persisted.
pub const SAVED_MESSAGE: &str = "Student data saved successfully!";
/// Message returned when the event lacks a required field.
pub const MISSING_FIELDS_MESSAGE: &str = "Error: Missing required fields in the request.";
/// Prefix of the message returned when the store write fails.
pub const SAVE_FAILED_PREFIX: &str = "Error saving student data: ";

/// Kind of result produced by an ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    ValidationError,
    StorageError,
}

impl Status {
    /// HTTP-style status code reported to the invocation platform.
    pub fn status_code(self) -> u16 {
        match self {
            Status::Success => 200,
            Status::ValidationError => 400,
            Status::StorageError => 500,
        }
    }
}

/// Result of a single ingestion.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub status: Status,
    pub message: String,
}

impl Outcome {
    fn saved() -> Self {
        Outcome {
            status: Status::Success,
            message: SAVED_MESSAGE.to_string(),
        }
    }
}

impl From<IngestError> for Outcome {
    fn from(err: IngestError) -> Self {
        match err {
            IngestError::MissingFields(_) => Outcome {
                status: Status::ValidationError,
                message: MISSING_FIELDS_MESSAGE.to_string(),
            },
            IngestError::Storage(e) => Outcome {
                status: Status::StorageError,
                message: format!("{}{}", SAVE_FAILED_PREFIX, e),
            },
        }
    }
}

/// Writes student records into a [`RecordStore`].
///
/// Holds nothing but the store handle, so one ingestor can serve every
/// invocation of the process.
#[derive(Debug)]
pub struct RecordIngestor<S> {
    store: S,
}

impl<S: RecordStore> RecordIngestor<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Ingest one event. Every failure is folded into the returned [`Outcome`].
    pub async fn ingest(&self, event: &Value) -> Outcome {
        debug!(%event, "event received");

        match self.try_ingest(event).await {
            Ok(key) => {
                info!(%key, "student record saved");
                Outcome::saved()
            }
            Err(err) => {
                match &err {
                    IngestError::MissingFields(missing) => warn!(?missing, "rejected incomplete event"),
                    IngestError::Storage(e) => warn!(error = %e, "failed to save student record"),
                }
                Outcome::from(err)
            }
        }
    }

    /// Validate then write; returns the key the record was stored under.
    async fn try_ingest(&self, event: &Value) -> Result<String> {
        let record = StudentRecord::from_event(event)?;
        let key = record.key();
        self.store.put(&key, &record).await?;
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::StoreError, store::MemoryStore};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Records every put and answers with a canned result.
    #[derive(Default)]
    struct RecordingStore {
        puts: Mutex<Vec<(String, Value)>>,
        failure: Option<String>,
    }

    impl RecordingStore {
        fn failing(description: &str) -> Self {
            RecordingStore {
                failure: Some(description.to_string()),
                ..Default::default()
            }
        }

        fn puts(&self) -> Vec<(String, Value)> {
            self.puts.lock().expect("poisoned").clone()
        }
    }

    #[async_trait]
    impl RecordStore for RecordingStore {
        async fn put(&self, key: &str, record: &StudentRecord) -> std::result::Result<(), StoreError> {
            self.puts
                .lock()
                .expect("poisoned")
                .push((key.to_string(), record.to_value()));
            match &self.failure {
                Some(description) => Err(StoreError::Backend(description.clone())),
                None => Ok(()),
            }
        }
    }

    fn ana() -> Value {
        json!({"studentid": "S1", "name": "Ana", "class": "5A", "age": 10})
    }

    #[tokio::test]
    async fn complete_event_is_written_once_verbatim() {
        let ingestor = RecordIngestor::new(RecordingStore::default());

        let outcome = ingestor.ingest(&ana()).await;

        assert_eq!(outcome.status, Status::Success);
        assert_eq!(outcome.message, "Student data saved successfully!");
        assert_eq!(ingestor.store().puts(), vec![("S1".to_string(), ana())]);
    }

    #[tokio::test]
    async fn incomplete_events_never_reach_the_store() {
        let ingestor = RecordIngestor::new(RecordingStore::default());

        for field in &["studentid", "name", "class", "age"] {
            let mut event = ana();
            event.as_object_mut().expect("object").remove(*field);

            let outcome = ingestor.ingest(&event).await;
            assert_eq!(outcome.status, Status::ValidationError, "without {}", field);
            assert_eq!(outcome.message, "Error: Missing required fields in the request.");
        }
        assert_eq!(ingestor.ingest(&json!({})).await.status, Status::ValidationError);
        assert_eq!(ingestor.ingest(&Value::Null).await.status, Status::ValidationError);
        assert!(ingestor.store().puts().is_empty());
    }

    #[tokio::test]
    async fn store_failure_is_reported_with_its_description() {
        let ingestor = RecordIngestor::new(RecordingStore::failing("ThroughputExceeded"));

        let outcome = ingestor.ingest(&ana()).await;

        assert_eq!(outcome.status, Status::StorageError);
        assert_eq!(outcome.message, "Error saving student data: ThroughputExceeded");
        assert_eq!(ingestor.store().puts().len(), 1);
    }

    #[tokio::test]
    async fn repeated_ingestion_overwrites() {
        let ingestor = RecordIngestor::new(MemoryStore::new());

        assert_eq!(ingestor.ingest(&ana()).await.status, Status::Success);
        let mut renamed = ana();
        renamed["name"] = json!("Ana Maria");
        assert_eq!(ingestor.ingest(&renamed).await.status, Status::Success);

        assert_eq!(ingestor.store().len().await, 1);
        assert_eq!(ingestor.store().get("S1").await, Some(renamed));
    }

    #[test]
    fn status_codes() {
        assert_eq!(Status::Success.status_code(), 200);
        assert_eq!(Status::ValidationError.status_code(), 400);
        assert_eq!(Status::StorageError.status_code(), 500);
    }
}
