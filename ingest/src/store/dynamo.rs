use super::RecordStore;
use crate::{config::Config, error::StoreError, record::StudentRecord};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::{
    error::{DisplayErrorContext, ProvideErrorMetadata},
    types::AttributeValue,
    Client,
};
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// A DynamoDB table keyed by `studentid`.
#[derive(Debug, Clone)]
pub struct DynamoStore {
    client: Client,
    table_name: String,
}

impl DynamoStore {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Load the shared SDK configuration and build a client for the
    /// configured table. Meant to run once, at cold start.
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint.clone());
        }
        let sdk_config = loader.load().await;

        Self::new(Client::new(&sdk_config), config.table_name.clone())
    }
}

#[async_trait]
impl RecordStore for DynamoStore {
    async fn put(&self, key: &str, record: &StudentRecord) -> Result<(), StoreError> {
        debug!(table = %self.table_name, key, "put_item");

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item(record)))
            .send()
            .await
            .map(|_| ())
            .map_err(|err| StoreError::Backend(describe(&err)))
    }
}

/// The DynamoDB item for a record.
fn item(record: &StudentRecord) -> HashMap<String, AttributeValue> {
    record
        .attributes()
        .iter()
        .map(|(name, value)| (name.to_string(), to_attribute(value)))
        .collect()
}

/// Map a JSON value onto the closest DynamoDB attribute type.
pub(crate) fn to_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(items) => AttributeValue::L(items.iter().map(to_attribute).collect()),
        Value::Object(fields) => AttributeValue::M(
            fields
                .iter()
                .map(|(k, v)| (k.clone(), to_attribute(v)))
                .collect(),
        ),
    }
}

/// Human readable description of an SDK failure: the service error code and
/// message when the service answered, the whole error chain otherwise.
fn describe<E>(err: &E) -> String
where
    E: ProvideErrorMetadata + std::error::Error,
{
    let code = err.code().filter(|c| !c.is_empty());
    let message = err.message().filter(|m| !m.is_empty());
    match (code, message) {
        (Some(code), Some(message)) => format!("{}: {}", code, message),
        (Some(code), None) => code.to_string(),
        _ => DisplayErrorContext(err).to_string(),
    }
}
