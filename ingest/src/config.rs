//! Process configuration, read once at cold start

use crate::error::ConfigError;
use std::str::FromStr;

/// Table written to when `TABLE_NAME` is not set.
pub const DEFAULT_TABLE_NAME: &str = "studentData";

/// Which [`RecordStore`](crate::store::RecordStore) backs the function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    DynamoDb,
    Memory,
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dynamodb" | "dynamo" => Ok(Backend::DynamoDb),
            "memory" => Ok(Backend::Memory),
            _ => Err(ConfigError::UnknownBackend(s.to_string())),
        }
    }
}

/// Function configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Name of the DynamoDB table holding student records
    pub table_name: String,

    /// Region override; the SDK's provider chain is used when unset
    pub region: Option<String>,

    /// Endpoint override, e.g. a local DynamoDB
    pub endpoint_url: Option<String>,

    pub backend: Backend,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            region: None,
            endpoint_url: None,
            backend: Backend::DynamoDb,
        }
    }
}

impl Config {
    /// Load config from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load config from an arbitrary variable lookup.
    ///
    /// Recognised keys are `TABLE_NAME`, `AWS_REGION`, `DYNAMODB_ENDPOINT`
    /// and `STORE_BACKEND`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(table) = lookup("TABLE_NAME") {
            if table.trim().is_empty() {
                return Err(ConfigError::Empty("TABLE_NAME"));
            }
            config.table_name = table;
        }

        config.region = lookup("AWS_REGION").filter(|r| !r.is_empty());
        config.endpoint_url = lookup("DYNAMODB_ENDPOINT").filter(|e| !e.is_empty());

        if let Some(backend) = lookup("STORE_BACKEND") {
            config.backend = backend.parse()?;
        }

        Ok(config)
    }
}
