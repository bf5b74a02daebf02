//! Response types

use crate::ingestor::Outcome;
use serde::Serialize;

/// The envelope handed back to the invocation platform.
///
/// `body` holds the message JSON-encoded as a string, so a platform relaying
/// it as an HTTP body produces valid JSON.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    pub body: String,
}

impl From<Outcome> for InvocationResponse {
    fn from(outcome: Outcome) -> Self {
        InvocationResponse {
            status_code: outcome.status.status_code(),
            body: encode_message(&outcome.message),
        }
    }
}

/// JSON-encode a message string.
pub fn encode_message(message: &str) -> String {
    serde_json::Value::from(message).to_string()
}
