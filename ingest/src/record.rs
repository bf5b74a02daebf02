//! The student record carried by an ingestion event

use crate::error::{IngestError, Result};
use serde_json::{Map, Value};

/// Event key holding the primary key of the record.
pub const STUDENT_ID: &str = "studentid";
/// Event key holding the student's name.
pub const NAME: &str = "name";
/// Event key holding the class/section label.
pub const CLASS: &str = "class";
/// Event key holding the student's age.
pub const AGE: &str = "age";

/// Keys every event must carry, in the order they are reported when missing.
pub const REQUIRED_FIELDS: [&str; 4] = [STUDENT_ID, NAME, CLASS, AGE];

/// A validated student record.
///
/// Attribute values are kept exactly as they arrived in the event. Nothing is
/// coerced, so a numeric `studentid` or a string `age` is passed through to
/// the store untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub student_id: Value,
    pub name: Value,
    pub class: Value,
    pub age: Value,
}

impl StudentRecord {
    /// Build a record from a raw invocation event.
    ///
    /// Every field in [`REQUIRED_FIELDS`] must be present and non-null.
    /// Events that are not JSON objects lack all of them. Extra keys are
    /// ignored.
    pub fn from_event(event: &Value) -> Result<Self> {
        let empty = Map::new();
        let fields = event.as_object().unwrap_or(&empty);

        let missing: Vec<&'static str> = REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|key| fields.get(*key).map_or(true, Value::is_null))
            .collect();
        if !missing.is_empty() {
            return Err(IngestError::MissingFields(missing));
        }

        let field = |key: &str| fields.get(key).cloned().unwrap_or(Value::Null);
        Ok(StudentRecord {
            student_id: field(STUDENT_ID),
            name: field(NAME),
            class: field(CLASS),
            age: field(AGE),
        })
    }

    /// Primary key under which the record is stored.
    pub fn key(&self) -> String {
        match &self.student_id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// The four attributes as a JSON object, which is what the store persists.
    pub fn to_value(&self) -> Value {
        let mut item = Map::with_capacity(REQUIRED_FIELDS.len());
        item.insert(STUDENT_ID.to_string(), self.student_id.clone());
        item.insert(NAME.to_string(), self.name.clone());
        item.insert(CLASS.to_string(), self.class.clone());
        item.insert(AGE.to_string(), self.age.clone());
        Value::Object(item)
    }

    /// Attribute name/value pairs in storage order.
    pub fn attributes(&self) -> [(&'static str, &Value); 4] {
        [
            (STUDENT_ID, &self.student_id),
            (NAME, &self.name),
            (CLASS, &self.class),
            (AGE, &self.age),
        ]
    }
}
