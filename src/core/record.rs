use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::provider::Props;
use crate::error::Error;

/// Field the controller uses for a record's identity in its responses.
pub const VENDOR_ID_FIELD: &str = "_id";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DNSRecordType {
    #[default]
    A,
}

/// A static DNS entry as the controller's API understands it.
///
/// `identity` is read from `_id` and never written back: request bodies carry
/// only `record_type`, `key`, `value` and `enabled`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DNSRecord {
    #[serde(rename = "_id", default, skip_serializing)]
    pub identity: Option<String>,
    #[serde(default)]
    pub record_type: DNSRecordType,
    pub key: String,
    pub value: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl DNSRecord {
    /// An enabled A record that has not been created yet.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            identity: None,
            record_type: DNSRecordType::A,
            key: key.into(),
            value: value.into(),
            enabled: true,
        }
    }

    /// Interprets one JSON object from an API response.
    pub fn parse(raw: &Value) -> Result<Self, Error> {
        Self::deserialize(raw).map_err(|e| Error::Validation(format!("invalid DNS record: {e}")))
    }

    /// The body sent on create and update.
    pub fn to_payload(&self) -> Result<Props, Error> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(Error::Validation(format!(
                "DNS record serialized to a non-object: {other}"
            ))),
            Err(e) => Err(Error::Validation(e.to_string())),
        }
    }
}
