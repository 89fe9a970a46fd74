use crate::error::Error;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Resolved property values exchanged with the orchestration engine.
pub type Props = Map<String, Value>;

pub const PROP_DOMAIN_NAME: &str = "domainName";
pub const PROP_IPV4: &str = "ipv4";

#[derive(Debug, Clone, PartialEq)]
pub struct CreateResult {
    pub id: String,
    pub outs: Props,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReadResult {
    pub id: String,
    pub outs: Props,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateResult {
    pub outs: Props,
}

/// Lifecycle callbacks the engine invokes for a dynamic resource.
///
/// Every method receives fully resolved values; deferred inputs are awaited
/// before the engine gets here (see [`crate::core::resource`]).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceProvider: Send + Sync {
    async fn create(&self, props: &Props) -> Result<CreateResult, Error>;
    async fn read(&self, id: &str, props: &Props) -> Result<ReadResult, Error>;
    async fn update(&self, id: &str, olds: &Props, news: &Props) -> Result<UpdateResult, Error>;
    async fn delete(&self, id: &str, props: &Props) -> Result<(), Error>;
}

/// Fetches a required string property.
pub fn required_str<'a>(props: &'a Props, key: &str) -> Result<&'a str, Error> {
    match props.get(key) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(Error::Validation(format!(
            "property {key} must be a string, got {other}"
        ))),
        None => Err(Error::Validation(format!("missing property: {key}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn props(value: Value) -> Props {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn test_required_str() {
        let p = props(json!({ "domainName": "a.lan", "ipv4": 7 }));
        assert_eq!(required_str(&p, PROP_DOMAIN_NAME).unwrap(), "a.lan");
        assert_matches!(required_str(&p, PROP_IPV4), Err(Error::Validation(msg)) if msg.contains("ipv4"));
        assert_matches!(required_str(&p, "missing"), Err(Error::Validation(_)));
    }
}
