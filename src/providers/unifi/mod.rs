//! UniFi controller static-DNS provider

pub mod client;
pub mod error;

pub use client::UnifiDnsRecordProvider;
pub use error::{UnifiError, map_error};

use async_trait::async_trait;
use log::info;
use serde_json::Value;

use crate::core::provider::{
    CreateResult, PROP_DOMAIN_NAME, PROP_IPV4, Props, ReadResult, ResourceProvider, UpdateResult,
    required_str,
};
use crate::core::record::{DNSRecord, VENDOR_ID_FIELD};
use crate::error::Error;

fn record_from_props(props: &Props) -> Result<DNSRecord, Error> {
    Ok(DNSRecord::new(
        required_str(props, PROP_DOMAIN_NAME)?,
        required_str(props, PROP_IPV4)?,
    ))
}

#[async_trait]
impl ResourceProvider for UnifiDnsRecordProvider {
    async fn create(&self, props: &Props) -> Result<CreateResult, Error> {
        let record = record_from_props(props)?;
        let raw = self.create_record(&record).await.map_err(map_error)?;
        let created = DNSRecord::parse(&raw)?;

        let Some(id) = created.identity.clone().filter(|id| !id.is_empty()) else {
            return Err(Error::InvariantViolation(format!(
                "controller created {} without assigning an identity",
                record.key
            )));
        };
        info!("[unifi] Created DNS record {} -> {} ({id})", created.key, created.value);

        Ok(CreateResult {
            id,
            outs: created.to_payload()?,
        })
    }

    /// Lists the site's records and returns the one whose `_id` is `id`.
    ///
    /// Only the matching entry goes through [`DNSRecord::parse`]. Other entries
    /// are compared by their raw `_id` and never validated, so AAAA, CNAME or
    /// malformed records elsewhere on the site don't fail the read.
    async fn read(&self, id: &str, props: &Props) -> Result<ReadResult, Error> {
        let records = self.list_records().await.map_err(map_error)?;

        let Some(raw) = records
            .iter()
            .find(|r| r.get(VENDOR_ID_FIELD).and_then(Value::as_str) == Some(id))
        else {
            return Err(Error::RecordNotFound {
                id: id.to_string(),
                props: props.clone(),
            });
        };

        let record = DNSRecord::parse(raw)?;
        Ok(ReadResult {
            id: id.to_string(),
            outs: record.to_payload()?,
        })
    }

    async fn update(&self, id: &str, _olds: &Props, news: &Props) -> Result<UpdateResult, Error> {
        let record = record_from_props(news)?;
        self.update_record(id, &record).await.map_err(map_error)?;
        info!("[unifi] Updated DNS record {id}: {} -> {}", record.key, record.value);

        Ok(UpdateResult { outs: news.clone() })
    }

    async fn delete(&self, id: &str, _props: &Props) -> Result<(), Error> {
        self.delete_record(id).await.map_err(map_error)?;
        info!("[unifi] Deleted DNS record {id}");
        Ok(())
    }
}
