//! Static DNS (A) records on a UniFi controller, exposed as a dynamic
//! resource provider for an infrastructure orchestration engine.
//!
//! The engine calls [`ResourceProvider`] with resolved property maps;
//! [`UnifiDnsRecordProvider`] turns each call into one request against the
//! controller's static-DNS API. [`DnsRecordResource`] is the declarative
//! handle the engine tracks.

pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod providers;

pub use config::UnifiConfig;
pub use crate::core::provider::{
    CreateResult, PROP_DOMAIN_NAME, PROP_IPV4, Props, ReadResult, ResourceProvider, UpdateResult,
};
pub use crate::core::record::{DNSRecord, DNSRecordType};
pub use crate::core::resource::{DnsRecordArgs, DnsRecordOutputs, DnsRecordResource, Input, ResourceOptions};
pub use error::Error;
pub use logging::{init_logging, try_init_logging};
pub use providers::unifi::UnifiDnsRecordProvider;
