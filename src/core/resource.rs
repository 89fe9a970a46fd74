//! Engine-facing declaration of a static DNS record.
//!
//! A [`DnsRecordResource`] only holds its inputs and the provider that
//! realizes it. The engine drives the lifecycle; the handle's one job is
//! turning possibly-deferred inputs into the concrete [`Props`] the
//! provider receives.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::oneshot;

use crate::core::provider::{PROP_DOMAIN_NAME, PROP_IPV4, Props, ResourceProvider, required_str};
use crate::error::Error;

/// A value that is either known now or supplied later by the engine.
pub enum Input<T> {
    Known(T),
    Deferred(oneshot::Receiver<T>),
}

impl<T> Input<T> {
    /// Creates a deferred input together with the sender that resolves it.
    pub fn deferred() -> (oneshot::Sender<T>, Self) {
        let (tx, rx) = oneshot::channel();
        (tx, Input::Deferred(rx))
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Input::Known(_))
    }
}

impl<T: Clone> Input<T> {
    /// Waits for the value; once resolved it stays known.
    async fn resolve(&mut self, name: &str) -> Result<T, Error> {
        if let Input::Deferred(rx) = self {
            let value = rx
                .await
                .map_err(|_| Error::UnresolvedInput(name.to_string()))?;
            *self = Input::Known(value);
        }
        match self {
            Input::Known(value) => Ok(value.clone()),
            Input::Deferred(_) => Err(Error::UnresolvedInput(name.to_string())),
        }
    }
}

impl From<String> for Input<String> {
    fn from(value: String) -> Self {
        Input::Known(value)
    }
}

impl From<&str> for Input<String> {
    fn from(value: &str) -> Self {
        Input::Known(value.to_string())
    }
}

impl<T: fmt::Debug> fmt::Debug for Input<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Known(value) => f.debug_tuple("Known").field(value).finish(),
            Input::Deferred(_) => f.write_str("Deferred"),
        }
    }
}

/// Dependency and ordering options. Passed through to the engine untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceOptions {
    pub depends_on: Vec<String>,
    pub parent: Option<String>,
    pub protect: bool,
    pub delete_before_replace: bool,
}

#[derive(Debug)]
pub struct DnsRecordArgs {
    pub domain_name: Input<String>,
    pub ipv4: Input<String>,
}

pub struct DnsRecordResource {
    name: String,
    args: DnsRecordArgs,
    provider: Arc<dyn ResourceProvider>,
    opts: ResourceOptions,
}

impl DnsRecordResource {
    pub fn new(
        name: impl Into<String>,
        args: DnsRecordArgs,
        provider: Arc<dyn ResourceProvider>,
        opts: Option<ResourceOptions>,
    ) -> Self {
        Self {
            name: name.into(),
            args,
            provider,
            opts: opts.unwrap_or_default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn provider(&self) -> Arc<dyn ResourceProvider> {
        Arc::clone(&self.provider)
    }

    pub fn opts(&self) -> &ResourceOptions {
        &self.opts
    }

    /// Awaits any deferred inputs and returns the props handed to the provider.
    pub async fn resolve_inputs(&mut self) -> Result<Props, Error> {
        let domain_name = self.args.domain_name.resolve(PROP_DOMAIN_NAME).await?;
        let ipv4 = self.args.ipv4.resolve(PROP_IPV4).await?;

        let mut props = Props::new();
        props.insert(PROP_DOMAIN_NAME.to_string(), Value::String(domain_name));
        props.insert(PROP_IPV4.to_string(), Value::String(ipv4));
        Ok(props)
    }
}

impl fmt::Debug for DnsRecordResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DnsRecordResource")
            .field("name", &self.name)
            .field("args", &self.args)
            .field("opts", &self.opts)
            .finish_non_exhaustive()
    }
}

/// The resource's externally visible outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecordOutputs {
    pub domain_name: String,
    pub ipv4: String,
}

impl DnsRecordOutputs {
    pub fn from_outs(outs: &Props) -> Result<Self, Error> {
        Ok(Self {
            domain_name: required_str(outs, PROP_DOMAIN_NAME)?.to_string(),
            ipv4: required_str(outs, PROP_IPV4)?.to_string(),
        })
    }
}
