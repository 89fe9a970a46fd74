use std::env;
use std::fmt;

use crate::error::Error;

/// Connection settings for the controller. Fixed for a provider's lifetime.
#[derive(Clone)]
pub struct UnifiConfig {
    pub base_url: String,
    pub api_token: String,
    pub verify_tls: bool,
}

impl UnifiConfig {
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>, verify_tls: bool) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: api_token.into(),
            verify_tls,
        }
    }

    /// Reads `UNIFI_BASE_URL`, `UNIFI_API_TOKEN` and `UNIFI_VERIFY_TLS`.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| Error::Config(format!("{key} is not set")))
        };

        let verify_tls = match lookup("UNIFI_VERIFY_TLS").as_deref() {
            None | Some("") => true,
            Some(v) => parse_bool(v).ok_or_else(|| {
                Error::Config(format!("UNIFI_VERIFY_TLS must be true or false, got {v}"))
            })?,
        };

        Ok(UnifiConfig {
            base_url: required("UNIFI_BASE_URL")?,
            api_token: required("UNIFI_API_TOKEN")?,
            verify_tls,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

impl fmt::Debug for UnifiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnifiConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &"<redacted>")
            .field("verify_tls", &self.verify_tls)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_defaults_to_verifying_tls() {
        let config = UnifiConfig::from_lookup(lookup(&[
            ("UNIFI_BASE_URL", "https://192.168.1.1"),
            ("UNIFI_API_TOKEN", "secret"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://192.168.1.1");
        assert_eq!(config.api_token, "secret");
        assert!(config.verify_tls);
    }

    #[test]
    fn test_from_lookup_verify_tls_off() {
        let config = UnifiConfig::from_lookup(lookup(&[
            ("UNIFI_BASE_URL", "https://192.168.1.1"),
            ("UNIFI_API_TOKEN", "secret"),
            ("UNIFI_VERIFY_TLS", "False"),
        ]))
        .unwrap();
        assert!(!config.verify_tls);
    }

    #[test]
    fn test_from_lookup_errors() {
        assert_matches!(
            UnifiConfig::from_lookup(lookup(&[("UNIFI_API_TOKEN", "secret")])),
            Err(Error::Config(msg)) if msg.contains("UNIFI_BASE_URL")
        );
        assert_matches!(
            UnifiConfig::from_lookup(lookup(&[
                ("UNIFI_BASE_URL", "https://192.168.1.1"),
                ("UNIFI_API_TOKEN", ""),
            ])),
            Err(Error::Config(_))
        );
        assert_matches!(
            UnifiConfig::from_lookup(lookup(&[
                ("UNIFI_BASE_URL", "https://192.168.1.1"),
                ("UNIFI_API_TOKEN", "secret"),
                ("UNIFI_VERIFY_TLS", "maybe"),
            ])),
            Err(Error::Config(_))
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = UnifiConfig::new("https://192.168.1.1", "secret", true);
        let out = format!("{config:?}");
        assert!(!out.contains("secret"));
        assert!(out.contains("192.168.1.1"));
    }
}
