use log::{debug, error};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;

use crate::config::UnifiConfig;
use crate::core::record::DNSRecord;
use crate::providers::unifi::error::UnifiError;

pub const API_KEY_HEADER: &str = "x-api-key";
pub const STATIC_DNS_PATH: &str = "proxy/network/v2/api/site/default/static-dns";

/// Static DNS records on a UniFi controller, reached through its REST API.
pub struct UnifiDnsRecordProvider {
    config: UnifiConfig,
}

impl UnifiDnsRecordProvider {
    pub fn new(config: UnifiConfig) -> Self {
        Self { config }
    }

    /// Builds a short-lived client for a single call.
    fn client(&self) -> Result<Client, UnifiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut api_key = HeaderValue::from_str(&self.config.api_token)
            .map_err(|e| UnifiError::InvalidToken(e.to_string()))?;
        api_key.set_sensitive(true);
        headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);

        Ok(Client::builder()
            .default_headers(headers)
            .danger_accept_invalid_certs(!self.config.verify_tls)
            .build()?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn record_path(id: &str) -> String {
        format!("{STATIC_DNS_PATH}/{id}")
    }

    async fn send(
        &self,
        request: RequestBuilder,
        method: &str,
        path: &str,
    ) -> Result<Response, UnifiError> {
        debug!("[unifi] {method} {path}");
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = error_body(response.text().await);
        error!("[unifi] {method} {path} failed with HTTP {status}: {body}");
        Err(UnifiError::Status { status, body })
    }

    pub async fn create_record(&self, record: &DNSRecord) -> Result<Value, UnifiError> {
        let request = self.client()?.post(self.url(STATIC_DNS_PATH)).json(record);
        let response = self.send(request, "POST", STATIC_DNS_PATH).await?;
        Ok(serde_json::from_slice(&response.bytes().await?)?)
    }

    pub async fn list_records(&self) -> Result<Vec<Value>, UnifiError> {
        let request = self.client()?.get(self.url(STATIC_DNS_PATH));
        let response = self.send(request, "GET", STATIC_DNS_PATH).await?;
        Ok(serde_json::from_slice(&response.bytes().await?)?)
    }

    pub async fn update_record(&self, id: &str, record: &DNSRecord) -> Result<(), UnifiError> {
        let path = Self::record_path(id);
        let request = self.client()?.put(self.url(&path)).json(record);
        self.send(request, "PUT", &path).await?;
        Ok(())
    }

    pub async fn delete_record(&self, id: &str) -> Result<(), UnifiError> {
        let path = Self::record_path(id);
        let request = self.client()?.delete(self.url(&path));
        self.send(request, "DELETE", &path).await?;
        Ok(())
    }
}

/// The body of a failed response, or a marker saying why it could not be read.
fn error_body<E: std::fmt::Display>(read: Result<String, E>) -> String {
    read.unwrap_or_else(|e| format!("<unreadable body: {e}>"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let provider = UnifiDnsRecordProvider::new(UnifiConfig::new("https://10.0.0.1/", "t", true));
        assert_eq!(
            provider.url(STATIC_DNS_PATH),
            "https://10.0.0.1/proxy/network/v2/api/site/default/static-dns"
        );
        assert_eq!(
            UnifiDnsRecordProvider::record_path("abc123"),
            "proxy/network/v2/api/site/default/static-dns/abc123"
        );
    }

    #[test]
    fn test_error_body_marks_unreadable_body() {
        assert_eq!(error_body::<String>(Ok("forbidden".to_string())), "forbidden");
        assert_eq!(
            error_body(Err("connection reset")),
            "<unreadable body: connection reset>"
        );
    }

    #[test]
    fn test_client_rejects_unusable_token() {
        let provider =
            UnifiDnsRecordProvider::new(UnifiConfig::new("https://10.0.0.1", "bad\ntoken", true));
        assert!(matches!(provider.client(), Err(UnifiError::InvalidToken(_))));
    }

    #[test]
    fn test_client_builds_without_tls_verification() {
        let provider =
            UnifiDnsRecordProvider::new(UnifiConfig::new("https://10.0.0.1", "token", false));
        assert!(provider.client().is_ok());
    }
}
