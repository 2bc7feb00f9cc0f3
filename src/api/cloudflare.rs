use super::{client::DnsApiClient, models::*};
use crate::error::{Error, Result};
use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

pub const API_BASE_URL: &str = "https://api.cloudflare.com/client/v4";
pub const API_KEY_HEADER: &str = "X-Cloudflare-API-Key";
pub const ZONE_ID_HEADER: &str = "X-Zone-ID";

/// Where requests go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Provider base URL, authenticated with a bearer token.
    Direct(String),
    /// Proxy forwarder URL such as `https://host/api/cloudflare`. The
    /// provider sub-path travels in the `path` query parameter.
    Proxy(String),
}

pub struct CloudflareClient {
    client: reqwest::Client,
    endpoint: Endpoint,
}

impl Default for CloudflareClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsApiClient for CloudflareClient {
    async fn list_records_page(
        &self,
        access: &ZoneAccess,
        page: u32,
        per_page: u32,
    ) -> Result<RecordPage> {
        let path = format!(
            "/zones/{}/dns_records?per_page={}&page={}",
            access.zone_id, per_page, page
        );
        let response: ApiResponse<Vec<DnsRecord>> =
            self.send(self.request(Method::GET, access, &path)).await?;

        Ok(RecordPage {
            records: response.result.unwrap_or_default(),
            total_pages: response.result_info.and_then(|info| info.total_pages),
        })
    }

    async fn create_record(&self, access: &ZoneAccess, body: &RecordBody) -> Result<DnsRecord> {
        let path = format!("/zones/{}/dns_records", access.zone_id);
        let response: ApiResponse<DnsRecord> = self
            .send(self.request(Method::POST, access, &path).json(body))
            .await?;

        let record = Self::require_result(response)?;
        info!("Created {} record {}", record.r#type, record.name);
        Ok(record)
    }

    async fn update_record(
        &self,
        access: &ZoneAccess,
        record_id: &str,
        body: &RecordBody,
    ) -> Result<DnsRecord> {
        let path = format!("/zones/{}/dns_records/{}", access.zone_id, record_id);
        let response: ApiResponse<DnsRecord> = self
            .send(self.request(Method::PUT, access, &path).json(body))
            .await?;

        let record = Self::require_result(response)?;
        info!("Updated {} record {}", record.r#type, record.name);
        Ok(record)
    }

    async fn delete_record(&self, access: &ZoneAccess, record_id: &str) -> Result<()> {
        let path = format!("/zones/{}/dns_records/{}", access.zone_id, record_id);
        let _: ApiResponse<serde_json::Value> = self
            .send(self.request(Method::DELETE, access, &path))
            .await?;

        info!("Deleted record {}", record_id);
        Ok(())
    }
}

impl CloudflareClient {
    pub fn new() -> Self {
        Self::with_endpoint(Endpoint::Direct(API_BASE_URL.to_string()))
    }

    pub fn through_proxy(proxy_url: impl Into<String>) -> Self {
        Self::with_endpoint(Endpoint::Proxy(proxy_url.into()))
    }

    pub fn with_endpoint(endpoint: Endpoint) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    fn request(&self, method: Method, access: &ZoneAccess, path: &str) -> RequestBuilder {
        debug!("{} {}", method, path);

        let builder = match &self.endpoint {
            Endpoint::Direct(base) => self
                .client
                .request(method, format!("{}{}", base.trim_end_matches('/'), path))
                .bearer_auth(&access.api_key),
            Endpoint::Proxy(url) => self
                .client
                .request(method, url.as_str())
                .query(&[("path", path)])
                .header(API_KEY_HEADER, access.api_key.as_str())
                .header(ZONE_ID_HEADER, access.zone_id.as_str()),
        };

        builder.header("Content-Type", "application/json")
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<ApiResponse<T>> {
        let response = request.send().await.map_err(|e| {
            warn!("Request failed: {}", e);
            Error::from(e)
        })?;
        debug!("Response Status: {}", response.status());

        let text = response.text().await?;
        ApiResponse::<T>::parse(&text)?.into_success().inspect_err(|e| {
            warn!("API request failed: {}", e);
        })
    }

    fn require_result<T>(response: ApiResponse<T>) -> Result<T> {
        response
            .result
            .ok_or_else(|| Error::Network("API response is missing the result".to_string()))
    }
}
