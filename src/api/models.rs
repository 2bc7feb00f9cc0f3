use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::{Error, Result};

/// Message used when a failed envelope carries no usable error text.
pub const UNKNOWN_API_ERROR: &str = "Unknown API error";

/// Credential and zone every provider call is made for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneAccess {
    pub api_key: String,
    pub zone_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DnsRecord {
    pub id: String,
    pub r#type: String,
    pub name: String,
    #[serde(default)]
    pub content: String,
    pub ttl: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
    #[serde(default)]
    pub proxiable: bool,
    #[serde(default)]
    pub proxied: bool,
}

/// Body submitted on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordBody {
    pub r#type: String,
    pub name: String,
    pub content: String,
    pub ttl: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
    pub proxied: bool,
}

/// One page of the record listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordPage {
    pub records: Vec<DnsRecord>,
    /// `None` when the provider sent no pagination info.
    pub total_pages: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub result: Option<T>,
    pub result_info: Option<ResultInfo>,
    pub errors: Option<Vec<ApiErrorEntry>>,
}

#[derive(Debug, Deserialize)]
pub struct ResultInfo {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorEntry {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: String,
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Parses an envelope, treating anything that is not one as a transport
    /// failure.
    pub fn parse(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map_err(|e| Error::Network(format!("Failed to parse API response: {}", e)))
    }
}

impl<T> ApiResponse<T> {
    /// Fails with the provider's joined error messages on `success: false`.
    pub fn into_success(self) -> Result<Self> {
        if self.success {
            return Ok(self);
        }
        Err(Error::Provider(error_message(self.errors.as_deref())))
    }
}

pub fn error_message(errors: Option<&[ApiErrorEntry]>) -> String {
    let message = errors
        .unwrap_or_default()
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    if message.is_empty() {
        UNKNOWN_API_ERROR.to_string()
    } else {
        message
    }
}
