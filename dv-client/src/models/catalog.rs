use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default)]
pub struct GetPrimaryCatalogParams {
    pub headers: Option<HashMap<String, String>>,
}

impl GetPrimaryCatalogParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PostPrimaryCatalogParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    #[serde(skip_serializing)]
    pub headers: Option<HashMap<String, String>>,
}

impl PostPrimaryCatalogParams {
    pub fn new(guid: impl Into<String>) -> Self {
        Self {
            guid: Some(guid.into()),
            ..Default::default()
        }
    }

    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeletePrimaryCatalogParams {
    pub guid: Option<String>,
    pub headers: Option<HashMap<String, String>>,
}

impl DeletePrimaryCatalogParams {
    pub fn new(guid: impl Into<String>) -> Self {
        Self {
            guid: Some(guid.into()),
            ..Default::default()
        }
    }

    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PublishAssetsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_duplicates: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets: Option<Vec<PublishAsset>>,
    #[serde(skip_serializing)]
    pub headers: Option<HashMap<String, String>>,
}

impl PublishAssetsParams {
    pub fn new(
        catalog_id: impl Into<String>,
        allow_duplicates: bool,
        assets: Vec<PublishAsset>,
    ) -> Self {
        Self {
            catalog_id: Some(catalog_id.into()),
            allow_duplicates: Some(allow_duplicates),
            assets: Some(assets),
            ..Default::default()
        }
    }

    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishAsset {
    pub schema: String,
    pub table: String,
}

impl PublishAsset {
    pub fn new(schema: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            table: table.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrimaryCatalogInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<PrimaryCatalogEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<PrimaryCatalogMetadata>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrimaryCatalogEntity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_profiling: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bss_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_governed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrimaryCatalogMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl PrimaryCatalogMetadata {
    /// Creation time parsed as RFC 3339, when the service supplied one.
    pub fn create_time_as_datetime(&self) -> Option<DateTime<Utc>> {
        self.create_time
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostPrimaryCatalogResponse {
    pub guid: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogPublishResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicate_assets: Option<Vec<DuplicateAsset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_assets: Option<Vec<FailedAsset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_assets: Option<Vec<PublishedAsset>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateAsset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailedAsset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_msg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishedAsset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wkc_asset_id: Option<String>,
}
