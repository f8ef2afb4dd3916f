use std::collections::HashMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

pub const BASE_LOCATION_PROPERTY: &str = "default-base-location";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogsResponse {
    #[serde(default)]
    pub catalogs: Vec<Catalog>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub catalog_type: Option<String>,
    #[serde(default)]
    pub properties: HashMap<String, String>,
    #[serde(
        rename = "storageConfigInfo",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub storage_config_info: Option<StorageConfig>,
}

impl Catalog {
    pub fn default_base_location(&self) -> Option<&str> {
        self.properties.get(BASE_LOCATION_PROPERTY).map(String::as_str)
    }
}

impl Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name:          {}", self.name)?;
        writeln!(
            f,
            "Type:          {}",
            self.catalog_type.as_deref().unwrap_or("-")
        )?;
        writeln!(
            f,
            "Base Location: {}",
            self.default_base_location().unwrap_or("-")
        )?;
        if let Some(storage) = &self.storage_config_info {
            writeln!(f, "Storage:       {}", storage.storage_type)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageConfig {
    pub storage_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl StorageConfig {
    pub fn s3(role_arn: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            storage_type: "S3".to_string(),
            role_arn: Some(role_arn.into()),
            region: Some(region.into()),
        }
    }

    pub fn file() -> Self {
        Self {
            storage_type: "FILE".to_string(),
            role_arn: None,
            region: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateCatalogRequest {
    #[serde(rename = "type")]
    pub catalog_type: String,
    pub name: String,
    pub properties: HashMap<String, String>,
    #[serde(rename = "storageConfigInfo")]
    pub storage_config_info: StorageConfig,
}

impl CreateCatalogRequest {
    pub fn internal(
        name: impl Into<String>,
        base_location: impl Into<String>,
        storage: StorageConfig,
    ) -> Self {
        let mut properties = HashMap::new();
        properties.insert(BASE_LOCATION_PROPERTY.to_string(), base_location.into());
        Self {
            catalog_type: "INTERNAL".to_string(),
            name: name.into(),
            properties,
            storage_config_info: storage,
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}
