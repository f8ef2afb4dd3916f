//! Polaris Catalog Client for Rust
//!
//! This crate provides a client for the Polaris catalog REST and management
//! APIs: OAuth client-credentials authentication, listing and creating
//! catalogs, namespaces, and tables, and inspecting table metadata.
//!
//! # Example
//!
//! ```no_run
//! use polaris_client::{ClientConfig, PolarisClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::build("localhost:8183", "admin", "admin").build()?;
//!     let client = PolarisClient::authenticate(config).await?;
//!
//!     if let Some(response) = client.list_catalogs().await? {
//!         for catalog in response.catalogs {
//!             println!("{}", catalog.name);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use client::PolarisClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, Result};

#[doc(hidden)]
pub mod prelude {
    pub use crate::client::PolarisClient;
    pub use crate::config::{ClientConfig, ClientConfigBuilder};
    pub use crate::models::{
        catalogs::{Catalog, CatalogsResponse, CreateCatalogRequest, StorageConfig},
        namespaces::{CreateNamespaceRequest, NamespaceResponse, NamespacesResponse},
        tables::{CreateTableRequest, LoadTableResponse, SchemaField, TableMetadata, TableSchema},
    };
}
