pub mod auth;
pub mod catalogs;
pub mod namespaces;
pub mod tables;

pub use catalogs::{Catalog, CatalogsResponse, CreateCatalogRequest, StorageConfig};
pub use namespaces::{CreateNamespaceRequest, NamespaceResponse, NamespacesResponse};
pub use tables::{
    CreateTableRequest, LoadTableResponse, SchemaField, Snapshot, TableMetadata, TableSchema,
};
