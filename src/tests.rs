use serde_json::json;

use crate::models::catalogs::{CreateCatalogRequest, StorageConfig};
use crate::models::namespaces::CreateNamespaceRequest;
use crate::models::tables::{SchemaField, TableIdentifier, TableMetadata, TableSchema};

#[test]
fn test_create_catalog_request() {
    let request = CreateCatalogRequest::internal(
        "analytics",
        "s3://my-data-bucket/warehouse",
        StorageConfig::s3("arn:aws:iam::123456789012:role/S3AccessRole", "us-east-1"),
    );

    assert_eq!(request.catalog_type, "INTERNAL");
    assert_eq!(request.name, "analytics");

    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body["type"], "INTERNAL");
    assert_eq!(
        body["properties"]["default-base-location"],
        "s3://my-data-bucket/warehouse"
    );
    assert_eq!(body["storageConfigInfo"]["storageType"], "S3");
    assert_eq!(
        body["storageConfigInfo"]["roleArn"],
        "arn:aws:iam::123456789012:role/S3AccessRole"
    );
    assert_eq!(body["storageConfigInfo"]["region"], "us-east-1");
}

#[test]
fn test_file_storage_omits_aws_fields() {
    let body = serde_json::to_value(StorageConfig::file()).unwrap();
    assert_eq!(body["storageType"], "FILE");
    assert!(body.get("roleArn").is_none());
    assert!(body.get("region").is_none());
}

#[test]
fn test_create_namespace_request_properties() {
    let request = CreateNamespaceRequest::new("web").with_property("owner", "admin");
    assert_eq!(request.namespace, vec!["web".to_string()]);

    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body["namespace"][0], "web");
    assert_eq!(body["properties"]["owner"], "admin");
}

#[test]
fn test_create_namespace_request_segments() {
    let request =
        CreateNamespaceRequest::with_segments(vec!["web".to_string(), "events".to_string()]);
    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body["namespace"], json!(["web", "events"]));
}

#[test]
fn test_table_schema_serializes_iceberg_keys() {
    let schema = TableSchema::new(0, vec![SchemaField::new(1, "id", true, "long")]);
    let body = serde_json::to_value(&schema).unwrap();

    assert_eq!(body["type"], "struct");
    assert_eq!(body["schema-id"], 0);
    assert_eq!(body["fields"][0]["id"], 1);
    assert_eq!(body["fields"][0]["required"], true);
    assert_eq!(body["fields"][0]["type"], "long");
}

#[test]
fn test_table_identifier_full_name() {
    let identifier = TableIdentifier {
        namespace: vec!["web".to_string(), "events".to_string()],
        name: "clicks".to_string(),
    };
    assert_eq!(identifier.full_name(), "web.events.clicks");
}

fn sample_metadata() -> TableMetadata {
    serde_json::from_value(json!({
        "current-schema-id": 1,
        "schemas": [
            {"type": "struct", "schema-id": 0, "fields": [
                {"id": 1, "name": "id", "required": true, "type": "long"}
            ]},
            {"type": "struct", "schema-id": 1, "fields": [
                {"id": 1, "name": "id", "required": true, "type": "long"},
                {"id": 2, "name": "created_at", "required": true, "type": "timestamp"}
            ]}
        ],
        "current-snapshot-id": 100,
        "snapshots": [
            {"snapshot-id": 100, "timestamp-ms": 1700000000000_i64, "operation": "append",
             "summary": {"added-data-files": "2"}},
            {"snapshot-id": 99, "timestamp-ms": 1690000000000_i64}
        ]
    }))
    .unwrap()
}

#[test]
fn test_table_metadata_current_snapshot() {
    let metadata = sample_metadata();

    let current = metadata.current_snapshot().unwrap();
    assert_eq!(current.snapshot_id, 100);
    assert!(metadata.is_current(current));
    assert!(!metadata.is_current(&metadata.snapshots[1]));

    assert_eq!(metadata.current_schema().unwrap().schema_id, 1);
}

#[test]
fn test_table_metadata_without_snapshot_match() {
    let metadata: TableMetadata = serde_json::from_value(json!({
        "current-schema-id": 0,
        "schemas": [{"type": "struct", "schema-id": 0, "fields": []}],
        "snapshots": [{"snapshot-id": 5, "timestamp-ms": 1700000000000_i64}]
    }))
    .unwrap();

    assert!(metadata.current_snapshot().is_none());
    assert!(!metadata.is_current(&metadata.snapshots[0]));
}

#[test]
fn test_metadata_report_covers_all_schemas_and_snapshots() {
    let metadata = sample_metadata();
    let report = metadata.to_string();

    assert_eq!(report.matches("Schema (ID:").count(), 2);
    assert_eq!(report.matches("Snapshot ID:").count(), 2);
    assert_eq!(report.matches("^ current snapshot").count(), 1);
    assert!(report.contains("created_at (timestamp)"));
    assert!(report.contains("Operation: append"));
    assert!(report.contains("Operation: N/A"));
    assert!(report.contains("added-data-files: 2"));
}

#[test]
fn test_snapshot_timestamp_as_datetime() {
    let metadata = sample_metadata();
    let timestamp = metadata.snapshots[0].timestamp_as_datetime().unwrap();
    assert_eq!(timestamp.timestamp_millis(), 1700000000000);
}
