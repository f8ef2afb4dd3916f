use std::collections::HashMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableIdentifiersResponse {
    #[serde(default)]
    pub identifiers: Vec<TableIdentifier>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableIdentifier {
    pub namespace: Vec<String>,
    pub name: String,
}

impl TableIdentifier {
    pub fn full_name(&self) -> String {
        let mut parts = self.namespace.clone();
        parts.push(self.name.clone());
        parts.join(".")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaField {
    pub id: i32,
    pub name: String,
    pub required: bool,
    #[serde(rename = "type")]
    pub field_type: String,
}

impl SchemaField {
    pub fn new(id: i32, name: impl Into<String>, required: bool, field_type: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            required,
            field_type: field_type.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSchema {
    #[serde(rename = "type")]
    pub schema_type: String,
    #[serde(rename = "schema-id")]
    pub schema_id: i32,
    #[serde(default)]
    pub fields: Vec<SchemaField>,
}

impl TableSchema {
    pub fn new(schema_id: i32, fields: Vec<SchemaField>) -> Self {
        Self {
            schema_type: "struct".to_string(),
            schema_id,
            fields,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateTableRequest {
    pub name: String,
    pub schema: TableSchema,
    pub properties: HashMap<String, String>,
}

impl CreateTableRequest {
    pub fn new(name: impl Into<String>, schema: TableSchema) -> Self {
        Self {
            name: name.into(),
            schema,
            properties: HashMap::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadTableResponse {
    #[serde(
        rename = "metadata-location",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub metadata_location: Option<String>,
    pub metadata: TableMetadata,
}

// note this is a subset of the actual table metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TableMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub current_schema_id: i32,
    #[serde(default)]
    pub schemas: Vec<TableSchema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_snapshot_id: Option<i64>,
    #[serde(default)]
    pub snapshots: Vec<Snapshot>,
}

impl TableMetadata {
    pub fn current_schema(&self) -> Option<&TableSchema> {
        self.schemas
            .iter()
            .find(|schema| schema.schema_id == self.current_schema_id)
    }

    pub fn current_snapshot(&self) -> Option<&Snapshot> {
        let current = self.current_snapshot_id?;
        self.snapshots
            .iter()
            .find(|snapshot| snapshot.snapshot_id == current)
    }

    pub fn is_current(&self, snapshot: &Snapshot) -> bool {
        self.current_snapshot_id == Some(snapshot.snapshot_id)
    }
}

impl Display for TableMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current schema ID:   {}", self.current_schema_id)?;
        writeln!(f, "Available schemas:   {}", self.schemas.len())?;
        for schema in &self.schemas {
            writeln!(f)?;
            writeln!(f, "Schema (ID: {}):", schema.schema_id)?;
            for field in &schema.fields {
                writeln!(f, "  - {} ({})", field.name, field.field_type)?;
            }
        }

        writeln!(f)?;
        match self.current_snapshot_id {
            Some(id) => writeln!(f, "Current snapshot ID: {}", id)?,
            None => writeln!(f, "Current snapshot ID: none")?,
        }
        writeln!(f, "Total snapshots:     {}", self.snapshots.len())?;
        for snapshot in &self.snapshots {
            writeln!(f)?;
            writeln!(f, "Snapshot ID: {}", snapshot.snapshot_id)?;
            let timestamp = snapshot
                .timestamp_as_datetime()
                .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
                .unwrap_or_else(|| format!("invalid timestamp: {}", snapshot.timestamp_ms));
            writeln!(f, "  Timestamp: {}", timestamp)?;
            writeln!(
                f,
                "  Operation: {}",
                snapshot.operation.as_deref().unwrap_or("N/A")
            )?;
            if !snapshot.summary.is_empty() {
                writeln!(f, "  Summary:")?;
                for (key, value) in &snapshot.summary {
                    writeln!(f, "    {}: {}", key, value)?;
                }
            }
            if self.is_current(snapshot) {
                writeln!(f, "  ^ current snapshot")?;
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Snapshot {
    pub snapshot_id: i64,
    pub timestamp_ms: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(default)]
    pub summary: HashMap<String, String>,
}

impl Snapshot {
    pub fn timestamp_as_datetime(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::from_timestamp_millis(self.timestamp_ms)
    }
}
