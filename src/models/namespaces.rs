use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamespacesResponse {
    #[serde(default)]
    pub namespaces: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateNamespaceRequest {
    pub namespace: Vec<String>,
    pub properties: HashMap<String, String>,
}

impl CreateNamespaceRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            namespace: vec![name.into()],
            properties: HashMap::new(),
        }
    }

    // namespaces are addressed by one or more segments
    pub fn with_segments(segments: Vec<String>) -> Self {
        Self {
            namespace: segments,
            properties: HashMap::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamespaceResponse {
    pub namespace: Vec<String>,
    #[serde(default)]
    pub properties: HashMap<String, String>,
}
