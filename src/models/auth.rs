use serde::{Deserialize, Serialize};

// form-encoded body for the client-credentials exchange
#[derive(Debug, Clone, Serialize)]
pub struct TokenRequest {
    pub grant_type: String,
    pub scope: String,
    pub client_id: String,
    pub client_secret: String,
}

impl TokenRequest {
    pub fn client_credentials(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            grant_type: "client_credentials".to_string(),
            scope: "PRINCIPAL_ROLE:ALL".to_string(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

// note this is a subset of the actual token response
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}
