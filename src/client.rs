use reqwest::{header, Client, Response, StatusCode};
use tracing::{instrument, warn};

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::models::auth::{TokenRequest, TokenResponse};
use crate::models::catalogs::{Catalog, CatalogsResponse, CreateCatalogRequest};
use crate::models::namespaces::{CreateNamespaceRequest, NamespaceResponse, NamespacesResponse};
use crate::models::tables::{CreateTableRequest, LoadTableResponse, TableIdentifiersResponse};

const OK_ONLY: &[StatusCode] = &[StatusCode::OK];
const OK_OR_CREATED: &[StatusCode] = &[StatusCode::OK, StatusCode::CREATED];

#[derive(Debug, Clone)]
pub struct PolarisClient {
    client: Client,
    config: ClientConfig,
    token: String,
}

impl PolarisClient {
    /// Exchanges the configured client credentials for a bearer token and
    /// builds a client that sends it on every request.
    pub async fn authenticate(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        let url = config.catalog_api_url.join("oauth/tokens")?;
        let request = TokenRequest::client_credentials(&config.client_id, &config.client_secret);
        let response = http.post(url).form(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return match status {
                StatusCode::UNAUTHORIZED => Err(Error::AuthenticationFailed),
                _ => Err(Error::ApiError {
                    status: status.as_u16(),
                    message: error_body,
                }),
            };
        }

        let token: TokenResponse = response.json().await?;
        Self::with_token(config, token.access_token)
    }

    /// Builds a client around an already-issued bearer token.
    pub fn with_token(config: ClientConfig, token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        // default headers with authorization and content type
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {token}"))?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            client,
            config,
            token,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    #[instrument(skip(self))]
    pub async fn list_catalogs(&self) -> Result<Option<CatalogsResponse>> {
        let url = self.config.management_api_url.join("catalogs")?;
        let response = self.client.get(url).send().await?;
        self.handle_response(response, OK_ONLY).await
    }

    #[instrument(skip(self))]
    pub async fn list_namespaces(&self, catalog: &str) -> Result<Option<NamespacesResponse>> {
        let url = self
            .config
            .catalog_api_url
            .join(&format!("{catalog}/namespaces"))?;
        let response = self.client.get(url).send().await?;
        self.handle_response(response, OK_ONLY).await
    }

    #[instrument(skip(self))]
    pub async fn list_tables(
        &self,
        catalog: &str,
        namespace: &str,
    ) -> Result<Option<TableIdentifiersResponse>> {
        let url = self
            .config
            .catalog_api_url
            .join(&format!("{catalog}/namespaces/{namespace}/tables"))?;
        let response = self.client.get(url).send().await?;
        self.handle_response(response, OK_ONLY).await
    }

    #[instrument(skip(self, request))]
    pub async fn create_catalog(&self, request: &CreateCatalogRequest) -> Result<Option<Catalog>> {
        let url = self.config.management_api_url.join("catalogs")?;
        let response = self.client.post(url).json(request).send().await?;
        self.handle_response(response, OK_OR_CREATED).await
    }

    #[instrument(skip(self, request))]
    pub async fn create_namespace(
        &self,
        catalog: &str,
        request: &CreateNamespaceRequest,
    ) -> Result<Option<NamespaceResponse>> {
        let url = self
            .config
            .catalog_api_url
            .join(&format!("{catalog}/namespaces"))?;
        let response = self.client.post(url).json(request).send().await?;
        self.handle_response(response, OK_OR_CREATED).await
    }

    #[instrument(skip(self, request))]
    pub async fn create_table(
        &self,
        catalog: &str,
        namespace: &str,
        request: &CreateTableRequest,
    ) -> Result<Option<LoadTableResponse>> {
        let url = self
            .config
            .catalog_api_url
            .join(&format!("{catalog}/namespaces/{namespace}/tables"))?;
        let response = self.client.post(url).json(request).send().await?;
        self.handle_response(response, OK_OR_CREATED).await
    }

    #[instrument(skip(self))]
    pub async fn get_table_metadata(
        &self,
        catalog: &str,
        namespace: &str,
        table: &str,
    ) -> Result<Option<LoadTableResponse>> {
        let url = self
            .config
            .catalog_api_url
            .join(&format!("{catalog}/namespaces/{namespace}/tables/{table}"))?;
        let response = self.client.get(url).send().await?;
        self.handle_response(response, OK_ONLY).await
    }

    // An accepted status yields the parsed body; any other status yields no
    // result, with the raw error body surfaced in the log. Transport and
    // body-decode failures propagate.
    async fn handle_response<T>(
        &self,
        response: Response,
        accepted: &[StatusCode],
    ) -> Result<Option<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();

        if accepted.contains(&status) {
            return Ok(Some(response.json::<T>().await?));
        }

        let error_body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        warn!("Request returned status {}: {}", status, error_body);

        Ok(None)
    }
}
