use std::time::Duration;

use url::Url;

use crate::error::Result;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub catalog_api_url: Url,
    pub management_api_url: Url,
    pub client_id: String,
    pub client_secret: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl ClientConfig {
    fn new(
        host: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self> {
        let host_str = host.into();
        // the service speaks plain http; add a scheme if none is present
        let base = if host_str.starts_with("http://") || host_str.starts_with("https://") {
            host_str
        } else {
            format!("http://{host_str}")
        };
        // parse the URL
        let mut base_url = Url::parse(&base)?;
        // normalize with trailing slash
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }
        let catalog_api_url = base_url.join("api/catalog/v1/")?;
        let management_api_url = base_url.join("api/management/v1/")?;

        Ok(Self {
            catalog_api_url,
            management_api_url,
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        })
    }

    pub fn build(
        host: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> ClientConfigBuilder {
        ClientConfigBuilder::new(host, client_id, client_secret)
    }
}

pub struct ClientConfigBuilder {
    host: String,
    client_id: String,
    client_secret: String,
    timeout: Duration,
    connect_timeout: Duration,
}

impl ClientConfigBuilder {
    fn new(
        host: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn build(self) -> Result<ClientConfig> {
        let mut config = ClientConfig::new(self.host, self.client_id, self.client_secret)?;
        config.timeout = self.timeout;
        config.connect_timeout = self.connect_timeout;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::build("localhost:8183", "admin", "admin")
            .with_timeout(Duration::from_secs(60))
            .with_connect_timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        assert_eq!(
            config.catalog_api_url.as_str(),
            "http://localhost:8183/api/catalog/v1/"
        );
        assert_eq!(
            config.management_api_url.as_str(),
            "http://localhost:8183/api/management/v1/"
        );
        assert_eq!(config.client_id, "admin");
        assert_eq!(config.client_secret, "admin");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_client_config_accepts_full_url() {
        let config = ClientConfig::new("http://127.0.0.1:8080", "id", "secret").unwrap();
        assert_eq!(
            config.catalog_api_url.as_str(),
            "http://127.0.0.1:8080/api/catalog/v1/"
        );
    }

    #[test]
    fn test_client_config_keeps_https_scheme() {
        let config = ClientConfig::new("https://polaris.example.com", "id", "secret").unwrap();
        assert_eq!(
            config.management_api_url.as_str(),
            "https://polaris.example.com/api/management/v1/"
        );
    }
}
