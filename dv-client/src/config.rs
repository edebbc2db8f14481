use std::time::Duration;

use url::Url;

use crate::auth::Authenticator;
use crate::error::Result;

pub const DEFAULT_SERVICE_NAME: &str = "data_virtualization";
pub const DEFAULT_SERVICE_URL: &str = "https://data-virtualization.cloud.ibm.com";

/// Environment variable prefix for a service name, e.g.
/// `data_virtualization` becomes `DATA_VIRTUALIZATION`.
pub(crate) fn env_prefix(service_name: &str) -> String {
    service_name
        .chars()
        .map(|c| if c == '-' || c == '.' { '_' } else { c })
        .collect::<String>()
        .to_uppercase()
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub service_name: String,
    pub service_url: Url,
    pub authenticator: Authenticator,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl ClientConfig {
    pub fn new(service_url: impl Into<String>, authenticator: Authenticator) -> Result<Self> {
        let url_str = service_url.into();
        let base_url = if url_str.starts_with("http://") || url_str.starts_with("https://") {
            url_str
        } else {
            format!("https://{}", url_str)
        };

        Ok(Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            service_url: Url::parse(&base_url)?,
            authenticator,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        })
    }

    /// Resolves the service URL and credentials from the environment.
    ///
    /// `<PREFIX>_URL` overrides the default endpoint, where `<PREFIX>` is the
    /// upper-cased service name. Credential variables are described on
    /// [`Authenticator::from_env`].
    pub fn from_env(service_name: impl Into<String>) -> Result<Self> {
        let service_name = service_name.into();
        let prefix = env_prefix(&service_name);
        let url = std::env::var(format!("{prefix}_URL"))
            .unwrap_or_else(|_| DEFAULT_SERVICE_URL.to_string());
        let authenticator = Authenticator::from_env(&prefix)?;
        let mut config = Self::new(url, authenticator)?;
        config.service_name = service_name;
        Ok(config)
    }

    pub fn builder(
        service_url: impl Into<String>,
        authenticator: Authenticator,
    ) -> ClientConfigBuilder {
        ClientConfigBuilder::new(service_url, authenticator)
    }
}

pub struct ClientConfigBuilder {
    service_url: String,
    authenticator: Authenticator,
    service_name: String,
    timeout: Duration,
    connect_timeout: Duration,
}

impl ClientConfigBuilder {
    pub fn new(service_url: impl Into<String>, authenticator: Authenticator) -> Self {
        Self {
            service_url: service_url.into(),
            authenticator,
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }

    pub fn service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn build(self) -> Result<ClientConfig> {
        let mut config = ClientConfig::new(self.service_url, self.authenticator)?;
        config.service_name = self.service_name;
        config.timeout = self.timeout;
        config.connect_timeout = self.connect_timeout;
        Ok(config)
    }
}
