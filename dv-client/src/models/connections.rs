use std::collections::HashMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default)]
pub struct ListDatasourceConnectionsParams {
    pub headers: Option<HashMap<String, String>>,
}

impl ListDatasourceConnectionsParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AddDatasourceConnectionParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datasource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<ConnectionProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_category: Option<String>,
    #[serde(skip_serializing)]
    pub headers: Option<HashMap<String, String>>,
}

impl AddDatasourceConnectionParams {
    pub fn new(
        datasource_type: impl Into<String>,
        name: impl Into<String>,
        origin_country: impl Into<String>,
        properties: ConnectionProperties,
    ) -> Self {
        Self {
            datasource_type: Some(datasource_type.into()),
            name: Some(name.into()),
            origin_country: Some(origin_country.into()),
            properties: Some(properties),
            ..Default::default()
        }
    }

    pub fn with_asset_category(mut self, asset_category: impl Into<String>) -> Self {
        self.asset_category = Some(asset_category.into());
        self
    }

    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeleteDatasourceConnectionParams {
    /// Connection identifier on the hosting platform.
    pub connection_id: Option<String>,
    /// Connection identifier within the Data Virtualization instance.
    pub cid: Option<String>,
    pub headers: Option<HashMap<String, String>>,
}

impl DeleteDatasourceConnectionParams {
    pub fn new(connection_id: impl Into<String>) -> Self {
        Self {
            connection_id: Some(connection_id.into()),
            ..Default::default()
        }
    }

    pub fn with_cid(mut self, cid: impl Into<String>) -> Self {
        self.cid = Some(cid.into());
        self
    }

    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }
}

/// Connection parameters for the data source being attached. Which fields
/// apply depends entirely on the data source type, so all of them are
/// optional pass-through strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectionProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jar_uris: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jdbc_driver: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jdbc_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sap_gateway_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_certificate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_certificate_host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_certificate_validation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse: Option<String>,
}

impl ConnectionProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn with_port(mut self, port: impl Into<String>) -> Self {
        self.port = Some(port.into());
        self
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasourceConnectionsList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datasource_connections: Option<Vec<DatasourceConnection>>,
}

impl DatasourceConnectionsList {
    /// Flattens the per-node listing into individual data sources.
    pub fn data_sources(&self) -> impl Iterator<Item = &DataSourceDetails> {
        self.datasource_connections
            .iter()
            .flatten()
            .flat_map(|node| node.data_sources.iter().flatten())
    }
}

/// One connector node and the data sources attached through it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasourceConnection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_description: Option<String>,
    /// `H` for hosted connectors, `F` for fenced mode processes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_docker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dscount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_sources: Option<Vec<DataSourceDetails>>,
}

impl Display for DatasourceConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Node:     {}", self.node_name.as_deref().unwrap_or("-"))?;
        writeln!(f, "Hostname: {}", self.hostname.as_deref().unwrap_or("-"))?;
        writeln!(f, "Port:     {}", self.port.as_deref().unwrap_or("-"))?;

        if let Some(sources) = &self.data_sources {
            writeln!(f)?;
            writeln!(f, "Data Sources:")?;
            for source in sources {
                writeln!(
                    f,
                    "  {} ({}) @ {}",
                    source.connection_name.as_deref().unwrap_or("-"),
                    source.srctype.as_deref().unwrap_or("-"),
                    source.srchostname.as_deref().unwrap_or("-"),
                )?;
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSourceDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dbname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srchostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srcport: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srctype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDatasourceConnection {
    pub connection_id: String,
    pub datasource_type: String,
    pub name: String,
}
