use std::time::Duration;

use reqwest::header::{HeaderName, HeaderValue, USER_AGENT};
use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::auth::Authenticator;
use crate::config::{ClientConfig, ClientConfigBuilder, DEFAULT_SERVICE_NAME};
use crate::error::{Error, Result};
use crate::http::{Empty, HttpTransport, ServiceRequest, ServiceResponse, Transport};
use crate::models::catalog::{
    CatalogPublishResponse, DeletePrimaryCatalogParams, GetPrimaryCatalogParams,
    PostPrimaryCatalogParams, PostPrimaryCatalogResponse, PrimaryCatalogInfo, PublishAssetsParams,
};
use crate::models::connections::{
    AddDatasourceConnectionParams, DatasourceConnectionsList, DeleteDatasourceConnectionParams,
    ListDatasourceConnectionsParams, PostDatasourceConnection,
};
use crate::models::policy::{CheckPolicyStatusV2Params, PolicyStatus, TurnOnPolicyV2Params};
use crate::models::privileges::{
    DvaasRevokeRoleFromTableParams, GrantRolesToVirtualizedTableParams,
    GrantUserToVirtualTableParams, ListTablesForRoleParams, RevokeUserFromObjectParams,
    TablesForRoleResponse,
};
use crate::models::virtualization::{
    DeleteTableParams, DvaasVirtualizeTableParams, VirtualizeTableResponse,
};

const USER_AGENT_VALUE: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const SDK_ANALYTICS_HEADER: &str = "x-sdk-analytics";

/// Fails with [`Error::MissingRequiredParameters`] naming every absent field,
/// in declaration order.
pub(crate) fn check_required(fields: &[(&str, bool)]) -> Result<()> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, present)| !*present)
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::MissingRequiredParameters(missing.join(", ")))
    }
}

/// Client for the Data Virtualization service.
///
/// Every operation validates its required parameters, builds a
/// [`ServiceRequest`], and hands it to the transport. Nothing is sent when
/// validation fails.
#[derive(Debug, Clone)]
pub struct DVClient<T: Transport = HttpTransport> {
    transport: T,
    service_name: String,
}

impl DVClient<HttpTransport> {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let service_name = config.service_name.clone();
        let mut client = Self::with_transport(HttpTransport::new(config)?);
        client.service_name = service_name;
        Ok(client)
    }

    /// Resolves endpoint and credentials from the environment under the
    /// default service name.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env(DEFAULT_SERVICE_NAME)?)
    }

    pub fn builder(
        service_url: impl Into<String>,
        authenticator: Authenticator,
    ) -> DVClientBuilder {
        DVClientBuilder::new(service_url, authenticator)
    }
}

impl<T: Transport> DVClient<T> {
    /// Wraps an arbitrary transport. Production code normally goes through
    /// [`DVClient::new`]; tests substitute a recording transport here.
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            service_name: DEFAULT_SERVICE_NAME.to_string(),
        }
    }

    /// Retrieves all data source connections known to the service.
    #[instrument(skip(self, params))]
    pub async fn list_datasource_connections(
        &self,
        params: Option<ListDatasourceConnectionsParams>,
    ) -> Result<ServiceResponse<DatasourceConnectionsList>> {
        let params = params.unwrap_or_default();

        let request = self
            .request(
                Method::GET,
                "/v2/datasource/connections",
                "listDatasourceConnections",
            )?
            .with_accept_json()
            .with_header_overrides(params.headers.as_ref())?;

        self.send(request).await
    }

    /// Adds a data source connection to the Data Virtualization service.
    #[instrument(skip(self, params))]
    pub async fn add_datasource_connection(
        &self,
        params: AddDatasourceConnectionParams,
    ) -> Result<ServiceResponse<PostDatasourceConnection>> {
        check_required(&[
            ("datasource_type", params.datasource_type.is_some()),
            ("name", params.name.is_some()),
            ("origin_country", params.origin_country.is_some()),
            ("properties", params.properties.is_some()),
        ])?;

        let request = self
            .request(
                Method::POST,
                "/v2/datasource/connections",
                "addDatasourceConnection",
            )?
            .with_accept_json()
            .with_content_type_json()
            .with_json_body(&params)?
            .with_header_overrides(params.headers.as_ref())?;

        self.send(request).await
    }

    /// Deletes a data source connection.
    #[instrument(skip(self, params))]
    pub async fn delete_datasource_connection(
        &self,
        params: DeleteDatasourceConnectionParams,
    ) -> Result<ServiceResponse<Empty>> {
        check_required(&[("connection_id", params.connection_id.is_some())])?;

        let request = self
            .request(
                Method::DELETE,
                "/v2/datasource/connections/{connection_id}",
                "deleteDatasourceConnection",
            )?
            .with_path_param("connection_id", params.connection_id)
            .with_query("cid", params.cid)
            .with_header_overrides(params.headers.as_ref())?;

        self.send(request).await
    }

    /// Grants a user access to a virtualized table.
    #[instrument(skip(self, params))]
    pub async fn grant_user_to_virtual_table(
        &self,
        params: GrantUserToVirtualTableParams,
    ) -> Result<ServiceResponse<Empty>> {
        check_required(&[
            ("table_name", params.table_name.is_some()),
            ("table_schema", params.table_schema.is_some()),
            ("authid", params.authid.is_some()),
        ])?;

        let request = self
            .request(Method::POST, "/v2/privileges/users", "grantUserToVirtualTable")?
            .with_content_type_json()
            .with_json_body(&params)?
            .with_header_overrides(params.headers.as_ref())?;

        self.send(request).await
    }

    /// Revokes a user's access to a virtualized table.
    #[instrument(skip(self, params))]
    pub async fn revoke_user_from_object(
        &self,
        params: RevokeUserFromObjectParams,
    ) -> Result<ServiceResponse<Empty>> {
        check_required(&[
            ("authid", params.authid.is_some()),
            ("table_name", params.table_name.is_some()),
            ("table_schema", params.table_schema.is_some()),
        ])?;

        let request = self
            .request(
                Method::DELETE,
                "/v2/privileges/users/{authid}",
                "revokeUserFromObject",
            )?
            .with_path_param("authid", params.authid)
            .with_query("table_name", params.table_name)
            .with_query("table_schema", params.table_schema)
            .with_header_overrides(params.headers.as_ref())?;

        self.send(request).await
    }

    /// Grants a role access to a virtualized table.
    #[instrument(skip(self, params))]
    pub async fn grant_roles_to_virtualized_table(
        &self,
        params: GrantRolesToVirtualizedTableParams,
    ) -> Result<ServiceResponse<Empty>> {
        check_required(&[
            ("table_name", params.table_name.is_some()),
            ("table_schema", params.table_schema.is_some()),
        ])?;

        let request = self
            .request(
                Method::POST,
                "/v2/privileges/roles",
                "grantRolesToVirtualizedTable",
            )?
            .with_content_type_json()
            .with_json_body(&params)?
            .with_header_overrides(params.headers.as_ref())?;

        self.send(request).await
    }

    /// Revokes a role's access to a virtualized table.
    #[instrument(skip(self, params))]
    pub async fn dvaas_revoke_role_from_table(
        &self,
        params: DvaasRevokeRoleFromTableParams,
    ) -> Result<ServiceResponse<Empty>> {
        check_required(&[
            ("role_name", params.role_name.is_some()),
            ("table_name", params.table_name.is_some()),
            ("table_schema", params.table_schema.is_some()),
        ])?;

        let request = self
            .request(
                Method::DELETE,
                "/v2/privileges/roles/{role_name}",
                "dvaasRevokeRoleFromTable",
            )?
            .with_path_param("role_name", params.role_name)
            .with_query("table_name", params.table_name)
            .with_query("table_schema", params.table_schema)
            .with_header_overrides(params.headers.as_ref())?;

        self.send(request).await
    }

    /// Lists the virtualized tables granted to a role.
    #[instrument(skip(self, params))]
    pub async fn list_tables_for_role(
        &self,
        params: ListTablesForRoleParams,
    ) -> Result<ServiceResponse<TablesForRoleResponse>> {
        check_required(&[("rolename", params.rolename.is_some())])?;

        let request = self
            .request(Method::GET, "/v2/privileges/tables", "listTablesForRole")?
            .with_accept_json()
            .with_query("rolename", params.rolename)
            .with_header_overrides(params.headers.as_ref())?;

        self.send(request).await
    }

    /// Turns policy enforcement on or off.
    #[instrument(skip(self, params))]
    pub async fn turn_on_policy_v2(
        &self,
        params: TurnOnPolicyV2Params,
    ) -> Result<ServiceResponse<PolicyStatus>> {
        check_required(&[("status", params.status.is_some())])?;

        let request = self
            .request(Method::PUT, "/v2/security/policy/status", "turnOnPolicyV2")?
            .with_accept_json()
            .with_query("status", params.status)
            .with_header_overrides(params.headers.as_ref())?;

        self.send(request).await
    }

    /// Reads the current policy enforcement status.
    #[instrument(skip(self, params))]
    pub async fn check_policy_status_v2(
        &self,
        params: Option<CheckPolicyStatusV2Params>,
    ) -> Result<ServiceResponse<PolicyStatus>> {
        let params = params.unwrap_or_default();

        let request = self
            .request(Method::GET, "/v2/security/policy/status", "checkPolicyStatusV2")?
            .with_accept_json()
            .with_header_overrides(params.headers.as_ref())?;

        self.send(request).await
    }

    /// Virtualizes a source table.
    #[instrument(skip(self, params))]
    pub async fn dvaas_virtualize_table(
        &self,
        params: DvaasVirtualizeTableParams,
    ) -> Result<ServiceResponse<VirtualizeTableResponse>> {
        check_required(&[
            ("source_name", params.source_name.is_some()),
            ("source_table_def", params.source_table_def.is_some()),
            ("sources", params.sources.is_some()),
            ("virtual_name", params.virtual_name.is_some()),
            ("virtual_schema", params.virtual_schema.is_some()),
            ("virtual_table_def", params.virtual_table_def.is_some()),
        ])?;

        let request = self
            .request(
                Method::POST,
                "/v2/virtualization/tables",
                "dvaasVirtualizeTable",
            )?
            .with_accept_json()
            .with_content_type_json()
            .with_json_body(&params)?
            .with_header_overrides(params.headers.as_ref())?;

        self.send(request).await
    }

    /// Removes a virtualized table.
    #[instrument(skip(self, params))]
    pub async fn delete_table(&self, params: DeleteTableParams) -> Result<ServiceResponse<Empty>> {
        check_required(&[
            ("virtual_schema", params.virtual_schema.is_some()),
            ("virtual_name", params.virtual_name.is_some()),
        ])?;

        let request = self
            .request(
                Method::DELETE,
                "/v2/virtualization/tables/{virtual_name}",
                "deleteTable",
            )?
            .with_path_param("virtual_name", params.virtual_name)
            .with_query("virtual_schema", params.virtual_schema)
            .with_header_overrides(params.headers.as_ref())?;

        self.send(request).await
    }

    /// Fetches the catalog currently designated as primary.
    #[instrument(skip(self, params))]
    pub async fn get_primary_catalog(
        &self,
        params: Option<GetPrimaryCatalogParams>,
    ) -> Result<ServiceResponse<PrimaryCatalogInfo>> {
        let params = params.unwrap_or_default();

        let request = self
            .request(Method::GET, "/v2/catalog/primary", "getPrimaryCatalog")?
            .with_accept_json()
            .with_header_overrides(params.headers.as_ref())?;

        self.send(request).await
    }

    /// Designates a catalog as the primary catalog.
    #[instrument(skip(self, params))]
    pub async fn post_primary_catalog(
        &self,
        params: PostPrimaryCatalogParams,
    ) -> Result<ServiceResponse<PostPrimaryCatalogResponse>> {
        check_required(&[("guid", params.guid.is_some())])?;

        let request = self
            .request(Method::POST, "/v2/catalog/primary", "postPrimaryCatalog")?
            .with_accept_json()
            .with_content_type_json()
            .with_json_body(&params)?
            .with_header_overrides(params.headers.as_ref())?;

        self.send(request).await
    }

    /// Removes the primary catalog designation.
    #[instrument(skip(self, params))]
    pub async fn delete_primary_catalog(
        &self,
        params: DeletePrimaryCatalogParams,
    ) -> Result<ServiceResponse<Empty>> {
        check_required(&[("guid", params.guid.is_some())])?;

        let request = self
            .request(Method::DELETE, "/v2/catalog/primary", "deletePrimaryCatalog")?
            .with_query("guid", params.guid)
            .with_header_overrides(params.headers.as_ref())?;

        self.send(request).await
    }

    /// Publishes virtualized tables to a catalog.
    #[instrument(skip(self, params))]
    pub async fn publish_assets(
        &self,
        params: PublishAssetsParams,
    ) -> Result<ServiceResponse<CatalogPublishResponse>> {
        check_required(&[
            ("catalog_id", params.catalog_id.is_some()),
            ("allow_duplicates", params.allow_duplicates.is_some()),
            ("assets", params.assets.is_some()),
        ])?;

        let request = self
            .request(
                Method::POST,
                "/v2/integration/catalog/publish",
                "publishAssets",
            )?
            .with_accept_json()
            .with_content_type_json()
            .with_json_body(&params)?
            .with_header_overrides(params.headers.as_ref())?;

        self.send(request).await
    }

    /// Starts a request descriptor with the default headers every operation
    /// carries. Operation and caller headers are layered on top, so later
    /// inserts win.
    fn request(
        &self,
        method: Method,
        path: &'static str,
        operation_id: &'static str,
    ) -> Result<ServiceRequest> {
        let analytics = HeaderValue::from_str(&format!(
            "service_name={};service_version=v1;operation_id={}",
            self.service_name, operation_id
        ))?;

        let mut request = ServiceRequest::new(method, path, operation_id);
        request
            .headers
            .insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        request
            .headers
            .insert(HeaderName::from_static(SDK_ANALYTICS_HEADER), analytics);
        Ok(request)
    }

    async fn send<R: DeserializeOwned>(
        &self,
        request: ServiceRequest,
    ) -> Result<ServiceResponse<R>> {
        self.transport.send(request).await?.json()
    }
}

pub struct DVClientBuilder {
    config_builder: ClientConfigBuilder,
}

impl DVClientBuilder {
    pub fn new(service_url: impl Into<String>, authenticator: Authenticator) -> Self {
        Self {
            config_builder: ClientConfig::builder(service_url, authenticator),
        }
    }

    pub fn service_name(mut self, name: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.service_name(name);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config_builder = self.config_builder.timeout(timeout);
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config_builder = self.config_builder.connect_timeout(timeout);
        self
    }

    pub fn build(self) -> Result<DVClient> {
        DVClient::new(self.config_builder.build()?)
    }
}
