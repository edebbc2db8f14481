//! Manual e2e tests against a live Data Virtualization instance.
//! These require service credentials in the environment:
//!   DATA_VIRTUALIZATION_URL=".." DATA_VIRTUALIZATION_BEARER_TOKEN=".."

use dv_client::models::ListTablesForRoleParams;
use dv_client::DVClient;
use tracing::info;

// Run with: DATA_VIRTUALIZATION_URL=".." DATA_VIRTUALIZATION_BEARER_TOKEN=".." cargo t -p dv-client live_service_smoke -- --ignored
#[ignore]
#[tokio::test]
async fn live_service_smoke() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let client = DVClient::from_env()?;

    let connections = client.list_datasource_connections(None).await?;
    info!("[CONNECTIONS] status: {}", connections.status);
    for node in connections.result.datasource_connections.unwrap_or_default() {
        info!("[CONNECTIONS]\n{}", node);
    }

    let policy = client.check_policy_status_v2(None).await?;
    info!("[POLICY] enforcement: {}", policy.result.status);

    let tables = client
        .list_tables_for_role(ListTablesForRoleParams::new("USER"))
        .await?;
    for table in tables.result.objects.unwrap_or_default() {
        info!("[TABLES] {}", table);
    }

    Ok(())
}

// Run with: DATA_VIRTUALIZATION_URL=".." DATA_VIRTUALIZATION_BEARER_TOKEN=".." cargo t -p dv-client live_primary_catalog -- --ignored
#[ignore]
#[tokio::test]
async fn live_primary_catalog() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let client = DVClient::from_env()?;

    let catalog = client.get_primary_catalog(None).await?;
    let guid = catalog
        .result
        .metadata
        .as_ref()
        .and_then(|m| m.guid.as_deref())
        .unwrap_or("<none>");
    info!("[CATALOG] primary catalog guid: {}", guid);

    Ok(())
}
