//! HTTP transport tests against a local mock server.

use dv_client::models::{DeleteTableParams, GrantUserToVirtualTableParams, ListTablesForRoleParams};
use dv_client::{Authenticator, DVClient, Error};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> DVClient {
    DVClient::builder(server.uri(), Authenticator::bearer("secret-token"))
        .build()
        .unwrap()
}

#[tokio::test]
async fn list_datasource_connections_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/datasource/connections"))
        .and(header("Authorization", "Bearer secret-token"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "datasource_connections": [{
                "node_name": "node-1",
                "data_sources": [{"cid": "DB210001", "dbname": "BLUDB"}],
            }],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.list_datasource_connections(None).await.unwrap();

    assert_eq!(response.status, 200);
    let nodes = response.result.datasource_connections.unwrap();
    assert_eq!(nodes[0].node_name.as_deref(), Some("node-1"));
    assert_eq!(
        nodes[0].data_sources.as_ref().unwrap()[0].cid.as_deref(),
        Some("DB210001")
    );
}

#[tokio::test]
async fn delete_table_sends_path_and_query() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v2/virtualization/tables/Tab1"))
        .and(query_param("virtual_schema", "dv_test"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .delete_table(DeleteTableParams::new("dv_test", "Tab1"))
        .await
        .unwrap();

    assert_eq!(response.status, 204);
    assert_eq!(response.status_text, "No Content");
}

#[tokio::test]
async fn grant_user_posts_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/privileges/users"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "table_name": "EMPLOYEE",
            "table_schema": "dv_test",
            "authid": "PUBLIC",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .grant_user_to_virtual_table(GrantUserToVirtualTableParams::new(
            "EMPLOYEE", "dv_test", "PUBLIC",
        ))
        .await
        .unwrap();
}

#[tokio::test]
async fn api_errors_carry_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/privileges/tables"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .list_tables_for_role(ListTablesForRoleParams::new("MANAGER"))
        .await
        .unwrap_err();

    match err {
        Error::ApiError { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "internal error");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn not_found_is_reported_as_missing_resource() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/catalog/primary"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no primary catalog"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.get_primary_catalog(None).await.unwrap_err();

    match err {
        Error::ApiError { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Resource not found: no primary catalog");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn unauthorized_maps_to_authentication_failed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/security/policy/status"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.check_policy_status_v2(None).await.unwrap_err();

    assert!(matches!(err, Error::AuthenticationFailed));
}

#[tokio::test]
async fn envelope_exposes_response_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/security/policy/status"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-global-transaction-id", "txn-1")
                .set_body_json(json!({"status": "enabled"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.check_policy_status_v2(None).await.unwrap();

    assert!(response.result.is_enabled());
    assert_eq!(
        response.headers.get("x-global-transaction-id").unwrap(),
        "txn-1"
    );
}
