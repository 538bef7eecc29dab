// Integration tests for the Shipyard API client and façades, using
// wiremock as the upstream.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shipyard_mcp_server::api::types::{CreateDatabase, ObtainCertificate};
use shipyard_mcp_server::api::{ApiClient, ApiError};
use shipyard_mcp_server::core::config::CredentialsConfig;

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::new(&CredentialsConfig {
        api_key: Some("test-token".to_string()),
        api_url: server.uri(),
    })
    .unwrap();
    (server, client)
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_list_servers() {
    let (server, client) = setup().await;

    let body = json!({
        "servers": [
            { "id": 1, "name": "web-01", "ip_address": "192.168.1.1", "status": "installed" },
            { "id": 2, "name": "web-02", "status": "provisioning" },
        ]
    });

    Mock::given(method("GET"))
        .and(path("/servers"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let list = client.servers().list().await.unwrap();

    assert_eq!(list.count(), 2);
    assert_eq!(list.servers[0].name, "web-01");
    assert_eq!(list.servers[0].ip_address.as_deref(), Some("192.168.1.1"));
    assert_eq!(list.servers[1].ip_address, None);
    assert_eq!(list.servers[1].status, "provisioning");
}

#[tokio::test]
async fn test_list_servers_empty() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/servers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "servers": [] })))
        .mount(&server)
        .await;

    let list = client.servers().list().await.unwrap();
    assert_eq!(list.count(), 0);
    assert!(list.servers.is_empty());
}

#[tokio::test]
async fn test_get_server() {
    let (server, client) = setup().await;

    let body = json!({
        "id": 1,
        "name": "test-server",
        "ip_address": "192.168.1.1",
        "provider": "ocean2",
        "region": "ams3",
        "status": "installed",
        "ssh_port": 22
    });

    Mock::given(method("GET"))
        .and(path("/servers/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let fetched = client.servers().get(1).await.unwrap();

    assert_eq!(fetched.id, 1);
    assert_eq!(fetched.name, "test-server");
    assert_eq!(fetched.ip_address.as_deref(), Some("192.168.1.1"));
    assert_eq!(fetched.ssh_port, Some(22));
}

#[tokio::test]
async fn test_create_database_minimal() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/servers/7/databases"))
        .and(body_json(json!({ "name": "mydb" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 11,
            "server_id": 7,
            "name": "mydb",
            "status": "installing"
        })))
        .mount(&server)
        .await;

    let payload = CreateDatabase {
        name: "mydb".to_string(),
        user: None,
        password: None,
    };
    let db = client.databases().create(7, &payload).await.unwrap();

    assert_eq!(db.name, "mydb");
    assert_eq!(db.server_id, 7);
}

#[tokio::test]
async fn test_deployment_script_round_trip() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/servers/7/sites/3/deployment/script"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("cd /home/shipyard/example.com\ngit pull"),
        )
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/servers/7/sites/3/deployment/script"))
        .and(body_json(json!({ "content": "git pull && composer install" })))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let script = client.sites().deployment_script(7, 3).await.unwrap();
    assert!(script.contains("git pull"));

    client
        .sites()
        .update_deployment_script(7, 3, "git pull && composer install".to_string())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_reboot_server_is_bodyless_post() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/servers/1/reboot"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client.servers().reboot(1).await.unwrap();
}

// ── Error handling ──────────────────────────────────────────────────

#[tokio::test]
async fn test_upstream_error_message_passes_through_verbatim() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/servers/7/sites/3/certificates/letsencrypt"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({ "message": "DNS validation failed" })),
        )
        .mount(&server)
        .await;

    let payload = ObtainCertificate {
        domains: vec!["example.com".to_string()],
    };
    let err = client
        .certificates()
        .obtain(7, 3, &payload)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "DNS validation failed");
    assert!(matches!(err, ApiError::Upstream { status: 422, .. }));
}

#[tokio::test]
async fn test_plain_text_error_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/servers/99"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Server not found"))
        .mount(&server)
        .await;

    let err = client.servers().get(99).await.unwrap_err();
    assert_eq!(err.to_string(), "Server not found");
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/servers"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client.servers().list().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }));
}
