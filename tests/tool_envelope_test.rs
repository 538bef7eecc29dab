// Dispatch-contract tests: envelopes, validation gating, and composite
// aggregation, all against a wiremock upstream.

use std::sync::Arc;

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shipyard_mcp_server::core::Config;
use shipyard_mcp_server::core::config::CredentialsConfig;
use shipyard_mcp_server::domains::tools::definitions::certificates::{
    ObtainCertificateParams, ObtainCertificateTool,
};
use shipyard_mcp_server::domains::tools::definitions::composite::{
    BulkDeployParams, BulkDeploySitesTool, CertScanParams, CertificateExpiryScanTool,
    HealthCheckParams, ServerHealthCheckTool,
};
use shipyard_mcp_server::domains::tools::definitions::databases::{
    CreateDatabaseParams, CreateDatabaseTool,
};
use shipyard_mcp_server::domains::tools::definitions::servers::{
    GetServerTool, ListServersTool, ServerIdParams,
};
use shipyard_mcp_server::domains::tools::envelope::payload_text;
use shipyard_mcp_server::domains::tools::{
    NoParams, ToolContext, ToolDefinition, ToolError, ToolRegistry,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Arc<ToolContext>) {
    let server = MockServer::start().await;
    let mut config = Config::default();
    config.credentials = CredentialsConfig {
        api_key: Some("test-token".to_string()),
        api_url: server.uri(),
    };
    let ctx = ToolContext::from_config(&config).expect("context should build");
    (server, ctx)
}

fn parse_envelope(result: &rmcp::model::CallToolResult) -> Value {
    serde_json::from_str(payload_text(result).expect("text payload")).expect("valid JSON envelope")
}

// ── Scenario A: empty list ──────────────────────────────────────────

#[tokio::test]
async fn test_list_servers_empty_envelope() {
    let (server, ctx) = setup().await;

    Mock::given(method("GET"))
        .and(path("/servers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "servers": [] })))
        .mount(&server)
        .await;

    let result = ListServersTool::run(NoParams {}, ctx).await;
    let body = parse_envelope(&result);

    assert_eq!(body["success"], json!(true));
    assert_eq!(body["count"], json!(0));
    assert_eq!(body["servers"], json!([]));
}

// ── Scenario B: entity fields appear in the envelope ────────────────

#[tokio::test]
async fn test_get_server_envelope_contains_name_and_ip() {
    let (server, ctx) = setup().await;

    Mock::given(method("GET"))
        .and(path("/servers/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "name": "test-server",
            "ip_address": "192.168.1.1",
            "status": "installed"
        })))
        .mount(&server)
        .await;

    let result = GetServerTool::run(ServerIdParams { server_id: 1 }, ctx).await;
    let text = payload_text(&result).unwrap();

    assert!(text.contains("test-server"));
    assert!(text.contains("192.168.1.1"));
    let body: Value = serde_json::from_str(text).unwrap();
    assert_eq!(body["success"], json!(true));
}

// ── Scenario C: create database with defaults ───────────────────────

#[tokio::test]
async fn test_create_database_envelope() {
    let (server, ctx) = setup().await;

    Mock::given(method("POST"))
        .and(path("/servers/7/databases"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 11,
            "server_id": 7,
            "name": "mydb",
            "status": "installing"
        })))
        .mount(&server)
        .await;

    let params: CreateDatabaseParams =
        serde_json::from_value(json!({ "server_id": 7, "name": "mydb" })).unwrap();
    let result = CreateDatabaseTool::run(params, ctx).await;
    let body = parse_envelope(&result);

    assert_eq!(body["success"], json!(true));
    assert_eq!(body["name"], json!("mydb"));
}

// ── Scenario D: failure envelope is exact ───────────────────────────

#[tokio::test]
async fn test_failed_certificate_request_envelope() {
    let (server, ctx) = setup().await;

    Mock::given(method("POST"))
        .and(path("/servers/7/sites/3/certificates/letsencrypt"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({ "message": "DNS validation failed" })),
        )
        .mount(&server)
        .await;

    let params = ObtainCertificateParams {
        server_id: 7,
        site_id: 3,
        domains: vec!["example.com".to_string()],
    };
    let result = ObtainCertificateTool::run(params, ctx).await;
    let body = parse_envelope(&result);

    assert_eq!(
        body,
        json!({ "success": false, "error": "DNS validation failed" })
    );
}

// ── Scenario E: bulk deploy partial failure ─────────────────────────

#[tokio::test]
async fn test_bulk_deploy_partial_failure() {
    let (server, ctx) = setup().await;

    // Site 2 deploys fine and must still be attempted.
    Mock::given(method("POST"))
        .and(path("/servers/1/sites/2/deployment/deploy"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/servers/1/sites/99/deployment/deploy"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Site not found" })))
        .expect(1)
        .mount(&server)
        .await;

    let params = BulkDeployParams {
        server_id: 1,
        site_ids: vec![99, 2],
    };
    let result = BulkDeploySitesTool::run(params, ctx).await;
    let body = parse_envelope(&result);

    assert_eq!(body["success"], json!(true));
    assert_eq!(body["deployed"], json!(1));
    assert_eq!(body["failed_count"], json!(1));
    assert_eq!(body["successful"], json!([{ "site_id": 2 }]));
    assert_eq!(body["failed"][0]["site_id"], json!(99));
    assert_eq!(body["failed"][0]["error"], json!("Site not found"));
}

// ── Validation gates dispatch ───────────────────────────────────────

#[tokio::test]
async fn test_validation_failure_never_reaches_upstream() {
    let (server, ctx) = setup().await;

    // Any request reaching the mock would fail the expect(0) assertions.
    Mock::given(method("GET"))
        .and(path("/servers/0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let registry = ToolRegistry::with_context(ctx);

    let err = registry
        .call_tool("get_server", json!({ "server_id": 0 }))
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::InvalidArguments(_)));

    let err = registry.call_tool("get_server", json!({})).await.unwrap_err();
    assert!(matches!(err, ToolError::InvalidArguments(_)));

    server.verify().await;
}

// ── Composite: health check best-effort aggregation ─────────────────

#[tokio::test]
async fn test_health_check_reports_per_section_errors() {
    let (server, ctx) = setup().await;

    Mock::given(method("GET"))
        .and(path("/servers/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "name": "web-01",
            "status": "installed"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/servers/1/sites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "sites": [] })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/servers/1/daemons"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "daemons": [] })))
        .mount(&server)
        .await;

    // Monitors endpoint is down; only that section may fail.
    Mock::given(method("GET"))
        .and(path("/servers/1/monitors"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "message": "monitor backend down" })),
        )
        .mount(&server)
        .await;

    let result = ServerHealthCheckTool::run(HealthCheckParams { server_id: 1 }, ctx).await;
    let body = parse_envelope(&result);

    assert_eq!(body["success"], json!(true));
    assert_eq!(body["server"]["name"], json!("web-01"));
    assert_eq!(body["site_count"], json!(0));
    assert_eq!(body["errors"]["monitors"], json!("monitor backend down"));
    assert_eq!(body["healthy"], json!(false));
}

// ── Composite: certificate expiry buckets ───────────────────────────

#[tokio::test]
async fn test_certificate_expiry_scan_buckets() {
    let (server, ctx) = setup().await;

    let soon = chrono::Utc::now() + chrono::Duration::days(10);
    let far = chrono::Utc::now() + chrono::Duration::days(200);
    let past = chrono::Utc::now() - chrono::Duration::days(3);

    Mock::given(method("GET"))
        .and(path("/servers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "servers": [{ "id": 1, "name": "web-01", "status": "installed" }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/servers/1/sites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sites": [{ "id": 3, "server_id": 1, "name": "example.com", "status": "installed" }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/servers/1/sites/3/certificates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "certificates": [
                { "id": 1, "server_id": 1, "site_id": 3, "domain": "a.example.com",
                  "status": "installed", "expires_at": soon.to_rfc3339() },
                { "id": 2, "server_id": 1, "site_id": 3, "domain": "b.example.com",
                  "status": "installed", "expires_at": far.to_rfc3339() },
                { "id": 3, "server_id": 1, "site_id": 3, "domain": "c.example.com",
                  "status": "installed", "expires_at": past.to_rfc3339() },
                { "id": 4, "server_id": 1, "site_id": 3, "domain": "d.example.com",
                  "status": "installing" },
            ]
        })))
        .mount(&server)
        .await;

    let result =
        CertificateExpiryScanTool::run(CertScanParams { threshold_days: 30 }, ctx).await;
    let body = parse_envelope(&result);

    assert_eq!(body["success"], json!(true));
    assert_eq!(body["healthy_count"], json!(1));
    assert_eq!(body["expiring_soon_count"], json!(1));
    // expired + never issued
    assert_eq!(body["action_required_count"], json!(2));
    assert_eq!(body["expiring_soon"][0]["domain"], json!("a.example.com"));
}
