//! 边缘函数服务集成测试

mod common;

use edge_security_sdk::EdgeFunctionsService;
use edge_security_sdk::services::edge_functions::{
    CreateEdgeFunctionsTriggerOptions, GetEdgeFunctionsActionOptions,
    GetEdgeFunctionsTriggerOptions, ListEdgeFunctionsTriggersOptions,
    UpdateEdgeFunctionsActionOptions,
};
use serde_json::json;
use wiremock::matchers::{body_bytes, body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{CRN, ZONE, config, spy_config};

const SCRIPT: &[u8] =
    b"addEventListener('fetch', (event) => {\n  event.respondWith(fetch(event.request))\n})\n";

async fn service(server: &MockServer) -> EdgeFunctionsService {
    EdgeFunctionsService::new(config("edge_functions_api", &server.uri()), CRN, ZONE).unwrap()
}

#[tokio::test]
async fn test_upload_script_sends_raw_bytes() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(format!("/v1/{CRN}/workers/scripts/my-worker")))
        .and(header("Content-Type", "application/javascript"))
        .and(header("X-Correlation-ID", "corr-42"))
        .and(body_bytes(SCRIPT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "errors": [],
            "messages": [],
            "result": {
                "script": "addEventListener(...)",
                "etag": "ea95132c15732412d22c1476fa83f27a",
                "handlers": ["fetch"],
                "created_on": "2019-01-01T12:00:00.000Z",
                "modified_on": "2019-01-01T12:00:00.000Z",
                "routes": [{"id": "9a7806061c88ada191ed06f989cc3dac", "pattern": "example.net/*", "script": "my-worker", "request_limit_fail_open": false}]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = UpdateEdgeFunctionsActionOptions::new("my-worker")
        .with_edge_functions_action(SCRIPT)
        .with_x_correlation_id("corr-42");
    let response = service(&server)
        .await
        .update_edge_functions_action(&options)
        .await
        .unwrap();

    let action = response.result.unwrap().result.unwrap();
    assert_eq!(action.handlers, vec!["fetch"]);
    assert_eq!(action.routes[0].pattern, "example.net/*");
}

#[tokio::test]
async fn test_download_script_is_binary() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/v1/{CRN}/workers/scripts/my-worker")))
        .and(header("Accept", "application/javascript"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/javascript")
                .set_body_bytes(SCRIPT),
        )
        .mount(&server)
        .await;

    let response = service(&server)
        .await
        .get_edge_functions_action(&GetEdgeFunctionsActionOptions::new("my-worker"))
        .await
        .unwrap();
    assert_eq!(response.result.as_deref(), Some(SCRIPT));
}

#[tokio::test]
async fn test_trigger_lifecycle_paths() {
    let server = MockServer::start().await;
    let routes = format!("/v1/{CRN}/zones/{ZONE}/workers/routes");
    Mock::given(method("POST"))
        .and(path(routes.as_str()))
        .and(body_json(json!({"pattern": "example.net/*", "script": "my-worker"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "result": {"id": "9a7806061c88ada191ed06f989cc3dac"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(routes.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "result": [{"id": "9a7806061c88ada191ed06f989cc3dac", "pattern": "example.net/*", "script": "my-worker"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = service(&server).await;
    let created = service
        .create_edge_functions_trigger(
            &CreateEdgeFunctionsTriggerOptions::new()
                .with_pattern("example.net/*")
                .with_script("my-worker"),
        )
        .await
        .unwrap();
    assert_eq!(
        created.result.unwrap().result.unwrap().id,
        "9a7806061c88ada191ed06f989cc3dac"
    );

    let listed = service
        .list_edge_functions_triggers(&ListEdgeFunctionsTriggersOptions::new())
        .await
        .unwrap();
    let triggers = listed.result.unwrap().result.unwrap();
    assert_eq!(triggers.len(), 1);
    assert_eq!(triggers[0].script.as_deref(), Some("my-worker"));
}

#[tokio::test]
async fn test_missing_identifiers_never_send() {
    let (config, spy) = spy_config("edge_functions_api");
    let service = EdgeFunctionsService::new(config, CRN, ZONE).unwrap();

    assert!(
        service
            .update_edge_functions_action(&UpdateEdgeFunctionsActionOptions::new("my-worker"))
            .await
            .is_err()
    );
    assert!(
        service
            .get_edge_functions_trigger(&GetEdgeFunctionsTriggerOptions::new(""))
            .await
            .is_err()
    );
    assert_eq!(spy.calls(), 0);
}

#[test]
fn test_service_requires_zone() {
    let (config, _) = spy_config("edge_functions_api");
    assert!(EdgeFunctionsService::new(config, CRN, "").is_err());
}
