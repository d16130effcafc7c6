//! Integration tests for load balancer operations over the real HTTP client.
//!
//! Each test starts a `wiremock` server, points an [`HttpClient`] at it and
//! drives the public API end to end: URL layout, headers, envelopes, status
//! mapping and next-link following.

use lbaas_client::{
    AuthToken, BaseUrl, LbaasConfig, LoadBalancerCreateRequest, LoadBalancerDeleteRequest,
    LoadBalancerListParams, LoadBalancerUpdateRequest, OperatingStatus, ProvisioningStatus,
    ResourceError, RestClient,
};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

const LIST_PATH: &str = "/v2/lbaas/loadbalancers";

/// Matches requests that carry no query string at all.
struct NoQuery;

impl Match for NoQuery {
    fn matches(&self, request: &Request) -> bool {
        request.url.query().is_none()
    }
}

fn client_for(server: &MockServer) -> RestClient {
    let config = LbaasConfig::builder()
        .base_url(BaseUrl::new(format!("{}/v2", server.uri())).unwrap())
        .auth_token(AuthToken::new("test-token").unwrap())
        .build()
        .unwrap();
    RestClient::new(&config).unwrap()
}

fn listed_lb() -> Value {
    json!({
        "network_type": "external",
        "vip_network_id": "9f36fce7-e2c5-44aa-824b-b83c2dca47f6",
        "flavor_id": "",
        "updated_at": "2018-09-18T03:45:30",
        "name": "sapd-test",
        "type": "small",
        "provider": "amphora",
        "id": "ae8e2072-31fb-464a-8285-bc2f2a6bab4d",
        "vip_qos_policy_id": "94c75cb1-ffe9-4dba-8f37-a375fc10462d",
        "tenant_id": "1e7f10a9850b45b488a3f0417ccb60e0",
        "provisioning_status": "ACTIVE",
        "vip_port_id": "59b5004b-baa7-463d-bab8-409883ce2458",
        "created_at": "2018-09-18T03:43:29",
        "listeners": [{"id": "5482c4a4-f822-46d0-9af3-026f7579d653"}],
        "vip_address": "103.56.156.127",
        "pools": [{"id": "1fb271b2-a77e-4afc-8ec6-c6bc110f4c75"}],
        "project_id": "1e7f10a9850b45b488a3f0417ccb60e0",
        "admin_state_up": true,
        "description": "",
        "vip_subnet_id": "bbad9d0a-09ee-4053-a4f8-9cd8e7ea5e86",
        "operating_status": "ONLINE"
    })
}

fn stub_lb(id: &str) -> Value {
    json!({
        "id": id,
        "provisioning_status": "ACTIVE",
        "operating_status": "ONLINE"
    })
}

async fn request_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| !r.body.is_empty())
        .map(|r| serde_json::from_slice(&r.body).unwrap())
        .collect()
}

// ============================================================================
// List
// ============================================================================

#[tokio::test]
async fn test_list_single_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .and(header("X-Auth-Token", "test-token"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "loadbalancers": [listed_lb()],
            "loadbalancers_links": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let lbs = client_for(&server).load_balancers().list(None).await.unwrap();

    assert_eq!(lbs.len(), 1);
    let lb = &lbs[0];
    assert_eq!(lb.id, "ae8e2072-31fb-464a-8285-bc2f2a6bab4d");
    assert_eq!(lb.name, "sapd-test");
    assert_eq!(lb.provisioning_status, ProvisioningStatus::Active);
    assert_eq!(lb.operating_status, OperatingStatus::Online);
    assert_eq!(
        lb.vip_qos_policy_id.as_deref(),
        Some("94c75cb1-ffe9-4dba-8f37-a375fc10462d")
    );
}

#[tokio::test]
async fn test_list_follows_next_links_verbatim() {
    let server = MockServer::start().await;
    let next = format!("{}{LIST_PATH}?limit=1&marker=a", server.uri());

    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .and(query_param("limit", "1"))
        .and(query_param("marker", "a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "loadbalancers": [stub_lb("b")],
            "loadbalancers_links": [{"rel": "previous", "href": "ignored"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .and(query_param("limit", "1"))
        .and(query_param("provider", "amphora"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "loadbalancers": [stub_lb("a")],
            "loadbalancers_links": [{"rel": "next", "href": next}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = LoadBalancerListParams {
        provider: Some("amphora".to_string()),
        limit: Some(1),
        ..Default::default()
    };
    let lbs = client_for(&server)
        .load_balancers()
        .list(Some(params))
        .await
        .unwrap();

    let ids: Vec<_> = lbs.iter().map(|lb| lb.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[tokio::test]
async fn test_list_follows_root_relative_next_link() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .and(query_param("marker", "a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "loadbalancers": [stub_lb("b")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .and(NoQuery)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "loadbalancers": [stub_lb("a")],
            "loadbalancers_links": [{"rel": "next", "href": format!("{LIST_PATH}?marker=a")}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let lbs = client_for(&server).load_balancers().list(None).await.unwrap();

    let ids: Vec<_> = lbs.iter().map(|lb| lb.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
    let requested: Vec<_> = server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|r| r.url.path().to_string())
        .collect();
    assert_eq!(requested, vec![LIST_PATH, LIST_PATH]);
}

#[tokio::test]
async fn test_list_without_filters_sends_no_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .and(NoQuery)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"loadbalancers": []})))
        .expect(1)
        .mount(&server)
        .await;

    let lbs = client_for(&server)
        .load_balancers()
        .list(Some(LoadBalancerListParams::default()))
        .await
        .unwrap();
    assert!(lbs.is_empty());
}

#[tokio::test]
async fn test_list_server_error_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .respond_with(
            ResponseTemplate::new(503)
                .insert_header("x-openstack-request-id", "req-42")
                .set_body_string("try later"),
        )
        .mount(&server)
        .await;

    let error = client_for(&server)
        .load_balancers()
        .list(None)
        .await
        .unwrap_err();

    match error {
        ResourceError::Api {
            status,
            body,
            request_id,
            ..
        } => {
            assert_eq!(status, 503);
            assert_eq!(body, "try later");
            assert_eq!(request_id.as_deref(), Some("req-42"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_create() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(LIST_PATH))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "loadbalancer": {
                "name": "LB",
                "description": "Test Create LB",
                "type": "",
                "network_type": "",
                "admin_state_up": true
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "loadbalancer": {
                "updated_at": null,
                "vip_address": "45.124.94.216",
                "provisioning_status": "PENDING_CREATE",
                "vip_network_id": "180784e0-045d-40bb-adec-fdc3e9d3a32e",
                "vip_port_id": "7ef6fac8-1a0a-4255-b21c-03d36b1def73",
                "id": "e389f5eb-07b5-486b-be4d-4d4d1299f0ab",
                "admin_state_up": true,
                "listeners": [],
                "pools": [],
                "vip_qos_policy_id": "3b70c2d2-5a1f-44e9-9d2f-12aaa2369228",
                "operating_status": "OFFLINE",
                "flavor_id": "",
                "vip_subnet_id": "75da4441-db7c-4bdb-8ef5-b690c2fa9432",
                "project_id": "3063ff46d451438dbd19b5b4e48b6aa5",
                "name": "tsd",
                "tenant_id": "3063ff46d451438dbd19b5b4e48b6aa5",
                "description": "",
                "nova_flavor_id": "f4d23537-8a87-4c32-bb0b-60328e6f4374",
                "created_at": "2019-11-25T04:20:28",
                "provider": "amphora"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = LoadBalancerCreateRequest {
        description: "Test Create LB".to_string(),
        ..LoadBalancerCreateRequest::new("LB")
    };
    let lb = client_for(&server)
        .load_balancers()
        .create(&request)
        .await
        .unwrap();

    assert_eq!(lb.id, "e389f5eb-07b5-486b-be4d-4d4d1299f0ab");
    assert_eq!(lb.provisioning_status, ProvisioningStatus::PendingCreate);
    assert_eq!(lb.operating_status, OperatingStatus::Offline);
    assert_eq!(lb.provider, "amphora");
    assert!(lb.updated_at.is_none());
    assert_eq!(
        lb.nova_flavor_id.as_deref(),
        Some("f4d23537-8a87-4c32-bb0b-60328e6f4374")
    );
}

#[tokio::test]
async fn test_create_rejected_keeps_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(LIST_PATH))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"faultstring": "Invalid input for field/attribute vip_subnet_id"})),
        )
        .mount(&server)
        .await;

    let error = client_for(&server)
        .load_balancers()
        .create(&LoadBalancerCreateRequest::new("LB"))
        .await
        .unwrap_err();

    assert_eq!(error.status(), Some(400));
    assert!(error.to_string().contains("vip_subnet_id"));
}

// ============================================================================
// Get
// ============================================================================

#[tokio::test]
async fn test_get() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{LIST_PATH}/ae8e2072-31fb-464a-8285-bc2f2a6bab4d")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"loadbalancer": listed_lb()})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let lb = client_for(&server)
        .load_balancers()
        .get("ae8e2072-31fb-464a-8285-bc2f2a6bab4d")
        .await
        .unwrap();

    assert_eq!(lb.id, "ae8e2072-31fb-464a-8285-bc2f2a6bab4d");
    assert_eq!(lb.provisioning_status, ProvisioningStatus::Active);
    assert_eq!(lb.operating_status, OperatingStatus::Online);
    assert!(lb.is_ready());
}

#[tokio::test]
async fn test_get_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{LIST_PATH}/missing")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "faultcode": "Client",
            "faultstring": "Load Balancer missing not found."
        })))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .load_balancers()
        .get("missing")
        .await
        .unwrap_err();

    assert!(error.is_not_found());
    assert!(!matches!(error, ResourceError::Api { .. }));
}

#[tokio::test]
async fn test_get_without_envelope_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{LIST_PATH}/ae8e2072-31fb-464a-8285-bc2f2a6bab4d")))
        .respond_with(ResponseTemplate::new(200).set_body_json(listed_lb()))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .load_balancers()
        .get("ae8e2072-31fb-464a-8285-bc2f2a6bab4d")
        .await
        .unwrap_err();

    assert!(matches!(error, ResourceError::Decode { .. }));
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
async fn test_update_sends_exactly_the_set_fields() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(format!("{LIST_PATH}/8b6fc468-07d5-4d8b-a0b9-695060e72c31")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "loadbalancer": {
                "description": "Temporarily disabled load balancer",
                "project_id": "e3cd678b11784734bc366148aa37580e",
                "provisioning_status": "PENDING_UPDATE",
                "flavor_id": "",
                "vip_subnet_id": "d4af86e1-0051-488c-b7a0-527f97490c9a",
                "vip_address": "203.0.113.50",
                "vip_network_id": "d0d217df-3958-4fbf-a3c2-8dad2908c709",
                "vip_port_id": "b4ca07d1-a31e-43e2-891a-7d14f419f342",
                "provider": "octavia",
                "created_at": "2017-02-28T00:41:44",
                "updated_at": "2017-02-28T00:43:30",
                "id": "8b6fc468-07d5-4d8b-a0b9-695060e72c31",
                "operating_status": "ONLINE",
                "name": "disabled_load_balancer"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let update = LoadBalancerUpdateRequest::default()
        .description("Temporarily disabled load balancer")
        .name("disabled_load_balancer")
        .admin_state_up(true);

    let lb = client_for(&server)
        .load_balancers()
        .update("8b6fc468-07d5-4d8b-a0b9-695060e72c31", &update)
        .await
        .unwrap();

    assert_eq!(lb.id, "8b6fc468-07d5-4d8b-a0b9-695060e72c31");
    assert_eq!(lb.provisioning_status, ProvisioningStatus::PendingUpdate);
    assert_eq!(lb.provider, "octavia");
    assert_eq!(lb.admin_state_up, None);

    let bodies = request_bodies(&server).await;
    assert_eq!(
        bodies,
        vec![json!({
            "loadbalancer": {
                "name": "disabled_load_balancer",
                "description": "Temporarily disabled load balancer",
                "admin_state_up": true
            }
        })]
    );
}

#[tokio::test]
async fn test_update_disable_only_sends_false() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(format!("{LIST_PATH}/abc")))
        .and(body_json(json!({"loadbalancer": {"admin_state_up": false}})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"loadbalancer": stub_lb("abc")})),
        )
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .load_balancers()
        .update("abc", &LoadBalancerUpdateRequest::default().admin_state_up(false))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_empty_update_sends_empty_object() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(format!("{LIST_PATH}/abc")))
        .and(body_json(json!({"loadbalancer": {}})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"loadbalancer": stub_lb("abc")})),
        )
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .load_balancers()
        .update("abc", &LoadBalancerUpdateRequest::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_conflict_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(format!("{LIST_PATH}/abc")))
        .respond_with(ResponseTemplate::new(409).set_body_string(
            "Invalid state PENDING_UPDATE of loadbalancer resource abc",
        ))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .load_balancers()
        .update("abc", &LoadBalancerUpdateRequest::default().name("x"))
        .await
        .unwrap_err();

    assert!(matches!(error, ResourceError::Api { status: 409, .. }));
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_delete() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!("{LIST_PATH}/ae8e2072-31fb-464a-8285-bc2f2a6bab4d")))
        .and(NoQuery)
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .load_balancers()
        .delete(&LoadBalancerDeleteRequest::new(
            "ae8e2072-31fb-464a-8285-bc2f2a6bab4d",
        ))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_ignores_response_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!("{LIST_PATH}/abc")))
        .respond_with(ResponseTemplate::new(202).set_body_string("not json"))
        .mount(&server)
        .await;

    client_for(&server)
        .load_balancers()
        .delete(&LoadBalancerDeleteRequest::new("abc"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_cascade_delete_sends_query_param() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!("{LIST_PATH}/abc")))
        .and(query_param("cascade", "true"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .load_balancers()
        .delete(&LoadBalancerDeleteRequest::new("abc").cascade())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!("{LIST_PATH}/gone")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .load_balancers()
        .delete(&LoadBalancerDeleteRequest::new("gone"))
        .await
        .unwrap_err();

    assert!(matches!(error, ResourceError::NotFound { ref id, .. } if id == "gone"));
}

#[tokio::test]
async fn test_ids_are_percent_encoded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{LIST_PATH}/a%2Fb")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"loadbalancer": stub_lb("a/b")})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let lb = client_for(&server)
        .load_balancers()
        .get("a/b")
        .await
        .unwrap();
    assert_eq!(lb.id, "a/b");
}

#[tokio::test]
async fn test_transport_failure_is_transport_error() {
    let config = LbaasConfig::builder()
        .base_url(BaseUrl::new("http://127.0.0.1:1/v2").unwrap())
        .build()
        .unwrap();
    let client = RestClient::new(&config).unwrap();

    let error = client.load_balancers().get("abc").await.unwrap_err();
    assert!(matches!(error, ResourceError::Transport(_)));
}
