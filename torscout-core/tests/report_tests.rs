use torscout_client::{FetchError, IdentityPolicy, ServiceEndpoint, TorServiceClient};
use torscout_core::report::{print_emails, print_json, print_phones, print_tor_ip, print_tree};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> TorServiceClient {
    let uri = server.uri();
    let stripped = uri.strip_prefix("http://").unwrap();
    let (address, port) = stripped.split_once(':').unwrap();
    TorServiceClient::new(
        ServiceEndpoint::new(address, port),
        IdentityPolicy::Fixed,
    )
}

const TREE_BODY: &str = r#"{
    "url": "http://example.onion", "status_code": 200, "status": "OK",
    "children": [
        {"url": "http://example.onion/a", "status_code": 404,
         "status": "Not Found", "children": []}
    ]}"#;

#[tokio::test]
async fn print_tree_without_classification_never_fetches_content() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tree"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TREE_BODY))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/content"))
        .respond_with(ResponseTemplate::new(200).set_body_string("forum"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    print_tree(&client, "http://example.onion", 1, false)
        .await
        .unwrap();
}

#[tokio::test]
async fn print_tree_with_classification_fetches_content_once_per_node() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tree"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TREE_BODY))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/content"))
        .respond_with(ResponseTemplate::new(200).set_body_string("forum thread board"))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    print_tree(&client, "http://example.onion", 1, true)
        .await
        .unwrap();
}

#[tokio::test]
async fn failed_root_fetch_is_fatal_to_the_operation() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tree"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = print_tree(&client, "http://example.onion", 1, false)
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Status { .. }));
}

#[tokio::test]
async fn print_json_returns_the_decoded_root() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tree"))
        .and(query_param("depth", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TREE_BODY))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let root = print_json(&client, "http://example.onion", 1).await.unwrap();

    assert_eq!(root.parts(), Some(("http://example.onion", 200, "OK")));
    assert_eq!(root.children.len(), 1);
    assert_eq!(
        root.children[0].parts(),
        Some(("http://example.onion/a", 404, "Not Found"))
    );
}

#[tokio::test]
async fn print_emails_returns_the_exact_ordered_sequence() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/emails"))
        .and(query_param("link", "http://example.onion"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"["a@example.com","b@example.com"]"#),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let emails = print_emails(&client, "http://example.onion").await.unwrap();
    assert_eq!(emails, vec!["a@example.com", "b@example.com"]);
}

#[tokio::test]
async fn print_phones_returns_the_exact_ordered_sequence() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/phone"))
        .and(query_param("link", "http://example.onion"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"["+1-555-0100","+1-555-0100","+44 20 7946 0958"]"#),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let phones = print_phones(&client, "http://example.onion").await.unwrap();
    // Duplicates are the service's business; the reporter does not dedupe.
    assert_eq!(
        phones,
        vec!["+1-555-0100", "+1-555-0100", "+44 20 7946 0958"]
    );
}

#[tokio::test]
async fn print_tor_ip_reports_the_egress_address() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ip"))
        .respond_with(ResponseTemplate::new(200).set_body_string("185.220.101.7\n"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    print_tor_ip(&client).await.unwrap();
}

#[tokio::test]
async fn print_emails_propagates_service_failures() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = print_emails(&client, "http://example.onion").await.unwrap_err();
    assert!(matches!(err, FetchError::Decode { .. }));
}
