use std::time::Duration;

use notifier_engine::{ApiError, ApiSettings, PracticumClient, StatusApi};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> PracticumClient {
    let settings = ApiSettings::new(format!("{}/statuses", server.uri()), "secret-token");
    PracticumClient::new(settings).expect("client builds")
}

#[tokio::test]
async fn fetch_sends_oauth_header_and_cursor_query() {
    let server = MockServer::start().await;
    let body = json!({
        "homeworks": [{"homework_name": "hw1", "status": "approved"}],
        "current_date": 1_700_000_000,
    });
    Mock::given(method("GET"))
        .and(path("/statuses"))
        .and(header("Authorization", "OAuth secret-token"))
        .and(query_param("from_date", "1700000000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let fetched = client_for(&server)
        .fetch(1_700_000_000)
        .await
        .expect("fetch ok");
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn fetch_reports_http_status_with_request_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/statuses"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch(42).await.unwrap_err();
    match err {
        ApiError::HttpStatus {
            status,
            url,
            from_date,
        } => {
            assert_eq!(status, 404);
            assert_eq!(url, format!("{}/statuses", server.uri()));
            assert_eq!(from_date, 42);
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_reports_server_errors_too() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/statuses"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch(0).await.unwrap_err();
    assert!(matches!(err, ApiError::HttpStatus { status: 500, .. }));
}

#[tokio::test]
async fn fetch_rejects_non_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/statuses"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch(0).await.unwrap_err();
    assert!(matches!(err, ApiError::Body(_)));
}

#[tokio::test]
async fn fetch_maps_refused_connection_to_connectivity() {
    // A pooled server (`MockServer::start`) keeps listening after `drop`,
    // so build a bare one to get a genuinely closed port.
    let server = MockServer::builder().start().await;
    let settings = ApiSettings::new(format!("{}/statuses", server.uri()), "secret-token");
    drop(server);

    let client = PracticumClient::new(settings).expect("client builds");
    let err = client.fetch(0).await.unwrap_err();
    assert!(matches!(err, ApiError::Connectivity(_)));
}

#[tokio::test]
async fn fetch_times_out_on_slow_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/statuses"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({"homeworks": [], "current_date": 0})),
        )
        .mount(&server)
        .await;

    let mut settings = ApiSettings::new(format!("{}/statuses", server.uri()), "secret-token");
    settings.request_timeout = Duration::from_millis(50);
    let client = PracticumClient::new(settings).expect("client builds");

    let err = client.fetch(0).await.unwrap_err();
    assert!(matches!(err, ApiError::Connectivity(_)));
}
