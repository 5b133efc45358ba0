// HTTP-level tests for the statistics page source.

use lanepick_core::{ChampionSource, FetchError, Role, Tier};
use lanepick_opgg::OpggClient;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FIXTURE: &str = include_str!("fixtures/statistics.html");

async fn serve_fixture() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/champion/statistics"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FIXTURE))
        .mount(&server)
        .await;
    server
}

fn client(server: &MockServer) -> OpggClient {
    OpggClient::new(format!("{}/champion/statistics", server.uri()), "lanepick-test").unwrap()
}

#[tokio::test]
async fn fetch_filters_role_table_by_tier() {
    let server = serve_fixture().await;
    let source = client(&server);

    let tryhard = source.fetch(Role::Top, &[Tier::Op, Tier::One]).await.unwrap();
    assert_eq!(tryhard, vec!["Aatrox", "Cho'Gath"]);

    let feeder = source.fetch(Role::Top, &[Tier::Four, Tier::Five]).await.unwrap();
    assert_eq!(feeder, vec!["Gnar"]);

    let jungle = source.fetch(Role::Jungle, &Tier::ALL).await.unwrap();
    assert_eq!(jungle, vec!["Lee Sin"]);
}

#[tokio::test]
async fn sends_configured_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("user-agent", "lanepick-test"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FIXTURE))
        .expect(1)
        .mount(&server)
        .await;

    let source = OpggClient::new(server.uri(), "lanepick-test").unwrap();
    source.fetch(Role::Top, &Tier::ALL).await.unwrap();
}

#[tokio::test]
async fn missing_role_table_is_reported() {
    let server = serve_fixture().await;
    let err = client(&server)
        .fetch(Role::Support, &Tier::ALL)
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::MissingTable { role: Role::Support }));
}

#[tokio::test]
async fn http_error_status_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let err = OpggClient::new(server.uri(), "lanepick-test")
        .unwrap()
        .fetch(Role::Mid, &Tier::ALL)
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 503, .. }));
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let source = OpggClient::new("http://127.0.0.1:9/champion/statistics", "lanepick-test").unwrap();
    let err = source.fetch(Role::Top, &Tier::ALL).await.unwrap_err();
    assert!(matches!(err, FetchError::Transport { .. }));
}
