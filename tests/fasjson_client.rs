//! FASJSON adapter tests against a mock HTTP server.

use std::time::Duration;

use fedora_bot::accounts::{
    adapters::FasjsonClient,
    ports::{DirectoryError, DirectoryService, SearchFilter},
};
use rstest::rstest;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> FasjsonClient {
    FasjsonClient::connect(&server.uri(), Duration::from_secs(5)).expect("mock URL is valid")
}

#[rstest]
#[tokio::test]
async fn get_user_decodes_the_result_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/users/alice/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": {
                "username": "alice",
                "human_name": "Alice Example",
                "pronouns": ["she/her"],
                "timezone": "Europe/Prague",
                "locale": "cs_CZ",
                "creation": "2019-03-14T09:26:53",
                "gpgkeyids": null,
                "ircnicks": ["matrix://matrix.org/alice"]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user = client_for(&server)
        .get_user("alice")
        .await
        .expect("user should decode");

    assert_eq!(user.username(), "alice");
    assert_eq!(user.human_name(), Some("Alice Example"));
    assert_eq!(user.timezone(), Some("Europe/Prague"));
    assert!(user.gpg_key_ids().is_empty());
    assert!(user.creation().is_some());
}

#[rstest]
#[tokio::test]
async fn missing_user_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/users/ghost/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "User ghost not found"
        })))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .get_user("ghost")
        .await
        .expect_err("user does not exist");

    assert_eq!(error, DirectoryError::NotFound);
}

#[rstest]
#[tokio::test]
async fn search_sends_exact_match_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search/users/"))
        .and(query_param("ircnick__exact", "matrix://libera.chat/rob"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": [
                {"username": "bobby"},
                {"username": "robert"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let users = client_for(&server)
        .search(&SearchFilter::ircnick("matrix://libera.chat/rob"))
        .await
        .expect("search should succeed");

    let names: Vec<&str> = users.iter().map(|user| user.username()).collect();
    assert_eq!(names, ["bobby", "robert"]);
}

#[rstest]
#[case("members")]
#[case("sponsors")]
#[tokio::test]
async fn group_rosters_use_their_endpoint(#[case] roster: &str) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/v1/groups/designteam/{roster}/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": [{"username": "alice"}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let users = if roster == "members" {
        client.list_group_members("designteam").await
    } else {
        client.list_group_sponsors("designteam").await
    }
    .expect("roster should decode");

    assert_eq!(users.len(), 1);
}

#[rstest]
#[case(401)]
#[case(403)]
#[tokio::test]
async fn rejected_credentials_map_to_setup_failure(#[case] status: u16) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(status))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .get_user("alice")
        .await
        .expect_err("credentials are rejected");

    assert!(matches!(error, DirectoryError::Setup(_)), "got {error:?}");
}

#[rstest]
#[tokio::test]
async fn server_error_carries_status_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "LDAP server unavailable"
        })))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .list_group_members("designteam")
        .await
        .expect_err("server fails");

    assert_eq!(
        error,
        DirectoryError::Api {
            status: 500,
            message: "LDAP server unavailable".to_owned(),
        }
    );
}

#[rstest]
fn unusable_base_url_fails_setup() {
    let result = FasjsonClient::connect("not a url", Duration::from_secs(5));

    assert!(matches!(result, Err(DirectoryError::Setup(_))));
}

#[rstest]
#[case(".")]
#[case("..")]
#[tokio::test]
async fn dot_segment_names_are_not_found_without_a_request(#[case] name: &str) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": [] })))
        .expect(0)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let user = client.get_user(name).await;
    let members = client.list_group_members(name).await;

    assert!(matches!(user, Err(DirectoryError::NotFound)));
    assert!(matches!(members, Err(DirectoryError::NotFound)));
}
