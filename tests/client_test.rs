//! HTTP client behavior against a mock backend.

use wiremock::matchers::{body_json, header, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tpl_board::backend::{BackendError, HttpRepositoryClient, RepositoryClient};
use tpl_board::config::types::BackendConfig;
use tpl_board::types::EnablementChange;

fn client_for(server: &MockServer, token: Option<&str>) -> HttpRepositoryClient {
    HttpRepositoryClient::new(&BackendConfig {
        base_url: format!("{}/api", server.uri()),
        token: token.map(str::to_owned),
    })
    .expect("valid mock server URL")
}

#[tokio::test]
async fn list_decodes_ordered_repositories() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/template-repositories"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[
                {"url":"https://a/index.json","name":"a","description":"first","enabled":true,"protected":true},
                {"url":"https://b/index.json","name":"b","description":"","enabled":false,"protected":false}
            ]"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let repos = client_for(&server, None).list().await.unwrap();
    assert_eq!(repos.len(), 2);
    assert_eq!(repos[0].url, "https://a/index.json");
    assert!(repos[0].protected);
    assert!(!repos[1].enabled);
}

#[tokio::test]
async fn list_surfaces_malformed_payload_as_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/template-repositories"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{\"oops\": 1}", "application/json"))
        .mount(&server)
        .await;

    let err = client_for(&server, None).list().await.unwrap_err();
    assert!(matches!(err, BackendError::Decode(_)), "got: {err}");
}

#[tokio::test]
async fn add_posts_url_and_description() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/template-repositories"))
        .and(body_json(serde_json::json!({
            "url": "https://raw.githubusercontent.com/org/repo/main/index.json",
            "description": "Org templates"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server, None)
        .add(
            "https://raw.githubusercontent.com/org/repo/main/index.json",
            "Org templates",
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn add_duplicate_reports_status_and_backend_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/template-repositories"))
        .respond_with(ResponseTemplate::new(409).set_body_string("repository already registered"))
        .mount(&server)
        .await;

    let err = client_for(&server, None)
        .add("https://a/index.json", "dup")
        .await
        .unwrap_err();
    match err {
        BackendError::Status { status, message } => {
            assert_eq!(status.as_u16(), 409);
            assert_eq!(message, "repository already registered");
        }
        other => panic!("expected Status error, got: {other}"),
    }
}

#[tokio::test]
async fn remove_addresses_the_repository_as_one_path_segment() {
    let server = MockServer::start().await;
    // The repository URL is percent-encoded into a single trailing segment.
    Mock::given(method("DELETE"))
        .and(path_regex(r"^/api/template-repositories/[^/]+$"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server, None)
        .remove("https://a/index.json")
        .await
        .unwrap();
}

#[tokio::test]
async fn remove_protected_repository_is_refused() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path_regex(r"^/api/template-repositories/.+$"))
        .respond_with(ResponseTemplate::new(403).set_body_string("repository is protected"))
        .mount(&server)
        .await;

    let err = client_for(&server, None)
        .remove("https://a/index.json")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("protected"), "got: {err}");
}

#[tokio::test]
async fn enablement_batch_uses_wire_field_names() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/template-repositories/enablement"))
        .and(body_json(serde_json::json!({
            "repos": [
                {"repoID": "https://a/index.json", "enable": false},
                {"repoID": "https://b/index.json", "enable": true}
            ]
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let batch = [
        EnablementChange {
            repo_id: "https://a/index.json".into(),
            enable: false,
        },
        EnablementChange {
            repo_id: "https://b/index.json".into(),
            enable: true,
        },
    ];
    client_for(&server, None).set_enablement(&batch).await.unwrap();
}

#[tokio::test]
async fn bearer_token_is_sent_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/template-repositories"))
        .and(header("authorization", "Bearer sekrit"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let repos = client_for(&server, Some("sekrit")).list().await.unwrap();
    assert!(repos.is_empty());
}
