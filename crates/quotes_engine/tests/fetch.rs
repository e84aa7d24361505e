use std::time::Duration;

use quotes_core::Quote;
use quotes_engine::{FailureKind, FetchSettings, RemoteSource, ReqwestRemote};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> FetchSettings {
    FetchSettings {
        endpoint: format!("{}/posts", server.uri()),
        ..FetchSettings::default()
    }
}

#[tokio::test]
async fn fetch_maps_posts_to_quotes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .and(query_param("_limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[
                {"userId": 1, "id": 1, "title": "sunt aut facere", "body": "quia"},
                {"userId": 1, "id": 2, "title": "qui est esse", "body": "est"},
                {"userId": 2, "id": 11, "title": "et ea vero", "body": "delectus"}
            ]"#,
            "application/json; charset=utf-8",
        ))
        .mount(&server)
        .await;

    let remote = ReqwestRemote::new(settings_for(&server));
    let quotes = remote.fetch_quotes().await.expect("fetch ok");

    assert_eq!(
        quotes,
        vec![
            Quote::new("sunt aut facere", "Category1").unwrap(),
            Quote::new("qui est esse", "Category1").unwrap(),
            Quote::new("et ea vero", "Category2").unwrap(),
        ]
    );
}

#[tokio::test]
async fn fetch_keeps_at_most_limit_records_and_skips_blank_titles() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[
                {"userId": 1, "title": "first"},
                {"userId": 1, "title": "  "},
                {"userId": 2, "title": "third"},
                {"userId": 3, "title": "fourth"}
            ]"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let settings = FetchSettings {
        limit: 3,
        ..settings_for(&server)
    };
    let quotes = ReqwestRemote::new(settings).fetch_quotes().await.unwrap();

    let texts: Vec<&str> = quotes.iter().map(|q| q.text.as_str()).collect();
    assert_eq!(texts, vec!["first", "third"]);
}

#[tokio::test]
async fn fetch_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = ReqwestRemote::new(settings_for(&server))
        .fetch_quotes()
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(503));
}

#[tokio::test]
async fn fetch_fails_on_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"posts": []}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let err = ReqwestRemote::new(settings_for(&server))
        .fetch_quotes()
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::MalformedBody);
}

#[tokio::test]
async fn fetch_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("[]"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..settings_for(&server)
    };
    let err = ReqwestRemote::new(settings).fetch_quotes().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn fetch_rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/json")
                .set_body_string(r#"[{"userId": 1, "title": "long enough"}]"#),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 10,
        ..settings_for(&server)
    };
    let err = ReqwestRemote::new(settings).fetch_quotes().await.unwrap_err();
    assert!(matches!(
        err.kind,
        FailureKind::TooLarge { max_bytes: 10, .. }
    ));
}

#[tokio::test]
async fn fetch_rejects_invalid_endpoint() {
    let settings = FetchSettings {
        endpoint: "not a url".to_string(),
        ..FetchSettings::default()
    };
    let err = ReqwestRemote::new(settings).fetch_quotes().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}

#[tokio::test]
async fn post_sends_quote_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/posts"))
        .and(body_json(serde_json::json!({
            "text": "Carpe diem",
            "category": "Life"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_raw(
            r#"{"text": "Carpe diem", "category": "Life", "id": 101}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let remote = ReqwestRemote::new(settings_for(&server));
    remote
        .post_quote(&Quote::new("Carpe diem", "Life").unwrap())
        .await
        .expect("post ok");
}

#[tokio::test]
async fn post_failure_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = ReqwestRemote::new(settings_for(&server))
        .post_quote(&Quote::new("Carpe diem", "Life").unwrap())
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}
