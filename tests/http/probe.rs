use crate::suite::{closed_address, RecordingMiddleware, TestServer};
use fake::{Fake, Faker};
use serde_json::{json, Value};
use token_probe::{ProbeResult, ACCESS_TOKEN_PATH};
use wiremock::ResponseTemplate;

#[tokio::test]
async fn returns_body_when_token_is_available() {
    // Arrange
    let application = TestServer::spawn().await;
    application
        .token_endpoint(ResponseTemplate::new(200).set_body_string("TOKEN123"), 1)
        .await;
    // Act
    let result = application.probe().check_token(&application.address()).await;
    // Assert
    assert_eq!(ProbeResult::response("TOKEN123"), result);
    assert_eq!(
        json!({ "response": "TOKEN123" }),
        serde_json::to_value(&result).expect("Failed to serialize result")
    );
}

#[tokio::test]
async fn returns_status_text_for_401() {
    // Arrange
    let application = TestServer::spawn().await;
    application
        .token_endpoint(ResponseTemplate::new(401).set_body_string("denied"), 1)
        .await;
    // Act
    let result = application.probe().check_token(&application.address()).await;
    // Assert
    assert_eq!(ProbeResult::error("Unauthorized"), result);
    assert_eq!(
        json!({ "error": "Unauthorized" }),
        serde_json::to_value(&result).expect("Failed to serialize result")
    );
}

#[tokio::test]
async fn returns_status_text_for_server_errors() {
    // Arrange
    let application = TestServer::spawn().await;
    application
        .token_endpoint(ResponseTemplate::new(503), 1)
        .await;
    // Act
    let result = application.probe().check_token(&application.address()).await;
    // Assert
    assert_eq!(ProbeResult::error("Service Unavailable"), result);
}

#[tokio::test]
async fn redirect_status_is_a_failure_when_not_followed() {
    // Arrange
    let application = TestServer::spawn().await;
    application
        .token_endpoint(ResponseTemplate::new(304), 1)
        .await;
    // Act
    let result = application.probe().check_token(&application.address()).await;
    // Assert
    assert_eq!(ProbeResult::error("Not Modified"), result);
}

#[tokio::test]
async fn returns_error_when_connection_is_refused() {
    // Arrange
    let application = TestServer::spawn().await;
    let address = closed_address();
    // Act
    let result = application.probe().check_token(&address).await;
    // Assert
    assert!(!result.is_success());
    assert!(result
        .description()
        .is_some_and(|description| !description.is_empty()));
}

#[tokio::test]
async fn returns_error_for_invalid_base_url() {
    // Arrange
    let application = TestServer::spawn().await;
    // Act
    let result = application.probe().check_token("not a url").await;
    // Assert
    assert!(result
        .description()
        .is_some_and(|description| description.starts_with("Invalid url not a url")));
    assert!(application.received().await.is_empty());
}

#[tokio::test]
async fn sends_a_single_plain_get() {
    // Arrange
    let application = TestServer::spawn().await;
    application
        .token_endpoint(ResponseTemplate::new(200).set_body_string("TOKEN123"), 1)
        .await;
    // Act
    application
        .probe()
        .check_token(&format!("{}/", application.address()))
        .await;
    // Assert
    let received = application.received().await;
    assert_eq!(1, received.len());
    assert_eq!("GET", received[0].method.as_str());
    assert_eq!(ACCESS_TOKEN_PATH, received[0].url.path());
    assert!(received[0].headers.get("content-type").is_none());
    assert!(received[0].body.is_empty());
}

#[tokio::test]
async fn body_is_returned_unparsed() {
    // Arrange
    let application = TestServer::spawn().await;
    let body = r#"{"accessToken":"abc.def","expiresIn":3599}"#;
    application
        .token_endpoint(
            ResponseTemplate::new(200).set_body_raw(body, "application/json"),
            1,
        )
        .await;
    // Act
    let result = application.probe().check_token(&application.address()).await;
    // Assert
    assert_eq!(Some(body), result.body());
    assert_eq!(Some("abc.def".to_string()), result.access_token());
}

#[tokio::test]
async fn repeated_checks_yield_identical_results() {
    // Arrange
    let application = TestServer::spawn().await;
    let token: String = Faker.fake();
    application
        .token_endpoint(ResponseTemplate::new(200).set_body_string(token.clone()), 3)
        .await;
    // Act
    let mut results = vec![];
    for _ in 0..3 {
        results.push(application.probe().check_token(&application.address()).await);
    }
    // Assert
    assert!(results.iter().all(|result| *result == ProbeResult::Response(token.clone())));
}

#[tokio::test]
async fn every_result_carries_exactly_one_key() {
    // Arrange
    let application = TestServer::spawn().await;
    application
        .token_endpoint(ResponseTemplate::new(200).set_body_string("TOKEN123"), 1)
        .await;
    // Act
    let results = vec![
        application.probe().check_token(&application.address()).await,
        application.probe().check_token(&closed_address()).await,
        application.probe().check_token("").await,
    ];
    // Assert
    for result in results {
        let value = serde_json::to_value(&result).expect("Failed to serialize result");
        let keys = value
            .as_object()
            .map(|object| object.keys().cloned().collect::<Vec<_>>())
            .unwrap_or_default();
        assert_eq!(1, keys.len(), "unexpected shape: {value}");
        assert!(matches!(
            value.get("response").or(value.get("error")),
            Some(Value::String(_))
        ));
    }
}

#[tokio::test]
async fn check_default_targets_the_platform_portal() {
    // Arrange
    let recorder = RecordingMiddleware::answering(200, "TOKEN123");
    let probe = recorder.probe();
    // Act
    let result = probe.check_default().await;
    // Assert
    assert_eq!(ProbeResult::response("TOKEN123"), result);
    assert_eq!(
        vec!["GET https://platform.here.com/api/portal/accessToken".to_string()],
        recorder.requests()
    );
}
