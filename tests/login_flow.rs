//! Contract tests for the login flow: token storage, navigation, and the
//! equivalence of the two feedback variants.


use fixtures::{RecordingFeedback, client_for, creds};
use gatepass::{
    AlertFeedback, ApiError, Destination, MemoryTokenStore, SessionContext, StatusLineFeedback,
    TokenStore, flows,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn success_stores_token_and_navigates_to_profile() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(serde_json::json!({
            "username": "alice",
            "password": "s3cret",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": "tok-abc",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server);
    let store = MemoryTokenStore::new();
    let mut session = SessionContext::new(&store);
    let mut feedback = RecordingFeedback::default();

    let dest = flows::login(&api, &creds("alice", "s3cret"), &mut session, &mut feedback)
        .await
        .unwrap();

    assert_eq!(dest, Some(Destination::Profile));
    assert_eq!(session.token(), Some("tok-abc"));
    assert_eq!(store.load().unwrap().as_deref(), Some("tok-abc"));
    assert_eq!(feedback.events, vec!["login_succeeded"]);
}

#[tokio::test]
async fn rejection_writes_nothing_and_renders_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server);
    let store = MemoryTokenStore::new();
    let mut session = SessionContext::new(&store);
    let mut feedback = RecordingFeedback::default();

    let dest = flows::login(&api, &creds("alice", "wrong"), &mut session, &mut feedback)
        .await
        .unwrap();

    assert_eq!(dest, None);
    assert_eq!(session.token(), None);
    assert_eq!(store.load().unwrap(), None);
    assert_eq!(feedback.events, vec!["login_failed"]);
}

#[tokio::test]
async fn missing_token_field_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let api = client_for(&server);
    let store = MemoryTokenStore::new();
    let mut session = SessionContext::new(&store);
    let mut feedback = RecordingFeedback::default();

    let err = flows::login(&api, &creds("alice", "s3cret"), &mut session, &mut feedback)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
    assert_eq!(store.load().unwrap(), None);
    assert!(feedback.events.is_empty());
}

#[tokio::test]
async fn feedback_variants_store_and_navigate_identically() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": "tok-v",
        })))
        .expect(2)
        .mount(&server)
        .await;

    let api = client_for(&server);

    let alert_store = MemoryTokenStore::new();
    let mut alert_session = SessionContext::new(&alert_store);
    let mut alert_out = Vec::new();
    let mut alert = AlertFeedback::new(&mut alert_out);
    let alert_dest = flows::login(&api, &creds("a", "p"), &mut alert_session, &mut alert)
        .await
        .unwrap();

    let inline_store = MemoryTokenStore::new();
    let mut inline_session = SessionContext::new(&inline_store);
    let mut inline_out = Vec::new();
    let mut inline = StatusLineFeedback::new(&mut inline_out, false);
    let inline_dest = flows::login(&api, &creds("a", "p"), &mut inline_session, &mut inline)
        .await
        .unwrap();

    // Identical storage and navigation.
    assert_eq!(alert_dest, inline_dest);
    assert_eq!(alert_dest, Some(Destination::Profile));
    assert_eq!(alert_store.load().unwrap(), inline_store.load().unwrap());
    assert_eq!(alert_store.load().unwrap().as_deref(), Some("tok-v"));

    // Only the rendering differs: the alert variant is silent on success.
    assert_eq!(String::from_utf8(alert_out).unwrap(), "");
    assert_eq!(String::from_utf8(inline_out).unwrap(), "Login successful!\n");
}

#[tokio::test]
async fn feedback_variants_fail_identically() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401))
        .expect(2)
        .mount(&server)
        .await;

    let api = client_for(&server);

    let alert_store = MemoryTokenStore::new();
    let mut alert_session = SessionContext::new(&alert_store);
    let mut alert_out = Vec::new();
    let mut alert = AlertFeedback::new(&mut alert_out);
    let alert_dest = flows::login(&api, &creds("a", "bad"), &mut alert_session, &mut alert)
        .await
        .unwrap();

    let inline_store = MemoryTokenStore::new();
    let mut inline_session = SessionContext::new(&inline_store);
    let mut inline_out = Vec::new();
    let mut inline = StatusLineFeedback::new(&mut inline_out, false);
    let inline_dest = flows::login(&api, &creds("a", "bad"), &mut inline_session, &mut inline)
        .await
        .unwrap();

    assert_eq!(alert_dest, None);
    assert_eq!(inline_dest, None);
    assert_eq!(alert_store.load().unwrap(), None);
    assert_eq!(inline_store.load().unwrap(), None);

    assert_eq!(String::from_utf8(alert_out).unwrap(), "Login failed!\n");
    assert_eq!(
        String::from_utf8(inline_out).unwrap(),
        "Login failed. Check your credentials.\n"
    );
}
