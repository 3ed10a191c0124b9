use serde_json::json;

use crate::helpers::{
    configured_email_settings, error_message, spawn_app, spawn_app_with,
    unconfigured_email_settings, RelayBehaviour,
};

#[tokio::test]
async fn newsletter_returns_a_200_and_notifies_the_subscriptions_inbox() {
    let app = spawn_app().await;

    let response = app.post_newsletter(&json!({ "email": "ada@x.com" })).await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "message": "Successfully subscribed to newsletter!" })
    );

    let sent = app.email_client.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipient, "newsletter@glumia.com");
    assert_eq!(sent[0].content.subject, "New Newsletter Subscription");
    assert!(sent[0].content.html_body.contains("ada@x.com"));
    assert!(sent[0].content.text_body.contains("ada@x.com"));
}

#[tokio::test]
async fn newsletter_returns_a_400_when_email_is_missing() {
    let app = spawn_app().await;

    for body in [json!({}), json!({ "email": "" }), json!({ "email": null })] {
        let response = app.post_newsletter(&body).await;

        assert_eq!(400, response.status().as_u16(), "body: {body}");
        assert_eq!(error_message(response).await, "Email address is required.");
    }
    assert!(app.email_client.sent().is_empty());
}

#[tokio::test]
async fn newsletter_returns_a_400_when_email_is_malformed() {
    let app = spawn_app().await;

    for email in [
        "not-an-email",
        "ada@x",
        "@x.com",
        "ada x@x.com",
        "ada@@x.com",
        "ada@x.",
    ] {
        let response = app.post_newsletter(&json!({ "email": email })).await;

        assert_eq!(400, response.status().as_u16(), "email: {email}");
        assert_eq!(
            error_message(response).await,
            "Please enter a valid email address."
        );
    }
    assert!(app.email_client.sent().is_empty());
}

#[tokio::test]
async fn newsletter_returns_a_400_for_a_body_that_is_not_a_json_object() {
    let app = spawn_app().await;

    for body in ["email=ada@x.com", r#"["ada@x.com"]"#, r#""ada@x.com""#] {
        let response = app.post_raw("/api/newsletter", body).await;

        assert_eq!(400, response.status().as_u16(), "body: {body}");
        assert_eq!(error_message(response).await, "Email address is required.");
    }
    assert!(app.email_client.sent().is_empty());
}

#[tokio::test]
async fn newsletter_accepts_a_json_body_sent_as_plain_text() {
    let app = spawn_app().await;

    let response = app
        .post_with_content_type(
            "/api/newsletter",
            r#"{"email":"ada@x.com"}"#,
            "text/plain;charset=UTF-8",
        )
        .await;

    assert_eq!(200, response.status().as_u16());
    assert_eq!(app.email_client.sent().len(), 1);
}

#[tokio::test]
async fn newsletter_returns_a_503_without_sending_when_credentials_are_missing() {
    let app = spawn_app_with(unconfigured_email_settings(), RelayBehaviour::Accept).await;

    let response = app.post_newsletter(&json!({ "email": "ada@x.com" })).await;

    assert_eq!(503, response.status().as_u16());
    assert_eq!(
        error_message(response).await,
        "Newsletter service not available. Please try again later."
    );
    assert!(app.email_client.sent().is_empty());
}

#[tokio::test]
async fn newsletter_returns_a_503_when_the_relay_rejects_credentials() {
    let app = spawn_app_with(configured_email_settings(), RelayBehaviour::RejectCredentials).await;

    let response = app.post_newsletter(&json!({ "email": "ada@x.com" })).await;

    assert_eq!(503, response.status().as_u16());
    assert_eq!(
        error_message(response).await,
        "Newsletter service authentication failed. Please try again later."
    );
}

#[tokio::test]
async fn newsletter_returns_a_500_when_sending_fails() {
    let app = spawn_app_with(configured_email_settings(), RelayBehaviour::Fail).await;

    let response = app.post_newsletter(&json!({ "email": "ada@x.com" })).await;

    assert_eq!(500, response.status().as_u16());
    assert_eq!(
        error_message(response).await,
        "Failed to subscribe to newsletter. Please try again later."
    );
    assert_eq!(app.email_client.sent().len(), 1);
}
