use uuid::Uuid;

use storycraft::domain::errors::DomainError;
use storycraft::domain::models::{FeedbackConfig, UserAccount};
use storycraft::services::FeedbackClient;

fn user() -> UserAccount {
    UserAccount::new(Uuid::new_v4(), "Carla").with_email("carla@exemplo.com")
}

#[tokio::test]
async fn test_feedback_is_posted_with_the_expected_field_names() {
    let mut server = mockito::Server::new_async().await;
    let user = user();
    let mock = server
        .mock("POST", "/webhook/feedback")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "Feedback": "adorei o app",
            "userEmail": "carla@exemplo.com",
            "leadId": user.id.to_string(),
        })))
        .with_status(200)
        .create_async()
        .await;

    let client = FeedbackClient::new(FeedbackConfig {
        webhook_url: Some(format!("{}/webhook/feedback", server.url())),
    })
    .expect("client should build");

    client
        .submit(&user, "adorei o app")
        .await
        .expect("submission should succeed");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_feedback_is_rejected_before_any_network_call() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/webhook/feedback")
        .expect(0)
        .create_async()
        .await;

    let client = FeedbackClient::new(FeedbackConfig {
        webhook_url: Some(format!("{}/webhook/feedback", server.url())),
    })
    .expect("client should build");

    let result = client.submit(&user(), "   ").await;
    assert!(matches!(result, Err(DomainError::ValidationFailed(_))));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_non_success_status_surfaces_as_webhook_error_without_retry() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/webhook/feedback")
        .with_status(502)
        .expect(1)
        .create_async()
        .await;

    let client = FeedbackClient::new(FeedbackConfig {
        webhook_url: Some(format!("{}/webhook/feedback", server.url())),
    })
    .expect("client should build");

    let result = client.submit(&user(), "adorei o app").await;
    assert!(matches!(result, Err(DomainError::Webhook(_))));
    // Exactly one request: failures are never retried.
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unconfigured_webhook_is_a_webhook_error() {
    let client =
        FeedbackClient::new(FeedbackConfig { webhook_url: None }).expect("client should build");

    let result = client.submit(&user(), "adorei o app").await;
    assert!(matches!(result, Err(DomainError::Webhook(_))));
}
