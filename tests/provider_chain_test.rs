use std::sync::Arc;

use storycraft::adapters::providers::{N8nProvider, OpenAiProvider};
use storycraft::domain::models::{
    GenerationConfig, ImpactType, N8nConfig, OpenAiConfig, StoryContext, TodayPerformance,
};
use storycraft::domain::ports::{ProviderError, StoryProvider};
use storycraft::services::ProviderChain;

fn context() -> StoryContext {
    StoryContext {
        protagonist: "Carla".to_string(),
        favorite_stories: vec![],
        recent_chapters: vec![],
        today: TodayPerformance {
            impact: ImpactType::Positive,
            total_goals: 2,
            completed_goals: 2,
            goals: vec![],
        },
    }
}

fn openai_provider(base_url: &str) -> OpenAiProvider {
    let config = OpenAiConfig {
        api_key: Some("test-key".to_string()),
        model: "gpt-4".to_string(),
        base_url: base_url.to_string(),
    };
    OpenAiProvider::new(config, GenerationConfig::default()).expect("provider should build")
}

#[tokio::test]
async fn test_openai_provider_parses_completion() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"choices":[{"message":{"role":"assistant","content":"Uma manhã épica."}}]}"#,
        )
        .create_async()
        .await;

    let provider = openai_provider(&server.url());
    let story = provider
        .generate_story(&context())
        .await
        .expect("generation should succeed");

    assert_eq!(story, "Uma manhã épica.");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_openai_provider_maps_http_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(500)
        .with_body("upstream exploded")
        .create_async()
        .await;

    let provider = openai_provider(&server.url());
    let result = provider.generate_story(&context()).await;

    assert!(matches!(result, Err(ProviderError::Http(_))));
}

#[tokio::test]
async fn test_openai_provider_rejects_malformed_envelope() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"unexpected":"shape"}"#)
        .create_async()
        .await;

    let provider = openai_provider(&server.url());
    let result = provider.generate_story(&context()).await;

    assert!(matches!(result, Err(ProviderError::InvalidResponse(_))));
}

#[tokio::test]
async fn test_openai_provider_rejects_empty_completion() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"   "}}]}"#)
        .create_async()
        .await;

    let provider = openai_provider(&server.url());
    let result = provider.generate_story(&context()).await;

    assert!(matches!(result, Err(ProviderError::EmptyCompletion)));
}

#[tokio::test]
async fn test_n8n_provider_accepts_output_or_text_field() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/webhook/story")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"output":"Capítulo do workflow."}"#)
        .create_async()
        .await;

    let config = N8nConfig {
        webhook_url: Some(format!("{}/webhook/story", server.url())),
    };
    let provider =
        N8nProvider::new(config, GenerationConfig::default()).expect("provider should build");

    let story = provider
        .generate_story(&context())
        .await
        .expect("generation should succeed");
    assert_eq!(story, "Capítulo do workflow.");
}

#[tokio::test]
async fn test_chain_falls_back_when_the_backend_errors() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(503)
        .create_async()
        .await;

    let provider: Arc<dyn StoryProvider> = Arc::new(openai_provider(&server.url()));
    let chain = ProviderChain::new(vec![provider]);

    // The chain absorbs the failure and the fallback narrates the day.
    let story = chain.generate(&context()).await;
    assert!(story.contains("Carla"));
}

#[tokio::test]
async fn test_unconfigured_provider_does_not_build() {
    let config = OpenAiConfig {
        api_key: Some("   ".to_string()),
        ..OpenAiConfig::default()
    };
    let result = OpenAiProvider::new(config, GenerationConfig::default());
    assert!(matches!(result, Err(ProviderError::NotConfigured(_))));
}
