mod helpers;

use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use storycraft::adapters::providers::MockProvider;
use storycraft::adapters::sqlite::{
    SqliteChapterRepository, SqliteDailyGoalRepository, SqliteFavoriteStoryRepository,
};
use storycraft::domain::models::{
    Chapter, DailyGoal, FavoriteStory, ImpactType, StoryKind, UserAccount,
};
use storycraft::domain::ports::{ChapterRepository, DailyGoalRepository, FavoriteStoryRepository};
use storycraft::services::{ChronicleService, ContextBuilder, ProviderChain};

use helpers::database::{setup_test_db, teardown_test_db};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, d).expect("valid date")
}

fn user() -> UserAccount {
    UserAccount {
        id: Uuid::new_v4(),
        name: "Carla".to_string(),
        email: Some("carla@exemplo.com".to_string()),
    }
}

struct Fixture {
    stories: Arc<SqliteFavoriteStoryRepository>,
    goals: Arc<SqliteDailyGoalRepository>,
    chapters: Arc<SqliteChapterRepository>,
}

fn fixture(pool: &sqlx::SqlitePool) -> Fixture {
    Fixture {
        stories: Arc::new(SqliteFavoriteStoryRepository::new(pool.clone())),
        goals: Arc::new(SqliteDailyGoalRepository::new(pool.clone())),
        chapters: Arc::new(SqliteChapterRepository::new(pool.clone())),
    }
}

fn service(f: &Fixture, chain: ProviderChain) -> ChronicleService {
    let builder = ContextBuilder::new(f.stories.clone(), f.chapters.clone(), f.goals.clone());
    ChronicleService::new(builder, Arc::new(chain), f.chapters.clone())
}

#[tokio::test]
async fn test_perfect_day_with_no_providers_yields_positive_fallback_chapter() {
    let pool = setup_test_db().await;
    let f = fixture(&pool);
    let user = user();

    f.stories
        .insert(&FavoriteStory::new(user.id, "Dune", StoryKind::Book))
        .await
        .expect("failed to insert story");

    for text in ["run 5km", "read 20 pages", "meditate"] {
        let goal = DailyGoal::new(user.id, day(1), text);
        f.goals.insert(&goal).await.expect("failed to insert goal");
        f.goals
            .set_completed(user.id, goal.id, true)
            .await
            .expect("failed to complete goal");
    }

    let service = service(&f, ProviderChain::new(vec![]));
    let chapter = service
        .write_daily_chapter(&user, day(1), None)
        .await
        .expect("failed to write chapter");

    assert_eq!(chapter.impact, ImpactType::Positive);
    assert!(chapter.summary.contains("Carla"));

    let stored = f
        .chapters
        .get_for_date(user.id, day(1))
        .await
        .expect("failed to get chapter")
        .expect("chapter should be persisted");
    assert_eq!(stored.summary, chapter.summary);

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn test_day_with_no_goals_is_a_negative_chapter() {
    let pool = setup_test_db().await;
    let f = fixture(&pool);
    let user = user();

    let service = service(&f, ProviderChain::new(vec![]));
    let chapter = service
        .write_daily_chapter(&user, day(1), None)
        .await
        .expect("failed to write chapter");

    assert_eq!(chapter.impact, ImpactType::Negative);

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn test_custom_summary_bypasses_generation_but_not_classification() {
    let pool = setup_test_db().await;
    let f = fixture(&pool);
    let user = user();

    for text in ["run 5km", "read 20 pages"] {
        f.goals
            .insert(&DailyGoal::new(user.id, day(1), text))
            .await
            .expect("failed to insert goal");
    }

    let provider = Arc::new(MockProvider::succeeding("Generated prose."));
    let service = service(&f, ProviderChain::new(vec![provider.clone()]));

    let chapter = service
        .write_daily_chapter(&user, day(1), Some("  Hoje eu mesma escrevi.  "))
        .await
        .expect("failed to write chapter");

    assert_eq!(chapter.summary, "Hoje eu mesma escrevi.");
    // Both goals incomplete, so the day still classifies as a severe penalty.
    assert_eq!(chapter.impact, ImpactType::SeverePenalty);
    assert_eq!(provider.call_count(), 0);

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn test_blank_custom_summary_falls_back_to_generation() {
    let pool = setup_test_db().await;
    let f = fixture(&pool);
    let user = user();

    let provider = Arc::new(MockProvider::succeeding("Generated prose."));
    let service = service(&f, ProviderChain::new(vec![provider.clone()]));

    let chapter = service
        .write_daily_chapter(&user, day(1), Some("   "))
        .await
        .expect("failed to write chapter");

    assert_eq!(chapter.summary, "Generated prose.");
    assert_eq!(provider.call_count(), 1);

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn test_regenerating_a_day_overwrites_the_existing_chapter() {
    let pool = setup_test_db().await;
    let f = fixture(&pool);
    let user = user();

    let service = service(&f, ProviderChain::new(vec![]));

    service
        .write_daily_chapter(&user, day(1), Some("First version."))
        .await
        .expect("failed to write chapter");
    service
        .write_daily_chapter(&user, day(1), Some("Second version."))
        .await
        .expect("failed to rewrite chapter");

    let all = f
        .chapters
        .list_for_user(user.id)
        .await
        .expect("failed to list chapters");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].summary, "Second version.");

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn test_context_sees_recent_chapters_oldest_first_and_bounded() {
    let pool = setup_test_db().await;
    let f = fixture(&pool);
    let user = user();

    for d in 1..=7 {
        f.chapters
            .upsert(&Chapter::new(
                user.id,
                day(d),
                format!("Chapter of day {d}."),
                ImpactType::Positive,
            ))
            .await
            .expect("failed to upsert chapter");
    }

    let builder = ContextBuilder::new(f.stories.clone(), f.chapters.clone(), f.goals.clone());
    let context = builder
        .build(&user, day(8))
        .await
        .expect("failed to build context");

    // Bounded at five, strictly before today, reading forward.
    assert_eq!(context.recent_chapters.len(), 5);
    assert_eq!(context.recent_chapters[0].date, day(3));
    assert_eq!(context.recent_chapters[4].date, day(7));
    assert_eq!(
        context.last_chapter().map(|c| c.date),
        Some(day(7))
    );

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn test_failing_provider_still_produces_a_chapter() {
    let pool = setup_test_db().await;
    let f = fixture(&pool);
    let user = user();

    let provider = Arc::new(MockProvider::failing());
    let service = service(&f, ProviderChain::new(vec![provider.clone()]));

    let chapter = service
        .write_daily_chapter(&user, day(1), None)
        .await
        .expect("failed to write chapter");

    assert!(chapter.summary.contains("Carla"));
    assert_eq!(provider.call_count(), 1);

    teardown_test_db(pool).await;
}
