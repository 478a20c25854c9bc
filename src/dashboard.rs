//! Dashboard loaders
//!
//! Fan-out/fan-in data loading for the admin pages. Every loader joins all the
//! lists it needs before handing them to the aggregation engine, and the
//! "or demo" variants fall back to built-in placeholder data when the API is
//! unreachable.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::analytics::{
    leaderboard_summary, monthly_growth, player_stats, LeaderboardSummary, MonthLocale, MonthlyBucket,
    PlayerStats,
};
use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{Category, Quiz, QuizDifficulty, User, UserRole};

/// Where the displayed data came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Live,
    /// The API failed and placeholder data is shown instead
    Demo,
}

/// Ranked players plus the headline figures of the leaderboard page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerLeaderboard {
    pub players: Vec<PlayerStats>,
    pub summary: LeaderboardSummary,
}

/// Entity counts of the overview page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewCounts {
    pub users: usize,
    pub quizzes: usize,
    pub categories: usize,
}

/// Sessions, users and quizzes fetched concurrently, then aggregated
pub async fn load_player_leaderboard(client: &ApiClient) -> Result<PlayerLeaderboard, ApiError> {
    let sessions_api = client.game_sessions();
    let users_api = client.users();
    let quizzes_api = client.quizzes();

    let (sessions, users, quizzes) =
        tokio::try_join!(sessions_api.get_all(), users_api.get_all(), quizzes_api.get_all())?;

    tracing::debug!(
        sessions = sessions.len(),
        users = users.len(),
        quizzes = quizzes.len(),
        "aggregating player statistics"
    );

    let players = player_stats(&sessions, &users, &quizzes);
    let summary = leaderboard_summary(&players);
    Ok(PlayerLeaderboard { players, summary })
}

/// New users and quizzes over the six months ending with `today`
pub async fn load_monthly_growth(
    client: &ApiClient,
    today: NaiveDate,
    locale: MonthLocale,
) -> Result<Vec<MonthlyBucket>, ApiError> {
    let users_api = client.users();
    let quizzes_api = client.quizzes();

    let (users, quizzes) = tokio::try_join!(users_api.get_all(), quizzes_api.get_all())?;
    Ok(monthly_growth(&users, &quizzes, today, locale))
}

fn count_or_zero(resource: &str, result: Result<usize, ApiError>) -> usize {
    result.unwrap_or_else(|err| {
        tracing::warn!(resource, error = %err, "count failed, showing 0");
        0
    })
}

/// Counts for the overview cards; a failing count shows as 0
pub async fn overview_counts(client: &ApiClient) -> OverviewCounts {
    let users_api = client.users();
    let quizzes_api = client.quizzes();
    let categories_api = client.categories();

    let (users, quizzes, categories) =
        tokio::join!(users_api.count(), quizzes_api.count(), categories_api.count());

    OverviewCounts {
        users: count_or_zero("users", users),
        quizzes: count_or_zero("quizzes", quizzes),
        categories: count_or_zero("categories", categories),
    }
}

/// Placeholder users shown when the API is unreachable
pub fn demo_users(now: DateTime<Utc>) -> Vec<User> {
    let created_at = Some(now.to_rfc3339());
    [
        (1, "John Doe", "john@example.com", UserRole::Admin),
        (2, "Jane Smith", "jane@example.com", UserRole::User),
        (3, "Michael Brown", "michael@example.com", UserRole::Player),
    ]
    .into_iter()
    .map(|(id, name, email, role)| User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role,
        created_at: created_at.clone(),
        updated_at: None,
    })
    .collect()
}

/// Placeholder quizzes shown when the API is unreachable
pub fn demo_quizzes(now: DateTime<Utc>) -> Vec<Quiz> {
    let created_at = Some(now.to_rfc3339());
    vec![Quiz {
        id: 0,
        title: "Quiz de démonstration".to_string(),
        description: Some("Données factices".to_string()),
        category_id: 0,
        author_id: 0,
        difficulty: QuizDifficulty::Easy,
        category: Some(Category {
            id: 0,
            name: "Culture générale".to_string(),
            description: String::new(),
            created_at: created_at.clone(),
            updated_at: None,
        }),
        created_at,
        updated_at: None,
    }]
}

/// Live users, or the demo list if the fetch fails
pub async fn users_or_demo(client: &ApiClient) -> (Vec<User>, DataSource) {
    match client.users().get_all().await {
        Ok(users) => (users, DataSource::Live),
        Err(err) => {
            tracing::warn!(error = %err, "could not fetch users, using demo data");
            (demo_users(Utc::now()), DataSource::Demo)
        }
    }
}

/// Live quizzes, or the demo list if the fetch fails
pub async fn quizzes_or_demo(client: &ApiClient) -> (Vec<Quiz>, DataSource) {
    match client.quizzes().get_all().await {
        Ok(quizzes) => (quizzes, DataSource::Live),
        Err(err) => {
            tracing::warn!(error = %err, "could not fetch quizzes, using demo data");
            (demo_quizzes(Utc::now()), DataSource::Demo)
        }
    }
}
