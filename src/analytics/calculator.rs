//! Analytics calculation logic
//!
//! Functions for player statistics, monthly growth buckets and leaderboard
//! figures. Records with missing or unreadable timestamps are skipped rather
//! than reported.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{Category, EntityId, GameSession, Quiz, Timestamped, User};

use super::{
    EnrichedGameSession, LeaderboardSummary, MonthLocale, MonthlyBucket, PlayerStats, QuizRow,
    GROWTH_MONTHS, UNKNOWN_PLAYER, UNKNOWN_QUIZ,
};

/// Groups game sessions per player and ranks the players
///
/// For each player:
/// - totals, average, best score and last played date
/// - sessions enriched with their quiz title, most recent first
///
/// Players are sorted by average score, highest first. Ties keep the order in
/// which the players first appear in `sessions`.
pub fn player_stats(sessions: &[GameSession], users: &[User], quizzes: &[Quiz]) -> Vec<PlayerStats> {
    let usernames: HashMap<EntityId, &str> = users.iter().map(|u| (u.id, u.name.as_str())).collect();
    let quiz_titles: HashMap<EntityId, &str> = quizzes.iter().map(|q| (q.id, q.title.as_str())).collect();

    let mut stats: Vec<PlayerStats> = Vec::new();
    let mut index_by_user: HashMap<EntityId, usize> = HashMap::new();

    for session in sessions {
        let index = *index_by_user.entry(session.user_id).or_insert_with(|| {
            stats.push(PlayerStats {
                user_id: session.user_id,
                username: usernames
                    .get(&session.user_id)
                    .copied()
                    .unwrap_or(UNKNOWN_PLAYER)
                    .to_string(),
                total_games: 0,
                total_score: 0.0,
                average_score: 0.0,
                best_score: session.score,
                last_played: None,
                sessions: Vec::new(),
            });
            stats.len() - 1
        });

        let player = &mut stats[index];
        player.total_games += 1;
        player.total_score += session.score;
        player.best_score = player.best_score.max(session.score);

        if let Some(played_at) = session.created_at_utc() {
            if player.last_played.map_or(true, |last| played_at > last) {
                player.last_played = Some(played_at);
            }
        }

        player.sessions.push(EnrichedGameSession {
            session: session.clone(),
            quiz_title: quiz_titles
                .get(&session.quiz_id)
                .copied()
                .unwrap_or(UNKNOWN_QUIZ)
                .to_string(),
        });
    }

    for player in &mut stats {
        player.average_score = player.total_score / player.total_games as f64;
        // None sorts below any date, so unreadable dates end up last
        player
            .sessions
            .sort_by(|a, b| b.session.created_at_utc().cmp(&a.session.created_at_utc()));
    }

    stats.sort_by(|a, b| {
        b.average_score
            .partial_cmp(&a.average_score)
            .unwrap_or(Ordering::Equal)
    });

    stats
}

/// The six calendar months ending with `today`'s month, oldest first
fn growth_window(today: NaiveDate, locale: MonthLocale) -> Vec<MonthlyBucket> {
    let current = today.year() * 12 + today.month0() as i32;

    (0..GROWTH_MONTHS as i32)
        .rev()
        .map(|offset| {
            let absolute = current - offset;
            let year = absolute.div_euclid(12);
            let month = absolute.rem_euclid(12) as u32 + 1;
            MonthlyBucket::new(year, month, locale)
        })
        .collect()
}

fn bucket_for<'a, T: Timestamped>(buckets: &'a mut [MonthlyBucket], entity: &T) -> Option<&'a mut MonthlyBucket> {
    let created = entity.created_at_utc()?;
    buckets
        .iter_mut()
        .find(|bucket| bucket.contains(created.year(), created.month()))
}

/// Counts new users and quizzes per month over the last six months
///
/// Always returns exactly six buckets, oldest first, even for empty input.
/// Entities created outside the window, or without a readable `createdAt`,
/// are ignored.
pub fn monthly_growth(users: &[User], quizzes: &[Quiz], today: NaiveDate, locale: MonthLocale) -> Vec<MonthlyBucket> {
    let mut buckets = growth_window(today, locale);

    for user in users {
        if let Some(bucket) = bucket_for(&mut buckets, user) {
            bucket.users += 1;
        }
    }

    for quiz in quizzes {
        if let Some(bucket) = bucket_for(&mut buckets, quiz) {
            bucket.quizzes += 1;
        }
    }

    buckets
}

/// Headline figures over already computed player statistics
pub fn leaderboard_summary(stats: &[PlayerStats]) -> LeaderboardSummary {
    let mut summary = LeaderboardSummary {
        total_players: stats.len(),
        ..Default::default()
    };

    for player in stats {
        summary.total_games += player.total_games;

        if summary.top_average.map_or(true, |top| player.average_score > top) {
            summary.top_average = Some(player.average_score);
            summary.top_player = Some(player.username.clone());
        }

        if summary.best_score.map_or(true, |best| player.best_score > best) {
            summary.best_score = Some(player.best_score);
        }
    }

    summary
}

/// Resolves the category name of each quiz
///
/// The embedded category wins when the API sent one; otherwise the name is
/// looked up in `categories` by `category_id`.
pub fn join_category_names(quizzes: &[Quiz], categories: &[Category]) -> Vec<QuizRow> {
    let names: HashMap<EntityId, &str> = categories.iter().map(|c| (c.id, c.name.as_str())).collect();

    quizzes
        .iter()
        .map(|quiz| {
            let category_name = quiz
                .category
                .as_ref()
                .map(|c| c.name.clone())
                .or_else(|| names.get(&quiz.category_id).map(|name| name.to_string()));

            QuizRow {
                quiz: quiz.clone(),
                category_name,
            }
        })
        .collect()
}
