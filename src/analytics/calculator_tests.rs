//! Unit tests for the analytics calculator

use super::calculator::*;
use super::*;
use crate::models::{Category, GameSession, Quiz, QuizDifficulty, User, UserRole};
use chrono::{NaiveDate, TimeZone, Utc};
use proptest::prelude::*;

// ===== Helper Functions =====

fn user(id: i64, name: &str, created_at: Option<&str>) -> User {
    User {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        role: UserRole::Player,
        created_at: created_at.map(str::to_string),
        updated_at: None,
    }
}

fn quiz(id: i64, title: &str, created_at: Option<&str>) -> Quiz {
    Quiz {
        id,
        title: title.to_string(),
        description: None,
        category_id: 1,
        author_id: 1,
        difficulty: QuizDifficulty::Easy,
        category: None,
        created_at: created_at.map(str::to_string),
        updated_at: None,
    }
}

fn session(id: i64, user_id: i64, quiz_id: i64, score: f64, created_at: Option<&str>) -> GameSession {
    GameSession {
        id,
        user_id,
        quiz_id,
        score,
        user: None,
        quiz: None,
        session_date: None,
        created_at: created_at.map(str::to_string),
        updated_at: None,
    }
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ===== player_stats =====

#[test]
fn test_player_stats_basic() {
    let users = vec![user(1, "Alice", None), user(2, "Bob", None)];
    let quizzes = vec![quiz(10, "Capitales", None)];
    let sessions = vec![
        session(1, 1, 10, 40.0, Some("2025-01-01T10:00:00Z")),
        session(2, 2, 10, 90.0, Some("2025-01-02T10:00:00Z")),
        session(3, 1, 10, 80.0, Some("2025-01-03T10:00:00Z")),
    ];

    let stats = player_stats(&sessions, &users, &quizzes);
    assert_eq!(stats.len(), 2);

    let bob = &stats[0];
    assert_eq!(bob.username, "Bob");
    assert_eq!(bob.total_games, 1);
    assert_eq!(bob.average_score, 90.0);

    let alice = &stats[1];
    assert_eq!(alice.username, "Alice");
    assert_eq!(alice.total_games, 2);
    assert_eq!(alice.total_score, 120.0);
    assert_eq!(alice.average_score, 60.0);
    assert_eq!(alice.best_score, 80.0);
    assert_eq!(
        alice.last_played,
        Some(Utc.with_ymd_and_hms(2025, 1, 3, 10, 0, 0).unwrap())
    );
    assert_eq!(alice.sessions[0].session.id, 3);
    assert_eq!(alice.sessions[1].session.id, 1);
    assert_eq!(alice.sessions[0].quiz_title, "Capitales");
}

#[test]
fn test_player_stats_unknown_user_and_quiz() {
    let sessions = vec![session(1, 99, 77, 10.0, None)];

    let stats = player_stats(&sessions, &[], &[]);
    assert_eq!(stats[0].username, UNKNOWN_PLAYER);
    assert_eq!(stats[0].sessions[0].quiz_title, UNKNOWN_QUIZ);
    assert_eq!(stats[0].last_played, None);
}

#[test]
fn test_player_stats_empty() {
    assert!(player_stats(&[], &[], &[]).is_empty());
}

#[test]
fn test_player_stats_ties_keep_first_appearance_order() {
    let sessions = vec![
        session(1, 3, 1, 50.0, None),
        session(2, 1, 1, 50.0, None),
        session(3, 2, 1, 50.0, None),
    ];

    let stats = player_stats(&sessions, &[], &[]);
    let order: Vec<i64> = stats.iter().map(|s| s.user_id).collect();
    assert_eq!(order, vec![3, 1, 2]);
}

#[test]
fn test_player_stats_malformed_dates_sort_last() {
    let sessions = vec![
        session(1, 1, 1, 10.0, Some("not a date")),
        session(2, 1, 1, 20.0, Some("2025-02-01")),
        session(3, 1, 1, 30.0, Some("2025-03-01T00:00:00Z")),
    ];

    let stats = player_stats(&sessions, &[], &[]);
    let ids: Vec<i64> = stats[0].sessions.iter().map(|s| s.session.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
    assert_eq!(
        stats[0].last_played,
        Some(Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap())
    );
}

// ===== monthly_growth =====

#[test]
fn test_monthly_growth_window_and_labels() {
    let buckets = monthly_growth(&[], &[], day(2025, 3, 15), MonthLocale::English);

    let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["Oct", "Nov", "Dec", "Jan", "Feb", "Mar"]);
    assert_eq!(buckets[0].year, 2024);
    assert_eq!(buckets[0].month, 10);
    assert_eq!(buckets[5].year, 2025);
    assert!(buckets.iter().all(|b| b.users == 0 && b.quizzes == 0));
}

#[test]
fn test_monthly_growth_french_labels() {
    let buckets = monthly_growth(&[], &[], day(2025, 12, 1), MonthLocale::French);
    let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["Jul", "Aoû", "Sep", "Oct", "Nov", "Déc"]);
}

#[test]
fn test_monthly_growth_counts() {
    let users = vec![
        user(1, "A", Some("2025-03-02T08:00:00Z")),
        user(2, "B", Some("2025-03-28")),
        user(3, "C", Some("2024-10-01T00:00:00Z")),
        // outside the window
        user(4, "D", Some("2024-09-30T23:59:59Z")),
        user(5, "E", Some("2025-04-01T00:00:00Z")),
        // skipped
        user(6, "F", None),
        user(7, "G", Some("garbage")),
    ];
    let quizzes = vec![
        quiz(1, "Q1", Some("2025-01-10T00:00:00Z")),
        quiz(2, "Q2", Some("")),
    ];

    let buckets = monthly_growth(&users, &quizzes, day(2025, 3, 15), MonthLocale::English);

    assert_eq!(buckets.len(), GROWTH_MONTHS);
    assert_eq!(buckets[0].users, 1); // Oct 2024
    assert_eq!(buckets[5].users, 2); // Mar 2025
    assert_eq!(buckets[3].quizzes, 1); // Jan 2025
    assert_eq!(buckets.iter().map(|b| b.users).sum::<u32>(), 3);
    assert_eq!(buckets.iter().map(|b| b.quizzes).sum::<u32>(), 1);
}

#[test]
fn test_monthly_growth_same_month_other_year_is_excluded() {
    let users = vec![user(1, "A", Some("2024-03-10T00:00:00Z"))];
    let buckets = monthly_growth(&users, &[], day(2025, 3, 15), MonthLocale::English);
    assert!(buckets.iter().all(|b| b.users == 0));
}

// ===== leaderboard_summary =====

#[test]
fn test_leaderboard_summary() {
    let sessions = vec![
        session(1, 1, 1, 40.0, None),
        session(2, 1, 1, 100.0, None),
        session(3, 2, 1, 80.0, None),
    ];
    let users = vec![user(1, "Alice", None), user(2, "Bob", None)];
    let stats = player_stats(&sessions, &users, &[]);

    let summary = leaderboard_summary(&stats);
    assert_eq!(summary.total_players, 2);
    assert_eq!(summary.total_games, 3);
    assert_eq!(summary.top_average, Some(80.0));
    assert_eq!(summary.top_player.as_deref(), Some("Bob"));
    assert_eq!(summary.best_score, Some(100.0));
}

#[test]
fn test_leaderboard_summary_empty() {
    assert_eq!(leaderboard_summary(&[]), LeaderboardSummary::default());
}

// ===== join_category_names =====

#[test]
fn test_join_category_names() {
    let categories = vec![Category {
        id: 1,
        name: "Histoire".to_string(),
        description: String::new(),
        created_at: None,
        updated_at: None,
    }];

    let mut embedded = quiz(2, "Embedded", None);
    embedded.category = Some(Category {
        id: 5,
        name: "Sport".to_string(),
        description: String::new(),
        created_at: None,
        updated_at: None,
    });
    let mut orphan = quiz(3, "Orphan", None);
    orphan.category_id = 42;

    let rows = join_category_names(&[quiz(1, "Joined", None), embedded, orphan], &categories);
    assert_eq!(rows[0].category_name.as_deref(), Some("Histoire"));
    assert_eq!(rows[1].category_name.as_deref(), Some("Sport"));
    assert_eq!(rows[2].category_name, None);
}

// ===== Invariants =====

fn arb_sessions() -> impl Strategy<Value = Vec<GameSession>> {
    prop::collection::vec((1i64..6, 0u32..1000, 1u32..29), 0..40).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (user_id, score, d))| {
                let created = format!("2025-02-{:02}T12:00:00Z", d);
                session(i as i64, user_id, 1, score as f64, Some(&created))
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_total_games_sum_to_input_len(sessions in arb_sessions()) {
        let stats = player_stats(&sessions, &[], &[]);
        let total: u32 = stats.iter().map(|s| s.total_games).sum();
        prop_assert_eq!(total as usize, sessions.len());
    }

    #[test]
    fn prop_average_and_best(sessions in arb_sessions()) {
        for player in player_stats(&sessions, &[], &[]) {
            prop_assert!(player.total_games >= 1);
            let expected = player.total_score / player.total_games as f64;
            prop_assert!((player.average_score - expected).abs() < 1e-9);

            let best = sessions
                .iter()
                .filter(|s| s.user_id == player.user_id)
                .map(|s| s.score)
                .fold(f64::MIN, f64::max);
            prop_assert_eq!(player.best_score, best);
        }
    }

    #[test]
    fn prop_players_sorted_by_average(sessions in arb_sessions()) {
        let stats = player_stats(&sessions, &[], &[]);
        for pair in stats.windows(2) {
            prop_assert!(pair[0].average_score >= pair[1].average_score);
        }
    }

    #[test]
    fn prop_always_six_ordered_buckets(
        year in 1990i32..2100,
        month in 1u32..=12,
        created in prop::collection::vec(("[0-9]{4}-[0-9]{2}-[0-9]{2}", any::<bool>()), 0..20),
    ) {
        let users: Vec<User> = created
            .iter()
            .enumerate()
            .map(|(i, (date, present))| user(i as i64, "U", present.then_some(date.as_str())))
            .collect();

        let buckets = monthly_growth(&users, &[], day(year, month, 1), MonthLocale::English);
        prop_assert_eq!(buckets.len(), GROWTH_MONTHS);

        for pair in buckets.windows(2) {
            let a = pair[0].year * 12 + pair[0].month as i32;
            let b = pair[1].year * 12 + pair[1].month as i32;
            prop_assert_eq!(b - a, 1);
        }
        for bucket in &buckets {
            prop_assert_eq!(bucket.label.as_str(), MonthLocale::English.label(bucket.month));
        }
        let last = &buckets[GROWTH_MONTHS - 1];
        prop_assert_eq!((last.year, last.month), (year, month));
    }
}
