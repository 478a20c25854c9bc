//! Analytics type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{EntityId, GameSession, Quiz};

/// Username shown for sessions whose player is not in the user list
pub const UNKNOWN_PLAYER: &str = "Anonyme";

/// Title shown for sessions whose quiz is not in the quiz list
pub const UNKNOWN_QUIZ: &str = "Quiz inconnu";

/// Number of monthly buckets produced by `monthly_growth`
pub const GROWTH_MONTHS: usize = 6;

/// A game session joined with the title of its quiz
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedGameSession {
    #[serde(flatten)]
    pub session: GameSession,
    pub quiz_title: String,
}

/// Per-player aggregate over game sessions
///
/// Recomputed on every refresh, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub user_id: EntityId,
    pub username: String,
    /// Always at least 1
    pub total_games: u32,
    pub total_score: f64,
    /// `total_score / total_games`
    pub average_score: f64,
    pub best_score: f64,
    /// Latest parseable `createdAt` among the sessions
    pub last_played: Option<DateTime<Utc>>,
    /// Most recent first; sessions without a readable date come last
    pub sessions: Vec<EnrichedGameSession>,
}

/// Language of the month abbreviations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthLocale {
    #[default]
    English,
    French,
}

const ENGLISH_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const FRENCH_MONTHS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jun", "Jul", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

impl MonthLocale {
    /// Three-letter label for `month` (1-12)
    pub fn label(&self, month: u32) -> &'static str {
        let names = match self {
            MonthLocale::English => &ENGLISH_MONTHS,
            MonthLocale::French => &FRENCH_MONTHS,
        };
        let index = (month.clamp(1, 12) - 1) as usize;
        names[index]
    }
}

impl std::str::FromStr for MonthLocale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(MonthLocale::English),
            "fr" | "french" => Ok(MonthLocale::French),
            other => Err(format!("unknown month locale: {}", other)),
        }
    }
}

/// New users and quizzes created in one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBucket {
    /// 1-12
    pub month: u32,
    pub year: i32,
    pub label: String,
    pub users: u32,
    pub quizzes: u32,
}

impl MonthlyBucket {
    pub fn new(year: i32, month: u32, locale: MonthLocale) -> Self {
        Self {
            month,
            year,
            label: locale.label(month).to_string(),
            users: 0,
            quizzes: 0,
        }
    }

    pub fn contains(&self, year: i32, month: u32) -> bool {
        self.year == year && self.month == month
    }
}

/// Headline figures of the leaderboard page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardSummary {
    pub total_players: usize,
    /// Highest average score and its player, `None` without players
    pub top_average: Option<f64>,
    pub top_player: Option<String>,
    /// Best single-session score across all players
    pub best_score: Option<f64>,
    pub total_games: u32,
}

/// A quiz row ready for display, with its category name resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizRow {
    #[serde(flatten)]
    pub quiz: Quiz,
    pub category_name: Option<String>,
}
