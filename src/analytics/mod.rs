//! Aggregation engine for the dashboard
//!
//! Pure, synchronous transformations of raw entity lists into display-ready
//! aggregates:
//!
//! - **Player statistics**: game sessions grouped per player, ranked by average score
//! - **Monthly growth**: new users and quizzes over the last six months
//! - **Leaderboard summary**: headline figures over the player statistics
//!
//! Nothing here performs I/O. Callers join every list they need before
//! aggregating (see `dashboard`).

mod types;


pub use types::*;

/// Calculator functions over in-memory entity lists
pub mod calculator;

pub use calculator::{join_category_names, leaderboard_summary, monthly_growth, player_stats};

#[cfg(test)]
mod calculator_tests;
