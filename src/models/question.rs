//! Quiz questions

use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;

use super::EntityId;

/// Options of every true/false question, in order
pub const TRUE_FALSE_OPTIONS: [&str; 2] = ["True", "False"];

/// Points awarded when none are given
pub const DEFAULT_POINTS: u32 = 1;

fn default_points() -> u32 {
    DEFAULT_POINTS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionType {
    MultipleChoice,
    TrueFalse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: EntityId,
    /// Sent as a string by the API
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub quiz_id: EntityId,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[serde(default)]
    pub options: Vec<String>,
    pub correct_answer: String,
    #[serde(default = "default_points")]
    pub points: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionDto {
    pub quiz_id: EntityId,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub options: Vec<String>,
    pub correct_answer: String,
    #[serde(default = "default_points")]
    pub points: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuestionDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub question_type: Option<QuestionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
}

/// One question of a bulk submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionBulkItem {
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub quiz_id: EntityId,
    pub points: u32,
}

/// Body of `POST /questions/bulk`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionBulkDto {
    pub quiz_id: EntityId,
    pub questions: Vec<QuestionBulkItem>,
}

/// Checks the option/answer invariants shared by every question shape
///
/// Multiple choice needs at least two options, true/false is fixed to
/// `["True", "False"]`, the correct answer must be one of the options and
/// points must be positive.
pub fn validate_question(
    question_type: QuestionType,
    options: &[String],
    correct_answer: &str,
    points: u32,
) -> Result<(), String> {
    match question_type {
        QuestionType::MultipleChoice if options.len() < 2 => {
            return Err(format!(
                "multiple choice question needs at least 2 options, got {}",
                options.len()
            ));
        }
        QuestionType::TrueFalse if options.iter().map(String::as_str).ne(TRUE_FALSE_OPTIONS) => {
            return Err("true/false question options must be [\"True\", \"False\"]".to_string());
        }
        _ => {}
    }

    if !options.iter().any(|option| option == correct_answer) {
        return Err(format!("correct answer '{}' is not one of the options", correct_answer));
    }

    if points == 0 {
        return Err("points must be a positive integer".to_string());
    }

    Ok(())
}

impl QuestionBulkItem {
    pub fn validate(&self) -> Result<(), String> {
        validate_question(self.question_type, &self.options, &self.correct_answer, self.points)
    }
}

impl CreateQuestionDto {
    pub fn validate(&self) -> Result<(), String> {
        validate_question(self.question_type, &self.options, &self.correct_answer, self.points)
    }
}

impl Question {
    pub fn validate(&self) -> Result<(), String> {
        validate_question(self.question_type, &self.options, &self.correct_answer, self.points)
    }
}
