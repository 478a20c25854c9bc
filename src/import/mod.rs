//! Bulk question import
//!
//! Two input formats produce the same [`QuestionBulkDto`]:
//!
//! - **Text**: one question per paragraph, paragraphs separated by a blank line.
//!   First line is the question, second line the type, then one option per
//!   line (multiple choice only), and finally `Correct: <answer>`.
//! - **JSON**: an array of `{text, type, options, correctAnswer, points}` objects.
//!
//! Every parsed question is validated before anything is submitted.

mod error;

pub use error::ImportError;

use std::path::Path;

use serde::Deserialize;

use crate::error::AppError;
use crate::models::{
    EntityId, QuestionBulkDto, QuestionBulkItem, QuestionType, DEFAULT_POINTS, TRUE_FALSE_OPTIONS,
};

/// Prefix of the answer line in the text format
pub const CORRECT_PREFIX: &str = "Correct:";

/// Input format of a bulk import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Text,
    Json,
}

impl ImportFormat {
    /// `.json` files are JSON, anything else is text
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Parse `input` in the given format
pub fn parse(input: &str, quiz_id: EntityId, format: ImportFormat) -> Result<QuestionBulkDto, ImportError> {
    match format {
        ImportFormat::Text => parse_text_block(input, quiz_id),
        ImportFormat::Json => parse_json_array(input, quiz_id),
    }
}

/// Read and parse an import file
pub fn read_file(path: &Path, quiz_id: EntityId, format: ImportFormat) -> Result<QuestionBulkDto, AppError> {
    let input = std::fs::read_to_string(path)?;
    let dto = parse(&input, quiz_id, format)?;
    tracing::info!(
        path = %path.display(),
        questions = dto.questions.len(),
        "parsed bulk import file"
    );
    Ok(dto)
}

/// Split text into paragraphs of trimmed, non-empty lines
fn paragraphs(input: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();

    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

fn parse_block(index: usize, lines: &[&str], quiz_id: EntityId) -> Result<QuestionBulkItem, ImportError> {
    if lines.len() < 3 {
        return Err(ImportError::malformed(
            index,
            "expected a question line, a type line and a 'Correct:' line",
        ));
    }

    let last = lines[lines.len() - 1];
    let correct_answer = last
        .strip_prefix(CORRECT_PREFIX)
        .map(str::trim)
        .ok_or_else(|| ImportError::malformed(index, format!("last line must start with '{}'", CORRECT_PREFIX)))?;

    let question_type = if lines[1].contains("TRUE_FALSE") {
        QuestionType::TrueFalse
    } else {
        QuestionType::MultipleChoice
    };

    let options = match question_type {
        QuestionType::MultipleChoice => lines[2..lines.len() - 1].iter().map(|s| s.to_string()).collect(),
        QuestionType::TrueFalse => TRUE_FALSE_OPTIONS.iter().map(|s| s.to_string()).collect(),
    };

    Ok(QuestionBulkItem {
        text: lines[0].to_string(),
        question_type,
        options,
        correct_answer: correct_answer.to_string(),
        quiz_id,
        points: DEFAULT_POINTS,
    })
}

/// Parse the paragraph text format
pub fn parse_text_block(input: &str, quiz_id: EntityId) -> Result<QuestionBulkDto, ImportError> {
    let blocks = paragraphs(input);
    if blocks.is_empty() {
        return Err(ImportError::EmptyInput);
    }

    let questions = blocks
        .iter()
        .enumerate()
        .map(|(index, lines)| parse_block(index, lines, quiz_id))
        .collect::<Result<Vec<_>, _>>()?;

    validated(quiz_id, questions)
}

/// One element of the JSON format
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuestion {
    text: String,
    #[serde(rename = "type")]
    question_type: QuestionType,
    #[serde(default)]
    options: Vec<String>,
    correct_answer: String,
    #[serde(default)]
    points: Option<u32>,
}

impl RawQuestion {
    fn into_item(self, quiz_id: EntityId) -> QuestionBulkItem {
        let options = if self.question_type == QuestionType::TrueFalse && self.options.is_empty() {
            TRUE_FALSE_OPTIONS.iter().map(|s| s.to_string()).collect()
        } else {
            self.options
        };

        QuestionBulkItem {
            text: self.text,
            question_type: self.question_type,
            options,
            correct_answer: self.correct_answer,
            quiz_id,
            // missing or zero points fall back to the default
            points: self.points.filter(|p| *p > 0).unwrap_or(DEFAULT_POINTS),
        }
    }
}

/// Parse the JSON array format
pub fn parse_json_array(input: &str, quiz_id: EntityId) -> Result<QuestionBulkDto, ImportError> {
    let raw: Vec<RawQuestion> = serde_json::from_str(input)?;
    if raw.is_empty() {
        return Err(ImportError::EmptyInput);
    }

    let questions = raw.into_iter().map(|q| q.into_item(quiz_id)).collect();
    validated(quiz_id, questions)
}

fn validated(quiz_id: EntityId, questions: Vec<QuestionBulkItem>) -> Result<QuestionBulkDto, ImportError> {
    for (index, question) in questions.iter().enumerate() {
        question.validate().map_err(|reason| ImportError::invalid(index, reason))?;
    }

    Ok(QuestionBulkDto { quiz_id, questions })
}
