//! # Simple Diagnosis
//!
//! Ten-question self check. Each answer scores 0 or 1; the total out of 10
//! decides the rating:
//!
//! | Score | Rating  |
//! |-------|---------|
//! | 10    | safe    |
//! | 8-9   | caution |
//! | 0-7   | danger  |
//!
//! Anything short of a perfect score recommends a detailed diagnosis.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::tables::questions;

/// Screening rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimpleRating {
    Safe,
    Caution,
    Danger,
}

impl SimpleRating {
    /// Rating for a total score
    pub fn from_score(score: u8) -> Self {
        if score >= 10 {
            SimpleRating::Safe
        } else if score >= 8 {
            SimpleRating::Caution
        } else {
            SimpleRating::Danger
        }
    }

    /// Advice shown with the rating
    pub fn message(&self) -> &'static str {
        match self {
            SimpleRating::Safe => {
                "No immediate concern, but have an expert take a look to be sure."
            }
            SimpleRating::Caution => "There are some concerns. Have an expert take a look.",
            SimpleRating::Danger => {
                "There are many concerns. Have an expert take a look as soon as possible."
            }
        }
    }
}

/// Screening result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleDiagnosisResult {
    /// Answers as given, question id → option id
    pub answers: BTreeMap<u8, String>,
    /// 0-10
    pub total_score: u8,
    pub rating: SimpleRating,
    pub recommend_detailed_diagnosis: bool,
    pub message: String,
}

/// Score the screening answers.
///
/// Unanswered questions and option ids that do not belong to the question
/// score 0 without error.
pub fn score(answers: &BTreeMap<u8, String>) -> SimpleDiagnosisResult {
    let total_score: u8 = questions()
        .iter()
        .filter_map(|q| {
            let selected = answers.get(&q.id)?;
            q.option(selected).map(|o| o.score)
        })
        .sum();

    let rating = SimpleRating::from_score(total_score);

    SimpleDiagnosisResult {
        answers: answers.clone(),
        total_score,
        rating,
        recommend_detailed_diagnosis: total_score < 10,
        message: rating.message().to_string(),
    }
}
