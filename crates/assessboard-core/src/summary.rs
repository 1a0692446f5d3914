//! The committed assessment result and the static assessment header.

use serde::{Deserialize, Serialize};

/// Highest attainable score.
pub const MAX_SCORE: u32 = 15;

/// Highest percentile a user can hold.
pub const MAX_PERCENTILE: u32 = 99;

/// Rank, percentile and score currently shown on the dashboard.
///
/// Values held here always satisfy the field ranges: `rank > 0`,
/// `percentile <= 99`, `score <= 15`. They only change through
/// [`crate::form::EditForm::save`] or [`AssessmentSummary::new`], both of
/// which validate first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentSummary {
    rank: u32,
    percentile: u32,
    score: u32,
}

impl Default for AssessmentSummary {
    fn default() -> Self {
        Self {
            rank: 1,
            percentile: 30,
            score: 10,
        }
    }
}

impl AssessmentSummary {
    /// Build a summary, returning `None` if any value is out of range.
    pub fn new(rank: u32, percentile: u32, score: u32) -> Option<Self> {
        let in_range = rank > 0 && percentile <= MAX_PERCENTILE && score <= MAX_SCORE;
        in_range.then_some(Self {
            rank,
            percentile,
            score,
        })
    }

    pub fn rank(&self) -> u32 {
        self.rank
    }

    pub fn percentile(&self) -> u32 {
        self.percentile
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Score as a percentage of [`MAX_SCORE`].
    pub fn score_percentage(&self) -> f64 {
        score_percentage(self.score)
    }
}

/// `score / 15 * 100`, unclamped.
pub fn score_percentage(score: u32) -> f64 {
    score as f64 / MAX_SCORE as f64 * 100.0
}

/// Descriptive header for the assessment being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssessmentInfo {
    pub title: &'static str,
    pub questions: u32,
    pub duration_mins: u32,
    pub submitted_on: &'static str,
}

/// The HTML assessment the dashboard reports on.
pub const HTML_ASSESSMENT: AssessmentInfo = AssessmentInfo {
    title: "Hyper Text Markup Language",
    questions: 8,
    duration_mins: 15,
    submitted_on: "5 June 2021",
};

impl AssessmentInfo {
    /// One-line subtitle, e.g. `Questions: 08 | Duration: 15 mins | Submitted on 5 June 2021`.
    pub fn subtitle(&self) -> String {
        format!(
            "Questions: {:02} | Duration: {} mins | Submitted on {}",
            self.questions, self.duration_mins, self.submitted_on
        )
    }
}
