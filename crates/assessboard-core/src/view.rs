//! Everything the dashboard shows, derived from the committed summary in one pass.

use serde::Serialize;

use crate::series::{self, ComparisonPoint};
use crate::summary::{AssessmentInfo, AssessmentSummary, HTML_ASSESSMENT, MAX_SCORE};
use crate::syllabus::{SYLLABUS, SyllabusTopic};
use crate::text::{self, ScoreTier};

/// One of the three headline statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
}

/// Comparison chart contents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonChart {
    pub caption: String,
    pub points: Vec<ComparisonPoint>,
    pub x_bounds: (f64, f64),
    pub y_bounds: (f64, f64),
}

impl ComparisonChart {
    pub fn user_point(&self) -> Option<&ComparisonPoint> {
        series::user_point(&self.points)
    }
}

/// Score gauge contents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreGauge {
    /// Filled share of the gauge, 0..=100.
    pub percentage: f64,
    pub tier: ScoreTier,
    pub color: &'static str,
    pub label: String,
    pub analysis: String,
}

impl ScoreGauge {
    pub fn ratio(&self) -> f64 {
        (self.percentage / 100.0).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub info: AssessmentInfo,
    pub subtitle: String,
    pub stats: [StatCard; 3],
    pub comparison: ComparisonChart,
    pub syllabus: &'static [SyllabusTopic],
    pub gauge: ScoreGauge,
}

impl DashboardView {
    /// Derive the full view for `summary`, comparing against `average`.
    pub fn build(summary: &AssessmentSummary, average: u32) -> Self {
        let points = series::comparison_series(summary.percentile());
        let y_bounds = series::y_bounds(&points);
        let tier = ScoreTier::from_score(summary.score());
        let score_label = format!("{}/{MAX_SCORE}", summary.score());

        Self {
            info: HTML_ASSESSMENT,
            subtitle: HTML_ASSESSMENT.subtitle(),
            stats: [
                StatCard {
                    label: "YOUR RANK",
                    value: summary.rank().to_string(),
                },
                StatCard {
                    label: "PERCENTILE",
                    value: format!("{}%", summary.percentile()),
                },
                StatCard {
                    label: "CORRECT ANSWERS",
                    value: score_label.clone(),
                },
            ],
            comparison: ComparisonChart {
                caption: text::performance_text_with_average(summary.percentile(), average),
                points,
                x_bounds: series::x_bounds(),
                y_bounds,
            },
            syllabus: &SYLLABUS,
            gauge: ScoreGauge {
                percentage: summary.score_percentage(),
                tier,
                color: tier.color(),
                label: score_label,
                analysis: text::question_analysis_text(summary.score()),
            },
        }
    }
}
