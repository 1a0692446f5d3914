//! Human-readable summaries for the comparison chart and the score gauge.

use serde::Serialize;

use crate::summary::MAX_SCORE;

/// Population average percentile the user is compared against.
pub const DEFAULT_AVERAGE_PERCENTILE: u32 = 72;

/// Sentence comparing `percentile` with [`DEFAULT_AVERAGE_PERCENTILE`].
pub fn performance_text(percentile: u32) -> String {
    performance_text_with_average(percentile, DEFAULT_AVERAGE_PERCENTILE)
}

/// Sentence comparing `percentile` with an explicit population `average`.
pub fn performance_text_with_average(percentile: u32, average: u32) -> String {
    use std::cmp::Ordering;

    match percentile.cmp(&average) {
        Ordering::Greater => format!(
            "You scored {percentile}% percentile which is higher than the average percentile {average}% of all the engineers who took this assessment"
        ),
        Ordering::Less => format!(
            "You scored {percentile}% percentile which is lower than the average percentile {average}% of all the engineers who took this assessment"
        ),
        Ordering::Equal => format!(
            "You scored {percentile}% percentile which is equal to the average percentile of all the engineers who took this assessment"
        ),
    }
}

/// Performance band of a score, highest band first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    /// 80% of the maximum or more.
    Strong,
    /// 60% up to 80%.
    Fair,
    Weak,
}

impl ScoreTier {
    /// Classify `score` out of [`MAX_SCORE`]. Boundaries are inclusive.
    pub fn from_score(score: u32) -> Self {
        // score / 15 * 100 >= t  <=>  score * 100 >= t * 15, kept in integers
        // so the boundaries at 12 and 9 are exact.
        let scaled = score as u64 * 100;
        let max = MAX_SCORE as u64;
        if scaled >= 80 * max {
            Self::Strong
        } else if scaled >= 60 * max {
            Self::Fair
        } else {
            Self::Weak
        }
    }

    /// Hex colour used to tint the score gauge.
    pub fn color(self) -> &'static str {
        match self {
            Self::Strong => "#22c55e",
            Self::Fair => "#3b82f6",
            Self::Weak => "#f43f5e",
        }
    }

    /// RGB components of [`ScoreTier::color`].
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Strong => (0x22, 0xc5, 0x5e),
            Self::Fair => (0x3b, 0x82, 0xf6),
            Self::Weak => (0xf4, 0x3f, 0x5e),
        }
    }
}

impl std::fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strong => write!(f, "strong"),
            Self::Fair => write!(f, "fair"),
            Self::Weak => write!(f, "weak"),
        }
    }
}

/// Feedback sentence for the question-analysis panel.
pub fn question_analysis_text(score: u32) -> String {
    match ScoreTier::from_score(score) {
        ScoreTier::Strong => format!(
            "Great performance! You've mastered {score} out of {MAX_SCORE} questions. Your strong understanding of HTML is evident."
        ),
        ScoreTier::Fair => format!(
            "Good effort! With {score} out of {MAX_SCORE} correct, you're on the right track. Focus on the topics you missed to improve further."
        ),
        ScoreTier::Weak => format!(
            "You've completed {score} out of {MAX_SCORE} questions correctly. Review the topics and try again to strengthen your HTML knowledge."
        ),
    }
}

/// Gauge colour for `score`: green, blue or red.
pub fn score_color(score: u32) -> &'static str {
    ScoreTier::from_score(score).color()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn performance_equal_to_average() {
        assert_eq!(
            performance_text(72),
            "You scored 72% percentile which is equal to the average percentile of all the engineers who took this assessment"
        );
    }

    #[test]
    fn performance_above_average() {
        let text = performance_text(80);
        assert!(text.contains("higher than the average percentile 72%"), "{text}");
        assert!(text.starts_with("You scored 80% percentile"));
    }

    #[test]
    fn performance_below_average() {
        let text = performance_text(50);
        assert!(text.contains("lower than the average percentile 72%"), "{text}");
    }

    #[test]
    fn performance_with_custom_average() {
        assert!(performance_text_with_average(50, 40).contains("higher"));
        assert!(performance_text_with_average(40, 40).contains("equal"));
        assert!(performance_text_with_average(80, 90).contains("average percentile 90%"));
    }

    #[test]
    fn tiers_at_boundaries() {
        assert_eq!(ScoreTier::from_score(15), ScoreTier::Strong);
        assert_eq!(ScoreTier::from_score(12), ScoreTier::Strong);
        assert_eq!(ScoreTier::from_score(11), ScoreTier::Fair);
        assert_eq!(ScoreTier::from_score(9), ScoreTier::Fair);
        assert_eq!(ScoreTier::from_score(8), ScoreTier::Weak);
        assert_eq!(ScoreTier::from_score(0), ScoreTier::Weak);
    }

    #[test]
    fn question_analysis_tiers() {
        let strong = question_analysis_text(12);
        assert!(strong.starts_with("Great performance! You've mastered 12 out of 15"));
        let fair = question_analysis_text(9);
        assert!(fair.starts_with("Good effort! With 9 out of 15 correct"));
        let weak = question_analysis_text(5);
        assert!(weak.starts_with("You've completed 5 out of 15 questions correctly."));
    }

    #[test]
    fn score_colors() {
        assert_eq!(score_color(13), "#22c55e");
        assert_eq!(score_color(10), "#3b82f6");
        assert_eq!(score_color(2), "#f43f5e");
    }

    #[test]
    fn rgb_matches_hex() {
        for tier in [ScoreTier::Strong, ScoreTier::Fair, ScoreTier::Weak] {
            let (r, g, b) = tier.rgb();
            assert_eq!(format!("#{r:02x}{g:02x}{b:02x}"), tier.color());
        }
    }
}
