//! Field rules for the edit form.
//!
//! Each field is checked on its own; one field's error never depends on
//! another field's contents.

use serde::Serialize;

use crate::summary::{MAX_PERCENTILE, MAX_SCORE};

/// An editable field of the assessment summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Rank,
    Percentile,
    Score,
}

impl Field {
    /// Fields in form order.
    pub const ALL: [Field; 3] = [Field::Rank, Field::Percentile, Field::Score];

    pub fn name(self) -> &'static str {
        match self {
            Self::Rank => "Rank",
            Self::Percentile => "Percentile",
            Self::Score => "Score",
        }
    }

    /// Form label shown above the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::Rank => "Update your Rank",
            Self::Percentile => "Update your Percentile",
            Self::Score => "Update your Current Score (out of 15)",
        }
    }

    /// Hint shown while the input is empty.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Rank => "Enter rank (must be greater than 0)",
            Self::Percentile => "Enter percentile (0-99)",
            Self::Score => "Enter score (0-15)",
        }
    }

    /// Inclusive bounds of the field.
    pub fn bounds(self) -> (i64, i64) {
        match self {
            Self::Rank => (1, u32::MAX as i64),
            Self::Percentile => (0, MAX_PERCENTILE as i64),
            Self::Score => (0, MAX_SCORE as i64),
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Rank => Self::Percentile,
            Self::Percentile => Self::Score,
            Self::Score => Self::Rank,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Rank => Self::Score,
            Self::Percentile => Self::Rank,
            Self::Score => Self::Percentile,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rank => write!(f, "rank"),
            Self::Percentile => write!(f, "percentile"),
            Self::Score => write!(f, "score"),
        }
    }
}

/// Why a field's input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Nothing was entered.
    Required(Field),
    /// Not an integer, or outside the field's bounds.
    Range(Field),
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            Self::Required(f) | Self::Range(f) => *f,
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required(field) => write!(f, "{} is required!", field.name()),
            Self::Range(Field::Rank) => write!(f, "Rank must be a positive number!"),
            Self::Range(Field::Percentile) => write!(f, "Please enter a value between 0-99"),
            Self::Range(Field::Score) => write!(f, "Please enter a value between 0-15"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate the raw text of `field`, returning the parsed value.
///
/// Surrounding whitespace is ignored. Anything that is not a plain base-10
/// integer (`"abc"`, `"1.5"`, `"7x"`) is a range error.
pub fn validate_field(field: Field, raw: &str) -> Result<u32, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Required(field));
    }
    let value: i64 = raw.parse().map_err(|_| ValidationError::Range(field))?;
    let (lo, hi) = field.bounds();
    if value < lo || value > hi {
        return Err(ValidationError::Range(field));
    }
    u32::try_from(value).map_err(|_| ValidationError::Range(field))
}

/// Outcome of the last validation of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    Valid(u32),
    Invalid(ValidationError),
}

impl FieldState {
    pub fn check(field: Field, raw: &str) -> Self {
        match validate_field(field, raw) {
            Ok(v) => Self::Valid(v),
            Err(e) => Self::Invalid(e),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn value(&self) -> Option<u32> {
        match self {
            Self::Valid(v) => Some(*v),
            Self::Invalid(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(e) => Some(e),
        }
    }

    /// Inline message to show under the field, if any.
    pub fn message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_rules() {
        assert_eq!(
            validate_field(Field::Rank, "0"),
            Err(ValidationError::Range(Field::Rank))
        );
        assert_eq!(
            validate_field(Field::Rank, ""),
            Err(ValidationError::Required(Field::Rank))
        );
        assert_eq!(validate_field(Field::Rank, "5"), Ok(5));
        assert_eq!(
            validate_field(Field::Rank, "-3"),
            Err(ValidationError::Range(Field::Rank))
        );
    }

    #[test]
    fn percentile_rules() {
        assert_eq!(validate_field(Field::Percentile, "99"), Ok(99));
        assert_eq!(validate_field(Field::Percentile, "0"), Ok(0));
        assert_eq!(
            validate_field(Field::Percentile, "100"),
            Err(ValidationError::Range(Field::Percentile))
        );
        assert_eq!(
            validate_field(Field::Percentile, "-1"),
            Err(ValidationError::Range(Field::Percentile))
        );
    }

    #[test]
    fn score_rules() {
        assert_eq!(validate_field(Field::Score, "15"), Ok(15));
        assert_eq!(
            validate_field(Field::Score, "16"),
            Err(ValidationError::Range(Field::Score))
        );
        assert_eq!(
            validate_field(Field::Score, "abc"),
            Err(ValidationError::Range(Field::Score))
        );
    }

    #[test]
    fn non_integer_text_is_range_error() {
        for raw in ["1.5", "7x", "+", "1e3", "99999999999999999999999"] {
            assert_eq!(
                validate_field(Field::Rank, raw),
                Err(ValidationError::Range(Field::Rank)),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn whitespace_handling() {
        assert_eq!(validate_field(Field::Score, " 12 "), Ok(12));
        assert_eq!(
            validate_field(Field::Score, "   "),
            Err(ValidationError::Required(Field::Score))
        );
    }

    #[test]
    fn rank_upper_bound_is_u32_max() {
        assert_eq!(validate_field(Field::Rank, "4294967295"), Ok(u32::MAX));
        assert_eq!(
            validate_field(Field::Rank, "4294967296"),
            Err(ValidationError::Range(Field::Rank))
        );
    }

    #[test]
    fn messages_per_field() {
        assert_eq!(ValidationError::Required(Field::Rank).to_string(), "Rank is required!");
        assert_eq!(
            ValidationError::Required(Field::Percentile).to_string(),
            "Percentile is required!"
        );
        assert_eq!(ValidationError::Required(Field::Score).to_string(), "Score is required!");
        assert_eq!(
            ValidationError::Range(Field::Rank).to_string(),
            "Rank must be a positive number!"
        );
        assert_eq!(
            ValidationError::Range(Field::Percentile).to_string(),
            "Please enter a value between 0-99"
        );
        assert_eq!(
            ValidationError::Range(Field::Score).to_string(),
            "Please enter a value between 0-15"
        );
    }

    #[test]
    fn field_focus_cycles() {
        let mut f = Field::Rank;
        for _ in 0..3 {
            f = f.next();
        }
        assert_eq!(f, Field::Rank);
        assert_eq!(Field::Rank.prev(), Field::Score);
        assert_eq!(Field::Score.prev(), Field::Percentile);
    }

    #[test]
    fn field_state_accessors() {
        let ok = FieldState::check(Field::Score, "7");
        assert!(ok.is_valid());
        assert_eq!(ok.value(), Some(7));
        assert_eq!(ok.message(), None);

        let bad = FieldState::check(Field::Score, "");
        assert!(!bad.is_valid());
        assert_eq!(bad.value(), None);
        assert_eq!(bad.message().as_deref(), Some("Score is required!"));
    }

    #[test]
    fn error_names_its_field() {
        for field in Field::ALL {
            assert_eq!(ValidationError::Required(field).field(), field);
            assert_eq!(ValidationError::Range(field).field(), field);
        }
        assert_eq!(ValidationError::Range(Field::Score).field().to_string(), "score");
    }
}
