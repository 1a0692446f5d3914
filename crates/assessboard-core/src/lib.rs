//! # assessboard-core
//!
//! Model and logic behind the assessment dashboard: the committed result,
//! the synthetic comparison curve, the result sentences and the validated
//! edit form. Nothing here touches a terminal; the CLI crate renders it.
//!
//! ## Quick Start
//!
//! ```
//! use assessboard_core::{AssessmentSummary, DashboardView, EditForm, Field, ReopenPolicy};
//!
//! let mut summary = AssessmentSummary::default();
//! let mut form = EditForm::new(&summary, ReopenPolicy::Reset);
//!
//! form.open(&summary);
//! form.set_input(Field::Percentile, "85");
//! assert!(form.save(&mut summary).is_committed());
//!
//! let view = DashboardView::build(&summary, assessboard_core::DEFAULT_AVERAGE_PERCENTILE);
//! assert_eq!(view.stats[1].value, "85%");
//! ```
//!
//! ## Architecture
//!
//! Summary → [`DashboardView::build`] → renderer; key input → [`EditForm`] →
//! validation → summary on save. The view is rebuilt on every frame.

pub mod form;
pub mod series;
pub mod summary;
pub mod syllabus;
pub mod text;
pub mod validation;
pub mod view;

pub use form::{EditForm, ReopenPolicy, SaveOutcome};
pub use series::{ComparisonPoint, comparison_series};
pub use summary::{AssessmentInfo, AssessmentSummary, HTML_ASSESSMENT, MAX_PERCENTILE, MAX_SCORE};
pub use syllabus::{SYLLABUS, SyllabusTopic};
pub use text::{
    DEFAULT_AVERAGE_PERCENTILE, ScoreTier, performance_text, performance_text_with_average,
    question_analysis_text, score_color,
};
pub use validation::{Field, FieldState, ValidationError, validate_field};
pub use view::{ComparisonChart, DashboardView, ScoreGauge, StatCard};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
