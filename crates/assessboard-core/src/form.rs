//! Edit dialog controller.
//!
//! Holds the draft text of each field next to its validation state. Drafts
//! are revalidated on every edit; the committed [`AssessmentSummary`] is
//! only touched by a [`EditForm::save`] in which all three fields pass.

use log::{debug, info};

use crate::summary::AssessmentSummary;
use crate::validation::{Field, FieldState, ValidationError};

/// What happens to drafts and errors when the dialog is opened again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReopenPolicy {
    /// Reseed drafts from the committed summary and clear all errors.
    #[default]
    Reset,
    /// Keep the previous session's drafts and errors until edited.
    Keep,
}

/// Result of a save attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// All fields valid; the summary was updated and the dialog closed.
    Committed(AssessmentSummary),
    /// At least one field invalid; nothing committed, dialog still open.
    Rejected(Vec<ValidationError>),
}

impl SaveOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed(_))
    }
}

#[derive(Debug, Clone)]
struct FieldSlot {
    draft: String,
    state: FieldState,
}

impl FieldSlot {
    fn seeded(value: u32) -> Self {
        Self {
            draft: value.to_string(),
            state: FieldState::Valid(value),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EditForm {
    open: bool,
    focus: Field,
    policy: ReopenPolicy,
    slots: [FieldSlot; 3],
}

fn slot_index(field: Field) -> usize {
    match field {
        Field::Rank => 0,
        Field::Percentile => 1,
        Field::Score => 2,
    }
}

impl EditForm {
    /// A closed form whose drafts mirror `summary`.
    pub fn new(summary: &AssessmentSummary, policy: ReopenPolicy) -> Self {
        Self {
            open: false,
            focus: Field::Rank,
            policy,
            slots: Self::seed(summary),
        }
    }

    fn seed(summary: &AssessmentSummary) -> [FieldSlot; 3] {
        [
            FieldSlot::seeded(summary.rank()),
            FieldSlot::seeded(summary.percentile()),
            FieldSlot::seeded(summary.score()),
        ]
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn policy(&self) -> ReopenPolicy {
        self.policy
    }

    /// Open the dialog with focus on the first field.
    pub fn open(&mut self, summary: &AssessmentSummary) {
        if self.policy == ReopenPolicy::Reset {
            self.slots = Self::seed(summary);
        }
        self.focus = Field::Rank;
        self.open = true;
    }

    /// Close without committing anything.
    pub fn cancel(&mut self) {
        self.open = false;
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn set_focus(&mut self, field: Field) {
        self.focus = field;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Raw text currently entered for `field`, valid or not.
    pub fn draft(&self, field: Field) -> &str {
        &self.slots[slot_index(field)].draft
    }

    pub fn state(&self, field: Field) -> FieldState {
        self.slots[slot_index(field)].state
    }

    pub fn error(&self, field: Field) -> Option<ValidationError> {
        self.state(field).error().copied()
    }

    pub fn has_errors(&self) -> bool {
        self.slots.iter().any(|s| !s.state.is_valid())
    }

    /// Replace the draft of `field` and revalidate it.
    pub fn set_input(&mut self, field: Field, text: impl Into<String>) {
        let slot = &mut self.slots[slot_index(field)];
        slot.draft = text.into();
        slot.state = FieldState::check(field, &slot.draft);
        if let FieldState::Invalid(e) = slot.state {
            debug!("{field} draft {:?} rejected: {e}", slot.draft);
        }
    }

    /// Append a character to the focused field.
    pub fn push_char(&mut self, c: char) {
        let field = self.focus;
        let mut text = self.draft(field).to_string();
        text.push(c);
        self.set_input(field, text);
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        let field = self.focus;
        let mut text = self.draft(field).to_string();
        text.pop();
        self.set_input(field, text);
    }

    /// Revalidate every field and commit into `summary` if all pass.
    ///
    /// On rejection the summary is left untouched, the dialog stays open and
    /// every field's error is refreshed so all of them are visible.
    pub fn save(&mut self, summary: &mut AssessmentSummary) -> SaveOutcome {
        for field in Field::ALL {
            let slot = &mut self.slots[slot_index(field)];
            slot.state = FieldState::check(field, &slot.draft);
        }

        let errors: Vec<ValidationError> = self
            .slots
            .iter()
            .filter_map(|s| s.state.error().copied())
            .collect();
        if !errors.is_empty() {
            debug!("save rejected with {} invalid field(s)", errors.len());
            return SaveOutcome::Rejected(errors);
        }

        let value = |f: Field| self.state(f).value();
        // Field bounds match the summary's, so all-valid drafts always build.
        let Some(committed) = value(Field::Rank)
            .zip(value(Field::Percentile))
            .zip(value(Field::Score))
            .and_then(|((rank, percentile), score)| {
                AssessmentSummary::new(rank, percentile, score)
            })
        else {
            return SaveOutcome::Rejected(Vec::new());
        };

        *summary = committed;
        self.open = false;
        info!(
            "committed rank={} percentile={} score={}",
            committed.rank(),
            committed.percentile(),
            committed.score()
        );
        SaveOutcome::Committed(committed)
    }
}
