//! Multi-step Assessment Form
//!
//! Holds the raw text of every field while the user walks through the
//! four steps. Nothing leaves the form until [`AssessmentForm::submit`]
//! is called on the last step.

use thiserror::Error;

use super::field::{format_number, FieldId};
use super::input::AssessmentInput;

/// Fixed grouping of fields into steps
pub const STEPS: [&[FieldId]; 4] = [
    &[FieldId::Age, FieldId::Sex, FieldId::Cp],
    &[FieldId::Trestbps, FieldId::Chol, FieldId::Fbs],
    &[FieldId::Restecg, FieldId::Thalach, FieldId::Exang],
    &[FieldId::Oldpeak, FieldId::Slope, FieldId::Ca, FieldId::Thal],
];

/// Direction of the last step change. Only drives transition animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Errors returned by [`AssessmentForm::submit`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// Submit was invoked before the last step
    #[error("Please complete all {} steps before submitting (you are on step {})", STEPS.len(), .step + 1)]
    NotLastStep { step: usize },

    /// A field holds text that is neither blank nor a number
    #[error("{label} must be a number, got {value:?}")]
    NotNumeric {
        field: FieldId,
        label: &'static str,
        value: String,
    },
}

/// Editing state of the assessment
#[derive(Debug, Clone)]
pub struct AssessmentForm {
    values: [String; 13],
    current: usize,
    direction: Direction,
}

impl Default for AssessmentForm {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentForm {
    pub fn new() -> Self {
        Self {
            values: Default::default(),
            current: 0,
            direction: Direction::Forward,
        }
    }

    pub fn step_count(&self) -> usize {
        STEPS.len()
    }

    pub fn current_step(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_first_step(&self) -> bool {
        self.current == 0
    }

    pub fn is_last_step(&self) -> bool {
        self.current == STEPS.len() - 1
    }

    /// Fields shown on the current step
    pub fn current_fields(&self) -> &'static [FieldId] {
        STEPS[self.current]
    }

    /// Jump to `step`, clamped to the last step
    pub fn advance(&mut self, step: usize) {
        let step = step.min(STEPS.len() - 1);
        self.direction = if step > self.current {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.current = step;
        tracing::debug!(step = self.current, direction = ?self.direction, "assessment step changed");
    }

    /// Move one step forward; stays put on the last step
    pub fn next(&mut self) {
        self.advance(self.current + 1);
    }

    /// Move one step back; stays put on the first step
    pub fn previous(&mut self) {
        self.advance(self.current.saturating_sub(1));
    }

    /// Replace the raw text of one field
    pub fn set_field(&mut self, field: FieldId, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Pick an option of a choice field (or a numeric suggestion)
    pub fn select(&mut self, field: FieldId, value: f64) {
        self.set_field(field, format_number(value));
    }

    pub fn value(&self, field: FieldId) -> &str {
        &self.values[field.index()]
    }

    /// Whether `option` is the current value of `field`, comparing numerically
    pub fn is_selected(&self, field: FieldId, option: f64) -> bool {
        let raw = self.value(field).trim();
        !raw.is_empty() && raw.parse::<f64>().map(|v| v == option).unwrap_or(false)
    }

    /// Coerce every field and hand back the payload for the prediction call.
    ///
    /// Only allowed on the last step; from any other step the form is left
    /// untouched and [`SubmitError::NotLastStep`] is returned.
    pub fn submit(&self) -> Result<AssessmentInput, SubmitError> {
        if !self.is_last_step() {
            return Err(SubmitError::NotLastStep { step: self.current });
        }

        AssessmentInput::from_raw(&self.values).map_err(|field| SubmitError::NotNumeric {
            field,
            label: field.label(),
            value: self.value(field).to_string(),
        })
    }

    /// Submit from an interactive surface. Off the last step this is a
    /// no-op and returns `None`, so an early Enter keypress shows nothing.
    pub fn submit_if_ready(&self) -> Option<Result<AssessmentInput, SubmitError>> {
        self.is_last_step().then(|| self.submit())
    }

    /// Clear every value and return to the first step
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_cover_every_field_once() {
        let mut seen: Vec<FieldId> = STEPS.iter().flat_map(|s| s.iter().copied()).collect();
        seen.sort();
        assert_eq!(seen, FieldId::ALL.to_vec());
    }

    #[test]
    fn test_navigation_clamps() {
        let mut form = AssessmentForm::new();
        form.previous();
        assert_eq!(form.current_step(), 0);

        form.advance(10);
        assert_eq!(form.current_step(), 3);
        assert!(form.is_last_step());

        form.next();
        assert_eq!(form.current_step(), 3);
    }

    #[test]
    fn test_direction_follows_target() {
        let mut form = AssessmentForm::new();
        form.advance(2);
        assert_eq!(form.direction(), Direction::Forward);
        form.advance(1);
        assert_eq!(form.direction(), Direction::Backward);
    }

    #[test]
    fn test_values_survive_navigation() {
        let mut form = AssessmentForm::new();
        let entries = [
            (FieldId::Age, "54"),
            (FieldId::Chol, "240"),
            (FieldId::Thalach, "150"),
            (FieldId::Oldpeak, "1.5"),
        ];

        for (step, (field, value)) in entries.iter().enumerate() {
            form.advance(step);
            assert!(form.current_fields().contains(field));
            form.set_field(*field, *value);
        }

        for step in (0..STEPS.len()).rev() {
            form.advance(step);
        }
        for step in 0..STEPS.len() {
            form.advance(step);
        }

        for (field, value) in entries {
            assert_eq!(form.value(field), value);
        }
    }

    #[test]
    fn test_submit_only_on_last_step() {
        let mut form = AssessmentForm::new();
        form.set_field(FieldId::Age, "60");

        for step in 0..STEPS.len() - 1 {
            form.advance(step);
            assert_eq!(form.submit(), Err(SubmitError::NotLastStep { step }));
            assert_eq!(form.current_step(), step);
            assert_eq!(form.value(FieldId::Age), "60");
        }

        form.advance(STEPS.len() - 1);
        let input = form.submit().unwrap();
        assert_eq!(input.age, 60.0);
    }

    #[test]
    fn test_early_submit_is_silent() {
        let mut form = AssessmentForm::new();
        form.set_field(FieldId::Age, "abc");

        for step in 0..STEPS.len() - 1 {
            form.advance(step);
            assert_eq!(form.submit_if_ready(), None);
            assert_eq!(form.current_step(), step);
        }

        form.advance(STEPS.len() - 1);
        assert!(matches!(
            form.submit_if_ready(),
            Some(Err(SubmitError::NotNumeric { field: FieldId::Age, .. }))
        ));
    }

    #[test]
    fn test_not_last_step_message_counts_from_one() {
        let message = AssessmentForm::new().submit().unwrap_err().to_string();
        assert_eq!(
            message,
            "Please complete all 4 steps before submitting (you are on step 1)"
        );
    }

    #[test]
    fn test_blank_submission_is_all_zeros() {
        let mut form = AssessmentForm::new();
        form.advance(3);
        assert_eq!(form.submit().unwrap(), AssessmentInput::default());
    }

    #[test]
    fn test_submit_rejects_non_numeric_text() {
        let mut form = AssessmentForm::new();
        form.set_field(FieldId::Trestbps, "high");
        form.advance(3);

        match form.submit() {
            Err(SubmitError::NotNumeric { field, value, .. }) => {
                assert_eq!(field, FieldId::Trestbps);
                assert_eq!(value, "high");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_select_and_is_selected() {
        let mut form = AssessmentForm::new();
        assert!(!form.is_selected(FieldId::Sex, 0.0));

        form.select(FieldId::Sex, 1.0);
        assert_eq!(form.value(FieldId::Sex), "1");
        assert!(form.is_selected(FieldId::Sex, 1.0));
        assert!(!form.is_selected(FieldId::Sex, 0.0));

        form.select(FieldId::Oldpeak, 2.5);
        assert_eq!(form.value(FieldId::Oldpeak), "2.5");
    }

    #[test]
    fn test_reset() {
        let mut form = AssessmentForm::new();
        form.set_field(FieldId::Age, "40");
        form.advance(2);
        form.reset();
        assert_eq!(form.current_step(), 0);
        assert_eq!(form.value(FieldId::Age), "");
    }
}
