//! Risk Assessment
//!
//! The heart-health questionnaire: thirteen clinical fields collected over
//! four steps, then coerced into a numeric payload for the predictor.
//!
//! - **Field table**: one [`FieldDescriptor`] per field, numeric or choice
//! - **Form**: step navigation and raw values ([`AssessmentForm`])
//! - **Input**: the coerced payload ([`AssessmentInput`])

mod field;
mod form;
mod input;

pub use field::{format_number, ChoiceOption, FieldDescriptor, FieldId, FieldKind, FIELDS};
pub use form::{AssessmentForm, Direction, SubmitError, STEPS};
pub use input::{coerce, AssessmentInput, RangeWarning};
