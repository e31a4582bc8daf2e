//! Assessment Input
//!
//! The numeric payload sent to `cardio/predict/`.

use serde::{Deserialize, Serialize};

use super::field::{format_number, FieldId};

/// Thirteen clinical fields after coercion
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentInput {
    pub age: f64,
    pub sex: f64,
    pub cp: f64,
    pub trestbps: f64,
    pub chol: f64,
    pub fbs: f64,
    pub restecg: f64,
    pub thalach: f64,
    pub exang: f64,
    pub oldpeak: f64,
    pub slope: f64,
    pub ca: f64,
    pub thal: f64,
}

/// Convert one raw form value. Blank text counts as zero; anything else
/// must parse as a finite number.
pub fn coerce(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

impl AssessmentInput {
    /// Coerce raw form values (indexed by [`FieldId::index`]).
    ///
    /// Returns the first field whose text is not numeric.
    pub fn from_raw(values: &[String; 13]) -> Result<Self, FieldId> {
        let mut input = Self::default();
        for field in FieldId::ALL {
            let value = coerce(&values[field.index()]).ok_or(field)?;
            *input.get_mut(field) = value;
        }
        Ok(input)
    }

    pub fn get(&self, field: FieldId) -> f64 {
        match field {
            FieldId::Age => self.age,
            FieldId::Sex => self.sex,
            FieldId::Cp => self.cp,
            FieldId::Trestbps => self.trestbps,
            FieldId::Chol => self.chol,
            FieldId::Fbs => self.fbs,
            FieldId::Restecg => self.restecg,
            FieldId::Thalach => self.thalach,
            FieldId::Exang => self.exang,
            FieldId::Oldpeak => self.oldpeak,
            FieldId::Slope => self.slope,
            FieldId::Ca => self.ca,
            FieldId::Thal => self.thal,
        }
    }

    fn get_mut(&mut self, field: FieldId) -> &mut f64 {
        match field {
            FieldId::Age => &mut self.age,
            FieldId::Sex => &mut self.sex,
            FieldId::Cp => &mut self.cp,
            FieldId::Trestbps => &mut self.trestbps,
            FieldId::Chol => &mut self.chol,
            FieldId::Fbs => &mut self.fbs,
            FieldId::Restecg => &mut self.restecg,
            FieldId::Thalach => &mut self.thalach,
            FieldId::Exang => &mut self.exang,
            FieldId::Oldpeak => &mut self.oldpeak,
            FieldId::Slope => &mut self.slope,
            FieldId::Ca => &mut self.ca,
            FieldId::Thal => &mut self.thal,
        }
    }

    /// Fields whose value falls outside the documented range or option set.
    ///
    /// Advisory only: submission never depends on this.
    pub fn range_warnings(&self) -> Vec<RangeWarning> {
        FieldId::ALL
            .into_iter()
            .filter(|f| !f.descriptor().accepts(self.get(*f)))
            .map(|field| RangeWarning {
                field,
                value: self.get(field),
            })
            .collect()
    }
}

/// A value outside its advisory range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeWarning {
    pub field: FieldId,
    pub value: f64,
}

impl std::fmt::Display for RangeWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let descriptor = self.field.descriptor();
        write!(
            f,
            "{} = {} is outside the usual range",
            descriptor.label,
            format_number(self.value)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(FieldId, &str)]) -> [String; 13] {
        let mut values: [String; 13] = Default::default();
        for (field, value) in pairs {
            values[field.index()] = value.to_string();
        }
        values
    }

    #[test]
    fn test_coerce() {
        assert_eq!(coerce(""), Some(0.0));
        assert_eq!(coerce("   "), Some(0.0));
        assert_eq!(coerce("63"), Some(63.0));
        assert_eq!(coerce(" 2.3 "), Some(2.3));
        assert_eq!(coerce("abc"), None);
        assert_eq!(coerce("NaN"), None);
    }

    #[test]
    fn test_blank_form_is_all_zero() {
        let input = AssessmentInput::from_raw(&Default::default()).unwrap();
        assert_eq!(input, AssessmentInput::default());

        let json = serde_json::to_value(input).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 13);
        assert!(obj.values().all(|v| v.as_f64() == Some(0.0)));
    }

    #[test]
    fn test_numeric_strings_are_converted() {
        let input = AssessmentInput::from_raw(&raw(&[
            (FieldId::Age, "63"),
            (FieldId::Oldpeak, "2.3"),
            (FieldId::Thal, "1"),
        ]))
        .unwrap();
        assert_eq!(input.age, 63.0);
        assert_eq!(input.oldpeak, 2.3);
        assert_eq!(input.thal, 1.0);
        assert_eq!(input.chol, 0.0);
    }

    #[test]
    fn test_non_numeric_reports_field() {
        let err = AssessmentInput::from_raw(&raw(&[(FieldId::Chol, "high")])).unwrap_err();
        assert_eq!(err, FieldId::Chol);
    }

    #[test]
    fn test_range_warnings() {
        let input = AssessmentInput {
            age: 0.0,
            trestbps: 120.0,
            chol: 200.0,
            thalach: 150.0,
            ..Default::default()
        };
        let flagged: Vec<FieldId> = input.range_warnings().iter().map(|w| w.field).collect();
        assert_eq!(flagged, vec![FieldId::Age]);

        let text = input.range_warnings()[0].to_string();
        assert_eq!(text, "Age = 0 is outside the usual range");
    }
}
