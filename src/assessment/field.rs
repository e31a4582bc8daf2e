//! Field Descriptors
//!
//! Declarative description of the thirteen clinical fields. Renderers
//! (CLI prompts, web components) dispatch on [`FieldKind`] instead of on
//! field names.

use serde::{Deserialize, Serialize};

/// Identifier of a clinical field. Serialized with its wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    Age,
    Sex,
    Cp,
    Trestbps,
    Chol,
    Fbs,
    Restecg,
    Thalach,
    Exang,
    Oldpeak,
    Slope,
    Ca,
    Thal,
}

impl FieldId {
    /// Every field, in wire order
    pub const ALL: [FieldId; 13] = [
        FieldId::Age,
        FieldId::Sex,
        FieldId::Cp,
        FieldId::Trestbps,
        FieldId::Chol,
        FieldId::Fbs,
        FieldId::Restecg,
        FieldId::Thalach,
        FieldId::Exang,
        FieldId::Oldpeak,
        FieldId::Slope,
        FieldId::Ca,
        FieldId::Thal,
    ];

    /// Wire name used by the prediction endpoint
    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Age => "age",
            FieldId::Sex => "sex",
            FieldId::Cp => "cp",
            FieldId::Trestbps => "trestbps",
            FieldId::Chol => "chol",
            FieldId::Fbs => "fbs",
            FieldId::Restecg => "restecg",
            FieldId::Thalach => "thalach",
            FieldId::Exang => "exang",
            FieldId::Oldpeak => "oldpeak",
            FieldId::Slope => "slope",
            FieldId::Ca => "ca",
            FieldId::Thal => "thal",
        }
    }

    /// Look up a field by wire name
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }

    /// Position in [`FieldId::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn descriptor(self) -> &'static FieldDescriptor {
        &FIELDS[self.index()]
    }

    pub fn label(self) -> &'static str {
        self.descriptor().label
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a field is collected
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Free numeric entry, optionally with quick-pick suggestions
    Numeric {
        unit: Option<&'static str>,
        hint: Option<&'static str>,
        /// Documented clinical range, advisory only
        range: Option<(f64, f64)>,
        suggestions: &'static [f64],
    },
    /// Closed set of options rendered as selectable cards
    Choice { options: &'static [ChoiceOption] },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChoiceOption {
    pub value: u8,
    pub label: &'static str,
    pub description: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDescriptor {
    pub id: FieldId,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub fn is_choice(&self) -> bool {
        matches!(self.kind, FieldKind::Choice { .. })
    }

    /// Options of a choice field; empty for numeric fields
    pub fn options(&self) -> &'static [ChoiceOption] {
        match self.kind {
            FieldKind::Choice { options } => options,
            FieldKind::Numeric { .. } => &[],
        }
    }

    /// Whether `value` lies in the documented range (or option set)
    pub fn accepts(&self, value: f64) -> bool {
        match self.kind {
            FieldKind::Numeric { range: Some((lo, hi)), .. } => (lo..=hi).contains(&value),
            FieldKind::Numeric { range: None, .. } => true,
            FieldKind::Choice { options } => options.iter().any(|o| f64::from(o.value) == value),
        }
    }
}

/// Format a number the way a user would type it: `2` rather than `2.0`
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

const fn choice(value: u8, label: &'static str, description: &'static str) -> ChoiceOption {
    ChoiceOption {
        value,
        label,
        description: Some(description),
    }
}

const fn bare(value: u8, label: &'static str) -> ChoiceOption {
    ChoiceOption {
        value,
        label,
        description: None,
    }
}

const NOT_SURE: &str = "Not sure";

/// Descriptor table, indexed by [`FieldId::index`]
pub static FIELDS: [FieldDescriptor; 13] = [
    FieldDescriptor {
        id: FieldId::Age,
        label: "Age",
        kind: FieldKind::Numeric {
            unit: Some("years"),
            hint: Some("Enter your age in years (29-77)"),
            range: Some((29.0, 77.0)),
            suggestions: &[30.0, 45.0, 60.0, 75.0],
        },
    },
    FieldDescriptor {
        id: FieldId::Sex,
        label: "Biological Sex",
        kind: FieldKind::Choice {
            options: &[
                choice(1, "Female", "Assigned female at birth"),
                choice(0, "Male", "Assigned male at birth"),
            ],
        },
    },
    FieldDescriptor {
        id: FieldId::Cp,
        label: "Chest Pain Type",
        kind: FieldKind::Choice {
            options: &[bare(1, "Yes"), bare(0, "No")],
        },
    },
    FieldDescriptor {
        id: FieldId::Trestbps,
        label: "Resting Blood Pressure",
        kind: FieldKind::Numeric {
            unit: Some("mm Hg"),
            hint: Some("Your blood pressure at rest (94-200)"),
            range: Some((94.0, 200.0)),
            suggestions: &[120.0, 140.0, 160.0, 180.0],
        },
    },
    FieldDescriptor {
        id: FieldId::Chol,
        label: "Cholesterol Level",
        kind: FieldKind::Numeric {
            unit: Some("mg/dl"),
            hint: Some("Serum cholesterol in mg/dl (126-564)"),
            range: Some((126.0, 564.0)),
            suggestions: &[200.0, 240.0, 280.0, 320.0],
        },
    },
    FieldDescriptor {
        id: FieldId::Fbs,
        label: "Fasting Blood Sugar",
        kind: FieldKind::Choice {
            options: &[
                choice(0, NOT_SURE, "I don't know my fasting blood sugar"),
                choice(1, "Normal (< 120 mg/dl)", "Fasting blood sugar below 120 mg/dl"),
                choice(2, "High (> 120 mg/dl)", "Fasting blood sugar above 120 mg/dl"),
            ],
        },
    },
    FieldDescriptor {
        id: FieldId::Restecg,
        label: "Resting ECG",
        kind: FieldKind::Choice {
            options: &[
                choice(0, NOT_SURE, "I don't know my ECG results"),
                choice(1, "Normal", "Normal resting electrocardiogram"),
                choice(2, "ST-T Abnormality", "Abnormal ST-T wave changes"),
                choice(3, "LV Hypertrophy", "Left ventricular hypertrophy"),
            ],
        },
    },
    FieldDescriptor {
        id: FieldId::Thalach,
        label: "Max Heart Rate",
        kind: FieldKind::Numeric {
            unit: Some("bpm"),
            hint: Some("Highest heart rate achieved (71-202)"),
            range: Some((71.0, 202.0)),
            suggestions: &[120.0, 150.0, 180.0, 200.0],
        },
    },
    FieldDescriptor {
        id: FieldId::Exang,
        label: "Exercise Angina",
        kind: FieldKind::Choice {
            options: &[
                choice(0, NOT_SURE, "I don't know if I have exercise-induced angina"),
                choice(1, "No", "No chest pain during exercise"),
                choice(2, "Yes", "Experience chest pain during exercise"),
            ],
        },
    },
    FieldDescriptor {
        id: FieldId::Oldpeak,
        label: "ST Depression",
        kind: FieldKind::Numeric {
            unit: Some("mm"),
            hint: Some("ST depression induced by exercise (0-6.2)"),
            range: Some((0.0, 6.2)),
            suggestions: &[1.0, 2.0, 3.0, 4.0],
        },
    },
    FieldDescriptor {
        id: FieldId::Slope,
        label: "ST Slope",
        kind: FieldKind::Choice {
            options: &[
                choice(0, NOT_SURE, "I don't know my ST slope results"),
                choice(1, "Upsloping", "Upward sloping ST segment"),
                choice(2, "Flat", "Flat ST segment"),
                choice(3, "Downsloping", "Downward sloping ST segment"),
            ],
        },
    },
    FieldDescriptor {
        id: FieldId::Ca,
        label: "Major Vessels",
        kind: FieldKind::Numeric {
            unit: None,
            hint: Some("Number of major vessels (0-4) colored by fluoroscopy"),
            range: Some((0.0, 4.0)),
            suggestions: &[0.0, 1.0, 2.0, 3.0, 4.0],
        },
    },
    FieldDescriptor {
        id: FieldId::Thal,
        label: "Thalassemia",
        kind: FieldKind::Choice {
            options: &[
                choice(0, NOT_SURE, "I don't know my thalassemia results"),
                choice(1, "Normal", "Normal blood flow"),
                choice(2, "Fixed Defect", "Permanent blood flow defect"),
                choice(3, "Reversible Defect", "Temporary blood flow defect"),
            ],
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_indexed_by_field() {
        for (i, field) in FieldId::ALL.into_iter().enumerate() {
            assert_eq!(field.index(), i);
            assert_eq!(FIELDS[i].id, field);
        }
    }

    #[test]
    fn test_wire_names_round_trip() {
        for field in FieldId::ALL {
            assert_eq!(FieldId::parse(field.as_str()), Some(field));
        }
        assert_eq!(FieldId::parse("bmi"), None);

        let json = serde_json::to_string(&FieldId::Trestbps).unwrap();
        assert_eq!(json, "\"trestbps\"");
    }

    #[test]
    fn test_field_kinds() {
        assert!(FieldId::Sex.descriptor().is_choice());
        assert!(!FieldId::Age.descriptor().is_choice());
        assert!(FieldId::Ca.descriptor().options().is_empty());
        assert_eq!(FieldId::Restecg.descriptor().options().len(), 4);
    }

    #[test]
    fn test_accepts_checks_range_and_options() {
        let age = FieldId::Age.descriptor();
        assert!(age.accepts(45.0));
        assert!(!age.accepts(0.0));

        let sex = FieldId::Sex.descriptor();
        assert!(sex.accepts(0.0));
        assert!(sex.accepts(1.0));
        assert!(!sex.accepts(2.0));

        assert!(FieldId::Oldpeak.descriptor().accepts(6.2));
        assert!(!FieldId::Oldpeak.descriptor().accepts(6.3));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.0), "0");
    }
}
