//! Risk Routing
//!
//! Turns the predictor's answer into a risk level and the follow-up copy
//! shown next to the hospital recommendations.

use serde::{Deserialize, Serialize};

/// Coarse risk category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Elevated,
}

impl RiskLevel {
    /// Infer the level from prose: "not likely" anywhere means low risk.
    pub fn infer(text: &str) -> Self {
        if text.to_lowercase().contains("not likely") {
            RiskLevel::Low
        } else {
            RiskLevel::Elevated
        }
    }

    /// Parse a structured level sent by the predictor
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "low" | "none" | "low_risk" => Some(RiskLevel::Low),
            "elevated" | "moderate" | "high" | "high_risk" => Some(RiskLevel::Elevated),
            _ => None,
        }
    }

    pub fn is_elevated(self) -> bool {
        self == RiskLevel::Elevated
    }

    /// Result banner title
    pub fn headline(self) -> &'static str {
        match self {
            RiskLevel::Low => "✅ Low Risk Detected",
            RiskLevel::Elevated => "⚠ Potential Risk Detected",
        }
    }

    /// Heading above the hospital list
    pub fn hospitals_heading(self) -> &'static str {
        match self {
            RiskLevel::Low => "Cardiac Health Resources",
            RiskLevel::Elevated => "Recommended Cardiac Centers",
        }
    }

    /// Introductory line above the hospital list
    pub fn hospitals_intro(self) -> &'static str {
        match self {
            RiskLevel::Low => "Maintain your heart health with these recommended resources:",
            RiskLevel::Elevated => {
                "Based on your results, we recommend consulting these specialized cardiac centers:"
            }
        }
    }

    /// Closing advice under the hospital list
    pub fn advice(self) -> &'static str {
        match self {
            RiskLevel::Low => "Regular checkups help maintain heart health",
            RiskLevel::Elevated => "Please consult a cardiologist within the next 48 hours",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "LOW"),
            RiskLevel::Elevated => write!(f, "ELEVATED"),
        }
    }
}

/// Answer of `cardio/predict/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Human-readable verdict, shown verbatim
    pub text: String,
    /// Level reported by the predictor, when it sends one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reported_level: Option<RiskLevel>,
}

impl Prediction {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            reported_level: None,
        }
    }

    /// Reported level if present, otherwise inferred from the text
    pub fn level(&self) -> RiskLevel {
        self.reported_level
            .unwrap_or_else(|| RiskLevel::infer(&self.text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_from_text() {
        assert_eq!(
            RiskLevel::infer("Heart disease is not likely."),
            RiskLevel::Low
        );
        assert_eq!(
            RiskLevel::infer("Heart disease is Not Likely"),
            RiskLevel::Low
        );
        assert_eq!(
            RiskLevel::infer("Heart disease is likely. Please consult a doctor."),
            RiskLevel::Elevated
        );
        assert_eq!(RiskLevel::infer(""), RiskLevel::Elevated);
    }

    #[test]
    fn test_reported_level_wins() {
        let prediction = Prediction {
            text: "Heart disease is not likely".to_string(),
            reported_level: Some(RiskLevel::Elevated),
        };
        assert_eq!(prediction.level(), RiskLevel::Elevated);

        let prediction = Prediction::from_text("Heart disease is not likely");
        assert_eq!(prediction.level(), RiskLevel::Low);
    }

    #[test]
    fn test_from_label() {
        assert_eq!(RiskLevel::from_label("HIGH"), Some(RiskLevel::Elevated));
        assert_eq!(RiskLevel::from_label(" low "), Some(RiskLevel::Low));
        assert_eq!(RiskLevel::from_label("unknown"), None);
    }

    #[test]
    fn test_copy_depends_on_level() {
        assert!(RiskLevel::Elevated.is_elevated());
        assert_eq!(
            RiskLevel::Low.hospitals_heading(),
            "Cardiac Health Resources"
        );
        assert_eq!(
            RiskLevel::Elevated.advice(),
            "Please consult a cardiologist within the next 48 hours"
        );
    }
}
