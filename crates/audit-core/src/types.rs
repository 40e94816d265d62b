//! Small domain value types shared by every layer

use serde::{Deserialize, Serialize};

/// Lowest value on the answer scale
pub const LIKERT_MIN: u8 = 0;
/// Highest value on the answer scale
pub const LIKERT_MAX: u8 = 5;

/// Label shown under the low end of the scale
pub const SCALE_LOW_LABEL: &str = "Never";
/// Label shown under the high end of the scale
pub const SCALE_HIGH_LABEL: &str = "Almost Always";

/// A single Likert answer, guaranteed to be within `0..=5`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct LikertValue(u8);

impl LikertValue {
    /// Create a value, returning `None` when outside the scale
    pub fn new(value: u8) -> Option<Self> {
        (LIKERT_MIN..=LIKERT_MAX)
            .contains(&value)
            .then_some(Self(value))
    }

    /// Map a digit key (`'0'`..=`'5'`) to a value
    pub fn from_digit(c: char) -> Option<Self> {
        c.to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .and_then(Self::new)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Every value on the scale, in ascending order
    pub fn all() -> impl Iterator<Item = LikertValue> {
        (LIKERT_MIN..=LIKERT_MAX).map(LikertValue)
    }
}

impl std::fmt::Display for LikertValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity of a scoring band, used for coloring results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Low,
    Moderate,
    High,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Moderate => write!(f, "moderate"),
            Severity::High => write!(f, "high"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// Top-level phase of the questionnaire flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowPhase {
    /// Headline and description, waiting for the user to start
    #[default]
    Intro,
    /// Questions are on screen and can be answered
    Assessment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_likert_value_accepts_scale() {
        for v in 0..=5 {
            assert_eq!(LikertValue::new(v).map(LikertValue::get), Some(v));
        }
    }

    #[test]
    fn test_likert_value_rejects_out_of_range() {
        assert_eq!(LikertValue::new(6), None);
        assert_eq!(LikertValue::new(u8::MAX), None);
    }

    #[test]
    fn test_likert_from_digit() {
        assert_eq!(LikertValue::from_digit('3'), LikertValue::new(3));
        assert_eq!(LikertValue::from_digit('0'), LikertValue::new(0));
        assert_eq!(LikertValue::from_digit('6'), None);
        assert_eq!(LikertValue::from_digit('x'), None);
    }

    #[test]
    fn test_likert_all_is_ascending_six_values() {
        let values: Vec<u8> = LikertValue::all().map(LikertValue::get).collect();
        assert_eq!(values, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_severity_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            severity: Severity,
        }
        let w: Wrapper = toml::from_str("severity = \"critical\"").unwrap();
        assert_eq!(w.severity, Severity::Critical);
    }

    #[test]
    fn test_flow_phase_defaults_to_intro() {
        assert_eq!(FlowPhase::default(), FlowPhase::Intro);
    }
}
