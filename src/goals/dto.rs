use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::coerce;

/// The four-macro shape shared by goals, daily totals and remaining
/// allowances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub cal: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

#[derive(Debug, Serialize)]
pub struct GoalsResponse {
    pub goals: Macros,
}

/// Partial goal update parsed from a request body.
///
/// Legacy clients send either `{cal, protein, carbs, fat}` or the same fields
/// nested under `goals`. Fields that are absent, non-numeric, or negative are
/// ignored so a strict subset can be patched without disturbing the rest.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GoalsPatch {
    pub cal: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
}

impl GoalsPatch {
    pub fn from_body(body: &Value) -> Self {
        let src = body.get("goals").filter(|v| v.is_object()).unwrap_or(body);
        let field = |key: &str| coerce::num(src.get(key)).filter(|n| *n >= 0.0);
        Self {
            cal: field("cal"),
            protein: field("protein"),
            carbs: field("carbs"),
            fat: field("fat"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cal.is_none() && self.protein.is_none() && self.carbs.is_none() && self.fat.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_flat_body() {
        let patch = GoalsPatch::from_body(&json!({"cal": 1800, "protein": "150"}));
        assert_eq!(patch.cal, Some(1800.0));
        assert_eq!(patch.protein, Some(150.0));
        assert_eq!(patch.carbs, None);
        assert_eq!(patch.fat, None);
    }

    #[test]
    fn parses_nested_goals_body() {
        let patch = GoalsPatch::from_body(&json!({"goals": {"fat": 70}}));
        assert_eq!(patch.fat, Some(70.0));
        assert!(patch.cal.is_none());
    }

    #[test]
    fn ignores_invalid_fields() {
        let patch = GoalsPatch::from_body(&json!({"cal": "", "protein": "abc", "carbs": -5}));
        assert!(patch.is_empty());
    }

    #[test]
    fn zero_is_a_valid_target() {
        let patch = GoalsPatch::from_body(&json!({"cal": 0}));
        assert_eq!(patch.cal, Some(0.0));
        assert!(!patch.is_empty());
    }
}
