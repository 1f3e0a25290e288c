use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::coerce;
use crate::goals::dto::Macros;

use super::repo::LogEntry;

/// Raw entry-creation payload.
///
/// Numeric fields arrive as numbers, numeric strings, or empty strings
/// depending on the client; they are kept as raw JSON values here and
/// normalized in one place. A malformed field never rejects the request.
#[derive(Debug, Default, Deserialize)]
pub struct CreateEntryRequest {
    #[serde(default, rename = "foodId")]
    pub food_id: Value,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cal: Value,
    #[serde(default)]
    pub protein: Value,
    #[serde(default)]
    pub carbs: Value,
    #[serde(default)]
    pub fat: Value,
    #[serde(default)]
    pub qty: Value,
    #[serde(default)]
    pub servings: Value,
}

/// Normalized, fully-typed entry ready for storage.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub food_id: Option<Uuid>,
    pub name: String,
    pub cal: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub qty: f64,
    pub servings: f64,
}

impl CreateEntryRequest {
    /// Coerces every field to its typed form. Servings fold into qty here so
    /// the stored quantity is the single authoritative scaling factor;
    /// servings is kept alongside for display.
    pub fn normalize(self) -> NewEntry {
        let qty = coerce::factor_or_one(Some(&self.qty));
        let servings = coerce::factor_or_one(Some(&self.servings));
        NewEntry {
            food_id: match &self.food_id {
                Value::String(s) => s.trim().parse().ok(),
                _ => None,
            },
            name: self.name.unwrap_or_default(),
            cal: coerce::num_or_zero(Some(&self.cal)),
            protein: coerce::num_or_zero(Some(&self.protein)),
            carbs: coerce::num_or_zero(Some(&self.carbs)),
            fat: coerce::num_or_zero(Some(&self.fat)),
            qty: qty * servings,
            servings,
        }
    }
}

/// Point-in-time view of a user's day: entries newest-first, quantity-scaled
/// totals, the goal snapshot, and what is left of each goal.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayResponse {
    pub date_key: String,
    pub entries: Vec<LogEntry>,
    pub totals: Macros,
    pub goals: Macros,
    pub remaining: Macros,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> CreateEntryRequest {
        serde_json::from_value(body).expect("deserialize request")
    }

    #[test]
    fn empty_strings_coerce_to_defaults() {
        let entry = request(json!({"name": "oatmeal", "cal": "", "qty": ""})).normalize();
        assert_eq!(entry.cal, 0.0);
        assert_eq!(entry.qty, 1.0);
        assert_eq!(entry.servings, 1.0);
    }

    #[test]
    fn missing_fields_coerce_to_defaults() {
        let entry = request(json!({})).normalize();
        assert_eq!(entry.name, "");
        assert_eq!(entry.cal, 0.0);
        assert_eq!(entry.protein, 0.0);
        assert_eq!(entry.qty, 1.0);
        assert!(entry.food_id.is_none());
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let entry = request(json!({"cal": "250", "protein": "12.5", "qty": "2"})).normalize();
        assert_eq!(entry.cal, 250.0);
        assert_eq!(entry.protein, 12.5);
        assert_eq!(entry.qty, 2.0);
    }

    #[test]
    fn servings_fold_into_qty() {
        // A recipe logged as 3 servings scales totals without a second factor.
        let entry = request(json!({"cal": 400, "qty": 1, "servings": 3})).normalize();
        assert_eq!(entry.qty, 3.0);
        assert_eq!(entry.servings, 3.0);

        let entry = request(json!({"cal": 400, "qty": 2, "servings": 3})).normalize();
        assert_eq!(entry.qty, 6.0);
    }

    #[test]
    fn malformed_food_id_is_dropped() {
        let entry = request(json!({"foodId": "not-a-uuid"})).normalize();
        assert!(entry.food_id.is_none());

        let id = Uuid::new_v4();
        let entry = request(json!({"foodId": id.to_string()})).normalize();
        assert_eq!(entry.food_id, Some(id));
    }
}
