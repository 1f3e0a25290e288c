use serde::Deserialize;

/// Catalog food creation payload. The legacy clients send capitalized field
/// names; the aliases keep that contract in one place.
#[derive(Debug, Deserialize)]
pub struct CreateFoodRequest {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(default, alias = "Calories")]
    pub calories: f64,
    #[serde(default, alias = "Protein")]
    pub protein: f64,
    #[serde(default, alias = "Fat")]
    pub fat: f64,
    #[serde(default, alias = "Carbs")]
    pub carbs: f64,
    #[serde(default, alias = "Tags")]
    pub tags: Vec<String>,
}

impl CreateFoodRequest {
    pub fn validate(&mut self) -> Result<(), &'static str> {
        self.name = self.name.trim().to_string();
        if self.name.len() < 2 || self.name.len() > 120 {
            return Err("Invalid data");
        }
        if [self.calories, self.protein, self.fat, self.carbs]
            .iter()
            .any(|v| !v.is_finite() || *v < 0.0)
        {
            return Err("Invalid data");
        }
        self.tags = self
            .tags
            .iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default = "default_by")]
    pub by: String,
    #[serde(default, rename = "userSearch")]
    pub user_search: String,
    pub limit: Option<i64>,
}

fn default_by() -> String {
    "name".into()
}

impl SearchParams {
    /// Result cap stays between 1 and 50, defaulting to 25.
    pub fn capped_limit(&self) -> i64 {
        self.limit.unwrap_or(25).clamp(1, 50)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_capitalized_legacy_fields() {
        let mut req: CreateFoodRequest = serde_json::from_value(json!({
            "Name": " Oatmeal ",
            "Calories": 150,
            "Protein": 5,
            "Tags": ["Breakfast", " grain "]
        }))
        .unwrap();
        req.validate().unwrap();
        assert_eq!(req.name, "Oatmeal");
        assert_eq!(req.calories, 150.0);
        assert_eq!(req.tags, vec!["breakfast", "grain"]);
    }

    #[test]
    fn rejects_short_names_and_negative_macros() {
        let mut req: CreateFoodRequest =
            serde_json::from_value(json!({"name": "x"})).unwrap();
        assert!(req.validate().is_err());

        let mut req: CreateFoodRequest =
            serde_json::from_value(json!({"name": "Ox", "calories": -10})).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn limit_is_clamped() {
        let params = SearchParams {
            by: "name".into(),
            user_search: "apple".into(),
            limit: Some(500),
        };
        assert_eq!(params.capped_limit(), 50);

        let params = SearchParams {
            by: "name".into(),
            user_search: "apple".into(),
            limit: None,
        };
        assert_eq!(params.capped_limit(), 25);

        let params = SearchParams {
            by: "name".into(),
            user_search: "apple".into(),
            limit: Some(0),
        };
        assert_eq!(params.capped_limit(), 1);
    }
}
