use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// A shareable recipe. Its macro values are per serving; logging a recipe is
/// a normal log write carrying these values plus a servings count.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Recipe {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub directions: Vec<String>,
    pub servings: i32,
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub creator_id: Option<Uuid>,
}

pub async fn list(db: &PgPool) -> anyhow::Result<Vec<Recipe>> {
    let rows = sqlx::query_as::<_, Recipe>(
        r#"
        SELECT id, name, description, ingredients, directions, servings,
               calories, protein, fat, carbs, creator_id
        FROM recipes
        ORDER BY name
        "#,
    )
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Recipe>> {
    let row = sqlx::query_as::<_, Recipe>(
        r#"
        SELECT id, name, description, ingredients, directions, servings,
               calories, protein, fat, carbs, creator_id
        FROM recipes
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(row)
}
