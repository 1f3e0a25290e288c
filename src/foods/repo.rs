use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::dto::CreateFoodRequest;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Food {
    pub id: Uuid,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub tags: Vec<String>,
}

/// Case-insensitive existence check, mirroring the catalog's uniqueness
/// policy ("PB" and "pb" are the same food).
pub async fn exists_by_name(db: &PgPool, name: &str) -> anyhow::Result<bool> {
    let row: Option<(Uuid,)> =
        sqlx::query_as(r#"SELECT id FROM foods WHERE lower(name) = lower($1)"#)
            .bind(name)
            .fetch_optional(db)
            .await?;
    Ok(row.is_some())
}

pub async fn create(db: &PgPool, food: &CreateFoodRequest) -> anyhow::Result<Food> {
    let row = sqlx::query_as::<_, Food>(
        r#"
        INSERT INTO foods (name, calories, protein, fat, carbs, tags)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, calories, protein, fat, carbs, tags
        "#,
    )
    .bind(&food.name)
    .bind(food.calories)
    .bind(food.protein)
    .bind(food.fat)
    .bind(food.carbs)
    .bind(&food.tags)
    .fetch_one(db)
    .await?;
    Ok(row)
}

pub async fn search_by_name(db: &PgPool, term: &str, limit: i64) -> anyhow::Result<Vec<Food>> {
    let rows = sqlx::query_as::<_, Food>(
        r#"
        SELECT id, name, calories, protein, fat, carbs, tags
        FROM foods
        WHERE name ILIKE $1
        ORDER BY name
        LIMIT $2
        "#,
    )
    .bind(format!("%{}%", term))
    .bind(limit)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

/// Matches foods whose tag list contains any of the given terms,
/// case-insensitively.
pub async fn search_by_tags(db: &PgPool, terms: &[String], limit: i64) -> anyhow::Result<Vec<Food>> {
    let patterns: Vec<String> = terms.iter().map(|t| format!("%{}%", t)).collect();
    let rows = sqlx::query_as::<_, Food>(
        r#"
        SELECT id, name, calories, protein, fat, carbs, tags
        FROM foods
        WHERE EXISTS (
            SELECT 1 FROM unnest(tags) AS tag
            WHERE tag ILIKE ANY($1)
        )
        ORDER BY name
        LIMIT $2
        "#,
    )
    .bind(&patterns)
    .bind(limit)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Food>> {
    let row = sqlx::query_as::<_, Food>(
        r#"
        SELECT id, name, calories, protein, fat, carbs, tags
        FROM foods
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(row)
}
