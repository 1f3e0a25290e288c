use sqlx::PgPool;
use uuid::Uuid;

use crate::foods::repo::Food;

pub async fn list(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Food>> {
    let rows = sqlx::query_as::<_, Food>(
        r#"
        SELECT f.id, f.name, f.calories, f.protein, f.fat, f.carbs, f.tags
        FROM saved_foods s
        JOIN foods f ON f.id = s.food_id
        WHERE s.user_id = $1
        ORDER BY f.name
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

/// Idempotent: saving an already-saved food is a no-op.
pub async fn add(db: &PgPool, user_id: Uuid, food_id: Uuid) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO saved_foods (user_id, food_id)
        VALUES ($1, $2)
        ON CONFLICT DO NOTHING
        "#,
    )
    .bind(user_id)
    .bind(food_id)
    .execute(db)
    .await?;
    Ok(())
}

pub async fn remove(db: &PgPool, user_id: Uuid, food_id: Uuid) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        DELETE FROM saved_foods
        WHERE user_id = $1 AND food_id = $2
        "#,
    )
    .bind(user_id)
    .bind(food_id)
    .execute(db)
    .await?;
    Ok(())
}
