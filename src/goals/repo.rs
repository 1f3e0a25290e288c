use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::dto::{GoalsPatch, Macros};

#[derive(Debug, FromRow)]
struct GoalsRow {
    goal_cal: Option<f64>,
    goal_protein: Option<f64>,
    goal_carbs: Option<f64>,
    goal_fat: Option<f64>,
}

impl From<GoalsRow> for Macros {
    fn from(row: GoalsRow) -> Self {
        // Unset columns read as zero targets.
        Macros {
            cal: row.goal_cal.unwrap_or(0.0),
            protein: row.goal_protein.unwrap_or(0.0),
            carbs: row.goal_carbs.unwrap_or(0.0),
            fat: row.goal_fat.unwrap_or(0.0),
        }
    }
}

/// Current goal values for the user; `None` when no such user exists.
pub async fn get(db: &PgPool, user_id: Uuid) -> anyhow::Result<Option<Macros>> {
    let row = sqlx::query_as::<_, GoalsRow>(
        r#"
        SELECT goal_cal, goal_protein, goal_carbs, goal_fat
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await?;
    Ok(row.map(Macros::from))
}

/// Overwrites exactly the fields present in the patch, as a single
/// field-level update. Returns false when the user row does not exist.
pub async fn patch(db: &PgPool, user_id: Uuid, patch: &GoalsPatch) -> anyhow::Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE users SET
            goal_cal = COALESCE($2, goal_cal),
            goal_protein = COALESCE($3, goal_protein),
            goal_carbs = COALESCE($4, goal_carbs),
            goal_fat = COALESCE($5, goal_fat)
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .bind(patch.cal)
    .bind(patch.protein)
    .bind(patch.carbs)
    .bind(patch.fat)
    .execute(db)
    .await?;
    Ok(result.rows_affected() > 0)
}
