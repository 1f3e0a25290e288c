use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use tracing::debug;
use uuid::Uuid;

use super::dto::NewEntry;

/// One logged eating event. Entries are immutable once written: the day key
/// is assigned at creation from the reference-timezone clock and never
/// recomputed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "dateKey")]
    pub day_key: String,
    pub food_id: Option<Uuid>,
    pub name: String,
    pub cal: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub qty: f64,
    pub servings: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

pub async fn create(
    db: &PgPool,
    user_id: Uuid,
    day_key: &str,
    entry: &NewEntry,
) -> anyhow::Result<LogEntry> {
    let row = sqlx::query_as::<_, LogEntry>(
        r#"
        INSERT INTO log_entries
            (id, user_id, day_key, food_id, name, cal, protein, carbs, fat, qty, servings)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING id, user_id, day_key, food_id, name,
                  cal, protein, carbs, fat, qty, servings, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(day_key)
    .bind(entry.food_id)
    .bind(&entry.name)
    .bind(entry.cal)
    .bind(entry.protein)
    .bind(entry.carbs)
    .bind(entry.fat)
    .bind(entry.qty)
    .bind(entry.servings)
    .fetch_one(db)
    .await?;
    Ok(row)
}

pub async fn list_for_day(
    db: &PgPool,
    user_id: Uuid,
    day_key: &str,
) -> anyhow::Result<Vec<LogEntry>> {
    let rows = sqlx::query_as::<_, LogEntry>(
        r#"
        SELECT id, user_id, day_key, food_id, name,
               cal, protein, carbs, fat, qty, servings, created_at
        FROM log_entries
        WHERE user_id = $1 AND day_key = $2
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .bind(day_key)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

/// Deletes the entry only when it belongs to `user_id`. A miss (unknown id or
/// someone else's entry) is a silent no-op so existence is never leaked.
pub async fn delete_one(db: &PgPool, user_id: Uuid, entry_id: Uuid) -> anyhow::Result<()> {
    let result = sqlx::query(
        r#"
        DELETE FROM log_entries
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(entry_id)
    .bind(user_id)
    .execute(db)
    .await?;
    debug!(
        user_id = %user_id,
        entry_id = %entry_id,
        deleted = result.rows_affected(),
        "delete log entry"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn entry_serializes_with_legacy_field_names() {
        let entry = LogEntry {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            day_key: "2025-10-19".into(),
            food_id: None,
            name: "banana".into(),
            cal: 105.0,
            protein: 1.3,
            carbs: 27.0,
            fat: 0.4,
            qty: 1.0,
            servings: 1.0,
            created_at: datetime!(2025-10-19 17:30 UTC),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["dateKey"], "2025-10-19");
        assert_eq!(json["userId"], entry.user_id.to_string());
        assert!(json["createdAt"].as_str().unwrap().starts_with("2025-10-19T17:30"));
    }
}
