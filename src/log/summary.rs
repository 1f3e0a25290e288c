//! Daily aggregation: entries plus goals in, totals and remaining out.
//!
//! Pure over its inputs and recomputed on every read; nothing here is cached
//! or persisted. Totals can decrease when entries are deleted.

use crate::goals::dto::Macros;

use super::dto::TodayResponse;
use super::repo::LogEntry;

/// Sum of quantity-scaled macro contributions. Quantity defaults to 1 when a
/// stored value is unusable, matching write-side coercion.
pub fn totals(entries: &[LogEntry]) -> Macros {
    entries.iter().fold(Macros::default(), |acc, e| {
        let qty = if e.qty > 0.0 { e.qty } else { 1.0 };
        Macros {
            cal: acc.cal + e.cal * qty,
            protein: acc.protein + e.protein * qty,
            carbs: acc.carbs + e.carbs * qty,
            fat: acc.fat + e.fat * qty,
        }
    })
}

/// Goal minus total per macro, floored at zero. Exceeding a goal is only
/// observable by comparing totals to goals directly.
pub fn remaining(goals: Macros, totals: Macros) -> Macros {
    Macros {
        cal: (goals.cal - totals.cal).max(0.0),
        protein: (goals.protein - totals.protein).max(0.0),
        carbs: (goals.carbs - totals.carbs).max(0.0),
        fat: (goals.fat - totals.fat).max(0.0),
    }
}

pub fn build(day_key: String, entries: Vec<LogEntry>, goals: Macros) -> TodayResponse {
    let totals = totals(&entries);
    let remaining = remaining(goals, totals);
    TodayResponse {
        date_key: day_key,
        entries,
        totals,
        goals,
        remaining,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;
    use uuid::Uuid;

    fn entry(cal: f64, protein: f64, carbs: f64, fat: f64, qty: f64) -> LogEntry {
        LogEntry {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            day_key: "2025-10-19".into(),
            food_id: None,
            name: "test".into(),
            cal,
            protein,
            carbs,
            fat,
            qty,
            servings: 1.0,
            created_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn totals_scale_each_entry_by_quantity() {
        let entries = vec![entry(200.0, 10.0, 20.0, 5.0, 2.0), entry(100.0, 3.0, 7.0, 1.5, 1.0)];
        let t = totals(&entries);
        assert_eq!(t.cal, 500.0);
        assert_eq!(t.protein, 23.0);
        assert_eq!(t.carbs, 47.0);
        assert_eq!(t.fat, 11.5);
    }

    #[test]
    fn empty_day_totals_are_zero_and_remaining_equals_goals() {
        let goals = Macros {
            cal: 2000.0,
            protein: 150.0,
            carbs: 250.0,
            fat: 70.0,
        };
        let summary = build("2025-10-19".into(), vec![], goals);
        assert_eq!(summary.totals, Macros::default());
        assert_eq!(summary.remaining, goals);
        assert_eq!(summary.goals, goals);
        assert!(summary.entries.is_empty());
    }

    #[test]
    fn remaining_is_clamped_at_zero() {
        let goals = Macros {
            cal: 1000.0,
            ..Macros::default()
        };
        let t = totals(&[entry(600.0, 0.0, 0.0, 0.0, 2.0)]);
        assert_eq!(t.cal, 1200.0);
        let r = remaining(goals, t);
        assert_eq!(r.cal, 0.0);
        assert_eq!(r.protein, 0.0);
    }

    #[test]
    fn deleting_an_entry_lowers_totals_on_the_next_read() {
        let goals = Macros {
            cal: 1000.0,
            ..Macros::default()
        };
        let a = entry(200.0, 0.0, 0.0, 0.0, 2.0);
        let b = entry(100.0, 0.0, 0.0, 0.0, 1.0);

        let before = build("2025-10-19".into(), vec![a, b.clone()], goals);
        assert_eq!(before.totals.cal, 500.0);
        assert_eq!(before.remaining.cal, 500.0);

        let after = build("2025-10-19".into(), vec![b], goals);
        assert_eq!(after.totals.cal, 100.0);
        assert_eq!(after.remaining.cal, 900.0);
    }

    #[test]
    fn unusable_stored_quantity_counts_once() {
        let t = totals(&[entry(250.0, 0.0, 0.0, 0.0, 0.0)]);
        assert_eq!(t.cal, 250.0);
    }

    #[test]
    fn fractional_macros_accumulate() {
        let t = totals(&[entry(72.5, 2.25, 0.0, 0.0, 2.0)]);
        assert_eq!(t.cal, 145.0);
        assert_eq!(t.protein, 4.5);
    }
}
