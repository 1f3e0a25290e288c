//! Soft numeric coercion for legacy request payloads.
//!
//! The historical clients send macro fields as numbers, numeric strings, or
//! empty strings interchangeably. Entry creation must accept all of these
//! rather than reject, so handlers normalize through this adapter once at the
//! boundary and work with typed values everywhere else.

use serde_json::Value;

/// Best-effort numeric read: numbers pass through, numeric strings parse,
/// everything else (null, empty string, garbage, non-finite) is `None`.
pub fn num(v: Option<&Value>) -> Option<f64> {
    match v? {
        Value::Number(n) => n.as_f64().filter(|n| n.is_finite()),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            s.parse::<f64>().ok().filter(|n| n.is_finite())
        }
        _ => None,
    }
}

/// Macro fields: missing or malformed values become 0.
pub fn num_or_zero(v: Option<&Value>) -> f64 {
    num(v).unwrap_or(0.0)
}

/// Scaling factors (qty, servings): missing, malformed, or non-positive
/// values become 1 so they never zero out or negate a total.
pub fn factor_or_one(v: Option<&Value>) -> f64 {
    match num(v) {
        Some(n) if n > 0.0 => n,
        _ => 1.0,
    }
}
