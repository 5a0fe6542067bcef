//! Defensive extraction and coercion over an untyped record tree.
//!
//! Nothing in here fails. A value that cannot be read is either absent
//! (`None`) or coerced to zero, depending on what the caller asked for.

use crate::Seat;

use serde_json::Value;

/// One logical field and the JSON pointers it has been observed under, in
/// priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath {
    pub name: &'static str,
    pub pointers: &'static [&'static str],
}

impl FieldPath {
    #[must_use]
    pub const fn new(name: &'static str, pointers: &'static [&'static str]) -> Self {
        Self { name, pointers }
    }

    #[inline]
    #[must_use]
    pub fn first_present<'a>(&self, record: &'a Value) -> Option<&'a Value> {
        first_present(record, self.pointers)
    }

    /// Whether any of the candidates holds literal `true`.
    #[inline]
    #[must_use]
    pub fn any_true(&self, record: &Value) -> bool {
        self.pointers
            .iter()
            .any(|p| record.pointer(p).and_then(Value::as_bool) == Some(true))
    }
}

/// Tries each pointer in order and returns the first value that is present
/// and not `null`.
#[must_use]
pub fn first_present<'a>(record: &'a Value, pointers: &[&str]) -> Option<&'a Value> {
    pointers
        .iter()
        .filter_map(|p| record.pointer(p))
        .find(|v| !v.is_null())
}

/// Reads a number, or a string holding one. Floats are truncated and
/// out-of-range values saturate.
#[must_use]
pub fn as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|v| i64::try_from(v).unwrap_or(i64::MAX)))
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(|f| f as i64)
            })
        }
        _ => None,
    }
}

#[inline]
#[must_use]
pub fn as_i32(value: &Value) -> Option<i32> {
    as_i64(value).map(|v| v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

/// Reads a non-negative count such as honba, saturating at `u8::MAX`.
#[inline]
#[must_use]
pub fn as_count(value: &Value) -> Option<u8> {
    as_i64(value).map(|v| v.clamp(0, i64::from(u8::MAX)) as u8)
}

/// Only integral JSON numbers within 0..=3 are seats.
#[inline]
#[must_use]
pub fn as_seat(value: &Value) -> Option<Seat> {
    value.as_u64().and_then(Seat::new)
}

#[inline]
#[must_use]
pub fn as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Coerces anything into a 4-seat score vector.
///
/// Non-array input gives all zeros, short arrays are zero-padded, long ones
/// are truncated, and non-numeric elements become 0.
#[must_use]
pub fn normalize_score_vector(raw: &Value) -> [i32; 4] {
    let mut ret = [0; 4];
    if let Value::Array(items) = raw {
        for (slot, item) in ret.iter_mut().zip(items) {
            *slot = as_i32(item).unwrap_or(0);
        }
    }
    ret
}

/// Like [`normalize_score_vector`], but only accepts arrays with exactly four
/// entries.
#[must_use]
pub fn score_vector_exact(raw: &Value) -> Option<[i32; 4]> {
    match raw {
        Value::Array(items) if items.len() == 4 => Some(normalize_score_vector(raw)),
        _ => None,
    }
}

/// Element-wise `base + deltas`.
#[inline]
#[must_use]
pub fn apply_deltas(base: &[i32; 4], deltas: &[i32; 4]) -> [i32; 4] {
    let mut ret = *base;
    for (score, delta) in ret.iter_mut().zip(deltas) {
        *score = score.saturating_add(*delta);
    }
    ret
}
