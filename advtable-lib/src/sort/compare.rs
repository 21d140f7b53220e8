//! Per-pair value comparison policy.

use std::cmp::Ordering;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::Direction;
use super::collate;
use crate::model::Value;

/// Compares two field values for ordering rows in `direction`.
///
/// Rules, first match wins:
///
/// 1. Absent and null values sort after present ones in both directions; two
///    absent values are equal.
/// 2. NaN floats sort after every other present value and before nulls, in
///    both directions.
/// 3. Two date-times compare by instant.
/// 4. Two numbers compare numerically.
/// 5. Two booleans put `true` first when ascending.
/// 6. Everything else, including mixed types, compares as text via [`collate`].
///
/// Rules 3-6 are reversed for [`Direction::Desc`].
pub fn compare_values(a: Option<&Value>, b: Option<&Value>, direction: Direction) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());

    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => match (is_nan(a), is_nan(b)) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                let ordering = compare_present(a, b);
                match direction {
                    Direction::Asc => ordering,
                    Direction::Desc => ordering.reverse(),
                }
            }
        },
    }
}

fn is_nan(value: &Value) -> bool {
    matches!(value, Value::Float(n) if n.is_nan())
}

fn compare_present(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::DateTime(x), Value::DateTime(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => y.cmp(x),
        _ => match (Number::of(a), Number::of(b)) {
            (Some(x), Some(y)) => x.compare(y),
            _ => collate(&a.to_text(), &b.to_text()),
        },
    }
}

/// Numeric view of a value.
#[derive(Clone, Copy)]
enum Number {
    Int(i64),
    Float(f64),
    Decimal(Decimal),
}

impl Number {
    fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Int(n) => Some(Number::Int(*n)),
            Value::Float(n) => Some(Number::Float(*n)),
            Value::Decimal(d) => Some(Number::Decimal(*d)),
            _ => None,
        }
    }

    fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(n) => n,
            Number::Decimal(d) => d.to_f64().unwrap_or(f64::NAN),
        }
    }

    fn compare(self, other: Number) -> Ordering {
        match (self, other) {
            (Number::Int(x), Number::Int(y)) => x.cmp(&y),
            (Number::Decimal(x), Number::Decimal(y)) => x.cmp(&y),
            (Number::Int(x), Number::Decimal(y)) => Decimal::from(x).cmp(&y),
            (Number::Decimal(x), Number::Int(y)) => x.cmp(&Decimal::from(y)),
            _ => compare_floats(self.as_f64(), other.as_f64()),
        }
    }
}

// Keeps the order total should a NaN get here.
fn compare_floats(x: f64, y: f64) -> Ordering {
    match (x.is_nan(), y.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
    }
}
