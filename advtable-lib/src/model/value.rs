//! Value enum for dynamic field values

use chrono::DateTime;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::Record;

/// A dynamic value held by a table cell.
///
/// Rows are not required to be type-homogeneous per column, so the sorting
/// core works on this enum rather than on a concrete field type.
///
/// # Type Mapping
///
/// | JSON | Rust Variant |
/// |------|--------------|
/// | null | `Null` |
/// | true/false | `Bool` |
/// | integer fitting `i64` | `Int` |
/// | any other number | `Float` |
/// | string | `String` |
/// | object | `Record` |
/// | array | `List` |
///
/// `Decimal`, `DateTime` and `Guid` have no JSON counterpart and are only
/// produced from Rust values.
///
/// # Example
///
/// ```
/// use advtable_lib::model::Value;
///
/// let name = Value::from("Contoso");
/// let revenue = Value::from(1_000_000i64);
/// let active = Value::from(true);
/// let empty = Value::Null;
/// assert!(revenue.is_numeric());
/// assert!(!name.is_numeric());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, serde::Deserialize)]
#[serde(untagged, from = "serde_json::Value")]
pub enum Value {
    /// Null/empty value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Arbitrary precision decimal.
    Decimal(Decimal),
    /// String value.
    String(String),
    /// Date and time instant.
    DateTime(DateTime<Utc>),
    /// GUID/UUID value.
    Guid(Uuid),
    /// Nested record.
    Record(Box<Record>),
    /// List of values.
    List(Vec<Value>),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` for numbers that are not NaN.
    pub fn is_numeric(&self) -> bool {
        match self {
            Value::Int(_) | Value::Decimal(_) => true,
            Value::Float(f) => !f.is_nan(),
            _ => false,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::String(_) => "string",
            Value::DateTime(_) => "datetime",
            Value::Guid(_) => "guid",
            Value::Record(_) => "record",
            Value::List(_) => "list",
        }
    }

    /// Coerces the value to display text.
    ///
    /// Null becomes the empty string, records and lists become compact JSON.
    pub fn to_text(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(n) => n.to_string(),
            Value::Decimal(d) => d.to_string(),
            Value::String(s) => s.clone(),
            Value::DateTime(dt) => dt.to_rfc3339(),
            Value::Guid(g) => g.to_string(),
            Value::Record(_) | Value::List(_) => serde_json::to_string(self).unwrap_or_default(),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text())
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Guid(v)
    }
}

impl From<Record> for Value {
    fn from(v: Record) -> Self {
        Value::Record(Box::new(v))
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                // u64 beyond i64::MAX and fractional numbers
                None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Record(Box::new(Record::from(map))),
        }
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_is_numeric() {
        assert!(Value::from(3).is_numeric());
        assert!(Value::from(2.5).is_numeric());
        assert!(Value::from(Decimal::new(1999, 2)).is_numeric());
        assert!(!Value::from(f64::NAN).is_numeric());
        assert!(!Value::from("3").is_numeric());
        assert!(!Value::from(true).is_numeric());
        assert!(!Value::Null.is_numeric());
    }

    #[test]
    fn test_from_json_numbers() {
        assert_eq!(Value::from(json!(42)), Value::Int(42));
        assert_eq!(Value::from(json!(-7)), Value::Int(-7));
        assert_eq!(Value::from(json!(1.5)), Value::Float(1.5));
        assert_eq!(
            Value::from(json!(u64::MAX)),
            Value::Float(u64::MAX as f64)
        );
    }

    #[test]
    fn test_from_json_nested() {
        let value = Value::from(json!({"owner": {"name": "Ada"}, "tags": ["a", null]}));
        let Value::Record(record) = value else {
            panic!("expected record");
        };
        assert_eq!(
            record.get("tags"),
            Some(&Value::List(vec![Value::from("a"), Value::Null]))
        );
        assert!(matches!(record.get("owner"), Some(Value::Record(_))));
    }

    #[test]
    fn test_deserialize_goes_through_json() {
        let value: Value = serde_json::from_str(r#"{"n": 3}"#).unwrap();
        assert!(matches!(value, Value::Record(_)));
    }

    #[test]
    fn test_to_text() {
        assert_eq!(Value::Null.to_text(), "");
        assert_eq!(Value::from(false).to_text(), "false");
        assert_eq!(Value::from(12).to_text(), "12");
        assert_eq!(Value::from(Decimal::new(1050, 2)).to_text(), "10.50");
        assert_eq!(
            Value::List(vec![Value::from(1), Value::from("x")]).to_text(),
            r#"[1,"x"]"#
        );
        let record = Record::new().set("a", 1);
        assert_eq!(Value::from(record).to_text(), r#"{"a":1}"#);
    }

    #[test]
    fn test_option_into_value() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
        assert_eq!(Value::default(), Value::Null);
    }
}
