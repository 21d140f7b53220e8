//! Dynamic row record

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::FieldPath;
use super::Value;

/// A dynamic record of named field values.
///
/// Records are the default row type for tables whose shape is only known at
/// runtime, such as rows loaded from JSON. Fields may hold nested records,
/// which are reached with dotted [`FieldPath`]s. Field order follows
/// insertion, which for JSON input is the order keys appear in the source.
///
/// # Example
///
/// ```
/// use advtable_lib::model::{FieldPath, Record, Value};
///
/// let record = Record::new()
///     .set("name", "Contoso")
///     .set("owner", Record::new().set("name", "Ada"));
///
/// assert_eq!(record.get("name"), Some(&Value::from("Contoso")));
/// assert_eq!(
///     record.get_path(&FieldPath::new("owner.name")),
///     Some(&Value::from("Ada"))
/// );
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "serde_json::Map<String, serde_json::Value>")]
pub struct Record {
    fields: BTreeMap<String, Value>,
    order: Vec<String>,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Follows a dotted path through nested records and lists.
    ///
    /// Returns `None` as soon as a step is missing or lands on a value that
    /// cannot be indexed.
    pub fn get_path(&self, path: &FieldPath) -> Option<&Value> {
        let mut segments = path.segments();
        let first = segments.next()?;
        let mut current = self.fields.get(first)?;
        for segment in segments {
            current = match current {
                Value::Record(record) => record.fields.get(segment)?,
                Value::List(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns the field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Returns the fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.order
            .iter()
            .filter_map(|key| self.fields.get_key_value(key))
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Returns a reference to all fields, keyed by name.
    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Inserts a field value. Replacing a field keeps its position.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        let field = field.into();
        if !self.fields.contains_key(&field) {
            self.order.push(field.clone());
        }
        self.fields.insert(field, value.into());
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        let value = self.fields.remove(field)?;
        self.order.retain(|key| key != field);
        Some(value)
    }
}

// Equality ignores field order.
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for Record {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        map.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record::new()
            .set("name", "Contoso")
            .set("revenue", 1200)
            .set(
                "owner",
                Record::new()
                    .set("name", "Ada")
                    .set("address", Record::new().set("city", "Ghent")),
            )
            .set("tags", vec![Value::from("vip"), Value::from("eu")])
            .set("parent", Value::Null)
    }

    #[test]
    fn test_get_top_level() {
        let record = sample();
        assert_eq!(record.get("revenue"), Some(&Value::Int(1200)));
        assert_eq!(record.get("missing"), None);
        assert!(record.contains("parent"));
    }

    #[test]
    fn test_get_path_nested() {
        let record = sample();
        assert_eq!(
            record.get_path(&FieldPath::new("owner.address.city")),
            Some(&Value::from("Ghent"))
        );
        assert_eq!(
            record.get_path(&FieldPath::new("tags.1")),
            Some(&Value::from("eu"))
        );
    }

    #[test]
    fn test_get_path_missing_steps() {
        let record = sample();
        assert_eq!(record.get_path(&FieldPath::new("owner.phone")), None);
        assert_eq!(record.get_path(&FieldPath::new("parent.name")), None);
        assert_eq!(record.get_path(&FieldPath::new("name.first")), None);
        assert_eq!(record.get_path(&FieldPath::new("tags.9")), None);
        assert_eq!(record.get_path(&FieldPath::new("tags.x")), None);
    }

    #[test]
    fn test_deserialize_from_json_object() {
        let record: Record = serde_json::from_str(r#"{"n": 3, "s": "x"}"#).unwrap();
        assert_eq!(record.get("n"), Some(&Value::Int(3)));
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["n", "s"]);
    }

    #[test]
    fn test_keys_follow_source_order() {
        let record: Record = serde_json::from_str(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"zeta":1,"alpha":2,"mid":3}"#
        );
    }

    #[test]
    fn test_insert_and_remove_keep_order() {
        let mut record = Record::new().set("b", 1).set("a", 2).set("c", 3);
        record.insert("b", 10);
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert_eq!(record.remove("a"), Some(Value::Int(2)));
        assert_eq!(record.remove("a"), None);
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["b", "c"]);
        assert_eq!(record, Record::new().set("c", 3).set("b", 10));
    }

    #[test]
    fn test_from_iterator() {
        let record: Record = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(record.len(), 2);
    }
}
