//! Row trait

use std::borrow::Cow;

use super::FieldPath;
use super::Record;
use super::Value;

/// Read access to the fields a table sorts by.
///
/// This is the only thing the sorting core needs from application data.
/// Implement it for your own row types by mapping paths to values; absent
/// fields return `None` and are treated the same as [`Value::Null`].
///
/// # Example
///
/// ```
/// use std::borrow::Cow;
/// use advtable_lib::model::{FieldPath, Row, Value};
///
/// struct User {
///     name: String,
///     age: u32,
/// }
///
/// impl Row for User {
///     fn field(&self, path: &FieldPath) -> Option<Cow<'_, Value>> {
///         match path.as_str() {
///             "name" => Some(Cow::Owned(Value::from(self.name.as_str()))),
///             "age" => Some(Cow::Owned(Value::from(self.age as i64))),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Row {
    /// Returns the value at `path`, or `None` if the row has no such field.
    fn field(&self, path: &FieldPath) -> Option<Cow<'_, Value>>;
}

impl Row for Record {
    fn field(&self, path: &FieldPath) -> Option<Cow<'_, Value>> {
        self.get_path(path).map(Cow::Borrowed)
    }
}

impl Row for serde_json::Value {
    fn field(&self, path: &FieldPath) -> Option<Cow<'_, Value>> {
        let mut current = self;
        for segment in path.segments() {
            current = match current {
                serde_json::Value::Object(map) => map.get(segment)?,
                serde_json::Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(Cow::Owned(Value::from(current.clone())))
    }
}

impl<R: Row + ?Sized> Row for &R {
    fn field(&self, path: &FieldPath) -> Option<Cow<'_, Value>> {
        (**self).field(path)
    }
}
