//! Row data model

mod path;
mod record;
mod row;
mod value;

pub use path::FieldPath;
pub use record::Record;
pub use row::Row;
pub use value::Value;
