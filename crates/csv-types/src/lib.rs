//! Flattened CSV value conversions for flat-core types.
//!
//! This crate provides bidirectional conversions between flat-core's
//! `FieldValue` and the string stored in a single CSV field.
//!
//! # Modules
//!
//! - [`forward`] - FieldValue → flattened string, field escaping
//! - [`reverse`] - flattened string + ValueKind → FieldValue
//!
//! # Example
//!
//! ```
//! use csv_types::{csv_string_to_field_value, CsvValue};
//! use flat_core::{FieldValue, ValueKind};
//!
//! // Forward: FieldValue → CSV string
//! let tags = FieldValue::Array(vec![FieldValue::text("x"), FieldValue::text("y")]);
//! assert_eq!(CsvValue::from(tags).as_str(), "x;y");
//!
//! // Reverse: CSV string → FieldValue
//! let value = csv_string_to_field_value("42", &ValueKind::Int32).unwrap();
//! assert_eq!(value, FieldValue::Int32(42));
//! ```

pub mod forward;
pub mod reverse;

pub use forward::CsvValue;
pub use forward::{
    escape_csv, field_values_to_csv_line, strings_to_csv_line, to_flat, ARRAY_SEPARATOR,
};
pub use reverse::csv_string_to_field_value;
