//! Single-record CSV serialization.
//!
//! Converts a [`Record`] into a CSV document of one optional header line and
//! exactly one data line, and back. Column order is the record's catalog
//! order: member names sorted byte-wise.
//!
//! # Example
//!
//! ```ignore
//! use flat_derive::Record;
//!
//! #[derive(Debug, Default, PartialEq, Record)]
//! struct Person {
//!     #[record(rename = "Name")]
//!     name: String,
//!     #[record(rename = "Age")]
//!     age: i32,
//! }
//!
//! let person = Person { name: "A,B".into(), age: 30 };
//! let text = csv_record::serialize(&person);
//! assert_eq!(text, "Age,Name\n30,\"A,B\"\n");
//! assert_eq!(csv_record::deserialize::<Person>(&text).unwrap(), person);
//! ```

pub mod codec;
pub mod error;
pub mod line;

pub use codec::{header, CsvRecordCodec, LINE_TERMINATOR};
pub use error::CsvRecordError;
pub use line::{parse_line, split_lines};

use flat_core::Record;

/// Serialize `record` with a header line.
pub fn serialize<T: Record>(record: &T) -> String {
    CsvRecordCodec::new().serialize(record)
}

/// Serialize `record`, writing the header line only if `include_header`.
pub fn serialize_with_header<T: Record>(record: &T, include_header: bool) -> String {
    CsvRecordCodec::new()
        .with_header(include_header)
        .serialize(record)
}

/// Deserialize a record from CSV text.
pub fn deserialize<T: Record>(text: &str) -> Result<T, CsvRecordError> {
    CsvRecordCodec::new().deserialize(text)
}

/// Serialize a possibly absent record.
///
/// Fails with [`CsvRecordError::NullArgument`] if `record` is `None`.
pub fn try_serialize<T: Record>(
    record: Option<&T>,
    include_header: bool,
) -> Result<String, CsvRecordError> {
    let record = record.ok_or(CsvRecordError::NullArgument("value"))?;
    Ok(serialize_with_header(record, include_header))
}

/// Deserialize from possibly absent text.
///
/// Fails with [`CsvRecordError::NullArgument`] if `text` is `None`.
pub fn try_deserialize<T: Record>(text: Option<&str>) -> Result<T, CsvRecordError> {
    let text = text.ok_or(CsvRecordError::NullArgument("text"))?;
    deserialize(text)
}
