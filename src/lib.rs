//! flatcsv Library
//!
//! Converts plain-data structs into a single CSV record and back, driven by
//! per-type member tables generated with `#[derive(Record)]`.
//!
//! # Features
//!
//! - Derived member tables: fields and getter/setter properties, ordered by name
//! - Process-wide member catalog: tables are built once per type
//! - Value kinds: strings, integers, floats, booleans, enums, arrays, options
//! - Self-contained CSV grammar: quoting, quote doubling, embedded newlines
//!
//! # Example
//!
//! ```
//! use flatcsv::{FlatEnum, Record};
//!
//! #[derive(Debug, Default, PartialEq, FlatEnum)]
//! #[record(crate = "flatcsv::flat_core")]
//! enum Level {
//!     #[default]
//!     Low,
//!     High,
//! }
//!
//! #[derive(Debug, Default, PartialEq, Record)]
//! #[record(crate = "flatcsv::flat_core")]
//! struct Reading {
//!     sensor: String,
//!     values: Vec<i32>,
//!     level: Level,
//! }
//!
//! let reading = Reading {
//!     sensor: "t-1".to_string(),
//!     values: vec![3, 4],
//!     level: Level::High,
//! };
//! let text = flatcsv::serialize(&reading);
//! assert_eq!(text.lines().next(), Some("level,sensor,values"));
//! assert_eq!(flatcsv::deserialize::<Reading>(&text).unwrap(), reading);
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! # Time the CSV codec against serde_json
//! flatcsv bench --iterations 100000 --warmup 1000
//!
//! # Print the sample record
//! flatcsv sample
//! ```

pub mod bench;
pub mod config;

pub use csv_record::{
    deserialize, header, parse_line, serialize, serialize_with_header, split_lines,
    try_deserialize, try_serialize, CsvRecordCodec, CsvRecordError, LINE_TERMINATOR,
};
pub use csv_types::{csv_string_to_field_value, escape_csv, CsvValue};
pub use flat_core::{
    catalog, FieldValue, FlatField, MemberDescriptor, MemberSlot, Record, ValueError, ValueKind,
};
pub use flat_derive::{FlatEnum, Record};

// Re-exported so derives can be re-rooted with `#[record(crate = "flatcsv::flat_core")]`
pub use flat_core;
