//! Core types for the flatcsv record codec.
//!
//! This crate provides the foundational types shared by the codec crates:
//!
//! - [`ValueKind`] - Semantic category of a member's declared type
//! - [`FieldValue`] - Dynamic value of a single member
//! - [`FlatField`] - Mapping between Rust types and `FieldValue`
//! - [`MemberDescriptor`] / [`Record`] - Per-type member tables
//! - [`catalog`] - Process-wide cache of ordered member tables
//!
//! # Architecture
//!
//! ```text
//! flat-core (this crate)
//!    │
//!    ├─── flat-derive   (generates Record / FlatField impls)
//!    ├─── csv-types     (FieldValue <-> flattened string)
//!    └─── csv-record    (record <-> CSV text)
//! ```
//!
//! # Example
//!
//! ```rust
//! use flat_core::{FieldValue, FlatField, ValueKind};
//!
//! let tags = vec!["x".to_string(), "y".to_string()];
//! assert_eq!(Vec::<String>::value_kind(), ValueKind::array(ValueKind::String));
//! assert_eq!(
//!     tags.to_field_value(),
//!     FieldValue::Array(vec![FieldValue::text("x"), FieldValue::text("y")])
//! );
//! ```

pub mod catalog;
pub mod schema;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use schema::{MemberDescriptor, MemberSlot, ReadFn, Record, WriteFn};
pub use types::ValueKind;
pub use values::{FieldValue, FlatField, ValueError};
