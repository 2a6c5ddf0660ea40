//! Record and member descriptors.
//!
//! A record type describes itself as a list of [`MemberDescriptor`]s: one per
//! serializable slot, carrying the slot's name, its [`ValueKind`] and a pair of
//! accessors. `#[derive(Record)]` generates this list; it can also be written
//! by hand.

use crate::types::ValueKind;
use crate::values::{FieldValue, ValueError};
use std::fmt;

/// Where a member's value lives on the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberSlot {
    /// A named struct field
    Field,

    /// A getter/setter pair declared on the record
    Property,
}

/// Reads a member from a record.
pub type ReadFn<T> = fn(&T) -> FieldValue;

/// Writes a member into a record.
pub type WriteFn<T> = fn(&mut T, FieldValue) -> Result<(), ValueError>;

/// Metadata for one serializable slot of a record type.
pub struct MemberDescriptor<T> {
    name: String,
    kind: ValueKind,
    slot: MemberSlot,
    read: ReadFn<T>,
    write: WriteFn<T>,
}

impl<T> MemberDescriptor<T> {
    /// Create a descriptor for a struct field.
    pub fn field(
        name: impl Into<String>,
        kind: ValueKind,
        read: ReadFn<T>,
        write: WriteFn<T>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            slot: MemberSlot::Field,
            read,
            write,
        }
    }

    /// Create a descriptor for a getter/setter property.
    pub fn property(
        name: impl Into<String>,
        kind: ValueKind,
        read: ReadFn<T>,
        write: WriteFn<T>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            slot: MemberSlot::Property,
            read,
            write,
        }
    }

    /// Member name; also its CSV header.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Kind used to parse this member's text.
    pub fn kind(&self) -> &ValueKind {
        &self.kind
    }

    /// Whether this member is a field or a property.
    pub fn slot(&self) -> MemberSlot {
        self.slot
    }

    /// Read this member from `record`.
    pub fn read(&self, record: &T) -> FieldValue {
        (self.read)(record)
    }

    /// Write `value` into this member of `record`.
    pub fn write(&self, record: &mut T, value: FieldValue) -> Result<(), ValueError> {
        (self.write)(record, value)
    }
}

impl<T> Clone for MemberDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            kind: self.kind.clone(),
            slot: self.slot,
            read: self.read,
            write: self.write,
        }
    }
}

impl<T> fmt::Debug for MemberDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("slot", &self.slot)
            .finish()
    }
}

/// Descriptor equality compares metadata only; accessors are not comparable.
impl<T> PartialEq for MemberDescriptor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.kind == other.kind && self.slot == other.slot
    }
}

/// A plain-data type that can be flattened into a single CSV record.
///
/// Usually derived:
///
/// ```ignore
/// #[derive(Debug, Default, Record)]
/// struct Person {
///     name: String,
///     age: i32,
/// }
/// ```
///
/// Implementations list members in declaration order: fields first, then
/// properties. Ordering by name is applied by the [`catalog`](crate::catalog).
pub trait Record: Default + 'static {
    /// All serializable members of this type, unsorted.
    fn describe_members() -> Vec<MemberDescriptor<Self>>;
}
