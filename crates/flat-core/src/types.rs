//! Value kinds understood by the flat record codec.
//!
//! This module defines `ValueKind`, the semantic category of a record member's
//! declared type. The codec uses the kind of each member to decide how a
//! flattened string is parsed back into a typed value.

use std::fmt;

/// Semantic category of a member's declared type.
///
/// `ValueKind` plays the role of a type descriptor: it is produced by
/// [`FlatField::value_kind`](crate::FlatField::value_kind) for every member of
/// a record and stored in its [`MemberDescriptor`](crate::MemberDescriptor).
///
/// # Empty text
///
/// How an empty flattened string is read depends on the kind:
///
/// | Kind | Empty string reads as |
/// | --- | --- |
/// | `String` | `""` |
/// | integers, floats, `Bool`, `Enum` | the zero value |
/// | `Array` | an empty array |
/// | `Optional`, `Other` | `Null` |
#[derive(Debug, Clone, PartialEq)]
pub enum ValueKind {
    /// UTF-8 text
    String,

    /// 32-bit signed integer
    Int32,

    /// 64-bit signed integer
    Int64,

    /// 32-bit IEEE 754 floating point
    Float32,

    /// 64-bit IEEE 754 floating point
    Float64,

    /// Boolean value, flattened as `True` / `False`
    Bool,

    /// Fieldless enumeration
    Enum {
        /// Rust type name of the enum
        name: &'static str,
        /// Variant names in declaration order; index 0 is the zero value
        variants: &'static [&'static str],
    },

    /// One-dimensional array of a single element kind
    Array(Box<ValueKind>),

    /// Nullable wrapper (`Option<T>`); empty text reads as `Null`
    Optional(Box<ValueKind>),

    /// Any other type convertible through `Display` / `FromStr`
    Other {
        /// Rust type name, used in conversion errors
        type_name: &'static str,
    },
}

impl ValueKind {
    /// Create an array kind of the given element kind.
    pub fn array(element: ValueKind) -> Self {
        Self::Array(Box::new(element))
    }

    /// Create a nullable kind wrapping the given kind.
    pub fn optional(inner: ValueKind) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// Whether empty text reads as a zero value rather than as `Null`,
    /// an empty string or an empty array.
    pub fn is_value_kind(&self) -> bool {
        matches!(
            self,
            Self::Int32
                | Self::Int64
                | Self::Float32
                | Self::Float64
                | Self::Bool
                | Self::Enum { .. }
        )
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "String"),
            Self::Int32 => write!(f, "Int32"),
            Self::Int64 => write!(f, "Int64"),
            Self::Float32 => write!(f, "Float32"),
            Self::Float64 => write!(f, "Float64"),
            Self::Bool => write!(f, "Bool"),
            Self::Enum { name, .. } => write!(f, "Enum({name})"),
            Self::Array(element) => write!(f, "Array({element})"),
            Self::Optional(inner) => write!(f, "Optional({inner})"),
            Self::Other { type_name } => write!(f, "{type_name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_kind_classification() {
        assert!(ValueKind::Int32.is_value_kind());
        assert!(ValueKind::Bool.is_value_kind());
        assert!(ValueKind::Enum {
            name: "Color",
            variants: &["Red"]
        }
        .is_value_kind());
        assert!(!ValueKind::String.is_value_kind());
        assert!(!ValueKind::array(ValueKind::Int32).is_value_kind());
        assert!(!ValueKind::optional(ValueKind::Int32).is_value_kind());
        assert!(!ValueKind::Other { type_name: "u8" }.is_value_kind());
    }

    #[test]
    fn test_display() {
        assert_eq!(ValueKind::array(ValueKind::Int64).to_string(), "Array(Int64)");
        assert_eq!(
            ValueKind::optional(ValueKind::String).to_string(),
            "Optional(String)"
        );
    }
}
