//! Value representations for the flat record codec.
//!
//! This module defines `FieldValue`, the dynamic intermediate produced when a
//! record member is read and consumed when a member is written, and the
//! `FlatField` trait that maps concrete Rust types onto it.

use crate::types::ValueKind;
use std::fmt::Display;
use std::str::FromStr;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for value parsing and conversion failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueError {
    /// Text could not be parsed as a numeric, boolean or enum kind
    #[error("Failed to parse '{value}' as {expected_type}: {message}")]
    Format {
        value: String,
        expected_type: String,
        message: String,
    },

    /// Value could not be coerced into the target type
    #[error("Cannot convert '{value}' to {target_type}: {message}")]
    Conversion {
        value: String,
        target_type: String,
        message: String,
    },
}

impl ValueError {
    /// Create a format error.
    pub fn format(
        value: impl Into<String>,
        expected_type: impl Display,
        message: impl Into<String>,
    ) -> Self {
        Self::Format {
            value: value.into(),
            expected_type: expected_type.to_string(),
            message: message.into(),
        }
    }

    /// Create a conversion error.
    pub fn conversion(
        value: impl Into<String>,
        target_type: impl Display,
        message: impl Into<String>,
    ) -> Self {
        Self::Conversion {
            value: value.into(),
            target_type: target_type.to_string(),
            message: message.into(),
        }
    }

    /// Conversion error for a `FieldValue` whose shape does not fit the target.
    pub fn mismatch(value: &FieldValue, target_type: impl Display) -> Self {
        Self::conversion(
            format!("{value:?}"),
            target_type,
            format!("unexpected {} value", value.variant_name()),
        )
    }

    /// Whether this is a [`ValueError::Format`].
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }

    /// Whether this is a [`ValueError::Conversion`].
    pub fn is_conversion(&self) -> bool {
        matches!(self, Self::Conversion { .. })
    }
}

// ============================================================================
// Field Values
// ============================================================================

/// Dynamic value of a single record member.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Absent value
    Null,

    /// UTF-8 text
    String(String),

    /// 32-bit signed integer
    Int32(i32),

    /// 64-bit signed integer
    Int64(i64),

    /// 32-bit floating point
    Float32(f32),

    /// 64-bit floating point
    Float64(f64),

    /// Boolean
    Bool(bool),

    /// Enum variant, by canonical variant name
    Enum(&'static str),

    /// Array of values
    Array(Vec<FieldValue>),

    /// Text form of a `Display` / `FromStr` type
    Other(String),
}

impl FieldValue {
    /// Create a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The zero value for a value kind, `None` for kinds without one.
    pub fn zero(kind: &ValueKind) -> Option<Self> {
        match kind {
            ValueKind::Int32 => Some(Self::Int32(0)),
            ValueKind::Int64 => Some(Self::Int64(0)),
            ValueKind::Float32 => Some(Self::Float32(0.0)),
            ValueKind::Float64 => Some(Self::Float64(0.0)),
            ValueKind::Bool => Some(Self::Bool(false)),
            ValueKind::Enum { variants, .. } => variants.first().copied().map(Self::Enum),
            _ => None,
        }
    }

    fn variant_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::String(_) => "String",
            Self::Int32(_) => "Int32",
            Self::Int64(_) => "Int64",
            Self::Float32(_) => "Float32",
            Self::Float64(_) => "Float64",
            Self::Bool(_) => "Bool",
            Self::Enum(_) => "Enum",
            Self::Array(_) => "Array",
            Self::Other(_) => "Other",
        }
    }
}

// ============================================================================
// FlatField
// ============================================================================

/// A type that can be stored in a flat record member.
///
/// Implemented for `String`, `i32`, `i64`, `f32`, `f64`, `bool`, `Vec<T>`,
/// `Option<T>`, the remaining primitive integers and `char`. Fieldless enums
/// get an implementation from `#[derive(FlatEnum)]`; other types convertible
/// through `Display` / `FromStr` can use [`flat_via_str!`](crate::flat_via_str).
pub trait FlatField: Sized {
    /// Kind used to parse this type's flattened text.
    fn value_kind() -> ValueKind;

    /// Read this value into its dynamic form.
    fn to_field_value(&self) -> FieldValue;

    /// Build a value from its dynamic form.
    fn from_field_value(value: FieldValue) -> Result<Self, ValueError>;
}

impl FlatField for String {
    fn value_kind() -> ValueKind {
        ValueKind::String
    }

    fn to_field_value(&self) -> FieldValue {
        FieldValue::String(self.clone())
    }

    fn from_field_value(value: FieldValue) -> Result<Self, ValueError> {
        match value {
            FieldValue::String(s) => Ok(s),
            FieldValue::Null => Ok(String::new()),
            other => Err(ValueError::mismatch(&other, "String")),
        }
    }
}

macro_rules! impl_flat_primitive {
    ($($ty:ty => $variant:ident),+ $(,)?) => {$(
        impl FlatField for $ty {
            fn value_kind() -> ValueKind {
                ValueKind::$variant
            }

            fn to_field_value(&self) -> FieldValue {
                FieldValue::$variant(*self)
            }

            fn from_field_value(value: FieldValue) -> Result<Self, ValueError> {
                match value {
                    FieldValue::$variant(v) => Ok(v),
                    FieldValue::Null => Ok(<$ty>::default()),
                    other => Err(ValueError::mismatch(&other, stringify!($ty))),
                }
            }
        }
    )+};
}

impl_flat_primitive! {
    i32 => Int32,
    i64 => Int64,
    f32 => Float32,
    f64 => Float64,
    bool => Bool,
}

impl<T: FlatField> FlatField for Vec<T> {
    fn value_kind() -> ValueKind {
        ValueKind::array(T::value_kind())
    }

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Array(self.iter().map(FlatField::to_field_value).collect())
    }

    fn from_field_value(value: FieldValue) -> Result<Self, ValueError> {
        match value {
            FieldValue::Array(items) => items.into_iter().map(T::from_field_value).collect(),
            FieldValue::Null => Ok(Vec::new()),
            other => Err(ValueError::mismatch(&other, Self::value_kind())),
        }
    }
}

impl<T: FlatField> FlatField for Option<T> {
    fn value_kind() -> ValueKind {
        ValueKind::optional(T::value_kind())
    }

    fn to_field_value(&self) -> FieldValue {
        match self {
            Some(v) => v.to_field_value(),
            None => FieldValue::Null,
        }
    }

    fn from_field_value(value: FieldValue) -> Result<Self, ValueError> {
        match value {
            FieldValue::Null => Ok(None),
            other => T::from_field_value(other).map(Some),
        }
    }
}

/// Build a `Display` / `FromStr` type from its dynamic form.
///
/// `Null` yields `T::default()`, which is how empty text reads for these types.
pub fn from_display_str<T>(value: FieldValue, type_name: &str) -> Result<T, ValueError>
where
    T: FromStr + Default,
    T::Err: Display,
{
    match value {
        FieldValue::Null => Ok(T::default()),
        FieldValue::Other(s) | FieldValue::String(s) => s
            .parse::<T>()
            .map_err(|e| ValueError::conversion(s.as_str(), type_name, e.to_string())),
        other => Err(ValueError::mismatch(&other, type_name)),
    }
}

/// Resolve the variant index for an enum member.
///
/// Variant names match ASCII case-insensitively; `Null` resolves to the first
/// variant.
pub fn enum_variant_index(
    value: FieldValue,
    name: &'static str,
    variants: &'static [&'static str],
) -> Result<usize, ValueError> {
    let text = match value {
        FieldValue::Null => return Ok(0),
        FieldValue::Enum(s) => s.to_string(),
        FieldValue::String(s) | FieldValue::Other(s) => s,
        other => return Err(ValueError::mismatch(&other, name)),
    };
    variants
        .iter()
        .position(|variant| variant.eq_ignore_ascii_case(&text))
        .ok_or_else(|| ValueError::format(text, name, "no matching variant"))
}

/// Implement [`FlatField`] for types convertible through `Display` / `FromStr`.
///
/// The types must also implement `Default`, which is the value read from an
/// empty field.
///
/// ```
/// #[derive(Debug, Default, PartialEq)]
/// struct Celsius(i16);
///
/// impl std::fmt::Display for Celsius {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "{}C", self.0)
///     }
/// }
///
/// impl std::str::FromStr for Celsius {
///     type Err = std::num::ParseIntError;
///     fn from_str(s: &str) -> Result<Self, Self::Err> {
///         s.trim_end_matches('C').parse().map(Celsius)
///     }
/// }
///
/// flat_core::flat_via_str!(Celsius);
/// ```
#[macro_export]
macro_rules! flat_via_str {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::FlatField for $ty {
            fn value_kind() -> $crate::ValueKind {
                $crate::ValueKind::Other {
                    type_name: stringify!($ty),
                }
            }

            fn to_field_value(&self) -> $crate::FieldValue {
                $crate::FieldValue::Other(self.to_string())
            }

            fn from_field_value(
                value: $crate::FieldValue,
            ) -> ::std::result::Result<Self, $crate::ValueError> {
                $crate::values::from_display_str::<$ty>(value, stringify!($ty))
            }
        }
    )+};
}

flat_via_str!(i8, i16, isize, u8, u16, u32, u64, usize, char);
