//! Reverse conversion: flattened CSV string → FieldValue.
//!
//! This module parses the text of a single CSV field into a `FieldValue`,
//! guided by the `ValueKind` of the member it belongs to.

use crate::forward::ARRAY_SEPARATOR;
use flat_core::{FieldValue, ValueError, ValueKind};

/// Parse a CSV string value according to the value kind.
///
/// This is the reverse of `CsvValue::from(FieldValue)`.
pub fn csv_string_to_field_value(value: &str, kind: &ValueKind) -> Result<FieldValue, ValueError> {
    match kind {
        // Strings are never null; empty stays empty
        ValueKind::String => Ok(FieldValue::String(value.to_string())),

        ValueKind::Optional(inner) => {
            if value.is_empty() {
                Ok(FieldValue::Null)
            } else {
                csv_string_to_field_value(value, inner)
            }
        }

        // Array - ';' separated, empty segments dropped
        ValueKind::Array(element) => {
            let items: Result<Vec<FieldValue>, ValueError> = value
                .split(ARRAY_SEPARATOR)
                .filter(|segment| !segment.is_empty())
                .map(|segment| csv_string_to_field_value(segment, element))
                .collect();
            Ok(FieldValue::Array(items?))
        }

        // Carried as text; the target's FromStr runs on assignment
        ValueKind::Other { .. } => {
            if value.is_empty() {
                Ok(FieldValue::Null)
            } else {
                Ok(FieldValue::Other(value.to_string()))
            }
        }

        _ if value.is_empty() && kind.is_value_kind() => FieldValue::zero(kind)
            .ok_or_else(|| ValueError::format(value, kind, "kind has no zero value")),

        ValueKind::Int32 => value
            .trim()
            .parse::<i32>()
            .map(FieldValue::Int32)
            .map_err(|e| ValueError::format(value, kind, e.to_string())),

        ValueKind::Int64 => value
            .trim()
            .parse::<i64>()
            .map(FieldValue::Int64)
            .map_err(|e| ValueError::format(value, kind, e.to_string())),

        ValueKind::Float32 => value
            .trim()
            .parse::<f32>()
            .map(FieldValue::Float32)
            .map_err(|e| ValueError::format(value, kind, e.to_string())),

        ValueKind::Float64 => value
            .trim()
            .parse::<f64>()
            .map(FieldValue::Float64)
            .map_err(|e| ValueError::format(value, kind, e.to_string())),

        ValueKind::Bool => {
            let trimmed = value.trim();
            if trimmed.eq_ignore_ascii_case("true") {
                Ok(FieldValue::Bool(true))
            } else if trimmed.eq_ignore_ascii_case("false") {
                Ok(FieldValue::Bool(false))
            } else {
                Err(ValueError::format(
                    value,
                    kind,
                    "expected 'True' or 'False'",
                ))
            }
        }

        ValueKind::Enum { variants, .. } => {
            let trimmed = value.trim();
            variants
                .iter()
                .copied()
                .find(|variant| variant.eq_ignore_ascii_case(trimmed))
                .map(FieldValue::Enum)
                .ok_or_else(|| ValueError::format(value, kind, "no matching variant"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLOR: ValueKind = ValueKind::Enum {
        name: "Color",
        variants: &["Red", "Green", "Blue"],
    };

    #[test]
    fn test_reverse_string_keeps_empty() {
        let result = csv_string_to_field_value("", &ValueKind::String).unwrap();
        assert_eq!(result, FieldValue::text(""));
        let result = csv_string_to_field_value(" a ", &ValueKind::String).unwrap();
        assert_eq!(result, FieldValue::text(" a "));
    }

    #[test]
    fn test_reverse_empty_value_kinds_are_zero() {
        assert_eq!(
            csv_string_to_field_value("", &ValueKind::Int32).unwrap(),
            FieldValue::Int32(0)
        );
        assert_eq!(
            csv_string_to_field_value("", &ValueKind::Float64).unwrap(),
            FieldValue::Float64(0.0)
        );
        assert_eq!(
            csv_string_to_field_value("", &ValueKind::Bool).unwrap(),
            FieldValue::Bool(false)
        );
        assert_eq!(
            csv_string_to_field_value("", &COLOR).unwrap(),
            FieldValue::Enum("Red")
        );
    }

    #[test]
    fn test_reverse_empty_optional_is_null() {
        let kind = ValueKind::optional(ValueKind::Int32);
        assert!(csv_string_to_field_value("", &kind).unwrap().is_null());
        assert_eq!(
            csv_string_to_field_value("5", &kind).unwrap(),
            FieldValue::Int32(5)
        );
    }

    #[test]
    fn test_reverse_int() {
        assert_eq!(
            csv_string_to_field_value("-42", &ValueKind::Int32).unwrap(),
            FieldValue::Int32(-42)
        );
        assert_eq!(
            csv_string_to_field_value("9876543210", &ValueKind::Int64).unwrap(),
            FieldValue::Int64(9876543210)
        );
    }

    #[test]
    fn test_reverse_int_invalid() {
        let err = csv_string_to_field_value("notanumber", &ValueKind::Int32).unwrap_err();
        assert!(err.is_format());
        let err = csv_string_to_field_value("9876543210", &ValueKind::Int32).unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_reverse_float() {
        assert_eq!(
            csv_string_to_field_value("1.5", &ValueKind::Float64).unwrap(),
            FieldValue::Float64(1.5)
        );
        assert_eq!(
            csv_string_to_field_value("2.25", &ValueKind::Float32).unwrap(),
            FieldValue::Float32(2.25)
        );
        assert!(csv_string_to_field_value("1,5", &ValueKind::Float64)
            .unwrap_err()
            .is_format());
    }

    #[test]
    fn test_reverse_bool() {
        for input in ["True", "true", "TRUE"] {
            assert_eq!(
                csv_string_to_field_value(input, &ValueKind::Bool).unwrap(),
                FieldValue::Bool(true)
            );
        }
        for input in ["False", "false", "fAlSe"] {
            assert_eq!(
                csv_string_to_field_value(input, &ValueKind::Bool).unwrap(),
                FieldValue::Bool(false)
            );
        }
        assert!(csv_string_to_field_value("1", &ValueKind::Bool)
            .unwrap_err()
            .is_format());
        assert!(csv_string_to_field_value("yes", &ValueKind::Bool)
            .unwrap_err()
            .is_format());
    }

    #[test]
    fn test_reverse_enum_case_insensitive() {
        assert_eq!(
            csv_string_to_field_value("red", &COLOR).unwrap(),
            FieldValue::Enum("Red")
        );
        assert_eq!(
            csv_string_to_field_value("BLUE", &COLOR).unwrap(),
            FieldValue::Enum("Blue")
        );
        let err = csv_string_to_field_value("purple", &COLOR).unwrap_err();
        assert!(err.is_format());
        assert!(err.to_string().contains("Enum(Color)"));
    }

    #[test]
    fn test_reverse_array() {
        let kind = ValueKind::array(ValueKind::Int32);
        assert_eq!(
            csv_string_to_field_value("1;2;3", &kind).unwrap(),
            FieldValue::Array(vec![
                FieldValue::Int32(1),
                FieldValue::Int32(2),
                FieldValue::Int32(3)
            ])
        );
        assert_eq!(
            csv_string_to_field_value("", &kind).unwrap(),
            FieldValue::Array(vec![])
        );
        assert_eq!(
            csv_string_to_field_value(";4;;5;", &kind).unwrap(),
            FieldValue::Array(vec![FieldValue::Int32(4), FieldValue::Int32(5)])
        );
        assert!(csv_string_to_field_value("1;x", &kind)
            .unwrap_err()
            .is_format());
    }

    #[test]
    fn test_reverse_other_is_deferred() {
        let kind = ValueKind::Other { type_name: "u8" };
        assert_eq!(
            csv_string_to_field_value("300", &kind).unwrap(),
            FieldValue::Other("300".to_string())
        );
        assert!(csv_string_to_field_value("", &kind).unwrap().is_null());
    }

    #[test]
    fn test_reverse_enum_ignores_surrounding_whitespace() {
        assert_eq!(
            csv_string_to_field_value(" Blue ", &COLOR).unwrap(),
            FieldValue::Enum("Blue")
        );
        assert_eq!(
            csv_string_to_field_value("\tred", &COLOR).unwrap(),
            FieldValue::Enum("Red")
        );
        // whitespace-only text is not empty and names no variant
        assert!(csv_string_to_field_value("  ", &COLOR)
            .unwrap_err()
            .is_format());
    }
}
