//! Forward conversion: FieldValue → flattened CSV string.
//!
//! This module provides conversion from flat-core's `FieldValue` to the string
//! stored in a CSV field, and the field-level escaping rule.

use flat_core::FieldValue;

/// Separator between flattened array elements.
pub const ARRAY_SEPARATOR: char = ';';

/// Wrapper for flattened CSV string values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvValue(pub String);

impl CsvValue {
    /// Get the inner CSV string.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get a reference to the inner CSV string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<FieldValue> for CsvValue {
    fn from(value: FieldValue) -> Self {
        match value {
            // Null - empty string
            FieldValue::Null => CsvValue(String::new()),

            // Text is stored unescaped; escaping is a line-level concern
            FieldValue::String(s) => CsvValue(s),

            FieldValue::Int32(i) => CsvValue(i.to_string()),
            FieldValue::Int64(i) => CsvValue(i.to_string()),

            // `Display` for floats is locale-independent and round-trips
            FieldValue::Float32(f) => CsvValue(f.to_string()),
            FieldValue::Float64(f) => CsvValue(f.to_string()),

            FieldValue::Bool(b) => CsvValue(if b {
                "True".to_string()
            } else {
                "False".to_string()
            }),

            FieldValue::Enum(name) => CsvValue(name.to_string()),

            // Array - flattened elements joined with ';'
            FieldValue::Array(elements) => {
                let flattened: Vec<String> = elements
                    .into_iter()
                    .map(|element| CsvValue::from(element).0)
                    .collect();
                CsvValue(flattened.join(&ARRAY_SEPARATOR.to_string()))
            }

            FieldValue::Other(s) => CsvValue(s),
        }
    }
}

/// Flatten a value to its CSV string.
pub fn to_flat(value: FieldValue) -> String {
    CsvValue::from(value).into_inner()
}

/// Escape a value for CSV (double quotes and add quotes if needed).
pub fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Convert a row of FieldValues to a CSV line (no terminator).
pub fn field_values_to_csv_line<I>(fields: I) -> String
where
    I: IntoIterator<Item = FieldValue>,
{
    let values: Vec<String> = fields
        .into_iter()
        .map(|value| {
            let csv_val = CsvValue::from(value);
            escape_csv(&csv_val.0)
        })
        .collect();
    values.join(",")
}

/// Join already-flattened strings into a CSV line, escaping each.
pub fn strings_to_csv_line<I, S>(fields: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let values: Vec<String> = fields
        .into_iter()
        .map(|field| escape_csv(field.as_ref()))
        .collect();
    values.join(",")
}
