//! Error types for record serialization.

use flat_core::ValueError;

/// Error type for CSV record operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CsvRecordError {
    /// A required input was absent
    #[error("Required argument '{0}' was not provided")]
    NullArgument(&'static str),

    /// The input contained no non-blank lines
    #[error("CSV input contains no data lines")]
    EmptyInput,

    /// A field could not be converted into its member
    #[error("Invalid value for member '{member}': {source}")]
    Field {
        member: String,
        #[source]
        source: ValueError,
    },
}

impl CsvRecordError {
    /// The underlying value error, if a field failed to convert.
    pub fn value_error(&self) -> Option<&ValueError> {
        match self {
            Self::Field { source, .. } => Some(source),
            _ => None,
        }
    }
}
