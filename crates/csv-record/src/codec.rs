//! Record ⇄ CSV text.

use crate::error::CsvRecordError;
use crate::line::{parse_line, split_lines};
use csv_types::{csv_string_to_field_value, field_values_to_csv_line, strings_to_csv_line};
use flat_core::{catalog, Record};
use tracing::trace;

/// Terminator written after every line.
pub const LINE_TERMINATOR: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Serializes records to a header line plus one data line, and back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvRecordCodec {
    include_header: bool,
}

impl Default for CsvRecordCodec {
    fn default() -> Self {
        Self {
            include_header: true,
        }
    }
}

impl CsvRecordCodec {
    /// Create a codec that writes a header line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether `serialize` writes the header line.
    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    /// Whether `serialize` writes the header line.
    pub fn include_header(&self) -> bool {
        self.include_header
    }

    /// Serialize `record` to CSV text.
    ///
    /// Columns follow the catalog order of `T`. Every line, including the
    /// last, ends with [`LINE_TERMINATOR`].
    pub fn serialize<T: Record>(&self, record: &T) -> String {
        let members = catalog::members::<T>();
        let mut out = String::new();

        if self.include_header {
            out.push_str(&strings_to_csv_line(members.iter().map(|m| m.name())));
            out.push_str(LINE_TERMINATOR);
        }

        out.push_str(&field_values_to_csv_line(
            members.iter().map(|m| m.read(record)),
        ));
        out.push_str(LINE_TERMINATOR);
        out
    }

    /// Deserialize a record from CSV text.
    ///
    /// A first line is taken as a header only if its field count equals the
    /// member count of `T`; its contents are not checked. Fields are assigned
    /// by position. Missing fields leave members at their default, extra fields
    /// are ignored.
    pub fn deserialize<T: Record>(&self, text: &str) -> Result<T, CsvRecordError> {
        let members = catalog::members::<T>();
        let lines = split_lines(text);

        let fields = match lines.as_slice() {
            [] => return Err(CsvRecordError::EmptyInput),
            [only] => parse_line(only),
            [first, second, ..] => {
                let candidate = parse_line(first);
                if candidate.len() == members.len() {
                    trace!("First line treated as header ({} fields)", candidate.len());
                    parse_line(second)
                } else {
                    trace!(
                        "First line has {} fields for {} members, treating it as data",
                        candidate.len(),
                        members.len()
                    );
                    candidate
                }
            }
        };

        let mut record = T::default();
        for (member, field) in members.iter().zip(fields.iter()) {
            csv_string_to_field_value(field, member.kind())
                .and_then(|value| member.write(&mut record, value))
                .map_err(|source| CsvRecordError::Field {
                    member: member.name().to_string(),
                    source,
                })?;
        }

        Ok(record)
    }
}

/// Header line of `T` without terminator.
pub fn header<T: Record>() -> String {
    let members = catalog::members::<T>();
    strings_to_csv_line(members.iter().map(|m| m.name()))
}
