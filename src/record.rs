//! Legal-process record and the builder that assembles it from a raw row.

use chrono::NaiveDateTime;

use crate::error::{ListField, RowError};
use crate::field_list::decode_field_list;
use crate::template::{RowFields, match_row};

/// Format of the filing date column.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One process entry.
///
/// Records are immutable once built. `class_ids` and `subject_ids` are
/// always the decoded form of `class_raw` and `subject_raw`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: i64,
    case_number: String,
    filed_at: Option<NaiveDateTime>,
    filed_at_raw: String,
    class_ids: Vec<i64>,
    class_raw: String,
    subject_ids: Vec<i64>,
    subject_raw: String,
    election_year: i32,
}

impl Record {
    /// Build a record from matched row fields.
    ///
    /// An unparseable date leaves `filed_at` empty but keeps the record. A
    /// list that fails to decode rejects the row.
    pub fn from_fields(fields: RowFields) -> Result<Self, RowError> {
        let class_ids =
            decode_field_list(&fields.class_text).map_err(|source| RowError::FieldList {
                field: ListField::Class,
                source,
            })?;
        let subject_ids =
            decode_field_list(&fields.subject_text).map_err(|source| RowError::FieldList {
                field: ListField::Subject,
                source,
            })?;

        Ok(Self {
            id: fields.id,
            filed_at: parse_filed_at(&fields.date_text),
            case_number: fields.case_number,
            filed_at_raw: fields.date_text,
            class_ids,
            class_raw: fields.class_text,
            subject_ids,
            subject_raw: fields.subject_text,
            election_year: fields.election_year,
        })
    }

    /// Match and build a record from one data line.
    pub fn parse_line(line: &str) -> Result<Self, RowError> {
        let matched = match_row(line).map_err(|partial| RowError::Partial {
            fields_matched: partial.fields_matched,
        })?;
        Self::from_fields(matched.fields)
    }

    #[inline]
    pub fn id(&self) -> i64 {
        self.id
    }

    #[inline]
    pub fn case_number(&self) -> &str {
        &self.case_number
    }

    /// Parsed filing timestamp, `None` when the raw text did not parse.
    #[inline]
    pub fn filed_at(&self) -> Option<NaiveDateTime> {
        self.filed_at
    }

    #[inline]
    pub fn filed_at_raw(&self) -> &str {
        &self.filed_at_raw
    }

    #[inline]
    pub fn class_ids(&self) -> &[i64] {
        &self.class_ids
    }

    #[inline]
    pub fn class_raw(&self) -> &str {
        &self.class_raw
    }

    #[inline]
    pub fn subject_ids(&self) -> &[i64] {
        &self.subject_ids
    }

    #[inline]
    pub fn subject_raw(&self) -> &str {
        &self.subject_raw
    }

    #[inline]
    pub fn election_year(&self) -> i32 {
        self.election_year
    }

    pub fn has_class(&self, class_id: i64) -> bool {
        self.class_ids.contains(&class_id)
    }

    pub fn subject_count(&self) -> usize {
        self.subject_ids.len()
    }
}

/// Parse the leading `YYYY-MM-DD HH:MM:SS` of a date column.
///
/// Exports carry fractional seconds (`2021-07-01 16:18:15.000`); whatever
/// follows the seconds is ignored.
fn parse_filed_at(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_and_remainder(text.trim(), DATE_FORMAT)
        .ok()
        .map(|(parsed, _)| parsed)
}
