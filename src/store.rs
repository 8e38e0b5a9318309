//! In-memory record store and the ingestion loop that fills it.
//!
//! The first line of an export is a header and is discarded. Every other
//! non-blank line goes through [`Record::parse_line`]; rows that fail are
//! dropped and noted in the [`IngestReport`], never aborting the load.

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::Record;
use crate::compare::SortKey;
use crate::error::{ProcessError, RowError};
use crate::sort::partition_sort;

/// A row dropped during ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    /// 1-based line number in the source text (the header is line 1).
    pub line_no: usize,
    pub reason: RowError,
}

/// Outcome of one ingestion pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Data lines seen, header and blank lines excluded.
    pub lines_read: usize,
    pub accepted: usize,
    pub rejected: Vec<RejectedRow>,
}

impl IngestReport {
    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }
}

/// Ordered, index-addressable collection of every record in a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an export body (header line included).
    pub fn ingest(text: &str) -> (Self, IngestReport) {
        let mut store = Self::new();
        let mut report = IngestReport::default();

        for (idx, line) in text.lines().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }
            report.lines_read += 1;

            match Record::parse_line(line) {
                Ok(record) => store.push(record),
                Err(reason) => {
                    debug!(line_no = idx + 1, %reason, "dropping row");
                    report.rejected.push(RejectedRow {
                        line_no: idx + 1,
                        reason,
                    });
                }
            }
        }

        report.accepted = store.len();
        if !report.rejected.is_empty() {
            warn!(
                rejected = report.rejected_count(),
                accepted = report.accepted,
                "some rows did not match any template"
            );
        }

        (store, report)
    }

    /// Read and ingest an export file.
    pub fn load(path: impl AsRef<Path>) -> Result<(Self, IngestReport), ProcessError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ProcessError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let (store, report) = Self::ingest(&text);
        info!(
            path = %path.display(),
            records = report.accepted,
            rejected = report.rejected_count(),
            "loaded records"
        );
        Ok((store, report))
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Reorder in place by one of the named orderings.
    pub fn sort(&mut self, key: SortKey) {
        debug!(%key, records = self.len(), "sorting");
        self.sort_with(|a, b| key.compare(a, b));
    }

    /// Reorder in place with an arbitrary comparator.
    pub fn sort_with<F>(&mut self, cmp: F)
    where
        F: FnMut(&Record, &Record) -> Ordering,
    {
        partition_sort(&mut self.records, cmp);
    }
}

impl FromIterator<Record> for RecordStore {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
