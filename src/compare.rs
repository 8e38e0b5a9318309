//! Record orderings used as sort policies.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::Record;

/// Ascending by process id. Equal ids compare `Equal`.
pub fn by_id(a: &Record, b: &Record) -> Ordering {
    a.id().cmp(&b.id())
}

/// Latest filing date first.
///
/// A record without a parsed date compares greater than any dated record,
/// so undated records collect at the end of the sorted output.
pub fn by_date_desc(a: &Record, b: &Record) -> Ordering {
    match (a.filed_at(), b.filed_at()) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Closed set of record orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum SortKey {
    /// Ascending by id
    Id,
    /// Descending by filing date, undated records last
    #[value(name = "date")]
    DateDesc,
}

impl SortKey {
    pub fn compare(self, a: &Record, b: &Record) -> Ordering {
        match self {
            SortKey::Id => by_id(a, b),
            SortKey::DateDesc => by_date_desc(a, b),
        }
    }

    /// Suffix used for export file names.
    pub fn file_suffix(self) -> &'static str {
        match self {
            SortKey::Id => "ordenado_id",
            SortKey::DateDesc => "ordenado_data",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Id => f.write_str("id"),
            SortKey::DateDesc => f.write_str("date"),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(SortKey::Id),
            "date" | "data" => Ok(SortKey::DateDesc),
            other => Err(format!("Unknown sort key: {other}")),
        }
    }
}
