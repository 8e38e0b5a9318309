//! Read-only queries over a record set.

use std::collections::HashSet;

use chrono::{Local, NaiveDateTime};

use crate::Record;
use crate::error::LookupError;
use crate::store::RecordStore;

/// Records whose class list contains `class_id`, each counted once.
pub fn count_by_class(records: &[Record], class_id: i64) -> usize {
    records.iter().filter(|r| r.has_class(class_id)).count()
}

/// Number of distinct subject ids across every record.
pub fn count_distinct_subjects(records: &[Record]) -> usize {
    records
        .iter()
        .flat_map(|r| r.subject_ids().iter().copied())
        .collect::<HashSet<i64>>()
        .len()
}

/// Records linked to more than one subject.
pub fn multi_subject_records(records: &[Record]) -> impl Iterator<Item = &Record> {
    records.iter().filter(|r| r.subject_count() > 1)
}

pub fn count_multi_subject(records: &[Record]) -> usize {
    multi_subject_records(records).count()
}

/// Whole days elapsed between the filing date of process `id` and `now`.
///
/// Uses the first record carrying `id`. The result truncates toward zero,
/// so a filing in the future yields a negative count.
pub fn days_since(records: &[Record], id: i64, now: NaiveDateTime) -> Result<i64, LookupError> {
    let record = records
        .iter()
        .find(|r| r.id() == id)
        .ok_or(LookupError::NotFound { id })?;

    let filed_at = record.filed_at().ok_or_else(|| LookupError::InvalidDate {
        id,
        raw: record.filed_at_raw().to_string(),
    })?;

    Ok((now - filed_at).num_days())
}

/// [`days_since`] against the local wall clock.
pub fn days_since_now(records: &[Record], id: i64) -> Result<i64, LookupError> {
    days_since(records, id, Local::now().naive_local())
}

impl RecordStore {
    pub fn count_by_class(&self, class_id: i64) -> usize {
        count_by_class(self.as_slice(), class_id)
    }

    pub fn count_distinct_subjects(&self) -> usize {
        count_distinct_subjects(self.as_slice())
    }

    pub fn count_multi_subject(&self) -> usize {
        count_multi_subject(self.as_slice())
    }

    pub fn multi_subject_records(&self) -> impl Iterator<Item = &Record> {
        multi_subject_records(self.as_slice())
    }

    pub fn days_since(&self, id: i64, now: NaiveDateTime) -> Result<i64, LookupError> {
        days_since(self.as_slice(), id, now)
    }

    pub fn days_since_now(&self, id: i64) -> Result<i64, LookupError> {
        days_since_now(self.as_slice(), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn rec(id: i64, date: &str, class: &str, subject: &str) -> Record {
        Record::parse_line(&format!(r#"{id},"N",{date},{{{class}}},{{{subject}}},0"#)).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|d| d.and_hms_opt(h, 0, 0))
            .unwrap()
    }

    #[test]
    fn test_count_by_class_counts_record_once() {
        let records = vec![
            rec(1, "2020-01-01 00:00:00", "4,4,8", "1"),
            rec(2, "2020-01-01 00:00:00", "8", "1"),
        ];
        assert_eq!(count_by_class(&records, 4), 1);
        assert_eq!(count_by_class(&records, 8), 2);
        assert_eq!(count_by_class(&records, 99), 0);
    }

    #[test]
    fn test_count_distinct_subjects_is_union() {
        let records = vec![
            rec(1, "2020-01-01 00:00:00", "1", "1,2"),
            rec(2, "2020-01-01 00:00:00", "1", "2,3"),
        ];
        assert_eq!(count_distinct_subjects(&records), 3);
        assert_eq!(count_distinct_subjects(&[]), 0);
    }

    #[test]
    fn test_count_multi_subject() {
        let records = vec![
            rec(1, "2020-01-01 00:00:00", "1", "1,2"),
            rec(2, "2020-01-01 00:00:00", "1", "2,3"),
            rec(3, "2020-01-01 00:00:00", "1", "4"),
            rec(4, "2020-01-01 00:00:00", "1", ""),
        ];
        assert_eq!(count_multi_subject(&records), 2);
        let listed: Vec<i64> = multi_subject_records(&records).map(Record::id).collect();
        assert_eq!(listed, vec![1, 2]);
    }

    #[test]
    fn test_days_since_not_found() {
        let records = vec![rec(1, "2020-01-01 00:00:00", "1", "1")];
        assert_eq!(
            days_since(&records, 2, at(2020, 2, 1, 0)),
            Err(LookupError::NotFound { id: 2 })
        );
    }

    #[test]
    fn test_days_since_invalid_date() {
        let records = vec![rec(1, "31/12/2020", "1", "1")];
        assert_eq!(
            days_since(&records, 1, at(2021, 1, 1, 0)),
            Err(LookupError::InvalidDate {
                id: 1,
                raw: "31/12/2020".to_string(),
            })
        );
    }

    #[test]
    fn test_days_since_counts_whole_days() {
        let records = vec![rec(1, "2024-03-01 12:00:00", "1", "1")];
        assert_eq!(days_since(&records, 1, at(2024, 3, 11, 12)), Ok(10));
        // 9 days and 23 hours truncates to 9.
        assert_eq!(days_since(&records, 1, at(2024, 3, 11, 11)), Ok(9));
    }

    #[test]
    fn test_days_since_first_duplicate_wins() {
        let records = vec![
            rec(7, "2024-01-01 00:00:00", "1", "1"),
            rec(7, "2023-01-01 00:00:00", "1", "1"),
        ];
        assert_eq!(days_since(&records, 7, at(2024, 1, 2, 0)), Ok(1));
    }

    #[test]
    fn test_days_since_leaves_record_untouched() {
        let records = vec![rec(1, "2024-03-01 12:00:00", "1", "1")];
        let before = records[0].clone();
        let _ = days_since(&records, 1, at(2024, 3, 11, 12));
        let _ = days_since(&records, 1, at(2024, 3, 11, 12));
        assert_eq!(records[0], before);
    }

    #[test]
    fn test_days_since_now_ten_days_ago() {
        let filed = Local::now().naive_local() - Duration::days(10);
        let line = format!(
            r#"9,"N",{},{{1}},{{1}},0"#,
            filed.format("%Y-%m-%d %H:%M:%S")
        );
        let records = vec![Record::parse_line(&line).unwrap()];
        let days = days_since_now(&records, 9).unwrap();
        assert!((9..=11).contains(&days), "got {days}");
    }
}
