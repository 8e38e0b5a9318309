//! # process-records
//!
//! Parsing, ordering and reporting over legal-process record exports.
//!
//! ## Overview
//!
//! An export is a header line followed by one process per line:
//! - **Six fields**: id, case number, filing date, class ids, subject ids,
//!   election year
//! - **Four quoting variants**: the two list fields may each be written as
//!   `{...}` or `"{...}"`
//! - **Lenient ingestion**: rows no template fully matches are dropped,
//!   unparseable dates are kept as absent
//!
//! Records are held in a [`RecordStore`], reordered in place with the
//! partition sort and queried with the [`analytics`] functions.
//!
//! ## Example
//!
//! ```
//! use process_records::{RecordStore, SortKey};
//!
//! let text = "\
//! id;numero;data_ajuizamento;id_classe;id_assunto;ano_eleicao
//! 102,\"CD-2\",2023-06-01 00:00:00,{5},{9,10},0
//! 101,\"AB-1\",2023-01-01 00:00:00,{5,6},{9},2022";
//!
//! let (mut store, report) = RecordStore::ingest(text);
//! assert_eq!(report.rejected_count(), 0);
//!
//! store.sort(SortKey::Id);
//! assert_eq!(store.get(0).map(|r| r.id()), Some(101));
//!
//! assert_eq!(store.count_by_class(5), 2);
//! assert_eq!(store.count_distinct_subjects(), 2);
//! assert_eq!(store.count_multi_subject(), 1);
//! ```

pub mod analytics;
pub mod compare;
pub mod config;
pub mod error;
pub mod export;
pub mod field_list;
pub mod record;
pub mod report;
pub mod sort;
pub mod store;
pub mod template;

pub use analytics::{
    count_by_class, count_distinct_subjects, count_multi_subject, days_since, days_since_now,
    multi_subject_records,
};
pub use compare::{SortKey, by_date_desc, by_id};
pub use config::RunConfig;
pub use error::{FieldListError, ListField, LookupError, ProcessError, RowError};
pub use export::{EXPORT_HEADER, export_csv, export_range, format_record, write_records};
pub use field_list::{decode_field_list, encode_field_list};
pub use record::{DATE_FORMAT, Record};
pub use report::format_table;
pub use sort::partition_sort;
pub use store::{IngestReport, RecordStore, RejectedRow};
pub use template::{FIELD_COUNT, PartialMatch, RowFields, RowMatch, RowTemplate, match_row};
