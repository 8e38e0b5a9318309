use std::fs;

use chrono::NaiveDate;
use process_records::{
    EXPORT_HEADER, LookupError, ProcessError, RecordStore, RunConfig, SortKey, export_csv,
};
use tempfile::TempDir;

const BODY: &str = "\
id;numero;data_ajuizamento;id_classe;id_assunto;ano_eleicao
101,\"AB-1\",2023-01-01 00:00:00,{5,6},{9},2022
102,\"CD-2\",2023-06-01 00:00:00,{5},{9,10},0
";

fn write_input(dir: &TempDir, text: &str) -> std::path::PathBuf {
    let path = dir.path().join("processos.csv");
    fs::write(&path, text).unwrap();
    path
}

fn ids(store: &RecordStore) -> Vec<i64> {
    store.iter().map(|r| r.id()).collect()
}

#[test]
fn test_two_row_body() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, BODY);

    let (mut store, report) = RecordStore::load(&input).unwrap();
    assert_eq!(report.accepted, 2);

    store.sort(SortKey::Id);
    assert_eq!(ids(&store), vec![101, 102]);

    store.sort(SortKey::DateDesc);
    assert_eq!(ids(&store), vec![102, 101]);

    assert_eq!(store.count_by_class(5), 2);
    assert_eq!(store.count_distinct_subjects(), 2);
    assert_eq!(store.count_multi_subject(), 1);

    let now = NaiveDate::from_ymd_opt(2023, 6, 11)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap();
    assert_eq!(store.days_since(102, now), Ok(10));
    assert_eq!(
        store.days_since(999, now),
        Err(LookupError::NotFound { id: 999 })
    );
}

#[test]
fn test_sorted_exports_written_and_reloadable() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, BODY);
    let mut config = RunConfig::new(&input);
    config.output_dir = dir.path().join("out");

    let (mut store, _) = RecordStore::load(&config.input).unwrap();
    for key in config.sorts.clone() {
        store.sort(key);
        let written = export_csv(config.export_path(key), store.as_slice()).unwrap();
        assert_eq!(written, 2);
    }

    let by_date = fs::read_to_string(config.export_path(SortKey::DateDesc)).unwrap();
    let lines: Vec<&str> = by_date.lines().collect();
    assert_eq!(
        lines,
        vec![
            EXPORT_HEADER,
            r#"102,"CD-2",2023-06-01 00:00:00,"{5}","{9,10}",0"#,
            r#"101,"AB-1",2023-01-01 00:00:00,"{5,6}","{9}",2022"#,
        ]
    );

    let (reloaded, report) = RecordStore::load(config.export_path(SortKey::Id)).unwrap();
    assert_eq!(report.rejected_count(), 0);
    assert_eq!(ids(&reloaded), vec![101, 102]);
}

#[test]
fn test_dropped_rows_and_invalid_dates() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "\
id;numero;data_ajuizamento;id_classe;id_assunto;ano_eleicao
1,\"A\",2020-01-01 00:00:00,\"{1}\",\"{2}\",2020
2,\"B,2020-01-01 00:00:00,{1},{2},2020
3,\"C\",nunca,{1},{2,3},0
",
    );

    let (mut store, report) = RecordStore::load(&input).unwrap();
    assert_eq!(report.lines_read, 3);
    assert_eq!(report.rejected_count(), 1);
    assert_eq!(report.rejected[0].line_no, 3);

    store.sort(SortKey::DateDesc);
    assert_eq!(ids(&store), vec![1, 3]);
    assert!(matches!(
        store.days_since_now(3),
        Err(LookupError::InvalidDate { id: 3, .. })
    ));
}

#[test]
fn test_missing_input_is_read_error() {
    let dir = TempDir::new().unwrap();
    let err = RecordStore::load(dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, ProcessError::Read { .. }));
}

#[test]
fn test_failed_export_keeps_store() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, BODY);
    let (store, _) = RecordStore::load(&input).unwrap();
    let before = store.clone();

    // The input file is not a directory, so nothing can be created below it.
    let err = export_csv(input.join("nested.csv"), store.as_slice()).unwrap_err();
    assert!(matches!(err, ProcessError::Write { .. }));
    assert_eq!(store, before);
}
