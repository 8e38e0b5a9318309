//! Fixed-width console table for previewing records.

use crate::Record;
use crate::export::window;

const SEPARATOR_WIDTH: usize = 110;

/// Render `amount` records starting at `offset` as a table.
///
/// The header is always rendered; the row window is clamped to the slice.
pub fn format_table(records: &[Record], offset: usize, amount: usize) -> String {
    let mut lines = vec![
        format!(
            "{:<10} | {:<20} | {:<20} | {:<15} | {:<15} | {:<4}",
            "ID", "Código", "Data", "Classe", "Assunto", "Ano Eleição"
        ),
        "-".repeat(SEPARATOR_WIDTH),
    ];

    lines.extend(window(records, offset, amount).iter().map(|record| {
        format!(
            "{:<10} | {:<20} | {:<20} | {:<15} | {:<15} | {:<4}",
            record.id(),
            record.case_number(),
            record.filed_at_raw(),
            record.class_raw(),
            record.subject_raw(),
            record.election_year()
        )
    }));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_only_when_amount_zero() {
        let records = vec![
            Record::parse_line(r#"1,"A",2020-01-01 00:00:00,{1},{2},0"#).unwrap(),
        ];
        let table = format_table(&records, 0, 0);
        assert_eq!(table.lines().count(), 2);
        assert!(table.starts_with("ID         | Código"));
    }

    #[test]
    fn test_rows_padded_and_windowed() {
        let records: Vec<Record> = (1..=3)
            .map(|id| {
                Record::parse_line(&format!(r#"{id},"N{id}",2020-01-01 00:00:00,{{1,2}},{{3}},2020"#))
                    .unwrap()
            })
            .collect();
        let table = format_table(&records, 1, 5);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[2],
            "2          | N2                   | 2020-01-01 00:00:00  | 1,2             | 3               | 2020"
        );
    }

    #[test]
    fn test_every_line_newline_terminated() {
        let records = vec![
            Record::parse_line(r#"1,"A",2020-01-01 00:00:00,{1},{2},0"#).unwrap(),
        ];
        let table = format_table(&records, 0, 1);
        assert!(table.ends_with("| 0   \n"));
        assert_eq!(table.matches('\n').count(), 3);
    }
}
