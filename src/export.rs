//! Delimited-text export of a record set.
//!
//! Output format:
//! ```text
//! id;numero;data_ajuizamento;id_classe;id_assunto;ano_eleicao
//! 101,"AB-1",2023-01-01 00:00:00,"{5,6}","{9}",2022
//! ```
//!
//! The header uses `;` while data lines use `,`; list fields are always
//! written in the quoted-brace form, re-serialised from the decoded ids.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::Record;
use crate::error::ProcessError;
use crate::field_list::encode_field_list;

pub const EXPORT_HEADER: &str = "id;numero;data_ajuizamento;id_classe;id_assunto;ano_eleicao";

/// Format one record as an export line (no trailing newline).
pub fn format_record(record: &Record) -> String {
    format!(
        "{},\"{}\",{},\"{{{}}}\",\"{{{}}}\",{}",
        record.id(),
        record.case_number(),
        record.filed_at_raw(),
        encode_field_list(record.class_ids()),
        encode_field_list(record.subject_ids()),
        record.election_year()
    )
}

/// Write the header and every record to `writer`.
pub fn write_records<W: Write>(writer: &mut W, records: &[Record]) -> io::Result<()> {
    writeln!(writer, "{EXPORT_HEADER}")?;
    for record in records {
        writeln!(writer, "{}", format_record(record))?;
    }
    writer.flush()
}

/// Export all records to `path`, creating parent directories as needed.
///
/// Returns the number of data rows written.
pub fn export_csv(path: impl AsRef<Path>, records: &[Record]) -> Result<usize, ProcessError> {
    export_range(path, records, 0, records.len())
}

/// Export `amount` records starting at `offset`, clamped to the slice.
pub fn export_range(
    path: impl AsRef<Path>,
    records: &[Record],
    offset: usize,
    amount: usize,
) -> Result<usize, ProcessError> {
    let path = path.as_ref();
    let window = window(records, offset, amount);
    let to_write_err = |source| ProcessError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(to_write_err)?;
    }

    let file = File::create(path).map_err(to_write_err)?;
    let mut writer = BufWriter::new(file);
    write_records(&mut writer, window).map_err(to_write_err)?;

    info!(path = %path.display(), rows = window.len(), "exported records");
    Ok(window.len())
}

/// `records[offset..offset + amount]`, clamped to the slice bounds.
pub(crate) fn window(records: &[Record], offset: usize, amount: usize) -> &[Record] {
    let start = offset.min(records.len());
    let end = start.saturating_add(amount).min(records.len());
    &records[start..end]
}
