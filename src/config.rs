//! Run configuration for the report driver.

use std::path::{Path, PathBuf};

use crate::compare::SortKey;

pub const DEFAULT_CLASS_ID: i64 = 11528;
pub const DEFAULT_PROCESS_ID: i64 = 680402167;
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Everything one report run needs, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    /// Directory sorted exports are written to.
    pub output_dir: PathBuf,
    pub class_id: i64,
    pub process_id: i64,
    pub preview_rows: usize,
    /// Orderings applied in turn, each followed by an export.
    pub sorts: Vec<SortKey>,
}

impl RunConfig {
    /// Defaults for `input`: exports land next to it, sorted by id then date.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        let input = input.into();
        let output_dir = input
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self {
            input,
            output_dir,
            class_id: DEFAULT_CLASS_ID,
            process_id: DEFAULT_PROCESS_ID,
            preview_rows: DEFAULT_PREVIEW_ROWS,
            sorts: vec![SortKey::Id, SortKey::DateDesc],
        }
    }

    /// `<output_dir>/<input stem>_<suffix>.csv` for a sort key.
    pub fn export_path(&self, key: SortKey) -> PathBuf {
        let stem = self
            .input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "processos".to_string());
        self.output_dir
            .join(format!("{stem}_{}.csv", key.file_suffix()))
    }
}
