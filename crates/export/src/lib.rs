// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV output for generated datasets.
//!
//! Every table becomes `<table>.csv` in one directory. Files are UTF-8
//! with a byte-order mark so spreadsheet tools pick the right encoding,
//! and the header row is written even when a table has no rows.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;

#[cfg(test)]
mod tests;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use hr_fixtures::{Dataset, Record, TableSink};
use tracing::{debug, info};

pub use error::ExportError;

/// Byte-order mark written at the start of every file.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A directory of CSV tables.
#[derive(Debug)]
pub struct CsvDirectory {
    root: PathBuf,
    written: Vec<(&'static str, usize)>,
}

impl CsvDirectory {
    /// Opens `root`, creating it and any missing parents.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn create(root: &Path) -> Result<Self, ExportError> {
        fs::create_dir_all(root).map_err(|source| ExportError::Io {
            path: root.to_path_buf(),
            source,
        })?;
        Ok(Self {
            root: root.to_path_buf(),
            written: Vec::new(),
        })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `table`.
    #[must_use]
    pub fn table_path(&self, table: &str) -> PathBuf {
        self.root.join(format!("{table}.csv"))
    }

    /// Tables written so far with their row counts, in write order.
    #[must_use]
    pub fn written(&self) -> &[(&'static str, usize)] {
        &self.written
    }
}

impl TableSink for CsvDirectory {
    type Error = ExportError;

    fn write_table<R: Record>(&mut self, rows: &[R]) -> Result<(), ExportError> {
        let path: PathBuf = self.table_path(R::TABLE);
        let io_error = |source: std::io::Error| ExportError::Io {
            path: path.clone(),
            source,
        };
        let csv_error = |source: csv::Error| ExportError::Csv {
            table: R::TABLE,
            source,
        };

        let mut file: BufWriter<File> = BufWriter::new(File::create(&path).map_err(io_error)?);
        file.write_all(UTF8_BOM).map_err(io_error)?;

        let mut writer: csv::Writer<BufWriter<File>> = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.write_record(R::COLUMNS).map_err(csv_error)?;
        for row in rows {
            writer.serialize(row).map_err(csv_error)?;
        }
        writer.flush().map_err(io_error)?;

        debug!(table = R::TABLE, rows = rows.len(), path = %path.display(), "Wrote table");
        self.written.push((R::TABLE, rows.len()));
        Ok(())
    }
}

/// Writes every table of `dataset` into `output_dir`.
///
/// # Errors
///
/// Returns an error if the directory or any file cannot be written.
pub fn write_dataset(dataset: &Dataset, output_dir: &Path) -> Result<CsvDirectory, ExportError> {
    let mut directory: CsvDirectory = CsvDirectory::create(output_dir)?;
    dataset.write_to(&mut directory)?;
    info!(
        tables = directory.written().len(),
        output_dir = %output_dir.display(),
        "Export complete"
    );
    Ok(directory)
}
