// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use hr_fixtures::{
    Dataset, GeneratorConfig, KeyTalentEntry, Record, SimpleNameGenerator, YearlySnapshot,
    generate,
};
use time::Date;
use time::macros::format_description;

use crate::{CsvDirectory, ExportError, UTF8_BOM, write_dataset};

static DATASET: LazyLock<Dataset> = LazyLock::new(|| {
    generate(&GeneratorConfig::default(), &SimpleNameGenerator).expect("default config generates")
});

/// A fresh directory under the system temp dir, unique per test.
fn scratch_dir(name: &str) -> PathBuf {
    let path: PathBuf =
        std::env::temp_dir().join(format!("hr-fixtures-{name}-{}", std::process::id()));
    if path.exists() {
        fs::remove_dir_all(&path).unwrap();
    }
    path
}

/// Header and data records of one written table, BOM checked and stripped.
fn read_table(dir: &Path, table: &str) -> (Vec<String>, Vec<Vec<String>>) {
    let bytes: Vec<u8> = fs::read(dir.join(format!("{table}.csv"))).unwrap();
    assert!(bytes.starts_with(UTF8_BOM), "{table} has no byte-order mark");

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(&bytes[UTF8_BOM.len()..]);
    let header: Vec<String> = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    let rows: Vec<Vec<String>> = reader
        .records()
        .map(|record| record.unwrap().iter().map(str::to_string).collect())
        .collect();
    (header, rows)
}

fn column(header: &[String], name: &str) -> usize {
    header.iter().position(|column| column == name).unwrap()
}

#[test]
fn test_every_table_is_written_with_bom_and_header() {
    let dir: PathBuf = scratch_dir("full");
    let directory: CsvDirectory = write_dataset(&DATASET, &dir).unwrap();

    assert_eq!(directory.written(), DATASET.table_counts().as_slice());
    for (table, count) in DATASET.table_counts() {
        let (header, rows) = read_table(&dir, table);
        assert!(!header.is_empty());
        assert_eq!(rows.len(), count, "{table} row count");
        assert!(rows.iter().all(|row| row.len() == header.len()));
    }

    let (header, _) = read_table(&dir, KeyTalentEntry::TABLE);
    assert_eq!(header, KeyTalentEntry::COLUMNS);
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_empty_tables_still_get_a_header() {
    let dir: PathBuf = scratch_dir("empty");
    write_dataset(&Dataset::default(), &dir).unwrap();

    let (header, rows) = read_table(&dir, YearlySnapshot::TABLE);
    assert_eq!(header, YearlySnapshot::COLUMNS);
    assert!(rows.is_empty());
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 27);
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_dates_are_iso_and_missing_values_are_empty() {
    let dir: PathBuf = scratch_dir("values");
    let mut directory: CsvDirectory = CsvDirectory::create(&dir).unwrap();
    hr_fixtures::TableSink::write_table(&mut directory, &DATASET.key_talent).unwrap();

    let (header, rows) = read_table(&dir, KeyTalentEntry::TABLE);
    let date_column: usize = column(&header, "identification_date");
    let leadership_column: usize = column(&header, "leadership_score");
    for (row, entry) in rows.iter().zip(&DATASET.key_talent) {
        let parsed: Date =
            Date::parse(&row[date_column], format_description!("[year]-[month]-[day]")).unwrap();
        assert_eq!(parsed, entry.identification_date);
        assert_eq!(row[leadership_column].is_empty(), entry.leadership_score.is_none());
    }
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_directory_under_a_file_is_an_io_error() {
    let dir: PathBuf = scratch_dir("blocked");
    fs::create_dir_all(&dir).unwrap();
    let file: PathBuf = dir.join("not-a-directory");
    fs::write(&file, b"x").unwrap();

    let result: Result<CsvDirectory, ExportError> = CsvDirectory::create(&file.join("out"));
    assert!(matches!(result, Err(ExportError::Io { .. })));
    fs::remove_dir_all(&dir).unwrap();
}
