// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::Serialize;

/// A row type of one output table.
///
/// `COLUMNS` lists the header in serialization order. It must match the
/// field names the row serializes with.
pub trait Record: Serialize {
    /// File stem of the table (e.g. `03_employee_info`).
    const TABLE: &'static str;
    /// Header row.
    const COLUMNS: &'static [&'static str];
}

/// Destination for the tables of a dataset.
pub trait TableSink {
    type Error;

    /// Writes every row of one table.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if the table cannot be written.
    fn write_table<R: Record>(&mut self, rows: &[R]) -> Result<(), Self::Error>;
}
