// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::PathBuf;

use thiserror::Error;

/// Export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A file or directory could not be written.
    #[error("Failed to write '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be encoded.
    #[error("Failed to encode table '{table}': {source}")]
    Csv {
        table: &'static str,
        #[source]
        source: csv::Error,
    },
}
