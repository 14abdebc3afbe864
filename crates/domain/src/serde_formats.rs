// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Text formats for dates and timestamps written to fixture tables.
//!
//! Use with `#[serde(serialize_with = "iso_date::serialize")]`, or
//! `iso_date::option::serialize` for nullable columns.

/// `YYYY-MM-DD`.
pub mod iso_date {
    use serde::Serializer;
    use serde::ser::Error;
    use time::Date;
    use time::format_description::BorrowedFormatItem;

    const FORMAT: &[BorrowedFormatItem<'static>] =
        time::macros::format_description!("[year]-[month]-[day]");

    /// Serializes a date as `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns an error if the date cannot be formatted.
    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let text: String = date.format(FORMAT).map_err(S::Error::custom)?;
        serializer.serialize_str(&text)
    }

    /// Nullable `YYYY-MM-DD`; `None` becomes an empty cell.
    pub mod option {
        use serde::Serializer;
        use time::Date;

        /// Serializes an optional date.
        ///
        /// # Errors
        ///
        /// Returns an error if the date cannot be formatted.
        #[allow(clippy::ref_option)]
        pub fn serialize<S: Serializer>(
            date: &Option<Date>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match date {
                Some(date) => super::serialize(date, serializer),
                None => serializer.serialize_none(),
            }
        }
    }
}

/// `YYYY-MM-DD HH:MM:SS`.
pub mod iso_datetime {
    use serde::Serializer;
    use serde::ser::Error;
    use time::PrimitiveDateTime;
    use time::format_description::BorrowedFormatItem;

    const FORMAT: &[BorrowedFormatItem<'static>] =
        time::macros::format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

    /// Serializes a timestamp as `YYYY-MM-DD HH:MM:SS`.
    ///
    /// # Errors
    ///
    /// Returns an error if the timestamp cannot be formatted.
    pub fn serialize<S: Serializer>(
        timestamp: &PrimitiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let text: String = timestamp.format(FORMAT).map_err(S::Error::custom)?;
        serializer.serialize_str(&text)
    }
}
