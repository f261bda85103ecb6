// ABOUTME: Row mapping capability for turning result rows into domain values
// ABOUTME: Trait with a blanket impl so plain closures work as mappers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 cafe-qa contributors

use rusqlite::Row;

/// Converts one positionally-addressable result row into a `T`.
///
/// `row_num` is the 1-based index of the row within the cursor. Mappers must
/// be pure functions of the row and must not retain a reference to it beyond
/// the call - the row handle is only valid while the owning cursor lives.
///
/// Implemented for any `Fn(&Row<'_>, usize) -> rusqlite::Result<T>`, so a
/// closure is a valid mapper:
///
/// ```no_run
/// # use cafe_qa::sql::RowMapper;
/// let title_mapper = |row: &rusqlite::Row<'_>, _row_num: usize| row.get::<_, String>("title");
/// # fn takes<M: RowMapper<String>>(_m: &M) {}
/// # takes(&title_mapper);
/// ```
pub trait RowMapper<T> {
    /// Map a single row. A driver-level error here (missing column, type
    /// mismatch) aborts the surrounding query.
    fn map_row(&self, row: &Row<'_>, row_num: usize) -> rusqlite::Result<T>;
}

impl<T, F> RowMapper<T> for F
where
    F: Fn(&Row<'_>, usize) -> rusqlite::Result<T>,
{
    fn map_row(&self, row: &Row<'_>, row_num: usize) -> rusqlite::Result<T> {
        self(row, row_num)
    }
}
