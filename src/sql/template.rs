// ABOUTME: Core SQL execution helper wrapping connection/statement/cursor handling
// ABOUTME: Binds positional parameters, maps rows, and reports generated keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 cafe-qa contributors

use std::sync::Arc;

use rusqlite::{Connection, Statement};
use tracing::debug;

use super::connector::ConnectionProvider;
use super::errors::{SqlResult, SqlTemplateError};
use super::row_mapper::RowMapper;
use super::value::SqlValue;

/// Outcome of a mutation statement.
///
/// `affected` is the engine's raw affected-row count, uninterpreted: zero
/// rows affected is not an error here. Callers that expect exactly one row
/// must check the count themselves and raise their own domain error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateResult {
    /// Number of rows the statement changed
    pub affected: usize,
    /// Database-assigned key when the statement inserted a row into a
    /// rowid table; `None` when no key was generated
    pub generated_key: Option<i64>,
}

/// Stateless SQL execution helper.
///
/// Turns (SQL text, positional parameters, optional row mapper) into mapped
/// collections, single optional values, or affected-row counts. Every call
/// acquires its own connection from the provider and scopes the prepared
/// statement and cursor to the call; all three are released on every exit
/// path, including mapper failures mid-cursor. The template holds no other
/// state, so one instance can be shared freely across threads.
#[derive(Clone)]
pub struct SqlTemplate {
    provider: Arc<dyn ConnectionProvider>,
}

impl SqlTemplate {
    /// Create a template over the given connection provider.
    #[must_use]
    pub fn new(provider: Arc<dyn ConnectionProvider>) -> Self {
        Self { provider }
    }

    /// Execute a query and map every row of the cursor, in cursor order.
    ///
    /// Zero matching rows yield an empty `Vec`, never an error. A mapper
    /// failure partway through discards the partial result and propagates.
    ///
    /// # Errors
    /// [`SqlTemplateError::ParameterCount`]/[`SqlTemplateError::Bind`] for
    /// binding mistakes (raised before execution),
    /// [`SqlTemplateError::Execution`] for engine or mapper failures.
    pub fn query<T, M>(&self, sql: &str, mapper: &M, params: &[SqlValue]) -> SqlResult<Vec<T>>
    where
        M: RowMapper<T>,
    {
        let connection = self.provider.connection()?;
        let mut statement = prepare(&connection, sql)?;
        bind(&mut statement, sql, params)?;

        let mut rows = statement.raw_query();
        let mut result = Vec::new();
        let mut row_num = 0;
        while let Some(row) = rows.next().map_err(|source| execution(sql, source))? {
            row_num += 1;
            result.push(
                mapper
                    .map_row(row, row_num)
                    .map_err(|source| execution(sql, source))?,
            );
        }

        debug!(sql, rows = result.len(), "query executed");
        Ok(result)
    }

    /// Execute a query expected to match at most one row.
    ///
    /// Advances the cursor at most once: zero matching rows yield
    /// `Ok(None)`; when several rows match, only the first is consumed and
    /// mapped. Selectivity is the caller's responsibility.
    ///
    /// # Errors
    /// Same taxonomy as [`Self::query`].
    pub fn query_one<T, M>(&self, sql: &str, mapper: &M, params: &[SqlValue]) -> SqlResult<Option<T>>
    where
        M: RowMapper<T>,
    {
        let connection = self.provider.connection()?;
        let mut statement = prepare(&connection, sql)?;
        bind(&mut statement, sql, params)?;

        let mut rows = statement.raw_query();
        let mapped = match rows.next().map_err(|source| execution(sql, source))? {
            Some(row) => Some(
                mapper
                    .map_row(row, 1)
                    .map_err(|source| execution(sql, source))?,
            ),
            None => None,
        };

        debug!(sql, found = mapped.is_some(), "single-row query executed");
        Ok(mapped)
    }

    /// Execute a mutation (INSERT/UPDATE/DELETE).
    ///
    /// Returns the raw affected-row count plus the generated key, if any.
    /// Each call runs on a fresh connection, so `last_insert_rowid` is
    /// nonzero exactly when this statement inserted a row - an absent key
    /// is reported as `None`, not as an error.
    ///
    /// # Errors
    /// Same taxonomy as [`Self::query`].
    pub fn update(&self, sql: &str, params: &[SqlValue]) -> SqlResult<UpdateResult> {
        let connection = self.provider.connection()?;
        let mut statement = prepare(&connection, sql)?;
        bind(&mut statement, sql, params)?;

        let affected = statement
            .raw_execute()
            .map_err(|source| execution(sql, source))?;
        let rowid = connection.last_insert_rowid();
        let generated_key = (rowid != 0).then_some(rowid);

        debug!(sql, affected, ?generated_key, "update executed");
        Ok(UpdateResult {
            affected,
            generated_key,
        })
    }
}

fn prepare<'conn>(connection: &'conn Connection, sql: &str) -> SqlResult<Statement<'conn>> {
    connection
        .prepare(sql)
        .map_err(|source| execution(sql, source))
}

/// Positional binding: count checked first so a mismatch never reaches the
/// engine, then each value bound by its tag at its 1-based position.
fn bind(statement: &mut Statement<'_>, sql: &str, params: &[SqlValue]) -> SqlResult<()> {
    let expected = statement.parameter_count();
    if expected != params.len() {
        return Err(SqlTemplateError::ParameterCount {
            sql: sql.to_owned(),
            expected,
            supplied: params.len(),
        });
    }

    for (index, value) in params.iter().enumerate() {
        let position = index + 1;
        statement
            .raw_bind_parameter(position, value)
            .map_err(|source| SqlTemplateError::Bind {
                sql: sql.to_owned(),
                position,
                kind: value.kind(),
                source,
            })?;
    }
    Ok(())
}

fn execution(sql: &str, source: rusqlite::Error) -> SqlTemplateError {
    SqlTemplateError::Execution {
        sql: sql.to_owned(),
        source,
    }
}
