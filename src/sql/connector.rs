// ABOUTME: Connection provisioning for the SQL template
// ABOUTME: ConnectionProvider seam plus the SQLite-backed DbConnector with schema setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 cafe-qa contributors

use std::path::{Path, PathBuf};

use rusqlite::Connection;
use tracing::info;

use super::errors::{SqlResult, SqlTemplateError};

/// Supplies a ready, open connection on demand.
///
/// Every template call acquires its own connection and drops it before the
/// call returns, so providers must hand out a fresh connection per call.
/// Pooling, credentials, and timeouts are the provider's concern, not the
/// template's.
pub trait ConnectionProvider: Send + Sync {
    /// Open a connection for the duration of a single template call.
    fn connection(&self) -> SqlResult<Connection>;
}

/// File-backed SQLite connection provider.
///
/// Opens the database file at construction, applies the schema idempotently,
/// then hands out a fresh connection per call. A file path (not `:memory:`)
/// is required: in-memory SQLite databases are private to one connection and
/// would vanish between calls.
pub struct DbConnector {
    path: PathBuf,
}

impl DbConnector {
    /// Open the database at `path` and ensure the schema exists.
    ///
    /// # Errors
    /// Returns [`SqlTemplateError::Connection`] when the file cannot be
    /// opened and [`SqlTemplateError::Execution`] when schema setup fails.
    pub fn new(path: impl AsRef<Path>) -> SqlResult<Self> {
        let connector = Self {
            path: path.as_ref().to_path_buf(),
        };
        connector.ensure_schema()?;
        info!(path = %connector.path.display(), "database ready");
        Ok(connector)
    }

    fn ensure_schema(&self) -> SqlResult<()> {
        let connection = self.connection()?;
        connection
            .execute_batch(SCHEMA)
            .map_err(|source| SqlTemplateError::Execution {
                sql: SCHEMA.to_owned(),
                source,
            })
    }
}

impl ConnectionProvider for DbConnector {
    fn connection(&self) -> SqlResult<Connection> {
        Connection::open(&self.path).map_err(|source| SqlTemplateError::Connection { source })
    }
}

const SCHEMA: &str = r"
CREATE TABLE IF NOT EXISTS QUESTION (
    question_id INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT    NOT NULL,
    content     TEXT    NOT NULL,
    writer      TEXT    NOT NULL,
    is_deleted  BOOLEAN NOT NULL DEFAULT FALSE,
    created_at  TEXT    NOT NULL DEFAULT (STRFTIME('%Y-%m-%dT%H:%M:%fZ', 'NOW'))
);

CREATE TABLE IF NOT EXISTS REPLY (
    reply_id    INTEGER PRIMARY KEY AUTOINCREMENT,
    question_id INTEGER NOT NULL REFERENCES QUESTION (question_id),
    content     TEXT    NOT NULL,
    writer      TEXT    NOT NULL,
    is_deleted  BOOLEAN NOT NULL DEFAULT FALSE,
    created_at  TEXT    NOT NULL DEFAULT (STRFTIME('%Y-%m-%dT%H:%M:%fZ', 'NOW'))
);
";
