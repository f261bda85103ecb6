// ABOUTME: Structured error types for SQL template execution
// ABOUTME: Separates caller binding mistakes from engine-reported execution failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 cafe-qa contributors

use thiserror::Error;

/// Errors raised by [`crate::sql::SqlTemplate`] and its collaborators.
///
/// Binding variants are detected before the statement reaches the engine;
/// execution variants wrap the engine's own failure and carry the offending
/// SQL text for context. The template never recovers locally and never
/// retries - every error surfaces to the caller as-is.
#[derive(Debug, Error)]
pub enum SqlTemplateError {
    /// The caller supplied more or fewer parameters than the statement has
    /// positional placeholders. Detected before execution.
    #[error("parameter count mismatch for '{sql}': statement has {expected} placeholder(s), {supplied} value(s) supplied")]
    ParameterCount {
        /// SQL text of the offending statement
        sql: String,
        /// Placeholder count declared by the prepared statement
        expected: usize,
        /// Number of values the caller passed
        supplied: usize,
    },

    /// A single parameter could not be bound at its position.
    #[error("failed to bind {kind} parameter at position {position} of '{sql}'")]
    Bind {
        /// SQL text of the offending statement
        sql: String,
        /// 1-based placeholder position
        position: usize,
        /// Tag of the value that failed to bind
        kind: &'static str,
        /// Driver-level cause
        #[source]
        source: rusqlite::Error,
    },

    /// Opening a connection through the [`crate::sql::ConnectionProvider`]
    /// failed.
    #[error("failed to open database connection")]
    Connection {
        /// Driver-level cause
        #[source]
        source: rusqlite::Error,
    },

    /// The engine reported a failure while preparing or executing the
    /// statement, or a row mapper failed mid-cursor. Syntax errors,
    /// constraint violations, and type mismatches all land here.
    #[error("statement execution failed for '{sql}'")]
    Execution {
        /// SQL text of the offending statement
        sql: String,
        /// Driver-level cause
        #[source]
        source: rusqlite::Error,
    },
}

/// Result alias for template operations.
pub type SqlResult<T> = Result<T, SqlTemplateError>;
