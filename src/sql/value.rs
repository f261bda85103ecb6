// ABOUTME: Tagged union for positional SQL bind parameters
// ABOUTME: Provides From conversions and the sql_params! macro for ergonomic call sites
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 cafe-qa contributors

use chrono::{DateTime, Utc};
use rusqlite::types::{Null, ToSqlOutput};
use rusqlite::ToSql;

/// One positional bind parameter.
///
/// Parameters are an ordered sequence whose order must match the `?`
/// placeholders in the SQL text exactly; there is no name binding. Binding
/// switches on the tag, so every representable value is bindable and a
/// "wrong" parameter can only be a count mismatch, caught before execution.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// UTF-8 text
    Text(String),
    /// 32-bit integer
    Integer(i32),
    /// 64-bit integer (ids, counters)
    Long(i64),
    /// Boolean, stored as 0/1
    Bool(bool),
    /// UTC timestamp, stored as RFC 3339 text
    Timestamp(DateTime<Utc>),
    /// SQL NULL
    Null,
}

impl SqlValue {
    /// Tag name used in binding error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
            Self::Long(_) => "long",
            Self::Bool(_) => "bool",
            Self::Timestamp(_) => "timestamp",
            Self::Null => "null",
        }
    }
}

impl ToSql for SqlValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            Self::Text(text) => text.to_sql(),
            Self::Integer(value) => value.to_sql(),
            Self::Long(value) => value.to_sql(),
            Self::Bool(value) => value.to_sql(),
            Self::Timestamp(value) => value.to_sql(),
            Self::Null => Ok(ToSqlOutput::from(Null)),
        }
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<DateTime<Utc>> for SqlValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

impl<T> From<Option<T>> for SqlValue
where
    T: Into<SqlValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Builds a `[SqlValue; N]` from heterogeneous values via [`SqlValue::from`].
///
/// ```
/// use cafe_qa::sql_params;
///
/// let params = sql_params!["title", 42_i64, true];
/// assert_eq!(params.len(), 3);
/// ```
#[macro_export]
macro_rules! sql_params {
    () => {{
        let params: [$crate::sql::SqlValue; 0] = [];
        params
    }};
    ($($value:expr),+ $(,)?) => {
        [$($crate::sql::SqlValue::from($value)),+]
    };
}
