// ABOUTME: Hand-rolled micro-ORM over SQLite
// ABOUTME: Positional parameter binding, pluggable row mapping, generated-key reporting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 cafe-qa contributors

//! # SQL template
//!
//! A thin, stateless execution helper over `rusqlite`. Callers supply fully
//! formed SQL text, an ordered list of [`SqlValue`] bind parameters, and
//! (for queries) a [`RowMapper`]; the template owns the scoped lifetime of
//! the connection, prepared statement, and cursor for each call.
//!
//! The template does no SQL parsing, rewriting, pooling, or transaction
//! management - those belong to the caller or the [`ConnectionProvider`].

mod connector;
mod errors;
mod row_mapper;
mod template;
mod value;

pub use connector::{ConnectionProvider, DbConnector};
pub use errors::{SqlResult, SqlTemplateError};
pub use row_mapper::RowMapper;
pub use template::{SqlTemplate, UpdateResult};
pub use value::SqlValue;
