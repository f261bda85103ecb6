// ABOUTME: Reply persistence - inserts and per-question lookups over the REPLY table
// ABOUTME: Soft deletes cascade from the owning question
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 cafe-qa contributors

use rusqlite::Row;
use tracing::debug;

use crate::errors::{CafeError, CafeResult};
use crate::models::Reply;
use crate::sql::{RowMapper, SqlTemplate};
use crate::sql_params;

/// Maps one REPLY row to a [`Reply`] by column name.
pub struct ReplyRowMapper;

impl RowMapper<Reply> for ReplyRowMapper {
    fn map_row(&self, row: &Row<'_>, _row_num: usize) -> rusqlite::Result<Reply> {
        Ok(Reply {
            reply_id: Some(row.get("reply_id")?),
            question_id: row.get("question_id")?,
            content: row.get("content")?,
            writer: row.get("writer")?,
            is_deleted: row.get("is_deleted")?,
            created_at: row.get("created_at")?,
        })
    }
}

/// SQLite-backed reply repository.
#[derive(Clone)]
pub struct ReplyRepository {
    template: SqlTemplate,
}

impl ReplyRepository {
    /// Create a repository over the given template.
    #[must_use]
    pub fn new(template: SqlTemplate) -> Self {
        Self { template }
    }

    /// Insert a reply and return its generated primary key.
    ///
    /// # Errors
    /// [`CafeError::MissingGeneratedKey`] when the engine reports no key,
    /// otherwise SQL-layer failures.
    pub fn save(&self, reply: &Reply) -> CafeResult<i64> {
        let outcome = self.template.update(
            "INSERT INTO REPLY (question_id, content, writer, is_deleted, created_at) VALUES (?, ?, ?, ?, ?)",
            &sql_params![
                reply.question_id,
                reply.content.as_str(),
                reply.writer.as_str(),
                reply.is_deleted,
                reply.created_at,
            ],
        )?;

        let reply_id = outcome
            .generated_key
            .ok_or(CafeError::MissingGeneratedKey { table: "REPLY" })?;
        debug!(reply_id, question_id = reply.question_id, "reply saved");
        Ok(reply_id)
    }

    /// All live replies to a question, in insertion order.
    ///
    /// # Errors
    /// SQL-layer failures.
    pub fn find_by_question_id(&self, question_id: i64) -> CafeResult<Vec<Reply>> {
        let replies = self.template.query(
            "SELECT * FROM REPLY WHERE question_id = ? AND is_deleted = FALSE ORDER BY reply_id",
            &ReplyRowMapper,
            &sql_params![question_id],
        )?;
        Ok(replies)
    }

    /// Soft-delete every live reply of a question.
    ///
    /// Returns the number of replies deleted; zero is a normal outcome for
    /// a question without replies.
    ///
    /// # Errors
    /// SQL-layer failures.
    pub fn delete_by_question_id(&self, question_id: i64) -> CafeResult<usize> {
        let outcome = self.template.update(
            "UPDATE REPLY SET is_deleted = TRUE WHERE question_id = ? AND is_deleted = FALSE",
            &sql_params![question_id],
        )?;
        debug!(question_id, deleted = outcome.affected, "replies soft-deleted");
        Ok(outcome.affected)
    }
}
