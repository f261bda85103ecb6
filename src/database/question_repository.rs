// ABOUTME: Question persistence - CRUD over the QUESTION table
// ABOUTME: Soft deletes; save returns the database-generated primary key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 cafe-qa contributors

use rusqlite::Row;
use tracing::debug;

use crate::errors::{CafeError, CafeResult};
use crate::models::Question;
use crate::sql::{RowMapper, SqlTemplate};
use crate::sql_params;

/// Maps one QUESTION row to a [`Question`] by column name.
pub struct QuestionRowMapper;

impl RowMapper<Question> for QuestionRowMapper {
    fn map_row(&self, row: &Row<'_>, _row_num: usize) -> rusqlite::Result<Question> {
        Ok(Question {
            question_id: Some(row.get("question_id")?),
            title: row.get("title")?,
            content: row.get("content")?,
            writer: row.get("writer")?,
            is_deleted: row.get("is_deleted")?,
            created_at: row.get("created_at")?,
        })
    }
}

/// SQLite-backed question repository.
#[derive(Clone)]
pub struct QuestionRepository {
    template: SqlTemplate,
}

impl QuestionRepository {
    /// Create a repository over the given template.
    #[must_use]
    pub fn new(template: SqlTemplate) -> Self {
        Self { template }
    }

    /// Insert a question and return its generated primary key.
    ///
    /// # Errors
    /// [`CafeError::MissingGeneratedKey`] when the engine reports no key,
    /// otherwise SQL-layer failures.
    pub fn save(&self, question: &Question) -> CafeResult<i64> {
        let outcome = self.template.update(
            "INSERT INTO QUESTION (title, content, writer, is_deleted, created_at) VALUES (?, ?, ?, ?, ?)",
            &sql_params![
                question.title.as_str(),
                question.content.as_str(),
                question.writer.as_str(),
                question.is_deleted,
                question.created_at,
            ],
        )?;

        let question_id = outcome
            .generated_key
            .ok_or(CafeError::MissingGeneratedKey { table: "QUESTION" })?;
        debug!(question_id, "question saved");
        Ok(question_id)
    }

    /// All live (not soft-deleted) questions in insertion order.
    ///
    /// # Errors
    /// SQL-layer failures.
    pub fn find_all(&self) -> CafeResult<Vec<Question>> {
        let questions = self.template.query(
            "SELECT * FROM QUESTION WHERE is_deleted = FALSE ORDER BY question_id",
            &QuestionRowMapper,
            &sql_params![],
        )?;
        Ok(questions)
    }

    /// Look up a live question by id.
    ///
    /// # Errors
    /// SQL-layer failures. A missing row is `Ok(None)`, not an error.
    pub fn find_by_id(&self, question_id: i64) -> CafeResult<Option<Question>> {
        let question = self.template.query_one(
            "SELECT * FROM QUESTION WHERE question_id = ? AND is_deleted = FALSE",
            &QuestionRowMapper,
            &sql_params![question_id],
        )?;
        Ok(question)
    }

    /// Rewrite title, content, and writer of an existing question.
    ///
    /// # Errors
    /// [`CafeError::QuestionNotFound`] when no live row matched the id.
    pub fn update(&self, question_id: i64, question: &Question) -> CafeResult<()> {
        let outcome = self.template.update(
            "UPDATE QUESTION SET title = ?, content = ?, writer = ? WHERE question_id = ? AND is_deleted = FALSE",
            &sql_params![
                question.title.as_str(),
                question.content.as_str(),
                question.writer.as_str(),
                question_id,
            ],
        )?;

        if outcome.affected == 0 {
            return Err(CafeError::QuestionNotFound { question_id });
        }
        Ok(())
    }

    /// Soft-delete a question.
    ///
    /// # Errors
    /// [`CafeError::QuestionNotFound`] when no live row matched the id.
    pub fn delete_by_id(&self, question_id: i64) -> CafeResult<()> {
        let outcome = self.template.update(
            "UPDATE QUESTION SET is_deleted = TRUE WHERE question_id = ? AND is_deleted = FALSE",
            &sql_params![question_id],
        )?;

        if outcome.affected == 0 {
            return Err(CafeError::QuestionNotFound { question_id });
        }
        debug!(question_id, "question soft-deleted");
        Ok(())
    }
}
