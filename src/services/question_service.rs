// ABOUTME: Business logic for the question lifecycle
// ABOUTME: Creation, lookup, updates, and delete with reply cascade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 cafe-qa contributors

use tracing::info;

use crate::database::{QuestionRepository, ReplyRepository};
use crate::errors::{CafeError, CafeResult};
use crate::models::Question;

/// Question use cases over the repositories.
#[derive(Clone)]
pub struct QuestionService {
    questions: QuestionRepository,
    replies: ReplyRepository,
}

impl QuestionService {
    /// Create a service over the given repositories.
    #[must_use]
    pub fn new(questions: QuestionRepository, replies: ReplyRepository) -> Self {
        Self { questions, replies }
    }

    /// Post a new question; returns its id.
    ///
    /// # Errors
    /// Persistence failures from the repository layer.
    pub fn create_question(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
        writer: impl Into<String>,
    ) -> CafeResult<i64> {
        let question = Question::new(title, content, writer);
        let question_id = self.questions.save(&question)?;
        info!(question_id, "question created");
        Ok(question_id)
    }

    /// All live questions in posting order.
    ///
    /// # Errors
    /// Persistence failures from the repository layer.
    pub fn find_all_questions(&self) -> CafeResult<Vec<Question>> {
        self.questions.find_all()
    }

    /// A single question by id.
    ///
    /// # Errors
    /// [`CafeError::QuestionNotFound`] when the id matches no live question.
    pub fn find_question_by_id(&self, question_id: i64) -> CafeResult<Question> {
        self.questions
            .find_by_id(question_id)?
            .ok_or(CafeError::QuestionNotFound { question_id })
    }

    /// Rewrite an existing question's title, content, and writer.
    ///
    /// # Errors
    /// [`CafeError::QuestionNotFound`] when the id matches no live question.
    pub fn update_question(
        &self,
        question_id: i64,
        title: impl Into<String>,
        content: impl Into<String>,
        writer: impl Into<String>,
    ) -> CafeResult<()> {
        let updated = Question::new(title, content, writer);
        self.questions.update(question_id, &updated)?;
        info!(question_id, "question updated");
        Ok(())
    }

    /// Soft-delete a question together with its replies.
    ///
    /// # Errors
    /// [`CafeError::QuestionNotFound`] when the id matches no live question.
    pub fn delete_question(&self, question_id: i64) -> CafeResult<()> {
        self.questions.delete_by_id(question_id)?;
        let replies_deleted = self.replies.delete_by_question_id(question_id)?;
        info!(question_id, replies_deleted, "question deleted");
        Ok(())
    }
}
