// ABOUTME: Business logic for replies
// ABOUTME: Creation under an existing question and per-question listing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 cafe-qa contributors

use tracing::info;

use crate::database::{QuestionRepository, ReplyRepository};
use crate::errors::{CafeError, CafeResult};
use crate::models::Reply;

/// Reply use cases over the repositories.
#[derive(Clone)]
pub struct ReplyService {
    questions: QuestionRepository,
    replies: ReplyRepository,
}

impl ReplyService {
    /// Create a service over the given repositories.
    #[must_use]
    pub fn new(questions: QuestionRepository, replies: ReplyRepository) -> Self {
        Self { questions, replies }
    }

    /// Post a reply to an existing question; returns the reply id.
    ///
    /// # Errors
    /// [`CafeError::QuestionNotFound`] when the target question does not
    /// exist or is deleted.
    pub fn create_reply(
        &self,
        question_id: i64,
        content: impl Into<String>,
        writer: impl Into<String>,
    ) -> CafeResult<i64> {
        if self.questions.find_by_id(question_id)?.is_none() {
            return Err(CafeError::QuestionNotFound { question_id });
        }

        let reply = Reply::new(question_id, content, writer);
        let reply_id = self.replies.save(&reply)?;
        info!(reply_id, question_id, "reply created");
        Ok(reply_id)
    }

    /// All live replies to a question, oldest first.
    ///
    /// # Errors
    /// Persistence failures from the repository layer.
    pub fn find_replies_by_question_id(&self, question_id: i64) -> CafeResult<Vec<Reply>> {
        self.replies.find_by_question_id(question_id)
    }
}
