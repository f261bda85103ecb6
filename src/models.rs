// ABOUTME: Core data models for the Q&A forum domain
// ABOUTME: Defines Question and Reply entities persisted in SQLite
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 cafe-qa contributors

//! # Data Models
//!
//! Domain entities for the forum: a [`Question`] owns zero or more
//! [`Reply`] rows. Both carry a soft-delete flag rather than being removed
//! physically, and a database-assigned integer primary key that is `None`
//! until the entity has been saved.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A question posted to the forum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Database-assigned primary key; `None` before the first save
    pub question_id: Option<i64>,
    /// Question title
    pub title: String,
    /// Question body
    pub content: String,
    /// Author identifier
    pub writer: String,
    /// Soft-delete flag; deleted questions stay in the table
    pub is_deleted: bool,
    /// Creation timestamp (UTC)
    pub created_at: DateTime<Utc>,
}

impl Question {
    /// Build a new, not-yet-saved question.
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>, writer: impl Into<String>) -> Self {
        Self {
            question_id: None,
            title: title.into(),
            content: content.into(),
            writer: writer.into(),
            is_deleted: false,
            created_at: Utc::now(),
        }
    }
}

/// A reply to a question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    /// Database-assigned primary key; `None` before the first save
    pub reply_id: Option<i64>,
    /// Question this reply belongs to
    pub question_id: i64,
    /// Reply body
    pub content: String,
    /// Author identifier
    pub writer: String,
    /// Soft-delete flag
    pub is_deleted: bool,
    /// Creation timestamp (UTC)
    pub created_at: DateTime<Utc>,
}

impl Reply {
    /// Build a new, not-yet-saved reply to `question_id`.
    #[must_use]
    pub fn new(question_id: i64, content: impl Into<String>, writer: impl Into<String>) -> Self {
        Self {
            reply_id: None,
            question_id,
            content: content.into(),
            writer: writer.into(),
            is_deleted: false,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn new_question_starts_unsaved_and_live() {
        let question = Question::new("title", "content", "writer");
        assert_eq!(question.question_id, None);
        assert!(!question.is_deleted);
    }

    #[test]
    fn question_serializes_to_json_and_back() {
        let question = Question::new("title", "content", "writer");
        let json = serde_json::to_string(&question).unwrap();
        let restored: Question = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.title, question.title);
        assert_eq!(restored.created_at, question.created_at);
    }

    #[test]
    fn reply_serializes_to_json_and_back() {
        let reply = Reply::new(7, "content", "writer");
        let json = serde_json::to_string(&reply).unwrap();
        let restored: Reply = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.question_id, 7);
        assert_eq!(restored.content, "content");
    }
}
