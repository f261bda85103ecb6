// ABOUTME: Domain-level error type for the Q&A application
// ABOUTME: Caller-policy errors (cardinality expectations) layered over SQL template errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 cafe-qa contributors

use thiserror::Error;

use crate::sql::SqlTemplateError;

/// Application errors for the question/reply domain.
///
/// The SQL template reports raw affected-row counts without interpreting
/// them; repositories that expect exactly one affected row turn a zero count
/// into the matching `*NotFound` variant here.
#[derive(Debug, Error)]
pub enum CafeError {
    /// The referenced question does not exist (or is soft-deleted).
    #[error("question {question_id} not found")]
    QuestionNotFound {
        /// Id that matched no live question
        question_id: i64,
    },

    /// The referenced reply does not exist (or is soft-deleted).
    #[error("reply {reply_id} not found")]
    ReplyNotFound {
        /// Id that matched no live reply
        reply_id: i64,
    },

    /// An insert completed without the engine reporting a generated key.
    #[error("no generated key returned for insert into {table}")]
    MissingGeneratedKey {
        /// Table the insert targeted
        table: &'static str,
    },

    /// Failure in the SQL execution layer.
    #[error(transparent)]
    Sql(#[from] SqlTemplateError),
}

/// Result alias for domain operations.
pub type CafeResult<T> = Result<T, CafeError>;
