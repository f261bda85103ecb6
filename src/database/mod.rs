// ABOUTME: Repository layer built entirely on the SQL template
// ABOUTME: One repository per aggregate - questions and replies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 cafe-qa contributors

//! Repository layer
//!
//! Repositories translate between domain entities and rows via the
//! [`crate::sql::SqlTemplate`]. Cardinality policy lives here: the template
//! reports raw affected counts, and repositories that expect exactly one
//! affected row turn zero into a `*NotFound` domain error.

mod question_repository;
mod reply_repository;

pub use question_repository::{QuestionRepository, QuestionRowMapper};
pub use reply_repository::{ReplyRepository, ReplyRowMapper};
