// ABOUTME: Domain service layer for business logic above the repositories
// ABOUTME: Question lifecycle and reply handling, protocol-agnostic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 cafe-qa contributors

//! Domain service layer
//!
//! Thin orchestration over the repositories: existence checks, cascading
//! soft deletes, and the seams a transport layer would call into.

/// Question lifecycle: create, list, update, delete with reply cascade
pub mod question_service;

/// Reply handling: create under an existing question, list per question
pub mod reply_service;

pub use question_service::QuestionService;
pub use reply_service::ReplyService;
