// ABOUTME: Main library entry point for the cafe-qa forum backend
// ABOUTME: Wires the SQL template, repositories, and domain services together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 cafe-qa contributors

#![deny(unsafe_code)]

//! # cafe-qa
//!
//! A small Q&A forum backend: questions and replies persisted in SQLite
//! through a hand-rolled SQL template.
//!
//! ## Architecture
//!
//! - **`sql`**: the micro-ORM - positional parameter binding, pluggable row
//!   mapping, generated-key reporting, per-call connection scoping
//! - **`models`**: domain entities (`Question`, `Reply`)
//! - **`database`**: repositories built on the template; cardinality policy
//!   (zero rows affected where one was expected) lives here
//! - **`services`**: protocol-agnostic business logic above the repositories
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use cafe_qa::config::Config;
//! use cafe_qa::database::{QuestionRepository, ReplyRepository};
//! use cafe_qa::services::QuestionService;
//! use cafe_qa::sql::{DbConnector, SqlTemplate};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     config.logging.init()?;
//!
//!     let connector = DbConnector::new(&config.database.path)?;
//!     let template = SqlTemplate::new(Arc::new(connector));
//!     let service = QuestionService::new(
//!         QuestionRepository::new(template.clone()),
//!         ReplyRepository::new(template),
//!     );
//!
//!     let id = service.create_question("title", "content", "writer")?;
//!     println!("created question {id}");
//!     Ok(())
//! }
//! ```

/// Environment-based application configuration
pub mod config;

/// Repository layer over the SQL template
pub mod database;

/// Domain error types
pub mod errors;

/// Logging configuration and subscriber setup
pub mod logging;

/// Domain entities
pub mod models;

/// Domain service layer
pub mod services;

/// The SQL template micro-ORM
pub mod sql;
